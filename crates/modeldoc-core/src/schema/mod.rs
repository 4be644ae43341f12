pub mod field;
pub mod model;
pub mod value;

pub use field::{
    ChoiceField, FOREIGN_KEY_TYPE, Field, FieldDef, FieldMetadata, ForeignKeyField, KeyRole,
    PlainField,
};
pub use model::ModelDef;
pub use value::{ChoiceDef, ScalarValue, display_bool};
