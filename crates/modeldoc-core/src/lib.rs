//! Model and field definitions for schema documentation, plus the two
//! operations every renderer builds on: selecting models by namespace
//! ([`ModelRegistry::enumerate`]) and normalizing their fields
//! ([`extract_fields`]).

pub mod error;
pub mod record;
pub mod registry;
pub mod schema;

pub use error::ExtractionError;
pub use record::{FIELD_COLUMN_COUNT, FieldRecord, extract_fields};
pub use registry::{AppModels, ModelRegistry};
pub use schema::{
    ChoiceDef, ChoiceField, Field, FieldDef, FieldMetadata, ForeignKeyField, KeyRole, ModelDef,
    PlainField, ScalarValue,
};
