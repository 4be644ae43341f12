use std::borrow::Cow;
use std::fmt;

use modeldoc_naming::{build_fk_attname, field_verbose_name};
use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;
use crate::schema::value::{ChoiceDef, ScalarValue};

/// Type tag that marks a field as a foreign key.
pub const FOREIGN_KEY_TYPE: &str = "ForeignKey";

/// One field entry of a model file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct FieldDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose_name: Option<String>,
    /// Field type tag, e.g. `CharField`, `IntegerField`, `ForeignKey`.
    pub r#type: String,
    #[serde(default)]
    pub null: bool,
    /// Absent means no default was declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ScalarValue>,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<ChoiceDef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub help_text: String,
    /// Target model of a foreign key. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl FieldDef {
    /// Minimal field definition with every optional attribute unset.
    pub fn new(name: impl Into<String>, r#type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            verbose_name: None,
            r#type: r#type.into(),
            null: false,
            default: None,
            primary_key: false,
            choices: None,
            max_length: None,
            help_text: String::new(),
            to: None,
        }
    }

    pub fn is_foreign_key(&self) -> bool {
        self.r#type == FOREIGN_KEY_TYPE
    }

    fn has_choices(&self) -> bool {
        self.choices.as_ref().is_some_and(|c| !c.is_empty())
    }
}

/// Role a field plays in the table's keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyRole {
    pub primary: bool,
    pub foreign: bool,
}

impl KeyRole {
    pub const PRIMARY_LABEL: &'static str = "主键";
    pub const FOREIGN_LABEL: &'static str = "外键";

    pub fn is_none(self) -> bool {
        !self.primary && !self.foreign
    }
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut labels = Vec::with_capacity(2);
        if self.primary {
            labels.push(Self::PRIMARY_LABEL);
        }
        if self.foreign {
            labels.push(Self::FOREIGN_LABEL);
        }
        f.write_str(&labels.join(","))
    }
}

/// The nine attributes a document row is built from.
///
/// Implementors only override what their kind changes; everything else reads
/// straight from the underlying [`FieldDef`].
pub trait FieldMetadata {
    fn definition(&self) -> &FieldDef;

    /// Key under which the field is documented.
    fn name(&self) -> &str {
        &self.definition().name
    }

    fn verbose_name(&self) -> Cow<'_, str> {
        match &self.definition().verbose_name {
            Some(label) => Cow::Borrowed(label.as_str()),
            None => Cow::Owned(field_verbose_name(&self.definition().name)),
        }
    }

    fn field_type(&self) -> &str {
        &self.definition().r#type
    }

    fn null(&self) -> bool {
        self.definition().null
    }

    fn default_value(&self) -> Option<&ScalarValue> {
        self.definition().default.as_ref()
    }

    fn key_role(&self) -> KeyRole {
        KeyRole {
            primary: self.definition().primary_key,
            foreign: false,
        }
    }

    fn choices(&self) -> Option<&[ChoiceDef]> {
        None
    }

    fn max_length(&self) -> Option<u32> {
        self.definition().max_length
    }

    fn help_text(&self) -> &str {
        &self.definition().help_text
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlainField(FieldDef);

impl FieldMetadata for PlainField {
    fn definition(&self) -> &FieldDef {
        &self.0
    }
}

/// A foreign key, documented under its `<name>_id` column attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyField {
    def: FieldDef,
    attname: String,
}

impl ForeignKeyField {
    /// Referenced model, when the file names one.
    pub fn target(&self) -> Option<&str> {
        self.def.to.as_deref()
    }
}

impl FieldMetadata for ForeignKeyField {
    fn definition(&self) -> &FieldDef {
        &self.def
    }

    fn name(&self) -> &str {
        &self.attname
    }

    fn key_role(&self) -> KeyRole {
        KeyRole {
            primary: self.def.primary_key,
            foreign: true,
        }
    }
}

/// A field restricted to an enumerated set of values.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceField(FieldDef);

impl FieldMetadata for ChoiceField {
    fn definition(&self) -> &FieldDef {
        &self.0
    }

    fn choices(&self) -> Option<&[ChoiceDef]> {
        self.0.choices.as_deref()
    }
}

/// A field definition sorted into its documented kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Plain(PlainField),
    ForeignKey(ForeignKeyField),
    Choice(ChoiceField),
}

impl Field {
    /// Classify a definition after checking that it names itself and its type.
    pub fn classify(table: &str, def: FieldDef) -> Result<Self, ExtractionError> {
        if def.name.trim().is_empty() {
            return Err(ExtractionError::MissingFieldName {
                table: table.to_string(),
            });
        }
        if def.r#type.trim().is_empty() {
            return Err(ExtractionError::MissingFieldType {
                table: table.to_string(),
                field: def.name,
            });
        }

        Ok(if def.is_foreign_key() {
            let attname = build_fk_attname(&def.name);
            Field::ForeignKey(ForeignKeyField { def, attname })
        } else if def.has_choices() {
            Field::Choice(ChoiceField(def))
        } else {
            Field::Plain(PlainField(def))
        })
    }

    pub fn metadata(&self) -> &dyn FieldMetadata {
        match self {
            Field::Plain(f) => f,
            Field::ForeignKey(f) => f,
            Field::Choice(f) => f,
        }
    }
}
