use indexmap::IndexMap;

use crate::error::ExtractionError;
use crate::schema::{FieldMetadata, KeyRole, ModelDef, display_bool};

/// Number of documented attributes per field.
pub const FIELD_COLUMN_COUNT: usize = 9;

/// Normalized, display-ready attributes of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    pub name: String,
    pub verbose_name: String,
    pub field_type: String,
    pub null: bool,
    /// Empty when no default was declared.
    pub default: String,
    pub key_role: KeyRole,
    /// Empty when the field has no choices.
    pub choices: String,
    pub max_length: Option<u32>,
    pub help_text: String,
}

impl FieldRecord {
    pub fn from_metadata(field: &dyn FieldMetadata) -> Self {
        Self {
            name: field.name().to_string(),
            verbose_name: field.verbose_name().into_owned(),
            field_type: field.field_type().to_string(),
            null: field.null(),
            default: field
                .default_value()
                .map(ToString::to_string)
                .unwrap_or_default(),
            key_role: field.key_role(),
            choices: field
                .choices()
                .map(|choices| {
                    choices
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(",")
                })
                .unwrap_or_default(),
            max_length: field.max_length(),
            help_text: field.help_text().to_string(),
        }
    }

    /// The record as document cells, in column order.
    pub fn cells(&self) -> [String; FIELD_COLUMN_COUNT] {
        [
            self.name.clone(),
            self.verbose_name.clone(),
            self.field_type.clone(),
            display_bool(self.null).to_string(),
            self.default.clone(),
            self.key_role.to_string(),
            self.choices.clone(),
            self.max_length.map(|n| n.to_string()).unwrap_or_default(),
            self.help_text.clone(),
        ]
    }
}

/// Extract the documented fields of a model, keyed by documented name.
///
/// Keys keep declaration order. A repeated key keeps its first position and
/// takes the later field's attributes.
pub fn extract_fields(model: &ModelDef) -> Result<IndexMap<String, FieldRecord>, ExtractionError> {
    let mut records = IndexMap::with_capacity(model.fields.len());
    for field in model.classified_fields()? {
        let record = FieldRecord::from_metadata(field.metadata());
        records.insert(record.name.clone(), record);
    }
    Ok(records)
}
