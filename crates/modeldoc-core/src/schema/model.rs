use modeldoc_naming::{build_table_name, model_verbose_name};
use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;
use crate::schema::field::{Field, FieldDef};

/// One model file: a table and its ordered fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct ModelDef {
    /// Namespace the model belongs to. Falls back to the file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
    /// Model class name, e.g. `Post`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose_name: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl ModelDef {
    /// Model with an explicit table name and no fields.
    pub fn with_table(table: impl Into<String>) -> Self {
        Self {
            app: None,
            name: None,
            table: Some(table.into()),
            verbose_name: None,
            fields: Vec::new(),
        }
    }

    /// Table name, derived from `app` and `name` when not given.
    pub fn table_name(&self) -> Result<String, ExtractionError> {
        if let Some(table) = self.table.as_deref().filter(|t| !t.trim().is_empty()) {
            return Ok(table.to_string());
        }
        match (self.app.as_deref(), self.name.as_deref()) {
            (Some(app), Some(name)) if !name.trim().is_empty() => {
                Ok(build_table_name(app, name))
            }
            _ => Err(ExtractionError::MissingTableName(
                self.name.clone().unwrap_or_else(|| "<unnamed>".to_string()),
            )),
        }
    }

    /// Human display name: explicit, else from the class name, else the table.
    pub fn display_name(&self) -> Result<String, ExtractionError> {
        if let Some(label) = &self.verbose_name {
            return Ok(label.clone());
        }
        match self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            Some(name) => Ok(model_verbose_name(name)),
            None => self.table_name(),
        }
    }

    /// Fields sorted into their documented kinds, in declaration order.
    pub fn classified_fields(&self) -> Result<Vec<Field>, ExtractionError> {
        let table = self.table_name()?;
        self.fields
            .iter()
            .cloned()
            .map(|def| Field::classify(&table, def))
            .collect()
    }
}
