use thiserror::Error;

/// A model file is missing something the documentation needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("model '{0}' has no table name and no app/name to derive one from")]
    MissingTableName(String),
    #[error("a field of table '{table}' has an empty name")]
    MissingFieldName { table: String },
    #[error("field '{table}.{field}' has an empty type")]
    MissingFieldType { table: String, field: String },
}
