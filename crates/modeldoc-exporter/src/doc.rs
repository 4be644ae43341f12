use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use modeldoc_config::DocFormat;
use modeldoc_core::{AppModels, FIELD_COLUMN_COUNT};
use tracing::debug;

use crate::error::ExportError;
use crate::excel::ExcelExporter;
use crate::markdown::MarkdownExporter;

/// Column labels shared by every document format, in field column order.
pub const COLUMN_LABELS: [&str; FIELD_COLUMN_COUNT] = [
    "字段",
    "中文",
    "字段类型",
    "空",
    "默认值",
    "主/外键",
    "枚举值",
    "字符最大长度",
    "备注",
];

/// Standardized exporter interface for all supported document formats.
pub trait DocExporter {
    fn format(&self) -> DocFormat;

    /// Render the selected models into the document's bytes.
    fn render(&self, apps: &[AppModels<'_>]) -> Result<Vec<u8>, ExportError>;

    /// Render and write to `path`, replacing any existing file.
    ///
    /// Nothing is written unless rendering succeeds.
    fn export(&self, apps: &[AppModels<'_>], path: &Path) -> Result<(), ExportError> {
        let bytes = self.render(apps)?;
        fs::write(path, &bytes).map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(format = %self.format(), path = %path.display(), bytes = bytes.len(), "document written");
        Ok(())
    }
}

/// Exporter for the selected format.
pub fn exporter_for(format: DocFormat, project_name: &str, date: NaiveDate) -> Box<dyn DocExporter> {
    match format {
        DocFormat::Md => Box::new(MarkdownExporter::new(project_name, date)),
        DocFormat::Excel => Box::new(ExcelExporter),
    }
}
