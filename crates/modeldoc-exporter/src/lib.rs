//! Renderers that turn a selection of models into documents: a Markdown
//! design document and a styled Excel workbook with one sheet per namespace.

pub mod doc;
pub mod error;
pub mod excel;
pub mod markdown;

pub use doc::{COLUMN_LABELS, DocExporter, exporter_for};
pub use error::ExportError;
pub use excel::{ExcelExporter, SheetGrid, build_sheet, build_workbook, sheet_name, workbook_sheets};
pub use markdown::{MarkdownExporter, render_markdown};
