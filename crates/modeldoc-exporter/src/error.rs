use std::io;
use std::path::PathBuf;

use modeldoc_core::ExtractionError;
use rust_xlsxwriter::XlsxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error("render workbook: {0}")]
    Render(#[from] XlsxError),
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
