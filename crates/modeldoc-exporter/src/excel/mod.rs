mod style;
mod width;

use std::collections::HashSet;

use modeldoc_config::DocFormat;
use modeldoc_core::{AppModels, ExtractionError, extract_fields};
use rust_xlsxwriter::{ColNum, RowNum, Workbook, Worksheet, XlsxError};
use tracing::{debug, warn};

use crate::doc::{COLUMN_LABELS, DocExporter};
use crate::error::ExportError;

pub use style::CellStyle;
pub use width::{COLUMN_PADDING, gbk_width};

/// Blank sheet every workbook ends with.
pub const DEFAULT_SHEET_NAME: &str = "Sheet";

/// Blank rows written after each model's table.
const SEPARATOR_ROWS: usize = 2;

/// Longest sheet name Excel accepts, in characters.
pub const MAX_SHEET_NAME_LEN: usize = 31;

const INVALID_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

pub struct ExcelExporter;

impl DocExporter for ExcelExporter {
    fn format(&self) -> DocFormat {
        DocFormat::Excel
    }

    fn render(&self, apps: &[AppModels<'_>]) -> Result<Vec<u8>, ExportError> {
        let mut workbook = build_workbook(apps)?;
        Ok(workbook.save_to_buffer()?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub value: String,
    pub style: CellStyle,
}

/// In-memory layout of one worksheet before it is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetGrid {
    pub name: String,
    rows: Vec<Vec<GridCell>>,
}

impl SheetGrid {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn append<I, S>(&mut self, cells: I, style: CellStyle)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(
            cells
                .into_iter()
                .map(|value| GridCell {
                    value: value.into(),
                    style,
                })
                .collect(),
        );
    }

    pub fn append_blank(&mut self) {
        self.rows.push(Vec::new());
    }

    pub fn rows(&self) -> &[Vec<GridCell>] {
        &self.rows
    }

    /// Width of the used range: the longest row.
    pub fn max_column(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Column widths: the widest cell of each column plus [`COLUMN_PADDING`].
    /// Empty cells count as width 0, and no column is narrower than one.
    pub fn column_widths(&self) -> Vec<usize> {
        (0..self.max_column())
            .map(|col| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| gbk_width(&cell.value))
                    .fold(1, usize::max);
                widest + COLUMN_PADDING
            })
            .collect()
    }
}

/// Lay out the sheet of one namespace: per model a title row, a header row,
/// one row per field and two blank separator rows.
pub fn build_sheet(app: &AppModels<'_>) -> Result<SheetGrid, ExtractionError> {
    let mut grid = SheetGrid::new(app.app);

    for model in app.models {
        let table = model.table_name()?;
        let records = extract_fields(model)?;
        debug!(app = app.app, table = %table, fields = records.len(), "laying out sheet rows");

        grid.append([table, model.display_name()?], CellStyle::Title);
        grid.append(COLUMN_LABELS, CellStyle::Header);
        for record in records.values() {
            grid.append(record.cells(), CellStyle::Body);
        }
        for _ in 0..SEPARATOR_ROWS {
            grid.append_blank();
        }
    }

    Ok(grid)
}

/// Sheets in workbook order: the last namespace first, then the default sheet.
///
/// Namespaces Excel cannot use verbatim as sheet names are renamed with
/// [`sheet_name`]; the default sheet keeps its name.
pub fn workbook_sheets(apps: &[AppModels<'_>]) -> Result<Vec<SheetGrid>, ExtractionError> {
    let mut taken = HashSet::from([DEFAULT_SHEET_NAME.to_lowercase()]);
    let mut sheets = Vec::with_capacity(apps.len() + 1);
    for app in apps.iter().rev() {
        let mut grid = build_sheet(app)?;
        grid.name = sheet_name(app.app, &mut taken);
        if grid.name != app.app {
            warn!(app = app.app, sheet = %grid.name, "app renamed to a valid sheet name");
        }
        sheets.push(grid);
    }
    sheets.push(SheetGrid::new(DEFAULT_SHEET_NAME));
    Ok(sheets)
}

/// A sheet name Excel accepts for `app`, unique (case-insensitively) among
/// `taken`, which it is added to.
///
/// Forbidden characters become `_`, surrounding apostrophes are dropped and
/// the name is cut to [`MAX_SHEET_NAME_LEN`] characters. Clashes get a `~N`
/// suffix.
pub fn sheet_name(app: &str, taken: &mut HashSet<String>) -> String {
    let cleaned: String = app
        .chars()
        .map(|c| if INVALID_SHEET_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim_matches('\'');
    let base = if cleaned.is_empty() { "_" } else { cleaned };

    let mut name: String = base.chars().take(MAX_SHEET_NAME_LEN).collect();
    let mut n = 1;
    while taken.contains(&name.to_lowercase()) {
        let suffix = format!("~{n}");
        let keep = MAX_SHEET_NAME_LEN - suffix.chars().count();
        name = base.chars().take(keep).collect::<String>() + &suffix;
        n += 1;
    }
    taken.insert(name.to_lowercase());
    name
}

/// Build the whole workbook in memory.
pub fn build_workbook(apps: &[AppModels<'_>]) -> Result<Workbook, ExportError> {
    let mut workbook = Workbook::new();
    for grid in workbook_sheets(apps)? {
        workbook.push_worksheet(write_worksheet(&grid)?);
    }
    Ok(workbook)
}

/// Write a grid into a worksheet. Every cell of the used range is written,
/// blanks included, so each one carries the border and centering.
fn write_worksheet(grid: &SheetGrid) -> Result<Worksheet, XlsxError> {
    let mut worksheet = Worksheet::new();
    worksheet.set_name(&grid.name)?;

    let max_column = grid.max_column();
    for (r, row) in grid.rows().iter().enumerate() {
        for c in 0..max_column {
            let (row_num, col_num) = (r as RowNum, c as ColNum);
            match row.get(c) {
                Some(cell) if !cell.value.is_empty() => {
                    worksheet.write_string_with_format(
                        row_num,
                        col_num,
                        &cell.value,
                        cell.style.format(),
                    )?;
                }
                Some(cell) => {
                    worksheet.write_blank(row_num, col_num, cell.style.format())?;
                }
                None => {
                    worksheet.write_blank(row_num, col_num, CellStyle::Body.format())?;
                }
            }
        }
    }

    for (c, width) in grid.column_widths().into_iter().enumerate() {
        worksheet.set_column_width(c as ColNum, width as f64)?;
    }

    Ok(worksheet)
}
