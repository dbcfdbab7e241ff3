use calamine::{open_workbook_auto, Data, Reader};
use log::debug;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::generator::escape;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Input file {0:?} does not exist")]
    InputNotFound(PathBuf),

    #[error("Failed to read workbook: {0}")]
    WorkbookError(#[from] calamine::Error),

    #[error("Workbook contains no sheets")]
    NoSheets,

    #[error("Sheet '{sheet}' not found. Available sheets: {}", .available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },
}

/// Display text of a single cell. Whole numbers drop the `.0`, dates use ISO-8601.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => format!("{:?}", f),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
            None => cell.to_string(),
        },
        other => other.to_string(),
    }
}

/// Pick the requested sheet, or the first one when none is named
pub fn select_sheet(available: &[String], requested: Option<&str>) -> Result<String, TableError> {
    match requested {
        Some(name) if available.iter().any(|s| s == name) => Ok(name.to_string()),
        Some(name) => Err(TableError::SheetNotFound {
            sheet: name.to_string(),
            available: available.to_vec(),
        }),
        None => available.first().cloned().ok_or(TableError::NoSheets),
    }
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// Render rows of cell text as an HTML `<table>`.
///
/// Leading blank rows are skipped. With `header`, the first non-blank row
/// becomes the `<thead>`. Blank rows never appear in the body.
pub fn render_table(rows: &[Vec<String>], header: bool) -> String {
    if rows.is_empty() {
        return "<table></table>".to_string();
    }

    let first = rows.iter().position(|row| !is_blank_row(row)).unwrap_or(0);
    let mut body_start = first;
    let mut parts = vec!["<table>".to_string()];

    if header {
        parts.push("  <thead>".to_string());
        parts.push("    <tr>".to_string());
        for cell in &rows[first] {
            parts.push(format!("      <th>{}</th>", escape(cell)));
        }
        parts.push("    </tr>".to_string());
        parts.push("  </thead>".to_string());
        body_start = first + 1;
    }

    parts.push("  <tbody>".to_string());
    for row in rows[body_start..].iter().filter(|row| !is_blank_row(row)) {
        parts.push("    <tr>".to_string());
        for cell in row {
            parts.push(format!("      <td>{}</td>", escape(cell)));
        }
        parts.push("    </tr>".to_string());
    }
    parts.push("  </tbody>".to_string());
    parts.push("</table>".to_string());

    parts.join("\n")
}

/// Read one worksheet as rows of display text
pub fn load_sheet_rows(
    path: impl AsRef<Path>,
    sheet: Option<&str>,
) -> Result<Vec<Vec<String>>, TableError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TableError::InputNotFound(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path)?;
    let sheet = select_sheet(&workbook.sheet_names(), sheet)?;
    debug!("Reading sheet '{}' from {:?}", sheet, path);

    let range = workbook.worksheet_range(&sheet)?;
    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    debug!("Read {} rows", rows.len());
    Ok(rows)
}

/// Render one worksheet of a workbook as an HTML table
pub fn sheet_to_html(
    path: impl AsRef<Path>,
    sheet: Option<&str>,
    header: bool,
) -> Result<String, TableError> {
    let rows = load_sheet_rows(path, sheet)?;
    Ok(render_table(&rows, header))
}
