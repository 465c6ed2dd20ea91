use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::error::Error;
use crate::model::{LabelSheet, Record};

/// Optional schema column whose non-empty value opts a row into the output.
pub const PRINT_MARKER: &str = "print?";
/// Optional schema column that is never rendered.
pub const COMMENT_FIELD: &str = "comment";

/// Read the first worksheet of an Excel file into a filtered [`LabelSheet`].
///
/// The header row defines the field names (lowercased); every following row
/// becomes one record with all values treated as text.
pub fn parse(path: &Path) -> Result<LabelSheet, Error> {
    if !path.is_file() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| Error::InvalidSheet(format!("{}: {e}", path.display())))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::InvalidSheet("workbook has no worksheets".into()))?
        .map_err(|e| Error::InvalidSheet(e.to_string()))?;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .ok_or_else(|| Error::InvalidSheet("missing header row".into()))?
        .iter()
        .map(cell_text)
        .collect();

    let body: Vec<Vec<String>> = rows
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    from_rows(header, body)
}

/// Build the render list from raw header and body rows.
///
/// Filtering, in order: rows whose every value is empty are dropped; if the
/// schema has a `print?` column, rows with an empty marker are dropped and
/// the column is stripped; a `comment` column is stripped unconditionally.
/// The whole step is idempotent.
pub fn from_rows(header: Vec<String>, rows: Vec<Vec<String>>) -> Result<LabelSheet, Error> {
    let mut fields: Vec<String> = header.iter().map(|h| h.trim().to_lowercase()).collect();
    if fields.iter().all(|f| f.is_empty()) {
        return Err(Error::InvalidSheet("header row is empty".into()));
    }

    let mut records: Vec<Record> = rows
        .into_iter()
        .map(|mut values| {
            values.resize(fields.len(), String::new());
            Record { values }
        })
        .filter(|r| r.values.iter().any(|v| !v.is_empty()))
        .collect();

    if let Some(idx) = fields.iter().position(|f| f == PRINT_MARKER) {
        records.retain(|r| !r.values[idx].is_empty());
        strip_column(&mut fields, &mut records, idx);
    }
    if let Some(idx) = fields.iter().position(|f| f == COMMENT_FIELD) {
        strip_column(&mut fields, &mut records, idx);
    }

    Ok(LabelSheet { fields, records })
}

fn strip_column(fields: &mut Vec<String>, records: &mut [Record], idx: usize) {
    fields.remove(idx);
    for record in records {
        record.values.remove(idx);
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        // Whole numbers label as "12", not "12.0".
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}
