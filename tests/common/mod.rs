use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;

/// Scratch directory for generated artifacts: tests/output/<case>/
pub fn output_dir(case: &str) -> PathBuf {
    let dir = PathBuf::from("tests/output").join(case);
    std::fs::create_dir_all(&dir).expect("create output dir");
    dir
}

/// Write a small xlsx workbook: one sheet, a header row, then body rows.
/// Empty strings become genuinely empty cells, like blanks in a real sheet.
pub fn write_workbook(path: &Path, header: &[&str], rows: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in header.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *name)
            .expect("write header cell");
    }
    for (row, values) in rows.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            sheet
                .write_string((row + 1) as u32, col as u16, *value)
                .expect("write body cell");
        }
    }

    workbook.save(path).expect("save workbook");
}
