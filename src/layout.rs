use crate::error::Error;
use crate::model::{
    Cell, LabelSheet, LayoutConfig, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP, Page, Record, TextLine,
};

/// Per-page grid capacity and the line pitch inside a cell, computed once
/// from the finalized schema so every cell gets the same typography.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    pub rows_per_page: u32,
    pub cols_per_page: u32,
    /// Vertical distance between stacked text baselines, millimetres.
    pub line_height: f32,
}

impl GridGeometry {
    pub fn compute(config: &LayoutConfig, lines_per_cell: usize) -> Result<Self, Error> {
        let rows = (config.page_height - MARGIN_TOP) / config.cell_height;
        let cols = (config.page_width - MARGIN_LEFT - MARGIN_RIGHT) / config.cell_width;
        let rows_per_page = rows.max(0.0).floor() as u32;
        let cols_per_page = cols.max(0.0).floor() as u32;
        if rows_per_page == 0 || cols_per_page == 0 {
            return Err(Error::DegenerateLayout {
                rows_per_page,
                cols_per_page,
            });
        }

        // The +1 reserves a blank slot above the first line, so text does not
        // sit flush against the cell's top inset.
        let line_height =
            (config.cell_height - 2.0 * config.cell_margin) / (lines_per_cell as f32 + 1.0);

        Ok(Self {
            rows_per_page,
            cols_per_page,
            line_height,
        })
    }

    pub fn labels_per_page(&self) -> usize {
        (self.rows_per_page * self.cols_per_page) as usize
    }

    /// Row-major slot for label index `n`: (page, row, col).
    pub fn slot(&self, n: usize) -> (usize, u32, u32) {
        let per_page = self.labels_per_page();
        let local = n % per_page;
        let cols = self.cols_per_page as usize;
        ((n / per_page), (local / cols) as u32, (local % cols) as u32)
    }
}

/// Fold the render list into fully placed pages.
///
/// A page always exists, even for an empty render list, matching the eager
/// first-page behavior callers rely on for "print one blank sheet".
pub fn paginate(sheet: &LabelSheet, config: &LayoutConfig) -> Result<Vec<Page>, Error> {
    let geometry = GridGeometry::compute(config, sheet.fields.len())?;
    let per_page = geometry.labels_per_page();

    let mut pages: Vec<Page> = Vec::new();
    let mut current = Page::default();

    for (n, record) in sheet.records.iter().enumerate() {
        if n > 0 && n % per_page == 0 {
            pages.push(std::mem::take(&mut current));
        }
        let (_, row, col) = geometry.slot(n);
        current.cells.push(place(record, row, col, config, geometry.line_height));
    }
    pages.push(current);

    Ok(pages)
}

fn place(record: &Record, row: u32, col: u32, config: &LayoutConfig, line_height: f32) -> Cell {
    let x = MARGIN_LEFT + col as f32 * config.cell_width;
    let y = MARGIN_TOP + row as f32 * config.cell_height;

    // Empty values keep their line slot but draw nothing.
    let lines = record
        .values
        .iter()
        .enumerate()
        .map(|(i, value)| TextLine {
            x: x + config.cell_margin,
            y: y + config.cell_margin + (i as f32 + 1.0) * line_height,
            text: value.clone(),
        })
        .collect();

    Cell {
        row,
        col,
        x,
        y,
        width: config.cell_width,
        height: config.cell_height,
        lines,
    }
}
