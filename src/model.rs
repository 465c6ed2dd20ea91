/// Layout parameters for one run. All lengths are millimetres.
///
/// Page margins are fixed (top 10, left 20, right 10) to match the label
/// sheets this tool targets; only the cell geometry is configurable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    pub page_width: f32,
    pub page_height: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    /// Inset between the cell frame and its text.
    pub cell_margin: f32,
    pub draw_border: bool,
}

pub const MARGIN_TOP: f32 = 10.0;
pub const MARGIN_LEFT: f32 = 20.0;
pub const MARGIN_RIGHT: f32 = 10.0;

/// A4 portrait.
pub const PAGE_WIDTH_A4: f32 = 210.0;
pub const PAGE_HEIGHT_A4: f32 = 297.0;

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: PAGE_WIDTH_A4,
            page_height: PAGE_HEIGHT_A4,
            cell_width: 40.0,
            cell_height: 22.0,
            cell_margin: 3.0,
            draw_border: true,
        }
    }
}

/// One spreadsheet row's values, aligned with [`LabelSheet::fields`].
/// An empty string stands for an absent cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub values: Vec<String>,
}

/// The render list: field names (lowercased header, metadata columns removed)
/// and the records that survived filtering, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelSheet {
    pub fields: Vec<String>,
    pub records: Vec<Record>,
}

/// One text line inside a cell. Coordinates are millimetres from the page's
/// top-left corner; `y` is the text baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// One occupied grid slot. Never mutated after placement.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    /// Top-left anchor, millimetres from the page's top-left corner.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub lines: Vec<TextLine>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub cells: Vec<Cell>,
}

/// What a completed run produced, for the caller's one-line report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub labels: usize,
    pub pages: usize,
}
