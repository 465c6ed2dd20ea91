use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// Input path does not reference a file.
    InputNotFound(PathBuf),
    /// Workbook unreadable, or no worksheet/header row to derive a schema from.
    InvalidSheet(String),
    /// Cell dimensions exceed the printable page area: not even one label fits.
    DegenerateLayout {
        rows_per_page: u32,
        cols_per_page: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "{e}"),
            Error::InputNotFound(path) => {
                write!(f, "input file '{}' does not exist or is no file", path.display())
            }
            Error::InvalidSheet(msg) => write!(f, "invalid spreadsheet: {msg}"),
            Error::DegenerateLayout {
                rows_per_page,
                cols_per_page,
            } => write!(
                f,
                "label cell does not fit on the page ({rows_per_page} rows x {cols_per_page} columns)"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
