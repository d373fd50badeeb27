use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur while the
/// tools enumerate, read, and consolidate CSV files.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures that are not tied to a specific input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the source directory cannot be listed.
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when a required command line flag is empty.
    #[error("missing required argument --{0}")]
    MissingArgument(&'static str),

    /// Raised by the spreadsheet tool when the source directory holds no CSV files.
    #[error("no CSV files found in {0}")]
    NoCsvFiles(PathBuf),

    /// Raised when an input file cannot be opened.
    #[error("failed to open {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when reading lines from an already opened input fails.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when a CSV record cannot be parsed.
    #[error("failed to parse CSV record in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Raised when a CSV file has no header row to derive columns from.
    #[error("missing header row in {0}")]
    MissingHeader(PathBuf),

    /// Raised when a cell would land outside the worksheet grid.
    #[error("cell (column {column}, row {row}) in sheet '{sheet}' is outside the worksheet grid")]
    CellOutOfRange { sheet: String, column: u32, row: u32 },

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Errors bubbled up from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
