use std::fs::File;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::error::{Result, ToolError};

/// Opens `path` as standard CSV with a header row, allowing records whose
/// field count differs from the header.
pub fn open_records(path: &Path) -> Result<Reader<File>> {
    let file = File::open(path).map_err(|source| ToolError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file))
}

/// Returns the header fields, failing when the file has no usable header.
pub fn read_header(reader: &mut Reader<File>, path: &Path) -> Result<Vec<String>> {
    let header = reader.headers().map_err(|source| ToolError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    if header.is_empty() {
        return Err(ToolError::MissingHeader(path.to_path_buf()));
    }
    Ok(header.iter().map(str::to_string).collect())
}

/// Pads `record` with empty strings or truncates it so it has exactly `width`
/// fields.
pub fn fit_to_width(record: &StringRecord, width: usize) -> Vec<&str> {
    let mut fields: Vec<&str> = record.iter().take(width).collect();
    fields.resize(width, "");
    fields
}
