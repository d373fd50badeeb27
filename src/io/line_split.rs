//! Quote-unaware line reading used by the spreadsheet converter.
//!
//! Fields are separated by every literal comma, including commas inside
//! quoted fields. `"a,b",c` therefore yields three tokens: `"a`, `b"` and `c`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, ToolError};

/// Splits a line on every `,`. An empty line produces a single empty token.
pub fn split_line(line: &str) -> Vec<&str> {
    line.split(',').collect()
}

/// Reads `path` line by line, calling `on_line` with the zero-based line index
/// and the decoded line. Trailing `\r` is stripped and invalid UTF-8 is
/// replaced rather than rejected.
pub fn for_each_line<F>(path: &Path, mut on_line: F) -> Result<usize>
where
    F: FnMut(usize, &str) -> Result<()>,
{
    let file = File::open(path).map_err(|source| ToolError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut count = 0;
    for chunk in reader.split(b'\n') {
        let mut bytes = chunk.map_err(|source| ToolError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        let line = String::from_utf8_lossy(&bytes);
        on_line(count, &line)?;
        count += 1;
    }
    Ok(count)
}
