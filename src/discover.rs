use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ToolError};

const CSV_SUFFIX: &str = ".csv";

/// A CSV file found in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub name_without_extension: String,
    pub full_path: PathBuf,
}

/// Lists the regular files in `dir` whose name ends in `.csv`.
///
/// Subdirectories and other entries are skipped. Entries are returned sorted
/// by file name; an empty list is not an error.
pub fn list_csv_files(dir: &Path) -> Result<Vec<FileMetadata>> {
    let read_dir_error = |source| ToolError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        if entry.file_type().map_err(read_dir_error)?.is_dir() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            debug!(file = ?file_name, "skipping non UTF-8 file name");
            continue;
        };

        if let Some(stem) = name.strip_suffix(CSV_SUFFIX) {
            if stem.is_empty() {
                continue;
            }
            files.push(FileMetadata {
                name_without_extension: stem.to_string(),
                full_path: dir.join(name),
            });
        }
    }

    files.sort_by(|lhs, rhs| lhs.full_path.cmp(&rhs.full_path));
    Ok(files)
}
