use std::path::{Path, PathBuf};

use tracing::{error, info, instrument, warn};

use crate::discover::{FileMetadata, list_csv_files};
use crate::error::{Result, ToolError};
use crate::io::excel_write;
use crate::io::line_split::{for_each_line, split_line};
use crate::io::sqlite::{Database, ImportReport};
use crate::workbook::WorkbookData;

/// A CSV file whose import was abandoned.
#[derive(Debug)]
pub struct ImportFailure {
    pub source: PathBuf,
    pub error: ToolError,
}

/// Per-file results of a database import run.
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub database: PathBuf,
    pub imported: Vec<ImportReport>,
    pub failures: Vec<ImportFailure>,
}

impl ImportSummary {
    pub fn total_rows(&self) -> usize {
        self.imported.iter().map(|report| report.rows_inserted).sum()
    }
}

/// Builds the output path `<dest>/output_<timestamp>.xlsx`.
pub fn xlsx_output_path(dest: &Path, timestamp: i64) -> PathBuf {
    dest.join(format!("output_{timestamp}.xlsx"))
}

/// Loads every CSV file into its own sheet, splitting lines on raw commas.
///
/// The first failure aborts the whole conversion.
pub fn build_workbook_from_csv(files: &[FileMetadata]) -> Result<WorkbookData> {
    let mut workbook = WorkbookData::new();

    for file in files {
        let sheet_name = file.name_without_extension.as_str();
        info!(file = %file.full_path.display(), "reading file");
        info!(sheet = sheet_name, "writing to sheet");

        let sheet = workbook.sheet_mut(sheet_name);
        let rows = for_each_line(&file.full_path, |index, line| {
            let row = to_coordinate(index);
            for (cell_index, value) in split_line(line).into_iter().enumerate() {
                sheet.set_cell(to_coordinate(cell_index), row, value)?;
            }
            Ok(())
        })?;
        info!(sheet = sheet_name, rows, "successfully written sheet");
    }

    workbook.remove_placeholder();
    Ok(workbook)
}

/// Converts every CSV file in `src` into a sheet of a new workbook saved in
/// `dest`, returning the saved path.
#[instrument(
    level = "info",
    skip_all,
    fields(src = %src.display(), dest = %dest.display())
)]
pub fn csv_dir_to_xlsx(src: &Path, dest: &Path) -> Result<PathBuf> {
    let files = list_csv_files(src)?;
    if files.is_empty() {
        return Err(ToolError::NoCsvFiles(src.to_path_buf()));
    }
    info!(file_count = files.len(), "found CSV files");

    let workbook = build_workbook_from_csv(&files)?;
    let output = xlsx_output_path(dest, chrono::Utc::now().timestamp());
    excel_write::write_workbook(&output, &workbook)?;
    info!(file = %output.display(), "Excel file created");
    Ok(output)
}

/// Imports every CSV file in `src` into `<dest>/combined.db`.
///
/// Opening the database and listing `src` are fatal; a failure inside a
/// single file rolls back that file and the run moves on.
#[instrument(
    level = "info",
    skip_all,
    fields(src = %src.display(), dest = %dest.display())
)]
pub fn csv_dir_to_sqlite(src: &Path, dest: &Path) -> Result<ImportSummary> {
    let mut database = Database::open(dest)?;
    info!(database = %database.path().display(), "connected to SQLite database");

    let files = list_csv_files(src)?;
    if files.is_empty() {
        warn!(src = %src.display(), "no CSV files found");
    }

    let mut summary = ImportSummary {
        database: database.path().to_path_buf(),
        ..ImportSummary::default()
    };

    for file in files {
        match database.import_csv(&file.full_path, &file.name_without_extension) {
            Ok(report) => {
                info!(
                    table = %report.table,
                    rows = report.rows_inserted,
                    "successfully inserted rows"
                );
                summary.imported.push(report);
            }
            Err(err) => {
                error!(file = %file.full_path.display(), error = %err, "error processing file");
                summary.failures.push(ImportFailure {
                    source: file.full_path,
                    error: err,
                });
            }
        }
    }

    Ok(summary)
}

fn to_coordinate(index: usize) -> u32 {
    u32::try_from(index)
        .ok()
        .and_then(|value| value.checked_add(1))
        .unwrap_or(u32::MAX)
}
