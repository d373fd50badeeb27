use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::debug;

use crate::error::Result;
use crate::workbook::WorkbookData;

/// Writes the provided workbook data to the given path, every cell as text.
pub fn write_workbook(path: &Path, workbook: &WorkbookData) -> Result<()> {
    let mut workbook_writer = Workbook::new();

    for sheet in workbook.sheets() {
        let worksheet = workbook_writer.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for (column, row, value) in sheet.cells() {
            // Model coordinates are 1-indexed and already bounded to the grid.
            worksheet.write_string(row - 1, (column - 1) as u16, value)?;
        }
        debug!(sheet = %sheet.name, cells = sheet.cell_count(), "worksheet populated");
    }

    workbook_writer.save(path)?;
    Ok(())
}
