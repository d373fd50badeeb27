use std::collections::BTreeMap;

use crate::error::{Result, ToolError};

/// Name of the sheet every new workbook starts with.
pub const PLACEHOLDER_SHEET: &str = "Sheet1";
/// Highest 1-indexed column an xlsx worksheet can address.
pub const MAX_COLUMN: u32 = 16_384;
/// Highest 1-indexed row an xlsx worksheet can address.
pub const MAX_ROW: u32 = 1_048_576;

/// A sparse grid of text cells addressed by 1-indexed coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetData {
    pub name: String,
    /// Keyed by `(row, column)` so iteration runs row-major.
    cells: BTreeMap<(u32, u32), String>,
}

impl SheetData {
    fn new(name: String) -> Self {
        Self {
            name,
            cells: BTreeMap::new(),
        }
    }

    /// Stores `value` at `(column, row)`, replacing any previous value.
    pub fn set_cell(&mut self, column: u32, row: u32, value: &str) -> Result<()> {
        if !(1..=MAX_COLUMN).contains(&column) || !(1..=MAX_ROW).contains(&row) {
            return Err(ToolError::CellOutOfRange {
                sheet: self.name.clone(),
                column,
                row,
            });
        }
        self.cells.insert((row, column), value.to_string());
        Ok(())
    }

    pub fn cell(&self, column: u32, row: u32) -> Option<&str> {
        self.cells.get(&(row, column)).map(String::as_str)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Iterates `(column, row, value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, &str)> {
        self.cells
            .iter()
            .map(|(&(row, column), value)| (column, row, value.as_str()))
    }
}

/// Ordered collection of sheets that will be materialised as one workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookData {
    sheets: Vec<SheetData>,
    placeholder: bool,
}

impl Default for WorkbookData {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkbookData {
    /// Creates a workbook holding only the placeholder sheet.
    pub fn new() -> Self {
        Self {
            sheets: vec![SheetData::new(PLACEHOLDER_SHEET.to_string())],
            placeholder: true,
        }
    }

    /// Returns the sheet called `name`, appending it when it does not exist.
    ///
    /// Names compare case-insensitively, as xlsx sheet names do. Reusing a name
    /// hands back the existing sheet under its first spelling, so later writes
    /// overwrite earlier cells. Requesting the placeholder's name adopts it as
    /// a data sheet.
    pub fn sheet_mut(&mut self, name: &str) -> &mut SheetData {
        if self.placeholder && same_sheet_name(name, PLACEHOLDER_SHEET) {
            self.placeholder = false;
        }

        let index = match self
            .sheets
            .iter()
            .position(|sheet| same_sheet_name(&sheet.name, name))
        {
            Some(index) => index,
            None => {
                self.sheets.push(SheetData::new(name.to_string()));
                self.sheets.len() - 1
            }
        };
        &mut self.sheets[index]
    }

    /// Drops the placeholder sheet unless it was adopted for data.
    pub fn remove_placeholder(&mut self) {
        if self.placeholder {
            self.sheets
                .retain(|sheet| !same_sheet_name(&sheet.name, PLACEHOLDER_SHEET));
            self.placeholder = false;
        }
    }

    pub fn sheets(&self) -> &[SheetData] {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&SheetData> {
        self.sheets
            .iter()
            .find(|sheet| same_sheet_name(&sheet.name, name))
    }
}

fn same_sheet_name(lhs: &str, rhs: &str) -> bool {
    lhs.to_lowercase() == rhs.to_lowercase()
}
