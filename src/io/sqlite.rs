use std::path::{Path, PathBuf};

use rusqlite::{Connection, params_from_iter};
use tracing::{debug, info, instrument};

use crate::error::{Result, ToolError};
use crate::io::csv_read;
use crate::sanitize::{sanitize_column, sanitize_table};

/// File name of the database created inside the destination directory.
pub const DATABASE_FILE: &str = "combined.db";

/// Outcome of a successfully committed CSV import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub table: String,
    pub source: PathBuf,
    pub columns: Vec<String>,
    pub rows_inserted: usize,
}

/// A SQLite database receiving one table per imported CSV file.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
    path: PathBuf,
}

impl Database {
    /// Opens or creates `combined.db` inside `dest_dir`.
    pub fn open(dest_dir: &Path) -> Result<Self> {
        let path = dest_dir.join(DATABASE_FILE);
        let conn = Connection::open(&path)?;
        // Opening is lazy; touch the schema so unusable files fail here.
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })?;
        Ok(Self { conn, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Imports one CSV file into a table named after `base_name`.
    ///
    /// All rows are inserted inside a single transaction. Any error leaves the
    /// transaction uncommitted and it is rolled back when dropped. The table
    /// itself is created before the transaction starts and survives a failed
    /// import.
    #[instrument(level = "info", skip_all, fields(file = %path.display()))]
    pub fn import_csv(&mut self, path: &Path, base_name: &str) -> Result<ImportReport> {
        let mut reader = csv_read::open_records(path)?;
        let header = csv_read::read_header(&mut reader, path)?;

        let columns: Vec<String> = header.iter().map(|field| sanitize_column(field)).collect();
        let table = sanitize_table(base_name);

        self.conn.execute(&create_table_sql(&table, &columns), [])?;
        info!(table = %table, columns = columns.len(), "table created or already exists");

        let tx = self.conn.transaction()?;
        let mut rows_inserted = 0;
        {
            let mut insert = tx.prepare(&insert_sql(&table, &columns))?;
            for record in reader.records() {
                let record = record.map_err(|source| ToolError::Csv {
                    path: path.to_path_buf(),
                    source,
                })?;
                let values = csv_read::fit_to_width(&record, columns.len());
                insert.execute(params_from_iter(values))?;
                rows_inserted += 1;
            }
        }
        tx.commit()?;

        debug!(table = %table, rows = rows_inserted, "transaction committed");
        Ok(ImportReport {
            table,
            source: path.to_path_buf(),
            columns,
            rows_inserted,
        })
    }
}

fn quote_identifier(name: &str) -> String {
    format!("\"{name}\"")
}

fn create_table_sql(table: &str, columns: &[String]) -> String {
    let column_defs: Vec<String> = columns
        .iter()
        .map(|column| format!("{} TEXT", quote_identifier(column)))
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quote_identifier(table),
        column_defs.join(", ")
    )
}

fn insert_sql(table: &str, columns: &[String]) -> String {
    let names: Vec<String> = columns.iter().map(|column| quote_identifier(column)).collect();
    let placeholders = vec!["?"; columns.len()];
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_identifier(table),
        names.join(", "),
        placeholders.join(", ")
    )
}
