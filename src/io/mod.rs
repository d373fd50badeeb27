pub mod csv_read;
pub mod excel_write;
pub mod line_split;
pub mod sqlite;
