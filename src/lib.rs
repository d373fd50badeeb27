//! Core library for the `csv-to-xlsx` and `csv-to-sqlite` command line tools.
//!
//! Both tools enumerate the CSV files of a directory with [`discover`] and
//! consolidate them into one artifact. The pipelines live in [`convert`]. The
//! format adapters live under [`io`], and the in-memory sheet model in
//! [`workbook`].

pub mod args;
pub mod convert;
pub mod discover;
pub mod error;
pub mod io;
pub mod logging;
pub mod sanitize;
pub mod workbook;

pub use error::{Result, ToolError};
