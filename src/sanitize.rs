//! Conversion of arbitrary header and file names into SQL identifiers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fallback used when a header field sanitizes to nothing.
pub const DEFAULT_COLUMN: &str = "unnamed_column";
/// Fallback used when a file name sanitizes to nothing.
pub const DEFAULT_TABLE: &str = "default_table";

static NON_IDENTIFIER_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("hardcoded identifier pattern"));

/// Turns `raw` into an identifier made of `[A-Za-z0-9_]` that does not start
/// with a digit, returning `fallback` when nothing usable remains.
///
/// Distinct inputs may map to the same identifier.
pub fn sanitize_identifier(raw: &str, fallback: &str) -> String {
    let replaced = NON_IDENTIFIER_RUN.replace_all(raw, "_");
    let trimmed = replaced.trim_matches('_');

    if trimmed.is_empty() {
        return fallback.to_string();
    }

    if trimmed.starts_with(|ch: char| ch.is_ascii_digit()) {
        format!("_{trimmed}")
    } else {
        trimmed.to_string()
    }
}

pub fn sanitize_column(raw: &str) -> String {
    sanitize_identifier(raw, DEFAULT_COLUMN)
}

pub fn sanitize_table(raw: &str) -> String {
    sanitize_identifier(raw, DEFAULT_TABLE)
}
