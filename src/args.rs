use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};

use crate::error::{Result, ToolError};

/// Source and destination directories shared by both commands.
#[derive(Debug, Clone, clap::Args)]
pub struct DirArgs {
    /// Directory containing the CSV files.
    #[arg(long, value_parser = path_parser())]
    pub src: PathBuf,

    /// Directory receiving the output file.
    #[arg(long, value_parser = path_parser())]
    pub dest: PathBuf,
}

// clap's default path parser rejects empty values before `validate` sees them.
fn path_parser() -> impl TypedValueParser<Value = PathBuf> {
    OsStringValueParser::new().map(PathBuf::from)
}

impl DirArgs {
    /// Rejects flags that were given as empty strings.
    pub fn validate(&self) -> Result<()> {
        if self.src.as_os_str().is_empty() {
            return Err(ToolError::MissingArgument("src"));
        }
        if self.dest.as_os_str().is_empty() {
            return Err(ToolError::MissingArgument("dest"));
        }
        Ok(())
    }
}

/// Long flag names that may also be spelled with a single dash.
pub const SINGLE_DASH_FLAGS: &[&str] = &["src", "dest"];

/// Rewrites `-src=x` and `-src x` style flags to their `--src` form so clap
/// accepts both spellings. Everything after a bare `--` is left alone.
pub fn normalize_flags<I>(args: I, long_names: &[&str]) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = Vec::new();
    let mut passthrough = false;

    for arg in args {
        if passthrough {
            normalized.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(|text| {
            if text == "--" {
                return None;
            }
            let flag = text.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            long_names.contains(&name).then(|| OsString::from(format!("-{text}")))
        });

        if arg == "--" {
            passthrough = true;
        }
        normalized.push(rewritten.unwrap_or(arg));
    }

    normalized
}
