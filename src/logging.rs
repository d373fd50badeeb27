use tracing_subscriber::EnvFilter;

use crate::error::{Result, ToolError};

/// Installs the global `fmt` subscriber writing to stdout.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .try_init()
        .map_err(|err| ToolError::Logging(err.to_string()))
}
