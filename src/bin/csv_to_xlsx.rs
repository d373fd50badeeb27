use clap::Parser;
use csv_bundle::args::{DirArgs, SINGLE_DASH_FLAGS, normalize_flags};
use csv_bundle::{Result, convert, logging};
use tracing::{error, info};

fn main() {
    let cli = Cli::parse_from(normalize_flags(std::env::args_os(), SINGLE_DASH_FLAGS));
    if let Err(err) = logging::init_tracing() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
    if let Err(err) = run(cli) {
        error!(error = %err, "conversion failed");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    cli.dirs.validate()?;
    info!(
        src = %cli.dirs.src.display(),
        dest = %cli.dirs.dest.display(),
        "using source and destination"
    );
    let output = convert::csv_dir_to_xlsx(&cli.dirs.src, &cli.dirs.dest)?;
    println!("{}", output.display());
    Ok(())
}

/// Combine a directory of CSV files into one workbook, one sheet per file.
///
/// Lines are split on every comma; quoted fields are not recognised.
#[derive(Parser)]
#[command(author, version)]
struct Cli {
    #[command(flatten)]
    dirs: DirArgs,
}
