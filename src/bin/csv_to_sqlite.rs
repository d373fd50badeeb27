use clap::Parser;
use csv_bundle::args::{DirArgs, SINGLE_DASH_FLAGS, normalize_flags};
use csv_bundle::convert::{self, ImportSummary};
use csv_bundle::{Result, logging};
use tracing::error;

fn main() {
    let cli = Cli::parse_from(normalize_flags(std::env::args_os(), SINGLE_DASH_FLAGS));
    if let Err(err) = logging::init_tracing() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
    if let Err(err) = run(cli) {
        error!(error = %err, "import failed");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    cli.dirs.validate()?;
    let summary = convert::csv_dir_to_sqlite(&cli.dirs.src, &cli.dirs.dest)?;
    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &ImportSummary) {
    println!();
    for report in &summary.imported {
        println!(
            "imported {} -> table '{}' ({}) ({} rows)",
            report.source.display(),
            report.table,
            report.columns.join(", "),
            report.rows_inserted
        );
    }
    for failure in &summary.failures {
        println!("failed {}: {}", failure.source.display(), failure.error);
    }
    println!(
        "All CSV files processed: {} imported, {} failed, {} rows total. Database: {}",
        summary.imported.len(),
        summary.failures.len(),
        summary.total_rows(),
        summary.database.display()
    );
}

/// Import each CSV file of a directory into its own table of a SQLite
/// database named `combined.db`.
#[derive(Parser)]
#[command(author, version)]
struct Cli {
    #[command(flatten)]
    dirs: DirArgs,
}
