// src/main.rs
use std::path::PathBuf;

use clap::Parser;
use election_results::{parse_with_report, utils, AppError, StorageManager};

/// Convert an election results page into a CSV of candidate rows
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// HTML results page to read
    input: PathBuf,

    /// Directory for the CSV (defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also write a JSON report of skipped constituencies to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Extract only; don't write the CSV
    #[arg(long)]
    no_write: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting processing for args: {:?}", args);

    // Progress feedback when run over many files
    println!("{}", args.input.display());

    // 3. Initialize storage
    let storage = match &args.output_dir {
        Some(dir) => StorageManager::with_output_dir(dir)?,
        None => StorageManager::new(),
    };

    // 4. Extract
    let extraction = parse_with_report(&args.input)?;

    // 5. Save outputs
    if !args.no_write {
        let path = storage.save_table(&extraction.table, &args.input)?;
        tracing::info!("Wrote {}", path.display());
    }

    if let Some(report_path) = &args.report {
        storage.save_report(&extraction, &args.input, report_path)?;
    }

    tracing::info!(
        "Processing finished. Rows: {}, Skipped constituencies: {}",
        extraction.table.len(),
        extraction.skipped.len()
    );

    Ok(())
}
