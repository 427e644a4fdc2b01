// src/lib.rs
//! Reads constituency results out of an elections-data HTML page and
//! flattens them into one row per (constituency, candidate).

pub mod constituency;
pub mod extractors;
pub mod storage;
pub mod table;
pub mod utils;

use std::fs;
use std::path::Path;

pub use constituency::{CandidateRow, Constituency};
pub use extractors::ResultsExtractor;
pub use storage::StorageManager;
pub use table::{Extraction, ResultTable, SkippedConstituency};
pub use utils::error::{AppError, ExtractError, StorageError};

/// Extracts the result table from the page at `path`, also reporting
/// which constituencies were dropped.
pub fn parse_with_report<P: AsRef<Path>>(path: P) -> Result<Extraction, AppError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

    // Older pages are not always valid UTF-8
    let html = String::from_utf8_lossy(&bytes);

    let extraction = ResultsExtractor::new().extract(&html)?;
    Ok(extraction)
}

/// Extracts the result table from the page at `path`. With `write_to_csv`
/// the table is also saved next to the input with a `.csv` extension.
pub fn parse<P: AsRef<Path>>(path: P, write_to_csv: bool) -> Result<ResultTable, AppError> {
    let path = path.as_ref();
    let extraction = parse_with_report(path)?;

    if write_to_csv {
        StorageManager::new().save_table(&extraction.table, path)?;
    }

    Ok(extraction.table)
}
