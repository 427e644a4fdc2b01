// src/utils/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The document does not have the layout we know how to read.
    #[error("Unexpected document structure: {0}")]
    Structure(String),

    #[error("Nested table {index} has no constituency name (only {names} names found)")]
    MissingConstituencyName { index: usize, names: usize },

    /// The four per-candidate sequences of a constituency differ in length.
    #[error(
        "Constituency '{name}' has mismatched columns: {candidates} candidates, {parties} parties, {votes} votes, {percent} percentages"
    )]
    Shape {
        name: String,
        candidates: usize,
        parties: usize,
        votes: usize,
        percent: usize,
    },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
