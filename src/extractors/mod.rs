// src/extractors/mod.rs
pub mod correlate;
pub mod fields;
pub mod results;

// Re-export key extraction types for convenience
pub use correlate::{ByIndex, ConstituencyHeader, Correlate};
pub use fields::{Field, FieldCycle};
pub use results::ResultsExtractor;
