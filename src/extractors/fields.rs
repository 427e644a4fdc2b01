// src/extractors/fields.rs
// Positional decoding of a nested table's cell stream.

use crate::utils::text;

/// Meaning of a cell, by its position in the repeating four-cell window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Candidate,
    Party,
    Votes,
    Percent,
}

impl Field {
    /// Number of cells in one (candidate, party, votes, percent) window.
    pub const WIDTH: usize = 4;

    /// The field of the next cell in the stream.
    pub fn next(self) -> Self {
        match self {
            Field::Candidate => Field::Party,
            Field::Party => Field::Votes,
            Field::Votes => Field::Percent,
            Field::Percent => Field::Candidate,
        }
    }

    /// Applies this field's normalization to raw cell text.
    pub fn clean(self, raw: &str) -> String {
        match self {
            Field::Candidate => text::clean_candidate(raw),
            Field::Percent => text::clean_percent(raw),
            Field::Party | Field::Votes => text::strip_commas(raw).trim().to_string(),
        }
    }
}

/// Walks a flat cell stream, tagging each cell with its field.
#[derive(Debug)]
pub struct FieldCycle {
    current: Field,
}

impl FieldCycle {
    pub fn new() -> Self {
        Self { current: Field::Candidate }
    }

    /// Returns the field for the next cell and advances the cycle.
    pub fn advance(&mut self) -> Field {
        let field = self.current;
        self.current = field.next();
        field
    }

    /// True when no window is half-filled.
    pub fn at_boundary(&self) -> bool {
        self.current == Field::Candidate
    }
}

impl Default for FieldCycle {
    fn default() -> Self {
        Self::new()
    }
}
