// src/table.rs
use serde::Serialize;

use crate::constituency::{CandidateRow, Constituency};
use crate::utils::text;

/// Column names of the output, in output order. The CSV carries no header,
/// so the report records them.
pub const COLUMNS: [&str; 5] = ["names", "candidates", "parties", "votes", "percent"];

/// Flat (constituency, candidate) rows in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    rows: Vec<CandidateRow>,
}

/// A constituency dropped during assembly, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedConstituency {
    pub index: usize,
    pub name: String,
    pub reason: String,
}

/// Result of one extraction: surviving rows plus what was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub table: ResultTable,
    pub skipped: Vec<SkippedConstituency>,
    pub constituencies: usize,
}

impl ResultTable {
    pub fn rows(&self) -> &[CandidateRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Output records: name, candidate, party, votes, percent.
    pub fn records(&self) -> impl Iterator<Item = [&str; 5]> + '_ {
        self.rows.iter().map(|r| {
            [
                r.name.as_str(),
                r.candidate.as_str(),
                r.party.as_str(),
                r.votes.as_str(),
                r.percent.as_str(),
            ]
        })
    }

    fn strip_name_commas(&mut self) {
        for row in &mut self.rows {
            if row.name.contains(',') {
                row.name = text::strip_commas(&row.name);
            }
        }
    }
}

/// Folds constituencies into one table, dropping any whose columns do not line up.
pub fn assemble(constituencies: &[Constituency]) -> Extraction {
    let mut table = ResultTable::default();
    let mut skipped = Vec::new();

    for (index, constituency) in constituencies.iter().enumerate() {
        match constituency.to_rows() {
            Ok(rows) => table.rows.extend(rows),
            Err(e) => {
                tracing::warn!("Skipping constituency {} ('{}'): {}", index, constituency.name, e);
                skipped.push(SkippedConstituency {
                    index,
                    name: constituency.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    table.strip_name_commas();

    Extraction {
        table,
        skipped,
        constituencies: constituencies.len(),
    }
}
