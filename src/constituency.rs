// src/constituency.rs
use serde::Serialize;

use crate::extractors::fields::Field;
use crate::utils::error::ExtractError;

/// One constituency's contest: parallel per-candidate columns plus the
/// constituency name and electorate repeated on every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constituency {
    pub name: String,
    /// Registered voters, digits only. Empty when the page gave no figure.
    pub electorate: String,
    pub candidates: Vec<String>,
    pub parties: Vec<String>,
    pub votes: Vec<String>,
    pub percent: Vec<String>,
}

/// A single (constituency, candidate) row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRow {
    pub name: String,
    pub candidate: String,
    pub party: String,
    pub votes: String,
    pub percent: String,
    pub electorate: String,
}

impl Constituency {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Appends one aligned (candidate, party, votes, percent) quadruple.
    pub fn append_candidate(
        &mut self,
        candidate: impl Into<String>,
        party: impl Into<String>,
        votes: impl Into<String>,
        percent: impl Into<String>,
    ) {
        self.candidates.push(candidate.into());
        self.parties.push(party.into());
        self.votes.push(votes.into());
        self.percent.push(percent.into());
    }

    /// Appends a single decoded cell to the column for `field`.
    pub(crate) fn push_field(&mut self, field: Field, value: String) {
        match field {
            Field::Candidate => self.candidates.push(value),
            Field::Party => self.parties.push(value),
            Field::Votes => self.votes.push(value),
            Field::Percent => self.percent.push(value),
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    fn check_shape(&self) -> Result<(), ExtractError> {
        let n = self.candidates.len();
        if self.parties.len() == n && self.votes.len() == n && self.percent.len() == n {
            return Ok(());
        }
        Err(ExtractError::Shape {
            name: self.name.clone(),
            candidates: n,
            parties: self.parties.len(),
            votes: self.votes.len(),
            percent: self.percent.len(),
        })
    }

    /// Row view of this constituency, one row per candidate.
    ///
    /// Fails with [`ExtractError::Shape`] when the four columns differ in
    /// length, which is how irregular sub-tables (university seats and the
    /// like) are detected.
    pub fn to_rows(&self) -> Result<impl Iterator<Item = CandidateRow> + '_, ExtractError> {
        self.check_shape()?;

        let rows = self
            .candidates
            .iter()
            .zip(&self.parties)
            .zip(&self.votes)
            .zip(&self.percent)
            .map(move |(((candidate, party), votes), percent)| CandidateRow {
                name: self.name.clone(),
                candidate: candidate.clone(),
                party: party.clone(),
                votes: votes.clone(),
                percent: percent.clone(),
                electorate: self.electorate.clone(),
            });
        Ok(rows)
    }
}
