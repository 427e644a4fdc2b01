// src/extractors/correlate.rs
// Pairs constituency names with electorate figures for each nested table.

use crate::utils::error::ExtractError;

/// Name and electorate assigned to one nested table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstituencyHeader {
    pub name: String,
    pub electorate: String,
}

/// Strategy for deciding which name and electorate belong to nested table `k`.
pub trait Correlate {
    fn correlate(
        &self,
        names: &[String],
        electorates: &[String],
        tables: usize,
    ) -> Result<Vec<ConstituencyHeader>, ExtractError>;
}

/// Joins the k-th name and k-th electorate with the k-th nested table.
///
/// Nothing ties a figure to its name except order in the markup, so a
/// missing electorate paragraph shifts every later figure by one. Length
/// mismatches are logged; they cannot be repaired here.
#[derive(Debug, Default, Clone, Copy)]
pub struct ByIndex;

impl Correlate for ByIndex {
    fn correlate(
        &self,
        names: &[String],
        electorates: &[String],
        tables: usize,
    ) -> Result<Vec<ConstituencyHeader>, ExtractError> {
        if names.len() != tables || electorates.len() != tables {
            tracing::warn!(
                "Side-lists out of step: {} nested tables, {} names, {} electorate figures; later constituencies may be misattributed",
                tables,
                names.len(),
                electorates.len()
            );
        }

        (0..tables)
            .map(|k| {
                let name = names.get(k).ok_or(ExtractError::MissingConstituencyName {
                    index: k,
                    names: names.len(),
                })?;
                let electorate = electorates.get(k).cloned().unwrap_or_else(|| {
                    tracing::warn!("No electorate figure for constituency {} ('{}')", k, name);
                    String::new()
                });
                Ok(ConstituencyHeader { name: name.clone(), electorate })
            })
            .collect()
    }
}
