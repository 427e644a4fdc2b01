// src/extractors/results.rs

// --- Imports ---
use crate::constituency::Constituency;
use crate::extractors::correlate::{ByIndex, ConstituencyHeader, Correlate};
use crate::extractors::fields::{Field, FieldCycle};
use crate::table::{self, Extraction};
use crate::utils::error::ExtractError;
use crate::utils::text;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// The results are in the second top-level table; the first is site navigation.
const RESULTS_TABLE_INDEX: usize = 1;

// --- CSS Selectors (Lazy Static) ---
static TABLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("table").expect("Failed to compile TABLE_SELECTOR")
});

// Constituency names are the bold spans inside the results table rows
static NAME_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("tr b").expect("Failed to compile NAME_SELECTOR")
});

// Paragraphs that may carry an "Electorate: 12,345" line
static INFO_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("tr p").expect("Failed to compile INFO_SELECTOR")
});

static CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("td").expect("Failed to compile CELL_SELECTOR")
});

// --- Regex Patterns for Text Matching (Lazy Static) ---
static ELECTORATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Electorate:\s*([\d,]+)").expect("Failed to compile ELECTORATE_RE")
});

/// Turns one results page into constituency records and a flat table.
pub struct ResultsExtractor<C = ByIndex> {
    correlation: C,
}

impl ResultsExtractor<ByIndex> {
    pub fn new() -> Self {
        Self { correlation: ByIndex }
    }
}

impl Default for ResultsExtractor<ByIndex> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Correlate> ResultsExtractor<C> {
    /// Uses a different name/electorate pairing strategy.
    pub fn with_correlation(correlation: C) -> Self {
        Self { correlation }
    }

    /// Parses `html_content` and runs the full extraction.
    pub fn extract(&self, html_content: &str) -> Result<Extraction, ExtractError> {
        let document = Html::parse_document(html_content);
        self.extract_document(&document)
    }

    /// Runs the full extraction over an already parsed document.
    pub fn extract_document(&self, document: &Html) -> Result<Extraction, ExtractError> {
        let constituencies = self.constituencies(document)?;
        let extraction = table::assemble(&constituencies);

        tracing::info!(
            "Extracted {} rows from {} constituencies ({} skipped)",
            extraction.table.len(),
            extraction.constituencies,
            extraction.skipped.len()
        );
        Ok(extraction)
    }

    /// Builds one record per nested table of the results table, in document order.
    pub fn constituencies(&self, document: &Html) -> Result<Vec<Constituency>, ExtractError> {
        // 1. Locate the results table
        let results = find_results_table(document)?;

        // 2. Collect the name and electorate side-lists
        let names = constituency_names(results);
        let electorates = electorates(results);
        tracing::debug!("Found {} constituency names, {} electorate figures", names.len(), electorates.len());

        // 3. Pair them with the nested tables
        let nested: Vec<ElementRef> = results.select(&TABLE_SELECTOR).collect();
        let headers = self.correlation.correlate(&names, &electorates, nested.len())?;

        // 4. Decode each nested table's cells
        let constituencies = nested
            .into_iter()
            .zip(headers)
            .map(|(nested_table, header)| decode_constituency(nested_table, header))
            .collect();

        Ok(constituencies)
    }
}

/// Returns the second `table` that is not nested inside another table.
pub fn find_results_table(document: &Html) -> Result<ElementRef<'_>, ExtractError> {
    let top_level: Vec<ElementRef> = document
        .select(&TABLE_SELECTOR)
        .filter(|table| !has_table_ancestor(*table))
        .collect();

    tracing::debug!("Found {} top-level tables", top_level.len());

    top_level.get(RESULTS_TABLE_INDEX).copied().ok_or_else(|| {
        ExtractError::Structure(format!(
            "expected at least {} top-level tables, found {}",
            RESULTS_TABLE_INDEX + 1,
            top_level.len()
        ))
    })
}

fn has_table_ancestor(element: ElementRef) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().name() == "table")
}

/// Text of every bold span in the results table rows, in document order.
pub fn constituency_names(results: ElementRef) -> Vec<String> {
    results.select(&NAME_SELECTOR).map(text::element_text).collect()
}

/// Electorate figures (commas stripped) from the results table paragraphs.
/// Paragraphs without a figure are skipped.
pub fn electorates(results: ElementRef) -> Vec<String> {
    results
        .select(&INFO_SELECTOR)
        .filter_map(|paragraph| {
            let paragraph_text = paragraph.text().collect::<String>();
            let figure = parse_electorate(&paragraph_text);
            if figure.is_none() {
                tracing::trace!("No electorate figure in paragraph: '{}'", paragraph_text.trim());
            }
            figure
        })
        .collect()
}

/// Pulls the digits out of `Electorate: 54,321`.
pub fn parse_electorate(s: &str) -> Option<String> {
    ELECTORATE_RE
        .captures(s)
        .and_then(|caps| caps.get(1))
        .map(|m| text::strip_commas(m.as_str()))
}

/// Decodes one nested table's cell stream into a constituency.
fn decode_constituency(nested_table: ElementRef, header: ConstituencyHeader) -> Constituency {
    let mut constituency = Constituency::new(header.name);
    constituency.electorate = header.electorate;

    let mut cycle = FieldCycle::new();
    let mut cells = 0usize;
    for cell in nested_table.select(&CELL_SELECTOR) {
        let field = cycle.advance();
        constituency.push_field(field, field.clean(&text::element_text(cell)));
        cells += 1;
    }

    if !cycle.at_boundary() {
        tracing::debug!(
            "Constituency '{}' has {} cells, not a multiple of {}",
            constituency.name,
            cells,
            Field::WIDTH
        );
    }
    tracing::debug!("Decoded constituency '{}' ({} candidates)", constituency.name, constituency.len());

    constituency
}
