// src/utils/text.rs
// Text clean-up applied to cell and marker text before it is stored.

use scraper::ElementRef;

/// Concatenated text content of an element, trimmed.
pub fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Removes every comma (thousands separators, "Surname, Forename").
pub fn strip_commas(s: &str) -> String {
    s.replace(',', "")
}

/// Candidate cells: commas and the elected-candidate asterisk go.
pub fn clean_candidate(s: &str) -> String {
    strip_commas(s).replace('*', "").trim().to_string()
}

/// Percentage cells: commas and the `%` suffix go.
pub fn clean_percent(s: &str) -> String {
    strip_commas(s).replace('%', "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_commas_everywhere() {
        assert_eq!(strip_commas("Smith, John"), "Smith John");
        assert_eq!(strip_commas("1,234,567"), "1234567");
        assert_eq!(strip_commas("Anytown"), "Anytown");
    }

    #[test]
    fn cleans_candidate_marker() {
        assert_eq!(clean_candidate("J. Doe*"), "J. Doe");
        assert_eq!(clean_candidate("*Doe, J."), "Doe J.");
    }

    #[test]
    fn cleans_percent_suffix() {
        assert_eq!(clean_percent("45.6%"), "45.6");
        assert_eq!(clean_percent("100.0 %"), "100.0");
    }
}
