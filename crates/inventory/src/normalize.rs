//! Spice name normalization.
//!
//! Jars are typed by hand, so "  ground   CUMIN " and "Ground Cumin" must end up
//! as the same name before they are counted or compared.

/// Turns raw user input into the canonical display name of a jar.
pub trait NameNormalizer {
    /// Normalize `raw`. An empty result means the input had no usable name.
    fn normalize(&self, raw: &str) -> String;
}

impl<F> NameNormalizer for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, raw: &str) -> String {
        self(raw)
    }
}

const ABBREVIATIONS: &[&str] = &["bbq", "msg", "xo"];

const CONNECTORS: &[&str] = &[
    "a", "and", "au", "de", "du", "el", "en", "in", "la", "le", "of", "or", "the", "with", "à",
];

/// Title case with exceptions.
///
/// - whitespace is trimmed and collapsed to single spaces
/// - every word (and every hyphen-separated part of a word) is capitalized
/// - known abbreviations stay fully uppercase ("Bbq" => "BBQ")
/// - connector words stay lowercase unless they open the name
#[derive(Debug, Clone)]
pub struct TitleCase {
    abbreviations: Vec<String>,
    connectors: Vec<String>,
}

impl Default for TitleCase {
    fn default() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
            connectors: CONNECTORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TitleCase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an abbreviation that must always render uppercase.
    pub fn with_abbreviation(mut self, word: &str) -> Self {
        self.abbreviations.push(word.to_lowercase());
        self
    }

    /// Add a connector word that stays lowercase mid-name.
    pub fn with_connector(mut self, word: &str) -> Self {
        self.connectors.push(word.to_lowercase());
        self
    }

    fn word(&self, word: &str, first: bool) -> String {
        let lower = word.to_lowercase();
        let bare = lower.trim_matches(|c: char| !c.is_alphanumeric());

        if self.abbreviations.iter().any(|a| a == bare) {
            return word.to_uppercase();
        }
        if !first && self.connectors.iter().any(|c| c == &lower) {
            return lower;
        }

        lower
            .split('-')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl NameNormalizer for TitleCase {
    fn normalize(&self, raw: &str) -> String {
        raw.split_whitespace()
            .enumerate()
            .map(|(i, w)| self.word(w, i == 0))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// Uppercases the first alphabetic character, leaving any leading punctuation.
fn capitalize(part: &str) -> String {
    let mut out = String::with_capacity(part.len());
    let mut done = false;
    for c in part.chars() {
        if !done && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            done = true;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> String {
        TitleCase::default().normalize(s)
    }

    #[test]
    fn trims_and_collapses_whitespace() {
        assert_eq!(norm("  ground   CUMIN "), "Ground Cumin");
        assert_eq!(norm("bay\tleaves"), "Bay Leaves");
    }

    #[test]
    fn empty_input_normalizes_to_empty() {
        assert_eq!(norm(""), "");
        assert_eq!(norm("   \t "), "");
    }

    #[test]
    fn connectors_stay_lowercase_mid_name() {
        assert_eq!(norm("ras EL hanout"), "Ras el Hanout");
        assert_eq!(norm("herbes de provence"), "Herbes de Provence");
        assert_eq!(norm("salt and pepper"), "Salt and Pepper");
        assert_eq!(norm("the spice blend"), "The Spice Blend");
    }

    #[test]
    fn abbreviations_stay_uppercase() {
        assert_eq!(norm("bbq rub"), "BBQ Rub");
        assert_eq!(norm("Msg"), "MSG");
        assert_eq!(norm("xo sauce powder"), "XO Sauce Powder");
    }

    #[test]
    fn only_listed_abbreviations_are_uppercased() {
        assert_eq!(norm("usa blend"), "Usa Blend");
        assert_eq!(norm("uk curry powder"), "Uk Curry Powder");
    }

    #[test]
    fn hyphenated_parts_are_capitalized() {
        assert_eq!(norm("five-spice powder"), "Five-Spice Powder");
        assert_eq!(norm("ZA'ATAR"), "Za'atar");
        assert_eq!(norm("(smoked) paprika"), "(Smoked) Paprika");
    }

    #[test]
    fn custom_exceptions() {
        let tc = TitleCase::new().with_abbreviation("NYC").with_connector("y");
        assert_eq!(tc.normalize("nyc steak rub"), "NYC Steak Rub");
        assert_eq!(tc.normalize("sal y pimienta"), "Sal y Pimienta");
    }

    #[test]
    fn closures_are_normalizers() {
        let upper = |s: &str| s.trim().to_uppercase();
        assert_eq!(upper.normalize(" basil "), "BASIL");
    }
}
