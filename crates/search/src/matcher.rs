//! Fuzzy scoring of catalog names against a free-text query.
//!
//! Every whitespace-separated query term must match a name for it to be
//! suggested. A term matches either as a substring (scored by position, word
//! boundary and coverage) or, failing that, as an in-order subsequence of the
//! name's characters (scored by how few characters had to be skipped).

use serde::Serialize;

use crate::catalog::CatalogItem;

/// Suggestions returned when the caller does not ask for a specific number.
pub const DEFAULT_LIMIT: usize = 10;

const EXACT_BONUS: f64 = 100.0;
const BOUNDARY_BONUS: f64 = 50.0;
const COVERAGE_WEIGHT: f64 = 25.0;
const POSITION_WEIGHT: f64 = 25.0;
const SUBSEQUENCE_WEIGHT: f64 = 20.0;

/// A catalog item with its relevance score. Higher is better.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItem {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub score: f64,
}

/// Rank `candidates` against `query`, best first, keeping at most `limit`.
///
/// An empty (or whitespace-only) query matches nothing. Candidates with equal
/// scores keep their catalog order.
pub fn search(query: &str, candidates: &[CatalogItem], limit: usize) -> Vec<RankedItem> {
    let terms = terms(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<RankedItem> = candidates
        .iter()
        .filter_map(|item| {
            let score = score_terms(&terms, &item.name)?;
            Some(RankedItem {
                item: item.clone(),
                score,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(limit);

    tracing::trace!(query, matches = ranked.len(), "search ranked");
    ranked
}

/// Score a single name against `query`. `None` when any term fails to match.
pub fn score(query: &str, name: &str) -> Option<f64> {
    let terms = terms(query);
    if terms.is_empty() {
        return None;
    }
    score_terms(&terms, name)
}

fn terms(query: &str) -> Vec<String> {
    query.to_lowercase().split_whitespace().map(str::to_owned).collect()
}

fn score_terms(terms: &[String], name: &str) -> Option<f64> {
    let name = name.to_lowercase();
    let chars: Vec<char> = name.chars().collect();
    if chars.is_empty() {
        return None;
    }

    let mut total = 0.0;
    for term in terms {
        total += score_term(term, &name, &chars)?;
    }
    (total > 0.0).then_some(total)
}

fn score_term(term: &str, name: &str, chars: &[char]) -> Option<f64> {
    let term_len = term.chars().count() as f64;
    let name_len = chars.len() as f64;

    if let Some(byte_pos) = name.find(term) {
        let pos = name[..byte_pos].chars().count();
        let mut score = 0.0;

        if term == name {
            score += EXACT_BONUS;
        }
        if pos == 0 || matches!(chars[pos - 1], ' ' | ',') {
            score += BOUNDARY_BONUS;
        }
        score += term_len / name_len * COVERAGE_WEIGHT;
        score += (POSITION_WEIGHT - pos as f64).max(0.0);
        return Some(score);
    }

    let scanned = subsequence_end(term, chars)?;
    Some(SUBSEQUENCE_WEIGHT * term_len / scanned as f64)
}

// Characters of `chars` scanned until every character of `term` was found in
// order, or `None` if some character never turns up.
fn subsequence_end(term: &str, chars: &[char]) -> Option<usize> {
    let mut wanted = term.chars().peekable();
    for (i, &c) in chars.iter().enumerate() {
        if wanted.peek() == Some(&c) {
            wanted.next();
            if wanted.peek().is_none() {
                return Some(i + 1);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn items(names: &[&str]) -> Vec<CatalogItem> {
        names.iter().copied().map(CatalogItem::from).collect()
    }

    fn names(ranked: &[RankedItem]) -> Vec<&str> {
        ranked.iter().map(|r| r.item.name.as_str()).collect()
    }

    #[test]
    fn empty_query_matches_nothing() {
        let catalog = items(&["Basil", "Cinnamon"]);
        assert!(search("", &catalog, DEFAULT_LIMIT).is_empty());
        assert!(search("   ", &catalog, DEFAULT_LIMIT).is_empty());
        assert_eq!(score("", "Basil"), None);
    }

    #[test]
    fn prefix_substring_match() {
        let ranked = search("cin", &items(&["Cinnamon"]), DEFAULT_LIMIT);
        assert_eq!(names(&ranked), vec!["Cinnamon"]);
        // boundary 50 + coverage 3/8 * 25 + position 25
        assert!((ranked[0].score - 84.375).abs() < 1e-9);
    }

    #[test]
    fn subsequence_match_tolerates_skipped_characters() {
        let ranked = search("orn", &items(&["Oregano"]), DEFAULT_LIMIT);
        assert_eq!(names(&ranked), vec!["Oregano"]);
        // o-r-e-g-a-n: 6 characters scanned for 3 matched
        assert!((ranked[0].score - 10.0).abs() < 1e-9);
    }

    #[test]
    fn unmatched_term_excludes_candidate() {
        let ranked = search("xyz", &items(&["Oregano", "Basil"]), DEFAULT_LIMIT);
        assert!(ranked.is_empty());
    }

    #[test]
    fn exact_name_scores_highest() {
        assert_eq!(score("basil", "Basil"), Some(200.0));
        let catalog = items(&["Thai Basil", "Basil", "Basil Seeds"]);
        let ranked = search("basil", &catalog, DEFAULT_LIMIT);
        assert_eq!(names(&ranked), vec!["Basil", "Basil Seeds", "Thai Basil"]);
    }

    #[test]
    fn word_boundaries_beat_interior_matches() {
        let boundary = score("pepper", "Black Pepper").unwrap();
        let interior = score("epper", "Black Pepper").unwrap();
        assert!(boundary > interior);

        let after_comma = score("black", "pepper,black").unwrap();
        let mid_word = score("lack", "pepper,black").unwrap();
        assert!(after_comma - mid_word > BOUNDARY_BONUS - 5.0);
    }

    #[test]
    fn substring_beats_subsequence() {
        let ranked = search("cum", &items(&["Cubeb Mix", "Cumin"]), DEFAULT_LIMIT);
        assert_eq!(names(&ranked), vec!["Cumin", "Cubeb Mix"]);
    }

    #[test]
    fn every_term_must_match() {
        let catalog = items(&["Smoked Paprika", "Sweet Paprika", "Smoked Salt"]);
        let ranked = search("smok pap", &catalog, DEFAULT_LIMIT);
        assert_eq!(names(&ranked), vec!["Smoked Paprika"]);

        let ranked = search("PAPRIKA", &catalog, DEFAULT_LIMIT);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn results_are_capped() {
        let catalog = items(&["Salt 1", "Salt 2", "Salt 3", "Salt 4"]);
        assert_eq!(search("salt", &catalog, 2).len(), 2);
        assert!(search("salt", &catalog, 0).is_empty());
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = items(&["Sage", "Sumac", "Salt"]);
        let ranked = search("s", &catalog, DEFAULT_LIMIT);
        // "s" covers 1/4 of Sage and Salt but 1/5 of Sumac.
        assert_eq!(names(&ranked), vec!["Sage", "Salt", "Sumac"]);
    }

    #[test]
    fn ranked_item_serializes_flat() {
        let ranked = search("cin", &[CatalogItem::new("Cinnamon").with_category("Spices")], 1);
        let json = serde_json::to_value(&ranked[0]).unwrap();
        assert_eq!(json["name"], "Cinnamon");
        assert_eq!(json["category"], "Spices");
        assert!(json["score"].as_f64().unwrap() > 0.0);
    }

    proptest! {
        #[test]
        fn search_is_deterministic_and_sorted(
            query in "[a-z ]{0,8}",
            names in prop::collection::vec("[A-Za-z ]{1,16}", 0..30),
        ) {
            let catalog: Vec<CatalogItem> = names.iter().map(|n| CatalogItem::new(n.as_str())).collect();
            let first = search(&query, &catalog, DEFAULT_LIMIT);
            let second = search(&query, &catalog, DEFAULT_LIMIT);

            prop_assert_eq!(&first, &second);
            prop_assert!(first.len() <= DEFAULT_LIMIT);
            for pair in first.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
            for r in &first {
                prop_assert!(r.score > 0.0);
            }
        }
    }
}
