//! Predefined analytical questions
//!
//! Maps the dashboard's fixed question menu to canned SQL templates by
//! ordered first-match keyword scanning. Resolution is pure and stateless;
//! execution belongs to the catalog store.

mod rules;

pub use rules::{QuestionRule, QUESTION_CATALOG, RULES};

use crate::table::ResultTable;
use serde::Serialize;

/// Warning shown by the surface when no rule matches
pub const NOT_RECOGNIZED_MESSAGE: &str = "Sorry, I couldn't understand the query";

/// Outcome of a predefined question
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Answer {
    /// Result set of the matched template
    Table(ResultTable),
    /// No rule matched; nothing was executed
    NotRecognized,
}

/// Resolve a question to the first rule whose keywords all appear in it
///
/// Matching is case-insensitive (the question is lower-cased first) and
/// purely literal; there is no scoring or longest-match disambiguation.
pub fn resolve(question: &str) -> Option<&'static QuestionRule> {
    let normalized = question.to_lowercase();
    RULES.iter().find(|rule| rule.matches(&normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_index(rule: &'static QuestionRule) -> usize {
        RULES
            .iter()
            .position(|candidate| std::ptr::eq(candidate, rule))
            .expect("resolved rule must come from the table")
    }

    // ========================================
    // Table Shape
    // ========================================

    #[test]
    fn test_rule_table_shape() {
        assert_eq!(RULES.len(), 18);
        assert_eq!(QUESTION_CATALOG.len(), 20);

        for rule in RULES {
            assert!(!rule.keywords.is_empty());
            assert!(rule.sql.starts_with("SELECT"));
            // Keywords are matched against lower-cased text
            for keyword in rule.keywords {
                assert_eq!(**keyword, keyword.to_lowercase());
            }
        }
    }

    // ========================================
    // First-Match Ordering
    // ========================================

    #[test]
    fn test_approach_count_beats_hazardous_count() {
        // Both rules contain "count"; the approach-count rule wins on order
        let rule = resolve("Count how many times each asteroid has approached Earth").unwrap();
        assert_eq!(rule_index(rule), 0);
        assert_eq!(rule.label, "approach-count-per-asteroid");
    }

    #[test]
    fn test_au_rule_shadows_its_verbose_twin() {
        // Any text containing "closer than 0.05 au" also contains "0.05 au",
        // so the earlier rule always wins and entry 13 is unreachable.
        let rule = resolve("Find asteroids that passed closer than 0.05 AU").unwrap();
        assert_eq!(rule_index(rule), 12);

        let shadowed = &RULES[13];
        assert_eq!(shadowed.keywords, ["closer than 0.05 au"]);
        assert!(RULES[12].matches("closer than 0.05 au"));
    }

    #[test]
    fn test_resolution_is_case_insensitive() {
        let rule = resolve("TOP 10 FASTEST asteroids").unwrap();
        assert_eq!(rule_index(rule), 2);
    }

    #[test]
    fn test_unrelated_text_is_not_recognized() {
        assert!(resolve("what is the weather today").is_none());
        assert!(resolve("").is_none());
    }

    // ========================================
    // Catalog Fidelity
    // ========================================

    #[test]
    fn test_catalog_resolves_exactly_as_published() {
        // Index into RULES for each menu entry, or None where the menu
        // phrasing never contains a trigger phrase. Entry 10 ("per month")
        // is shadowed by the per-asteroid approach-count rule, and entry 15
        // lands on the same 0.05-AU rule as entry 14.
        let expected: [Option<usize>; 20] = [
            Some(0),  // count of approaches per asteroid
            Some(1),  // average velocity
            Some(2),  // top 10 fastest
            Some(3),  // hazardous, more than 3 times
            None,     // "most asteroid approaches" never matches "most approaches"
            Some(5),  // fastest ever
            None,     // "maximum estimated diameter" never matches "largest diameter"
            None,     // "getting nearer over time" never matches "closer over time"
            None,     // closest-approach display question has no trigger
            None,     // "approached Earth with velocity" never matches "approaches velocity"
            Some(0),  // per-month count shadowed by the approach-count rule
            Some(9),  // highest brightness
            None,     // "number of hazardous" never matches "hazardous count"
            None,     // lunar-distance phrasing never matches "moon distance"
            Some(12), // within 0.05 AU
            Some(12), // closer than 0.05 AU, still the earlier rule
            Some(14), // diameter greater than 1 km
            Some(15), // highest miss distance
            None,     // "approach date in the future" never matches "close approach in future"
            Some(17), // relative velocity between
        ];

        for (question, expectation) in QUESTION_CATALOG.iter().zip(expected) {
            let resolved = resolve(question).map(rule_index);
            assert_eq!(resolved, expectation, "question: {question:?}");
        }
    }

    #[test]
    fn test_dead_rule_is_unreachable_from_any_catalog_entry() {
        for question in QUESTION_CATALOG {
            if let Some(rule) = resolve(question) {
                assert_ne!(rule_index(rule), 13);
            }
        }
    }
}
