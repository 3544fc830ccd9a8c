//! Query classification by case-insensitive substring match.

use braid_core::models::QueryClass;

/// Classify a query against the two keyword sets.
///
/// Priority: lexical > conceptual > general. A query like "why does it crash"
/// hits both sets and is classified lexical. Keywords must already be
/// lower-cased.
pub fn classify(query: &str, lexical: &[String], conceptual: &[String]) -> QueryClass {
    let query_lower = query.to_lowercase();
    let hit = |keywords: &[String]| keywords.iter().any(|kw| query_lower.contains(kw.as_str()));

    if hit(lexical) {
        QueryClass::Lexical
    } else if hit(conceptual) {
        QueryClass::Conceptual
    } else {
        QueryClass::General
    }
}
