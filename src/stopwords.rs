//! Stopword set construction: base English list plus catalog fillers.
//!
//! The set is built once per run and treated as an immutable value passed by
//! reference into the filtering step.
use std::collections::HashSet;

/// Base English stopword list.
const BASE_ENGLISH: &[&str] = &[
    // Articles and determiners
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
    "both", "all", "any", "some", "such", "no", "few", "more", "most", "other", "own", "same",
    // Pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom",
    // Verbs
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "would", "should", "could", "ought", "might", "must", "shall",
    "will", "can", "may",
    // Prepositions
    "at", "by", "for", "from", "in", "into", "of", "on", "to", "with", "about", "against",
    "between", "through", "during", "before", "after", "above", "below", "up", "down", "out",
    "off", "over", "under", "again", "further", "then", "once",
    // Conjunctions
    "and", "but", "or", "nor", "so", "yet", "not", "only", "than", "when", "where", "while",
    "if", "because", "as", "until", "although",
    // Other common words
    "here", "there", "too", "very", "just", "also", "now", "how", "why", "well", "don",
    "s", "t",
];

/// Catalog-specific filler terms excluded alongside the base list.
const CATALOG_FILLERS: &[&str] = &[
    "worksheet",
    "worksheets",
    "lesson",
    "lessons",
    "activities",
    "activity",
    "grade",
    "grades",
];

/// Build the combined stopword set for one run.
pub fn stopword_set() -> HashSet<&'static str> {
    BASE_ENGLISH
        .iter()
        .chain(CATALOG_FILLERS.iter())
        .copied()
        .collect()
}
