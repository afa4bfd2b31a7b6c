//! Text normalization for frequency-based word rendering.
//!
//! Turns the catalog's free-text column into a single lowercase string of
//! alphabetic tokens with stopwords removed. Deterministic in the source row
//! order; no failure escapes this module.
use crate::dataset::Dataset;
use anyhow::Result;
use regex::Regex;
use std::collections::HashSet;

/// Produce the cleaned text for the named column, or an empty string on any
/// handled failure (missing column, processing error). A diagnostic is
/// emitted on every empty-returning path.
pub fn normalized_text(dataset: &Dataset, column: &str, stopwords: &HashSet<&str>) -> String {
    match try_normalize(dataset, column, stopwords) {
        Ok(Some(text)) => text,
        Ok(None) => {
            tracing::warn!(column, "text column missing from the catalog");
            String::new()
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to normalize catalog text");
            String::new()
        }
    }
}

fn try_normalize(
    dataset: &Dataset,
    column: &str,
    stopwords: &HashSet<&str>,
) -> Result<Option<String>> {
    let Some(values) = dataset.column(column) else {
        return Ok(None);
    };

    // Join cells in row order, then strip everything outside [a-z] and
    // whitespace. Characters are deleted, not substituted, so accented
    // letters and digits vanish rather than mapping to ASCII lookalikes.
    let joined = values.join(" ").to_lowercase();
    let strip = Regex::new(r"[^a-z\s]")?;
    let cleaned = strip.replace_all(&joined, "");

    let kept: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|token| !stopwords.contains(*token))
        .collect();

    Ok(Some(kept.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwords::stopword_set;
    use std::fs;
    use tempfile::tempdir;

    fn dataset_from(contents: &str) -> Dataset {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        fs::write(&path, contents).unwrap();
        Dataset::from_csv_path(&path).unwrap()
    }

    #[test]
    fn catalog_titles_reduce_to_keywords() {
        let dataset = dataset_from("NAME\nMath Worksheet Grade 3\nFun Activity!!\n");
        let text = normalized_text(&dataset, "NAME", &stopword_set());

        assert_eq!(text, "math fun");
    }

    #[test]
    fn missing_column_yields_empty_string() {
        let dataset = dataset_from("TITLE\nMath Worksheet\n");
        let text = normalized_text(&dataset, "NAME", &stopword_set());

        assert_eq!(text, "");
    }

    #[test]
    fn output_is_lowercase_ascii_with_single_spaces() {
        let dataset = dataset_from(
            "NAME\nDeluxe CRAYON Set (24-pack)\n\u{00c9}clair Baking Kit #7\nScience: Volcano Model!\n",
        );
        let text = normalized_text(&dataset, "NAME", &stopword_set());

        assert!(text
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == ' '));
        assert!(!text.contains("  "));
    }

    #[test]
    fn numeric_cells_do_not_error() {
        let dataset = dataset_from("NAME\n12345\nRocket Kit 9000\n");
        let text = normalized_text(&dataset, "NAME", &stopword_set());

        assert_eq!(text, "rocket kit");
    }

    #[test]
    fn stopword_removal_is_idempotent() {
        let dataset = dataset_from("NAME\nThe Great Math Adventure for Kids\n");
        let stopwords = stopword_set();
        let first = normalized_text(&dataset, "NAME", &stopwords);

        let second: Vec<&str> = first
            .split_whitespace()
            .filter(|token| !stopwords.contains(*token))
            .collect();
        assert_eq!(second.join(" "), first);
    }

    #[test]
    fn row_order_is_preserved() {
        let dataset = dataset_from("NAME\nzebra\napple\nmango\n");
        let text = normalized_text(&dataset, "NAME", &stopword_set());

        assert_eq!(text, "zebra apple mango");
    }
}
