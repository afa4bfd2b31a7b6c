//! CSV catalog loading into a column-addressable table.
//!
//! The table is loaded once and immutable for the rest of the run. Cell
//! values are kept as their literal text, so numeric-looking entries pass
//! through unchanged rather than failing a typed parse.
use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

/// In-memory tabular dataset with named columns and ordered rows.
#[derive(Debug)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Load a dataset from a delimited file with a header row.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open catalog file {}", path.display()))?;

        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
        let headers = reader
            .headers()
            .context("failed to read catalog header row")?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.context("failed to parse catalog row")?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Look up a column by name, returning cell values in row order.
    ///
    /// Rows shorter than the header (the reader is flexible) contribute an
    /// empty cell. Returns `None` when the column is absent.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.headers.iter().position(|header| header == name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).map(String::as_str).unwrap_or(""))
                .collect(),
        )
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// True when the underlying cause of a load failure is a missing file.
pub fn is_missing_file(err: &anyhow::Error) -> bool {
    err.root_cause()
        .downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}
