//! Machine-readable run report.
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// Summary of one run, written as pretty JSON when `--report` is given.
#[derive(Serialize, Debug)]
pub struct RunReport {
    /// "written" or "skipped".
    pub outcome: &'static str,
    /// Output path when an artifact was produced.
    pub output: Option<String>,
    /// Distinct token count of the normalized text.
    pub distinct_words: usize,
    /// Why nothing was produced, when skipped.
    pub reason: Option<String>,
}

impl RunReport {
    pub fn written(output: String, distinct_words: usize) -> Self {
        Self {
            outcome: "written",
            output: Some(output),
            distinct_words,
            reason: None,
        }
    }

    pub fn skipped(reason: String, distinct_words: usize) -> Self {
        Self {
            outcome: "skipped",
            output: None,
            distinct_words,
            reason: Some(reason),
        }
    }
}

pub fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}
