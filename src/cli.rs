//! CLI argument parsing for the word cloud run.
//!
//! The CLI is intentionally thin: every flag has a fixed default matching the
//! canonical single-shot invocation, so `ccloud` with no arguments reproduces
//! the standard catalog run.
use clap::Parser;
use std::path::PathBuf;

/// Root CLI entrypoint for the word cloud generator.
#[derive(Parser, Debug)]
#[command(
    name = "ccloud",
    version,
    about = "Render a word cloud from the free-text column of a product catalog CSV",
    after_help = "Examples:\n  ccloud\n  ccloud --input catalog.csv --output cloud.jpg\n  ccloud --column TITLE --report run.json"
)]
pub struct Args {
    /// CSV file containing the product catalog
    #[arg(long, value_name = "PATH", default_value = "product-stats.csv")]
    pub input: PathBuf,

    /// Output path for the rendered JPEG
    #[arg(long, value_name = "PATH", default_value = "WORD-CLOUD.jpg")]
    pub output: PathBuf,

    /// Name of the free-text column to visualize
    #[arg(long, value_name = "COL", default_value = "NAME")]
    pub column: String,

    /// TrueType font file used for glyph rendering (defaults to a system font)
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Write a machine-readable JSON run report
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Emit debug-level diagnostics
    #[arg(long)]
    pub verbose: bool,
}
