//! Single-run word cloud generator for a product catalog CSV.
//!
//! Loads the catalog once, normalizes its free-text column, and renders a
//! word cloud JPEG. Every handled failure is converted into a diagnostic
//! plus a benign "nothing produced" outcome; the process exits 0 on all of
//! them.
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod cloud;
mod config;
mod dataset;
mod driver;
mod normalize;
mod report;
mod stopwords;

use cli::Args;
use config::RenderConfig;
use dataset::Dataset;
use driver::RenderOutcome;
use report::RunReport;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let run = execute(&args);

    match run.outcome {
        "written" => {
            if let Some(output) = &run.output {
                println!("Word cloud saved as: {output}");
            }
            println!("Word cloud generation complete.");
        }
        _ => println!("Word cloud was not generated."),
    }

    if let Some(path) = &args.report {
        report::write_report(path, &run)?;
        println!("Wrote run report to {}", path.display());
    }

    Ok(())
}

fn execute(args: &Args) -> RunReport {
    let dataset = match Dataset::from_csv_path(&args.input) {
        Ok(dataset) => dataset,
        Err(err) => {
            let reason = if dataset::is_missing_file(&err) {
                tracing::error!(path = %args.input.display(), "catalog file not found");
                format!("catalog file '{}' not found", args.input.display())
            } else {
                tracing::error!(error = %err, "failed to load catalog");
                err.to_string()
            };
            return RunReport::skipped(reason, 0);
        }
    };
    tracing::debug!(rows = dataset.row_count(), "loaded catalog");

    let stopwords = stopwords::stopword_set();
    let text = normalize::normalized_text(&dataset, &args.column, &stopwords);
    let distinct_words = cloud::count_frequencies(&text).len();

    let config = RenderConfig::new(args.output.clone(), args.font.clone());
    match driver::save_word_cloud(&text, &config) {
        RenderOutcome::Written(path) => {
            RunReport::written(path.display().to_string(), distinct_words)
        }
        RenderOutcome::Skipped { reason } => RunReport::skipped(reason, distinct_words),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
