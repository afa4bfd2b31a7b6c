//! Render orchestration: normalized text in, JPEG artifact out.
//!
//! Failures inside rendering never propagate; they become a diagnostic and a
//! `Skipped` outcome so the process still ends normally.
use crate::cloud;
use crate::config::RenderConfig;
use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// Distinguishable result of a render attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The artifact was written to this path.
    Written(PathBuf),
    /// Nothing was produced: empty text, or a handled render failure.
    Skipped { reason: String },
}

/// Render the normalized text and persist the image, or skip cleanly.
///
/// Empty text is a recognized "no data" outcome, not a failure; the output
/// path is neither created nor overwritten in that case.
pub fn save_word_cloud(text: &str, config: &RenderConfig) -> RenderOutcome {
    if text.is_empty() {
        tracing::warn!("no text available for word cloud; skipping render");
        return RenderOutcome::Skipped {
            reason: "no text available".to_string(),
        };
    }

    match try_render(text, config) {
        Ok(path) => RenderOutcome::Written(path),
        Err(err) => {
            tracing::error!(error = %err, "failed to render word cloud");
            RenderOutcome::Skipped {
                reason: err.to_string(),
            }
        }
    }
}

fn try_render(text: &str, config: &RenderConfig) -> Result<PathBuf> {
    let font = cloud::load_font(config.font.as_deref())?;

    let placed = cloud::layout_words(text, &config.cloud, &font);
    if placed.is_empty() {
        return Err(anyhow!("no words could be placed on the canvas"));
    }

    let cloud_image = cloud::render_cloud(&placed, &config.cloud, &font);
    let page = cloud::compose_page(&cloud_image, &config.page, config.cloud.background, &font);
    let cropped = cloud::crop_to_content(&page, config.cloud.background);
    cloud::export_jpeg(&cropped, &config.output)?;

    Ok(config.output.clone())
}
