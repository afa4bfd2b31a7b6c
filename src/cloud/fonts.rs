//! Font discovery and loading for glyph rendering.
use ab_glyph::FontVec;
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

/// Common system font locations checked when no override is given.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
];

/// First available system font, if any.
pub fn find_system_font() -> Option<PathBuf> {
    SYSTEM_FONTS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

/// Load the font at `explicit`, or fall back to a discovered system font.
pub fn load_font(explicit: Option<&Path>) -> Result<FontVec> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => find_system_font()
            .ok_or_else(|| anyhow!("no usable TrueType font found; pass --font"))?,
    };

    let bytes = std::fs::read(&path)
        .with_context(|| format!("failed to read font {}", path.display()))?;
    FontVec::try_from_vec(bytes)
        .with_context(|| format!("failed to parse font {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_missing_font_is_an_error() {
        let err = load_font(Some(Path::new("/nonexistent/font.ttf"))).unwrap_err();

        assert!(err.to_string().contains("/nonexistent/font.ttf"));
    }

    #[test]
    fn discovered_font_parses() {
        // Skip when the host has none of the known fonts installed.
        if find_system_font().is_none() {
            return;
        }

        assert!(load_font(None).is_ok());
    }
}
