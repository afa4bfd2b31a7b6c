//! Fixed visual configuration for layout and page composition.
//!
//! The defaults reproduce the canonical catalog render: an 800x600 cloud on a
//! black background with a green palette, composed onto an 11x8.5 page at
//! 300 DPI with a white caption. Both components take these structs by
//! reference so tests can substitute arbitrary parameters.
use image::Rgb;
use std::path::PathBuf;

/// Common color definitions
pub mod colors {
    use image::Rgb;

    pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
}

/// Green-toned palette sampled light to dark, mirroring a sequential
/// "Greens" colormap.
pub const GREENS: [Rgb<u8>; 8] = [
    Rgb([199, 233, 192]),
    Rgb([161, 217, 155]),
    Rgb([116, 196, 118]),
    Rgb([65, 171, 93]),
    Rgb([35, 139, 69]),
    Rgb([0, 109, 44]),
    Rgb([0, 90, 50]),
    Rgb([0, 68, 27]),
];

/// Cloud canvas and word sizing parameters.
#[derive(Debug, Clone)]
pub struct CloudConfig {
    pub width: u32,
    pub height: u32,
    pub background: Rgb<u8>,
    pub palette: &'static [Rgb<u8>],
    /// Maximum number of distinct words drawn.
    pub max_words: usize,
    /// Font size assigned to the most frequent word, in pixels.
    pub max_font_size: f32,
    /// Floor for the least frequent words so they stay legible.
    pub min_font_size: f32,
    /// Seed for the layout spiral and palette choices.
    pub seed: u64,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: colors::BLACK,
            palette: &GREENS,
            max_words: 200,
            max_font_size: 100.0,
            min_font_size: 4.0,
            seed: 42,
        }
    }
}

/// Page composition and export parameters.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Physical page size in inches.
    pub width_units: f32,
    pub height_units: f32,
    /// Export resolution; pixel dimensions are units * dpi.
    pub dpi: u32,
    pub caption: String,
    /// Caption size in points (72 per unit), converted at export resolution.
    pub caption_size: f32,
    pub caption_color: Rgb<u8>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width_units: 11.0,
            height_units: 8.5,
            dpi: 300,
            caption: "This word cloud highlights the top keywords from product names."
                .to_string(),
            caption_size: 12.0,
            caption_color: colors::WHITE,
        }
    }
}

/// Everything the renderer driver needs for one run.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub cloud: CloudConfig,
    pub page: PageConfig,
    /// Output path; overwritten if a file already exists there.
    pub output: PathBuf,
    /// Explicit font override; otherwise a system font is located.
    pub font: Option<PathBuf>,
}

impl RenderConfig {
    pub fn new(output: PathBuf, font: Option<PathBuf>) -> Self {
        Self {
            cloud: CloudConfig::default(),
            page: PageConfig::default(),
            output,
            font,
        }
    }
}
