//! Word cloud layout and rasterization.
mod fonts;
mod layout;
mod raster;

pub use fonts::{find_system_font, load_font};
pub use layout::{count_frequencies, layout_words, PlacedWord, WordCount};
pub use raster::{compose_page, crop_to_content, export_jpeg, render_cloud};
