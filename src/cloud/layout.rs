//! Frequency counting and collision-free word placement.
//!
//! Words are ranked by frequency, sized proportionally, and walked outward
//! from the canvas center along an Archimedean spiral until they fit without
//! overlapping anything already placed. All randomness (spiral start angle,
//! palette choice) comes from a single seeded generator, so a given text and
//! configuration always produce the same layout.
use crate::config::CloudConfig;
use ab_glyph::{FontVec, PxScale};
use imageproc::drawing::text_size;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Angular step of the spiral walk, in radians.
const SPIRAL_STEP: f32 = 0.1;
/// Radial growth per radian, in pixels.
const SPIRAL_GROWTH: f32 = 2.0;
/// Gap kept between placed words, in pixels.
const WORD_PADDING: i32 = 2;

/// A word with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// A word with its final position, size, and palette slot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    /// Top-left corner of the glyph box on the cloud canvas.
    pub x: i32,
    pub y: i32,
    /// Font size in pixels.
    pub size: f32,
    pub color_index: usize,
}

#[derive(Debug, Clone, Copy)]
struct Rect {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

impl Rect {
    fn intersects(&self, other: &Rect) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }
}

/// Count token frequencies, ranked by count descending with alphabetical
/// tie-breaks so the ordering is deterministic.
pub fn count_frequencies(text: &str) -> Vec<WordCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in text.split_whitespace() {
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut ranked: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    ranked
}

/// Lay out the most frequent words on the cloud canvas.
///
/// Words that cannot fit anywhere (or whose glyph box alone exceeds the
/// canvas) are dropped rather than forced.
pub fn layout_words(text: &str, config: &CloudConfig, font: &FontVec) -> Vec<PlacedWord> {
    let ranked = count_frequencies(text);
    let Some(top) = ranked.first() else {
        return Vec::new();
    };
    let max_count = top.count as f32;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut occupied: Vec<Rect> = Vec::new();
    let mut placed = Vec::new();

    for entry in ranked.iter().take(config.max_words) {
        let ratio = entry.count as f32 / max_count;
        let size = (config.max_font_size * ratio).max(config.min_font_size);
        let (width, height) = text_size(PxScale::from(size), font, &entry.word);

        // Draw from the generator before the fit check so skipped words do
        // not shift the choices made for later ones.
        let color_index = rng.gen_range(0..config.palette.len());
        let start_angle = rng.gen_range(0.0..std::f32::consts::TAU);

        if width == 0 || width > config.width || height > config.height {
            tracing::debug!(word = %entry.word, "word does not fit the canvas at its size");
            continue;
        }

        match find_spot(width, height, config, &occupied, start_angle) {
            Some((x, y)) => {
                occupied.push(Rect {
                    x0: x - WORD_PADDING,
                    y0: y - WORD_PADDING,
                    x1: x + width as i32 + WORD_PADDING,
                    y1: y + height as i32 + WORD_PADDING,
                });
                placed.push(PlacedWord {
                    word: entry.word.clone(),
                    x,
                    y,
                    size,
                    color_index,
                });
            }
            None => {
                tracing::debug!(word = %entry.word, "no free spot found; dropping word");
            }
        }
    }

    placed
}

fn find_spot(
    width: u32,
    height: u32,
    config: &CloudConfig,
    occupied: &[Rect],
    start_angle: f32,
) -> Option<(i32, i32)> {
    let center_x = config.width as f32 / 2.0;
    let center_y = config.height as f32 / 2.0;
    let max_radius = (center_x * center_x + center_y * center_y).sqrt();

    let mut theta = 0.0f32;
    loop {
        let radius = SPIRAL_GROWTH * theta;
        if radius > max_radius {
            return None;
        }

        let angle = start_angle + theta;
        let x = (center_x + radius * angle.cos() - width as f32 / 2.0).round() as i32;
        let y = (center_y + radius * angle.sin() - height as f32 / 2.0).round() as i32;
        theta += SPIRAL_STEP;

        if x < 0
            || y < 0
            || x + width as i32 > config.width as i32
            || y + height as i32 > config.height as i32
        {
            continue;
        }

        let candidate = Rect {
            x0: x,
            y0: y,
            x1: x + width as i32,
            y1: y + height as i32,
        };
        if !occupied.iter().any(|rect| rect.intersects(&candidate)) {
            return Some((x, y));
        }
    }
}
