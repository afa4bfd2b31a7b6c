//! Canvas composition, captioning, and JPEG export.
use crate::cloud::layout::PlacedWord;
use crate::config::{CloudConfig, PageConfig};
use ab_glyph::{FontVec, PxScale};
use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::path::Path;

/// Padding kept around the content bounding box when cropping, in pixels.
const CROP_PADDING: u32 = 12;
/// Points per physical page unit.
const POINTS_PER_UNIT: f32 = 72.0;

/// Draw the placed words onto the cloud canvas.
pub fn render_cloud(words: &[PlacedWord], config: &CloudConfig, font: &FontVec) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(config.width, config.height, config.background);
    for word in words {
        let color = config.palette[word.color_index % config.palette.len()];
        draw_text_mut(
            &mut canvas,
            color,
            word.x,
            word.y,
            PxScale::from(word.size),
            font,
            &word.word,
        );
    }
    canvas
}

/// Scale the cloud onto the page canvas and overlay the caption.
///
/// The cloud is upscaled with a triangle (bilinear) filter to fit the page
/// above the caption band, preserving its aspect ratio and centering it.
pub fn compose_page(
    cloud: &RgbImage,
    page: &PageConfig,
    background: Rgb<u8>,
    font: &FontVec,
) -> RgbImage {
    let page_width = (page.width_units * page.dpi as f32).round() as u32;
    let page_height = (page.height_units * page.dpi as f32).round() as u32;
    let caption_px = page.caption_size * page.dpi as f32 / POINTS_PER_UNIT;
    let caption_band = (caption_px * 3.0).round() as u32;

    let mut canvas = RgbImage::from_pixel(page_width, page_height, background);

    let avail_height = page_height.saturating_sub(caption_band).max(1);
    let scale = (page_width as f32 / cloud.width() as f32)
        .min(avail_height as f32 / cloud.height() as f32);
    let target_width = ((cloud.width() as f32 * scale) as u32).max(1);
    let target_height = ((cloud.height() as f32 * scale) as u32).max(1);

    let resized = imageops::resize(cloud, target_width, target_height, FilterType::Triangle);
    let offset_x = (page_width - target_width) / 2;
    let offset_y = (avail_height - target_height) / 2;
    imageops::overlay(&mut canvas, &resized, offset_x as i64, offset_y as i64);

    let caption_scale = PxScale::from(caption_px);
    let (text_width, text_height) = text_size(caption_scale, font, &page.caption);
    let caption_x = page_width.saturating_sub(text_width) / 2;
    let caption_y = page_height
        .saturating_sub(caption_band / 2)
        .saturating_sub(text_height / 2);
    draw_text_mut(
        &mut canvas,
        page.caption_color,
        caption_x as i32,
        caption_y as i32,
        caption_scale,
        font,
        &page.caption,
    );

    canvas
}

/// Crop to the bounding box of non-background pixels, keeping a fixed
/// padding of background around it. Returns the image unchanged when it is
/// entirely background.
pub fn crop_to_content(image: &RgbImage, background: Rgb<u8>) -> RgbImage {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;

    for (x, y, pixel) in image.enumerate_pixels() {
        if *pixel != background {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    if min_x > max_x {
        return image.clone();
    }

    let x0 = min_x.saturating_sub(CROP_PADDING);
    let y0 = min_y.saturating_sub(CROP_PADDING);
    let x1 = (max_x + CROP_PADDING + 1).min(image.width());
    let y1 = (max_y + CROP_PADDING + 1).min(image.height());

    imageops::crop_imm(image, x0, y0, x1 - x0, y1 - y0).to_image()
}

/// Export the image as JPEG at the given path, overwriting any prior file.
pub fn export_jpeg(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Jpeg)
        .with_context(|| format!("failed to write image {}", path.display()))
}
