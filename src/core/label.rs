//! Label composition: QR bitmap on top, serial number underneath.

use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use image::buffer::ConvertBuffer;
use image::{imageops, GrayImage, Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use std::path::Path;

use crate::utils::error::{LabelError, Result};

/// Font size of the label, in pixels per em.
pub const FONT_SIZE: f32 = 150.0;

/// Space added below the QR image for the label.
pub const LABEL_PADDING: u32 = 180;

/// Height of the band the label is centered in, directly below the QR image.
pub const LABEL_BAND: u32 = 100;

/// Canvases are never shorter than this.
pub const MIN_CANVAS_HEIGHT: u32 = 720;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Bounding box of rendered text measured from the top-left drawing origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

/// Scalable font loaded once per run.
pub struct LabelFont {
    font: FontVec,
    scale: PxScale,
}

impl LabelFont {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| LabelError::FontError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let font = FontVec::try_from_vec(data).map_err(|e| LabelError::FontError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!("Loaded font {}", path.display());
        Ok(Self::new(font))
    }

    pub fn new(font: FontVec) -> Self {
        // ab_glyph scales by ascent-to-descent height, not by em size.
        let scale = match font.units_per_em() {
            Some(units_per_em) => PxScale::from(FONT_SIZE * font.height_unscaled() / units_per_em),
            None => PxScale::from(FONT_SIZE),
        };
        Self { font, scale }
    }

    /// Measure `text` as it would be drawn at the origin.
    ///
    /// Glyphs sit on a baseline one ascent below the origin, so `height`
    /// reaches down to the lowest inked pixel and `width` covers both the
    /// pen advance and any overhanging ink.
    pub fn measure(&self, text: &str) -> TextExtent {
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = 0.0f32;
        let mut right = 0.0f32;
        let mut bottom = 0.0f32;
        let mut prev: Option<GlyphId> = None;

        for ch in text.chars() {
            let glyph_id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, glyph_id);
            }
            let glyph = glyph_id.with_scale_and_position(self.scale, point(caret, scaled.ascent()));
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                right = right.max(bounds.max.x);
                bottom = bottom.max(bounds.max.y);
            }
            caret += scaled.h_advance(glyph_id);
            prev = Some(glyph_id);
        }

        TextExtent {
            width: right.max(caret).ceil() as u32,
            height: bottom.ceil() as u32,
        }
    }
}

/// Height of the canvas for a QR image `qr_height` pixels tall.
pub fn canvas_height(qr_height: u32) -> u32 {
    (qr_height + LABEL_PADDING).max(MIN_CANVAS_HEIGHT)
}

/// Paste `qr` at the origin of a white canvas and draw `text`, uppercased,
/// centered in the band below it.
pub fn compose(qr: &GrayImage, text: &str, font: &LabelFont) -> RgbImage {
    let (width, qr_height) = qr.dimensions();
    let mut canvas = RgbImage::from_pixel(width, canvas_height(qr_height), WHITE);

    let qr_rgb: RgbImage = qr.convert();
    imageops::replace(&mut canvas, &qr_rgb, 0, 0);

    let label = text.to_uppercase();
    let extent = font.measure(&label);
    let x = ((width as f32 - extent.width as f32) / 2.0).floor() as i32;
    let y = (qr_height as f32 + (LABEL_BAND as f32 - extent.height as f32) / 2.0).floor() as i32;

    tracing::debug!(
        "Drawing label '{}' ({}x{}) at ({}, {})",
        label,
        extent.width,
        extent.height,
        x,
        y
    );
    draw_text_mut(&mut canvas, BLACK, x, y, font.scale, &font.font, &label);

    canvas
}
