//! QR encoding of serial numbers.
//!
//! Symbols use the lowest error-correction level and the smallest version
//! that fits the payload. Each module is drawn as a `BOX_SIZE` pixel square
//! with a `BORDER` module quiet zone around the symbol.

use image::{GrayImage, Luma};
use qrcode::{Color, EcLevel, QrCode, Version};

use crate::utils::error::Result;

/// Pixels per QR module.
pub const BOX_SIZE: u32 = 60;

/// Quiet zone width in modules.
pub const BORDER: u32 = 1;

const DARK: Luma<u8> = Luma([0u8]);
const LIGHT: Luma<u8> = Luma([255u8]);

/// Square grid of QR modules, `true` meaning dark.
#[derive(Debug, Clone)]
pub struct QrMatrix {
    payload: String,
    version: Version,
    width: u32,
    modules: Vec<bool>,
}

impl QrMatrix {
    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Number of modules per side, quiet zone excluded.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Module color at (`x`, `y`), `None` outside the symbol.
    pub fn is_dark(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.width {
            return None;
        }
        self.modules.get((y * self.width + x) as usize).copied()
    }

    /// Side length of the rendered image in pixels.
    pub fn image_size(&self) -> u32 {
        (self.width + 2 * BORDER) * BOX_SIZE
    }

    /// Render black modules on a white background.
    pub fn to_image(&self) -> GrayImage {
        let size = self.image_size();
        let mut img = GrayImage::from_pixel(size, size, LIGHT);

        for y in 0..self.width {
            for x in 0..self.width {
                if self.is_dark(x, y) != Some(true) {
                    continue;
                }
                let left = (x + BORDER) * BOX_SIZE;
                let top = (y + BORDER) * BOX_SIZE;
                for dy in 0..BOX_SIZE {
                    for dx in 0..BOX_SIZE {
                        img.put_pixel(left + dx, top + dy, DARK);
                    }
                }
            }
        }

        img
    }
}

/// Encode `payload` (uppercased) into a QR matrix.
///
/// Long payloads simply grow the symbol version; only data beyond the
/// capacity of version 40 fails.
pub fn encode(payload: &str) -> Result<QrMatrix> {
    let payload = payload.to_uppercase();
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::L)?;

    let modules = code
        .to_colors()
        .into_iter()
        .map(|color| color == Color::Dark)
        .collect();

    tracing::debug!(
        "Encoded '{}' as QR {:?} ({} modules per side)",
        payload,
        code.version(),
        code.width()
    );

    Ok(QrMatrix {
        version: code.version(),
        width: code.width() as u32,
        modules,
        payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_uppercased() {
        let matrix = encode("abc123").unwrap();
        assert_eq!(matrix.payload(), "ABC123");

        let expected = QrCode::with_error_correction_level(b"ABC123", EcLevel::L).unwrap();
        let expected: Vec<bool> = expected
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();
        assert_eq!(matrix.modules, expected);
    }

    #[test]
    fn short_payload_uses_version_one() {
        let matrix = encode("SN-1").unwrap();
        assert_eq!(matrix.version(), Version::Normal(1));
        assert_eq!(matrix.width(), 21);
    }

    #[test]
    fn image_is_square_with_one_module_border() {
        let matrix = encode("abc123").unwrap();
        let img = matrix.to_image();

        assert_eq!(img.width(), img.height());
        assert_eq!(img.width(), (matrix.width() + 2) * BOX_SIZE);

        // Quiet zone stays white; the top-left finder pattern starts right after it.
        assert_eq!(img.get_pixel(0, 0), &LIGHT);
        assert_eq!(img.get_pixel(BOX_SIZE - 1, BOX_SIZE - 1), &LIGHT);
        assert_eq!(img.get_pixel(BOX_SIZE, BOX_SIZE), &DARK);
    }

    #[test]
    fn is_dark_is_bounded_by_the_symbol() {
        let matrix = encode("abc123").unwrap();
        let last = matrix.width() - 1;

        // Finder pattern corners are dark.
        assert_eq!(matrix.is_dark(0, 0), Some(true));
        assert_eq!(matrix.is_dark(last, 0), Some(true));
        assert_eq!(matrix.is_dark(matrix.width(), 0), None);
        assert_eq!(matrix.is_dark(0, matrix.width()), None);
        assert_eq!(matrix.is_dark(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn long_payload_grows_the_version() {
        let payload = "x".repeat(300);
        let matrix = encode(&payload).unwrap();

        assert!(matrix.width() > 21);
        assert_eq!(matrix.payload(), payload.to_uppercase());
    }
}
