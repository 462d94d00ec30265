use image::{imageops, ImageFormat, RgbImage};
use std::io::Cursor;
use std::path::PathBuf;

use crate::core::Storage;
use crate::utils::error::Result;

/// Swap every channel, turning the white canvas black and the ink white.
pub fn invert(mut image: RgbImage) -> RgbImage {
    imageops::invert(&mut image);
    image
}

pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Invert `image` and store it as PNG under `file_name`.
pub fn finalize<S: Storage>(storage: &S, image: RgbImage, file_name: &str) -> Result<PathBuf> {
    let png = encode_png(&invert(image))?;
    tracing::debug!("Writing {} ({} bytes)", file_name, png.len());
    storage.write_file(file_name, &png)
}
