//! Decoding of the source image.
//!
//! The whole file is read into memory and handed to `image`, which guesses
//! the format from the content. JPEG is the expected input but PNG, BMP and
//! GIF decode the same way.

use std::path::Path;

use image::DynamicImage;
use log::debug;

use crate::error::ConvertError;

/// Decodes an in-memory encoded image (PNG/JPEG/BMP/GIF).
pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage, image::ImageError> {
    image::load_from_memory(bytes)
}

/// Reads and decodes the image at `path`.
///
/// A missing or unreadable file is reported as `ConvertError::ReadInput`,
/// content the decoder rejects as `ConvertError::Decode`.
pub fn decode_file(path: &Path) -> Result<DynamicImage, ConvertError> {
    let bytes = std::fs::read(path).map_err(|source| ConvertError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    let img = decode_bytes(&bytes).map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "decoded '{}': {}x{} {:?}",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}
