use image::GrayImage;

/// Linearizes a greyscale image row-major: all of row 0 left to right,
/// then row 1, and so on.
pub fn flatten(gray: &GrayImage) -> Vec<u8> {
    gray.rows().flat_map(|row| row.map(|p| p.0[0])).collect()
}
