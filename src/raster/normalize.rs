//! Greyscale conversion and resampling to the fixture resolution.
//!
//! Luma uses ITU-R BT.601 weights in 16-bit fixed point with
//! round-half-up, so colour sources match what common imaging toolchains
//! produce for an 8-bit "L" conversion:
//!
//! ```text
//! L = (R * 19595 + G * 38470 + B * 7471 + 0x8000) >> 16
//! ```
//!
//! Resampling uses Catmull-Rom (bicubic). The aspect ratio is not kept.
//!
//! 16-bit single-channel sources are scaled down to 8 bits (value / 257)
//! rather than clipped at 255 the way some imaging libraries do it.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Luma, Rgb};
use log::debug;

/// Fixture width in pixels.
pub const TARGET_WIDTH: u32 = 96;
/// Fixture height in pixels.
pub const TARGET_HEIGHT: u32 = 96;
/// Number of values in a flattened fixture.
pub const TARGET_LEN: usize = (TARGET_WIDTH * TARGET_HEIGHT) as usize;

/// Filter used by [`resize_to_target`].
pub const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// BT.601 luma of one 8-bit RGB pixel.
pub fn bt601_luma(px: Rgb<u8>) -> u8 {
    let [r, g, b] = px.0;
    let acc = r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000;
    (acc >> 16) as u8
}

/// Converts any decoded image to single-channel 8-bit greyscale, keeping
/// its dimensions. Alpha is dropped.
pub fn to_greyscale(img: &DynamicImage) -> GrayImage {
    match img {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        // Already single-channel: only the depth and alpha need dropping.
        DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => img.to_luma8(),
        _ => {
            let rgb = img.to_rgb8();
            GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
                Luma([bt601_luma(*rgb.get_pixel(x, y))])
            })
        }
    }
}

/// Resamples a greyscale image to exactly `TARGET_WIDTH × TARGET_HEIGHT`.
pub fn resize_to_target(gray: &GrayImage) -> GrayImage {
    debug!(
        "resizing {}x{} -> {}x{} ({:?})",
        gray.width(),
        gray.height(),
        TARGET_WIDTH,
        TARGET_HEIGHT,
        RESIZE_FILTER
    );
    imageops::resize(gray, TARGET_WIDTH, TARGET_HEIGHT, RESIZE_FILTER)
}

/// Greyscale first, then resize.
pub fn normalize(img: &DynamicImage) -> GrayImage {
    resize_to_target(&to_greyscale(img))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{LumaA, Rgba, RgbaImage, RgbImage};

    #[test]
    fn bt601_weights_for_primaries() {
        assert_eq!(bt601_luma(Rgb([255, 0, 0])), 76);
        assert_eq!(bt601_luma(Rgb([0, 255, 0])), 150);
        assert_eq!(bt601_luma(Rgb([0, 0, 255])), 29);
        assert_eq!(bt601_luma(Rgb([255, 255, 255])), 255);
        assert_eq!(bt601_luma(Rgb([0, 0, 0])), 0);
    }

    #[test]
    fn neutral_grey_maps_to_itself() {
        for v in [1u8, 64, 127, 128, 200, 254] {
            assert_eq!(bt601_luma(Rgb([v, v, v])), v);
        }
    }

    #[test]
    fn greyscale_keeps_dimensions() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(13, 5, Rgb([255, 0, 0])));
        let gray = to_greyscale(&img);
        assert_eq!(gray.dimensions(), (13, 5));
        assert!(gray.pixels().all(|p| p.0[0] == 76));
    }

    #[test]
    fn greyscale_ignores_alpha() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([0, 255, 0, 0])));
        assert!(to_greyscale(&img).pixels().all(|p| p.0[0] == 150));

        let la = DynamicImage::ImageLumaA8(image::ImageBuffer::from_pixel(4, 4, LumaA([90u8, 3])));
        assert!(to_greyscale(&la).pixels().all(|p| p.0[0] == 90));
    }

    #[test]
    fn resize_hits_target_from_any_shape() {
        for (w, h) in [(1, 1), (10, 10), (400, 300), (17, 250)] {
            let gray = GrayImage::from_pixel(w, h, Luma([7]));
            let out = resize_to_target(&gray);
            assert_eq!(out.dimensions(), (TARGET_WIDTH, TARGET_HEIGHT));
        }
    }

    #[test]
    fn uniform_image_stays_uniform() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([255, 255, 255])));
        let out = normalize(&img);
        assert_eq!(out.dimensions(), (96, 96));
        assert!(out.pixels().all(|p| p.0[0] == 255));

        let dark = GrayImage::from_pixel(300, 200, Luma([40]));
        assert!(resize_to_target(&dark).pixels().all(|p| p.0[0] == 40));
    }

    /// Four columns: two at `left`, two at `right`, four rows tall.
    fn step_edge(left: u8, right: u8) -> GrayImage {
        GrayImage::from_fn(4, 4, |x, _| Luma([if x < 2 { left } else { right }]))
    }

    #[test]
    fn upscaled_step_edge_rings_past_both_levels() {
        let out = resize_to_target(&step_edge(50, 200));
        let row: Vec<u8> = out.rows().nth(48).unwrap().map(|p| p.0[0]).collect();

        // bicubic undershoots beside the dark side and overshoots beside the bright side
        assert!(*row.iter().min().unwrap() < 50, "row: {:?}", row);
        assert!(*row.iter().max().unwrap() > 200, "row: {:?}", row);
        assert_eq!(row[0], 50);
        assert_eq!(row[95], 200);
    }

    #[test]
    fn resize_differs_from_nearest_and_triangle() {
        let src = step_edge(50, 200);
        let ours = resize_to_target(&src);
        for other in [FilterType::Nearest, FilterType::Triangle] {
            let theirs = imageops::resize(&src, TARGET_WIDTH, TARGET_HEIGHT, other);
            assert!(theirs.pixels().all(|p| (50..=200).contains(&p.0[0])));
            assert_ne!(ours, theirs, "{:?}", other);
        }
    }

    #[test]
    fn greyscale_happens_before_resize() {
        // pure red on the left, pure green on the right
        let rgb = RgbImage::from_fn(4, 4, |x, _| {
            if x < 2 { Rgb([255, 0, 0]) } else { Rgb([0, 255, 0]) }
        });
        let img = DynamicImage::ImageRgb8(rgb.clone());

        let out = normalize(&img);
        assert_eq!(out, resize_to_target(&to_greyscale(&img)));

        // Luma of the red/green step is 76 -> 150. Resampling the grey image
        // rings outside that range; resampling RGB clamps each channel first,
        // so its luma never leaves [76, 150].
        let min = out.pixels().map(|p| p.0[0]).min().unwrap();
        let max = out.pixels().map(|p| p.0[0]).max().unwrap();
        assert!(min < 76 && max > 150, "min {} max {}", min, max);

        let rgb_first = to_greyscale(&DynamicImage::ImageRgb8(imageops::resize(
            &rgb,
            TARGET_WIDTH,
            TARGET_HEIGHT,
            RESIZE_FILTER,
        )));
        assert!(rgb_first.pixels().all(|p| (76..=150).contains(&p.0[0])));
        assert_ne!(out, rgb_first);
    }

    #[test]
    fn sixteen_bit_grey_is_scaled_not_clipped() {
        let deep = |v: u16| {
            DynamicImage::ImageLuma16(image::ImageBuffer::from_pixel(2, 2, Luma([v])))
        };
        assert!(to_greyscale(&deep(65535)).pixels().all(|p| p.0[0] == 255));
        assert!(to_greyscale(&deep(257 * 100)).pixels().all(|p| p.0[0] == 100));
    }

    #[test]
    fn target_len_matches_dimensions() {
        assert_eq!(TARGET_LEN, 9216);
    }
}
