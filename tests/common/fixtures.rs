//! Test fixtures and constants.

use std::io::Cursor;

/// The luminance ramp, darkest to lightest
pub const RAMP: &str = "@#$%?*+;:,.!";

/// Encode a uniform grayscale PNG
pub fn png_bytes(width: u32, height: u32, luma: u8) -> Vec<u8> {
    use image::{DynamicImage, GrayImage, Luma};

    let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([luma])));
    encode_png(&img)
}

/// Encode a horizontal gradient PNG, dark on the left, light on the right
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    use image::{DynamicImage, GrayImage, Luma};

    let img = GrayImage::from_fn(width, height, |x, _| {
        Luma([((x * 255) / width.max(1)) as u8])
    });
    encode_png(&DynamicImage::ImageLuma8(img))
}

/// Encode a pseudo-noise PNG that compresses poorly, for body-size tests.
///
/// Uses an integer hash per pixel so neither PNG row filters nor deflate
/// find anything to exploit; the encoded size stays near one byte per pixel.
pub fn noisy_png(width: u32, height: u32) -> Vec<u8> {
    use image::{DynamicImage, GrayImage, Luma};

    let img = GrayImage::from_fn(width, height, |x, y| {
        let n = x
            .wrapping_mul(374_761_393)
            .wrapping_add(y.wrapping_mul(668_265_263));
        let n = (n ^ (n >> 13)).wrapping_mul(1_274_126_177);
        Luma([(n >> 16) as u8])
    });
    encode_png(&DynamicImage::ImageLuma8(img))
}

fn encode_png(img: &image::DynamicImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("Failed to encode PNG fixture");
    buf.into_inner()
}
