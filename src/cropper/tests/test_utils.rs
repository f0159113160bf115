use std::io::Cursor;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Solid RGB image
pub fn solid_rgb(width: u32, height: u32, color: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, color)
}

/// White image with the given pixels painted black
pub fn white_with_black(width: u32, height: u32, points: &[(u32, u32)]) -> RgbImage {
    let mut image = solid_rgb(width, height, WHITE);
    for &(x, y) in points {
        image.put_pixel(x, y, BLACK);
    }
    image
}

/// Encode an image as PNG bytes
pub fn png_bytes(image: &DynamicImage) -> Vec<u8> {
    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .expect("PNG encoding should succeed");
    buffer
}
