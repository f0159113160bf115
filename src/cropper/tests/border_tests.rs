use image::{DynamicImage, GenericImageView, ImageBuffer, Luma, Rgb, Rgba, RgbaImage};

use crate::cropper::{
    analyze_border, border_bounding_box, border_color, crop_border, crop_border_bytes,
    crop_border_image, crop_border_slot, crop_to, Region,
};
use crate::errors::StudioError;
use super::test_utils::{png_bytes, solid_rgb, white_with_black, BLACK, WHITE};

#[test]
fn test_uniform_image_is_unchanged() {
    let image = DynamicImage::ImageRgb8(solid_rgb(10, 10, WHITE));
    let cropped = crop_border_image(image.clone());

    assert_eq!(cropped.dimensions(), (10, 10));
    assert_eq!(cropped, image);
}

#[test]
fn test_single_interior_pixel_crops_to_one_pixel() {
    let image = DynamicImage::ImageRgb8(white_with_black(10, 10, &[(5, 5)]));
    let cropped = crop_border_image(image);

    assert_eq!(cropped.dimensions(), (1, 1));
    assert_eq!(cropped.to_rgb8().get_pixel(0, 0), &BLACK);
}

#[test]
fn test_dark_top_left_block_becomes_the_border() {
    // The (0,0) pixel is black, so black is taken as the border colour and
    // every white pixel counts as content: nothing is cropped.
    let points = [(0, 0), (1, 0), (0, 1), (1, 1)];
    let image = DynamicImage::ImageRgb8(white_with_black(10, 10, &points));

    assert_eq!(border_color(&image), Some(Rgba([0, 0, 0, 255])));
    assert_eq!(border_bounding_box(&image), Some(Region::full(10, 10)));
    assert_eq!(crop_border_image(image).dimensions(), (10, 10));
}

#[test]
fn test_crop_is_minimal_and_tight() {
    let points = [(2, 3), (7, 4), (4, 8), (3, 5)];
    let image = DynamicImage::ImageRgb8(white_with_black(12, 11, &points));
    let cropped = crop_border_image(image).to_rgb8();

    assert_eq!(cropped.dimensions(), (6, 6));

    // Every edge of the result must hold a non-border pixel.
    let (w, h) = cropped.dimensions();
    let differs = |x: u32, y: u32| cropped.get_pixel(x, y) != &WHITE;
    assert!((0..w).any(|x| differs(x, 0)), "top edge");
    assert!((0..w).any(|x| differs(x, h - 1)), "bottom edge");
    assert!((0..h).any(|y| differs(0, y)), "left edge");
    assert!((0..h).any(|y| differs(w - 1, y)), "right edge");

    // Every original content pixel is kept.
    let black_count = cropped.pixels().filter(|p| **p == BLACK).count();
    assert_eq!(black_count, points.len());
}

#[test]
fn test_crop_is_idempotent() {
    let image = DynamicImage::ImageRgb8(white_with_black(20, 15, &[(4, 4), (9, 12)]));
    let once = crop_border_image(image);
    let twice = crop_border_image(once.clone());

    // The cropped corner is black, so the second pass samples black as the
    // border and the white area still spans the whole image.
    assert_eq!(twice.dimensions(), once.dimensions());
    assert_eq!(twice, once);
}

#[test]
fn test_idempotent_with_white_corner() {
    let mut buffer = solid_rgb(16, 16, WHITE);
    for &(x, y) in &[(3, 7), (8, 6), (5, 10)] {
        buffer.put_pixel(x, y, Rgb([200, 30, 30]));
    }
    let once = crop_border_image(DynamicImage::ImageRgb8(buffer));
    let twice = crop_border_image(once.clone());

    assert_eq!(once.dimensions(), (6, 5));
    assert_eq!(twice, once);
}

#[test]
fn test_result_never_larger_than_source() {
    let image = DynamicImage::ImageRgb8(white_with_black(7, 5, &[(6, 4)]));
    let cropped = crop_border_image(image);
    assert!(cropped.width() <= 7 && cropped.height() <= 5);
    assert_eq!(cropped.dimensions(), (1, 1));
}

#[test]
fn test_rgba_mode_is_preserved() {
    let mut buffer = RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 0]));
    buffer.put_pixel(2, 2, Rgba([10, 20, 30, 255]));
    buffer.put_pixel(4, 5, Rgba([10, 20, 30, 128]));

    let cropped = crop_border_image(DynamicImage::ImageRgba8(buffer));

    assert!(matches!(cropped, DynamicImage::ImageRgba8(_)));
    assert_eq!(cropped.dimensions(), (3, 4));
}

#[test]
fn test_sixteen_bit_mode_is_preserved() {
    let mut buffer: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_pixel(9, 9, Luma([1000u16]));
    buffer.put_pixel(6, 1, Luma([1001u16]));

    let cropped = crop_border_image(DynamicImage::ImageLuma16(buffer));

    assert!(matches!(cropped, DynamicImage::ImageLuma16(_)));
    assert_eq!(cropped.dimensions(), (1, 1));
}

#[test]
fn test_empty_image_is_returned_unchanged() {
    let image = DynamicImage::new_rgb8(0, 0);
    assert_eq!(border_color(&image), None);
    assert_eq!(crop_border_image(image).dimensions(), (0, 0));
}

#[test]
fn test_crop_border_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("framed.png");
    DynamicImage::ImageRgb8(white_with_black(10, 10, &[(5, 5), (6, 7)]))
        .save(&path)
        .unwrap();

    let cropped = crop_border(&path).unwrap();
    assert_eq!(cropped.dimensions(), (2, 3));
}

#[test]
fn test_crop_border_from_bytes() {
    let image = DynamicImage::ImageRgb8(white_with_black(10, 10, &[(1, 8)]));
    let cropped = crop_border_bytes(&png_bytes(&image)).unwrap();
    assert_eq!(cropped.dimensions(), (1, 1));
}

#[test]
fn test_missing_file_is_image_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ai_universal_train.png");

    let err = crop_border(&path).unwrap_err();
    assert!(matches!(err, StudioError::ImageNotFound(_)));
    assert!(err.is_image_unavailable());
    assert!(err.to_string().starts_with("image not found: "));
}

#[test]
fn test_missing_file_slot_is_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(crop_border_slot(dir.path().join("nope.png")).is_none());
}

#[test]
fn test_garbage_bytes_are_decode_errors() {
    let err = crop_border_bytes(b"definitely not an image").unwrap_err();
    assert!(matches!(err, StudioError::ImageDecode { .. }));
    assert!(err.is_image_unavailable());
}

#[test]
fn test_garbage_file_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"\x89PNG but truncated").unwrap();

    let err = crop_border(&path).unwrap_err();
    assert!(matches!(err, StudioError::ImageDecode { .. }));
}

#[test]
fn test_analysis_report() {
    let image = DynamicImage::ImageRgb8(white_with_black(10, 10, &[(5, 5)]));
    let analysis = analyze_border(&image);

    assert_eq!(analysis.color_mode, "RGB8");
    assert_eq!(analysis.bounding_box, Some(Region::new(5, 5, 1, 1)));
    assert!(analysis.would_crop());

    let report = analysis.to_report();
    assert!(report.contains("Dimensions: 10x10"));
    assert!(report.contains("Border color: #FFFFFF"));
    assert!(report.contains("Content box: 5,5 1x1"));
}

#[test]
fn test_analysis_of_uniform_image() {
    let image = DynamicImage::ImageRgb8(solid_rgb(4, 4, BLACK));
    let analysis = analyze_border(&image);
    assert_eq!(analysis.bounding_box, None);
    assert!(!analysis.would_crop());
}

#[test]
fn test_crop_to_reuses_analysis() {
    let image = DynamicImage::ImageRgb8(white_with_black(10, 10, &[(2, 3), (4, 6)]));
    let analysis = analyze_border(&image);

    let cropped = crop_to(image.clone(), analysis.bounding_box);

    assert_eq!(cropped.dimensions(), (3, 4));
    assert_eq!(cropped, crop_border_image(image));
}

#[test]
fn test_crop_to_ignores_missing_or_oversized_box() {
    let image = DynamicImage::ImageRgb8(solid_rgb(6, 6, WHITE));

    assert_eq!(crop_to(image.clone(), None), image);
    assert_eq!(crop_to(image.clone(), Some(Region::new(4, 4, 5, 5))), image);
}
