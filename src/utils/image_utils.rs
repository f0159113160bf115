//! Image output helpers

use std::borrow::Cow;
use std::path::Path;

use image::{ColorType, DynamicImage, ImageFormat};
use log::{debug, info};

use crate::errors::{StudioError, StudioResult};

/// Save an image, picking the format from the file extension
///
/// Unknown extensions are written as PNG. Colour modes the target encoder
/// cannot store are converted first (float to 16-bit for PNG, anything with
/// alpha or 16-bit depth to RGB8 for JPEG).
pub fn save_image(image: &DynamicImage, path: &Path) -> StudioResult<()> {
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    let prepared = prepare_for_format(image, format);

    if let Cow::Owned(ref converted) = prepared {
        debug!("Converted {:?} to {:?} for {:?} output", image.color(), converted.color(), format);
    }

    prepared.save_with_format(path, format).map_err(|e| {
        StudioError::ImageEncode(format!("{}: {}", path.display(), e))
    })?;

    info!("Saved {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}

fn prepare_for_format(image: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    match (format, image.color()) {
        (ImageFormat::Png, ColorType::Rgb32F) => Cow::Owned(DynamicImage::ImageRgb16(image.to_rgb16())),
        (ImageFormat::Png, ColorType::Rgba32F) => Cow::Owned(DynamicImage::ImageRgba16(image.to_rgba16())),
        (ImageFormat::Jpeg, ColorType::L8) | (ImageFormat::Jpeg, ColorType::Rgb8) => Cow::Borrowed(image),
        (ImageFormat::Jpeg, _) => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
        _ => Cow::Borrowed(image),
    }
}
