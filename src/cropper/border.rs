//! Border cropping
//!
//! Removes the uniform border around an image. The border colour is taken
//! from the pixel at (0,0); every pixel that differs from it in any channel
//! is kept, and the image is cropped to the bounding box of those pixels.
//!
//! The corner pixel is sampled as-is. An image whose real border differs
//! from its corner pixel is cropped against the corner colour, not the
//! visible border.

use std::io;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageError, ImageReader, Rgba};
use log::{debug, info, warn};

use crate::cropper::canvas::buffer_bounding_box;
use crate::cropper::region::Region;
use crate::errors::{StudioError, StudioResult};
use crate::utils::color_utils;

/// Summary of the border detection for one image
#[derive(Debug, Clone)]
pub struct BorderAnalysis {
    /// Source width in pixels
    pub width: u32,
    /// Source height in pixels
    pub height: u32,
    /// Colour mode name, e.g. "RGBA8"
    pub color_mode: String,
    /// Colour of the (0,0) pixel, if any
    pub border_color: Option<Rgba<u8>>,
    /// Region kept after cropping, `None` for a uniform image
    pub bounding_box: Option<Region>,
}

impl BorderAnalysis {
    /// Whether cropping would change the image
    pub fn would_crop(&self) -> bool {
        match self.bounding_box {
            Some(region) => region != Region::full(self.width, self.height),
            None => false,
        }
    }

    /// Human readable report, one field per line
    pub fn to_report(&self) -> String {
        let mut report = String::from("Border Analysis:\n");
        report.push_str(&format!("  Dimensions: {}x{}\n", self.width, self.height));
        report.push_str(&format!("  Color mode: {}\n", self.color_mode));
        match self.border_color {
            Some(color) => report.push_str(&format!("  Border color: {}\n", color_utils::to_hex(&color))),
            None => report.push_str("  Border color: none (empty image)\n"),
        }
        match self.bounding_box {
            Some(region) => report.push_str(&format!("  Content box: {}\n", region.describe())),
            None => report.push_str("  Content box: none (uniform image)\n"),
        }
        report.push_str(&format!("  Would crop: {}\n", if self.would_crop() { "yes" } else { "no" }));
        report
    }
}

/// Decode an image file, keeping its native colour mode
///
/// The format is sniffed from the content, falling back to the extension.
pub fn decode_image(path: impl AsRef<Path>) -> StudioResult<DynamicImage> {
    let path = path.as_ref();
    let source = path.display().to_string();

    let reader = ImageReader::open(path)
        .map_err(|e| io_to_unavailable(&source, e))?
        .with_guessed_format()
        .map_err(|e| io_to_unavailable(&source, e))?;

    let image = reader.decode().map_err(|e| image_to_unavailable(&source, e))?;
    debug!("Decoded {} ({}x{}, {})", source, image.width(), image.height(),
           color_utils::color_mode_name(&image));
    Ok(image)
}

/// Decode an image from an in-memory byte stream
pub fn decode_bytes(data: &[u8]) -> StudioResult<DynamicImage> {
    image::load_from_memory(data).map_err(|e| StudioError::ImageDecode {
        source: format!("<{} bytes>", data.len()),
        reason: e.to_string(),
    })
}

/// Crop the uniform border of the image stored at `path`
///
/// # Returns
/// The cropped image, the unmodified image if it is a single solid colour,
/// or `ImageNotFound` / `ImageDecode` if it cannot be loaded
pub fn crop_border(path: impl AsRef<Path>) -> StudioResult<DynamicImage> {
    let image = decode_image(path)?;
    Ok(crop_border_image(image))
}

/// Crop the uniform border of an encoded image held in memory
pub fn crop_border_bytes(data: &[u8]) -> StudioResult<DynamicImage> {
    let image = decode_bytes(data)?;
    Ok(crop_border_image(image))
}

/// Crop the uniform border of an already decoded image
///
/// The colour mode is preserved. A uniform image is returned unchanged.
pub fn crop_border_image(image: DynamicImage) -> DynamicImage {
    let region = border_bounding_box(&image);
    crop_to(image, region)
}

/// Crop an image to a content box found earlier
///
/// `None`, or a box covering the whole image, returns the image unchanged.
/// Lets callers that already ran [`analyze_border`] skip a second diff.
pub fn crop_to(image: DynamicImage, region: Option<Region>) -> DynamicImage {
    let (width, height) = image.dimensions();

    match region {
        Some(region) if region != Region::full(width, height) && region.fits_within(width, height) => {
            info!("Cropping {}x{} image to {}", width, height, region.describe());
            image.crop_imm(region.x, region.y, region.width, region.height)
        }
        Some(_) => {
            debug!("No border to remove on {}x{} image", width, height);
            image
        }
        None => {
            debug!("Image is uniform, leaving {}x{} unchanged", width, height);
            image
        }
    }
}

/// Crop an image, logging a diagnostic when it is unavailable
///
/// # Returns
/// `None` when the image is missing or cannot be decoded. The reason is
/// only logged; callers that need it should use [`crop_border`].
pub fn crop_border_slot(path: impl AsRef<Path>) -> Option<DynamicImage> {
    match crop_border(path.as_ref()) {
        Ok(image) => Some(image),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

/// Bounding box of every pixel that differs from the (0,0) colour
///
/// Computed in the image's own colour mode.
pub fn border_bounding_box(image: &DynamicImage) -> Option<Region> {
    match image {
        DynamicImage::ImageLuma8(buffer) => buffer_bounding_box(buffer),
        DynamicImage::ImageLumaA8(buffer) => buffer_bounding_box(buffer),
        DynamicImage::ImageRgb8(buffer) => buffer_bounding_box(buffer),
        DynamicImage::ImageRgba8(buffer) => buffer_bounding_box(buffer),
        DynamicImage::ImageLuma16(buffer) => buffer_bounding_box(buffer),
        DynamicImage::ImageLumaA16(buffer) => buffer_bounding_box(buffer),
        DynamicImage::ImageRgb16(buffer) => buffer_bounding_box(buffer),
        DynamicImage::ImageRgba16(buffer) => buffer_bounding_box(buffer),
        DynamicImage::ImageRgb32F(buffer) => buffer_bounding_box(buffer),
        DynamicImage::ImageRgba32F(buffer) => buffer_bounding_box(buffer),
        other => buffer_bounding_box(&other.to_rgba32f()),
    }
}

/// The assumed border colour: the pixel at (0,0), converted to RGBA8
pub fn border_color(image: &DynamicImage) -> Option<Rgba<u8>> {
    if image.width() == 0 || image.height() == 0 {
        return None;
    }
    Some(image.get_pixel(0, 0))
}

/// Inspect an image without cropping it
pub fn analyze_border(image: &DynamicImage) -> BorderAnalysis {
    BorderAnalysis {
        width: image.width(),
        height: image.height(),
        color_mode: color_utils::color_mode_name(image).to_string(),
        border_color: border_color(image),
        bounding_box: border_bounding_box(image),
    }
}

fn io_to_unavailable(source: &str, error: io::Error) -> StudioError {
    if error.kind() == io::ErrorKind::NotFound {
        StudioError::ImageNotFound(source.to_string())
    } else {
        StudioError::ImageDecode {
            source: source.to_string(),
            reason: error.to_string(),
        }
    }
}

fn image_to_unavailable(source: &str, error: ImageError) -> StudioError {
    match error {
        ImageError::IoError(e) => io_to_unavailable(source, e),
        other => StudioError::ImageDecode {
            source: source.to_string(),
            reason: other.to_string(),
        },
    }
}
