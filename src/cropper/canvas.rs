//! Reference canvas and difference map construction
//!
//! The border cropper compares every pixel of the source image against a
//! canvas of the same size and colour mode filled with the border colour.
//! These helpers work on any `ImageBuffer` so the native colour mode of the
//! decoded image is never converted.

use image::{ImageBuffer, Pixel, Primitive};

use crate::cropper::region::Region;

/// Image buffer with the same pixel type as the source
pub type PixelBuffer<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

/// Per-channel absolute difference between a source and a reference canvas
pub type DifferenceMap<P> = PixelBuffer<P>;

/// Create a canvas filled with the colour of the source's (0,0) pixel
///
/// # Returns
/// `None` when the source has no pixels to sample
pub fn reference_canvas<P: Pixel>(source: &PixelBuffer<P>) -> Option<PixelBuffer<P>> {
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    let border = *source.get_pixel(0, 0);
    Some(ImageBuffer::from_pixel(width, height, border))
}

/// Compute the per-channel absolute difference of two equally sized images
///
/// # Returns
/// `None` if the dimensions differ
pub fn difference_map<P: Pixel>(
    source: &PixelBuffer<P>,
    reference: &PixelBuffer<P>,
) -> Option<DifferenceMap<P>> {
    if source.dimensions() != reference.dimensions() {
        return None;
    }

    let (width, height) = source.dimensions();
    Some(ImageBuffer::from_fn(width, height, |x, y| {
        source.get_pixel(x, y).map2(reference.get_pixel(x, y), abs_diff)
    }))
}

/// Find the smallest region containing every non-zero pixel of a difference map
///
/// A pixel counts as non-zero when any of its channels is. Returns `None`
/// for an all-zero map.
pub fn bounding_box<P: Pixel>(difference: &DifferenceMap<P>) -> Option<Region> {
    // Absolute differences never go below the channel minimum.
    let zero = <P::Subpixel as Primitive>::DEFAULT_MIN_VALUE;
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in difference.enumerate_pixels() {
        if !pixel.channels().iter().any(|&channel| channel > zero) {
            continue;
        }

        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }

    bounds.map(|(min_x, min_y, max_x, max_y)| Region::from_corners(min_x, min_y, max_x, max_y))
}

/// Bounding box of pixels that differ from the buffer's (0,0) colour
pub fn buffer_bounding_box<P: Pixel>(source: &PixelBuffer<P>) -> Option<Region> {
    let reference = reference_canvas(source)?;
    let difference = difference_map(source, &reference)?;
    bounding_box(&difference)
}

fn abs_diff<S: Primitive>(a: S, b: S) -> S {
    if a > b {
        a - b
    } else {
        b - a
    }
}
