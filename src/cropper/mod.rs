//! Border cropping module
//!
//! Detects the uniform border around an image by diffing it against a
//! canvas filled with its top-left pixel colour, then crops to the
//! bounding box of the differences.

pub mod region;
pub mod canvas;
pub mod border;
#[cfg(test)]
mod tests;

pub use region::Region;
pub use canvas::{bounding_box, difference_map, reference_canvas, DifferenceMap, PixelBuffer};
pub use border::{
    analyze_border, border_bounding_box, border_color, crop_border, crop_border_bytes,
    crop_border_image, crop_border_slot, crop_to, decode_bytes, decode_image, BorderAnalysis,
};
