//! Colour utilities
//!
//! Formatting helpers for border colours and colour modes, and validation
//! of CSS hex colours used in the site manifest.

use image::{ColorType, DynamicImage, Rgba};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CSS_HEX_COLOR: Regex = Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("hex colour pattern is valid");
}

/// Format an RGBA colour as a CSS hex string
///
/// The alpha component is only included when the colour is not opaque.
pub fn to_hex(color: &Rgba<u8>) -> String {
    let [r, g, b, a] = color.0;
    if a == u8::MAX {
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

/// Short name of an image's native colour mode
pub fn color_mode_name(image: &DynamicImage) -> &'static str {
    match image.color() {
        ColorType::L8 => "L8",
        ColorType::La8 => "LA8",
        ColorType::Rgb8 => "RGB8",
        ColorType::Rgba8 => "RGBA8",
        ColorType::L16 => "L16",
        ColorType::La16 => "LA16",
        ColorType::Rgb16 => "RGB16",
        ColorType::Rgba16 => "RGBA16",
        ColorType::Rgb32F => "RGB32F",
        ColorType::Rgba32F => "RGBA32F",
        _ => "unknown",
    }
}

/// Check that a string is a CSS hex colour (#RGB, #RRGGBB or #RRGGBBAA)
pub fn is_css_hex(value: &str) -> bool {
    CSS_HEX_COLOR.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_opaque_and_translucent() {
        assert_eq!(to_hex(&Rgba([255, 255, 255, 255])), "#FFFFFF");
        assert_eq!(to_hex(&Rgba([75, 123, 229, 128])), "#4B7BE580");
    }

    #[test]
    fn test_css_hex_validation() {
        assert!(is_css_hex("#4B7BE5"));
        assert!(is_css_hex("#fff"));
        assert!(!is_css_hex("4B7BE5"));
        assert!(!is_css_hex("#4B7BE"));
        assert!(!is_css_hex("red"));
    }

    #[test]
    fn test_color_mode_name() {
        let image = DynamicImage::new_rgba8(2, 2);
        assert_eq!(color_mode_name(&image), "RGBA8");
    }
}
