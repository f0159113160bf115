//! Static page generation
//!
//! Turns a TOML site manifest into a single HTML page, cropping the
//! borders of every gallery image on the way.

pub mod style;
pub mod markdown;
pub mod manifest;
pub mod builder;
pub mod render;
#[cfg(test)]
mod tests;

pub use builder::{Figure, PageBuilder};
pub use manifest::{GalleryImage, Hero, PageSettings, Section, SiteManifest};
pub use render::{RenderReport, SiteRenderer, SkippedImage};
pub use style::Layout;
