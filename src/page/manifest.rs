//! Site manifest
//!
//! The page is described by a TOML manifest: page settings, a hero block,
//! ordered sections with optional image galleries, and a footer caption.
//! A manifest with the studio's own page is embedded in the binary.

use std::fs;
use std::path::Path;
use std::str::FromStr;
use lazy_static::lazy_static;
use log::{debug, warn};

use crate::errors::{StudioError, StudioResult};
use crate::page::style::Layout;
use crate::utils::color_utils::is_css_hex;

/// Notice shown in place of an image that could not be loaded
pub const DEFAULT_MISSING_IMAGE_NOTICE: &str = "Imagem não encontrada: {path}";

const DEFAULT_HEADING_COLOR: &str = "#6C63FF";
const DEFAULT_HERO_TITLE_COLOR: &str = "#4B7BE5";
const DEFAULT_HERO_SUBTITLE_COLOR: &str = "#FF5B6A";

lazy_static! {
    static ref DEFAULT_SITE: Result<SiteManifest, String> = {
        let content = include_str!("../../studio_page.toml");
        content.parse::<SiteManifest>().map_err(|e| e.to_string())
    };
}

/// Page-wide settings
#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings {
    /// Browser title
    pub title: String,
    pub layout: Layout,
    /// Document language tag
    pub lang: String,
    /// Notice template for unavailable images; `{path}` is replaced
    pub missing_image_notice: String,
}

/// Centred header block at the top of the page
#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub title: String,
    pub title_color: String,
    pub subtitle: Option<String>,
    pub subtitle_color: String,
    pub tagline: Option<String>,
}

/// One image slot in a section gallery
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    /// Image path, relative to the manifest directory
    pub path: String,
    pub caption: String,
}

/// A headed block of markdown, optionally followed by an image gallery
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub color: String,
    pub body: String,
    pub gallery: Vec<GalleryImage>,
}

/// Complete description of the page
#[derive(Debug, Clone, PartialEq)]
pub struct SiteManifest {
    pub page: PageSettings,
    pub hero: Hero,
    pub sections: Vec<Section>,
    pub footer: Option<String>,
}

impl SiteManifest {
    /// Load a manifest from a file
    pub fn load(path: impl AsRef<Path>) -> StudioResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            StudioError::ManifestError(format!("Cannot read {}: {}", path.display(), e))
        })?;
        content.parse()
    }

    /// The embedded manifest for the studio's own page
    pub fn default_site() -> StudioResult<Self> {
        DEFAULT_SITE.clone().map_err(StudioError::ManifestError)
    }

    /// All gallery images in page order
    pub fn gallery_images(&self) -> impl Iterator<Item = &GalleryImage> {
        self.sections.iter().flat_map(|section| section.gallery.iter())
    }

    /// Notice text for an image that could not be loaded
    pub fn missing_image_notice(&self, path: &str) -> String {
        self.page.missing_image_notice.replace("{path}", path)
    }
}

/// Parse a manifest from a TOML string
impl FromStr for SiteManifest {
    type Err = StudioError;

    fn from_str(content: &str) -> StudioResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(StudioError::ManifestError(format!("Failed to parse TOML: {}", e))),
        };

        let page = parse_page(&toml_value)?;
        let hero = parse_hero(&toml_value)?;

        let mut sections = Vec::new();
        if let Some(array) = toml_value.get("sections").and_then(|v| v.as_array()) {
            for (index, value) in array.iter().enumerate() {
                sections.push(parse_section(index, value)?);
            }
        }

        let footer = optional_string(&toml_value, "footer");

        debug!("Parsed manifest '{}' with {} sections", page.title, sections.len());
        Ok(SiteManifest { page, hero, sections, footer })
    }

}

fn parse_page(root: &toml::Value) -> StudioResult<PageSettings> {
    let table = root
        .get("page")
        .ok_or_else(|| StudioError::ManifestError("Missing [page] table".to_string()))?;

    let title = required_string(table, "title", "page")?;

    let layout = match optional_string(table, "layout") {
        Some(name) => Layout::from_name(&name).ok_or_else(|| {
            StudioError::ManifestError(format!("Unknown layout '{}' (expected wide or centered)", name))
        })?,
        None => Layout::Centered,
    };

    Ok(PageSettings {
        title,
        layout,
        lang: optional_string(table, "lang").unwrap_or_else(|| "pt-BR".to_string()),
        missing_image_notice: optional_string(table, "missing_image_notice")
            .unwrap_or_else(|| DEFAULT_MISSING_IMAGE_NOTICE.to_string()),
    })
}

fn parse_hero(root: &toml::Value) -> StudioResult<Hero> {
    let table = root
        .get("hero")
        .ok_or_else(|| StudioError::ManifestError("Missing [hero] table".to_string()))?;

    Ok(Hero {
        title: required_string(table, "title", "hero")?,
        title_color: color_or_default(table, "title_color", DEFAULT_HERO_TITLE_COLOR),
        subtitle: optional_string(table, "subtitle"),
        subtitle_color: color_or_default(table, "subtitle_color", DEFAULT_HERO_SUBTITLE_COLOR),
        tagline: optional_string(table, "tagline"),
    })
}

fn parse_section(index: usize, value: &toml::Value) -> StudioResult<Section> {
    let context = format!("sections[{}]", index);
    let heading = required_string(value, "heading", &context)?;

    let mut gallery = Vec::new();
    if let Some(images) = value.get("gallery").and_then(|v| v.as_array()) {
        for (slot, image) in images.iter().enumerate() {
            let slot_context = format!("{}.gallery[{}]", context, slot);
            gallery.push(GalleryImage {
                path: required_string(image, "path", &slot_context)?,
                caption: required_string(image, "caption", &slot_context)?,
            });
        }
    }

    Ok(Section {
        heading,
        color: color_or_default(value, "color", DEFAULT_HEADING_COLOR),
        body: optional_string(value, "body").unwrap_or_default(),
        gallery,
    })
}

fn required_string(table: &toml::Value, key: &str, context: &str) -> StudioResult<String> {
    optional_string(table, key)
        .ok_or_else(|| StudioError::ManifestError(format!("Missing string '{}' in {}", key, context)))
}

fn optional_string(table: &toml::Value, key: &str) -> Option<String> {
    table.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
}

fn color_or_default(table: &toml::Value, key: &str, default: &str) -> String {
    match optional_string(table, key) {
        Some(color) if is_css_hex(&color) => color,
        Some(color) => {
            warn!("Ignoring invalid colour '{}' for {}, using {}", color, key, default);
            default.to_string()
        }
        None => default.to_string(),
    }
}
