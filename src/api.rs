use std::path::Path;
use image::DynamicImage;
use log::info;

use crate::cropper;
use crate::errors::StudioResult;
use crate::page::{RenderReport, SiteManifest, SiteRenderer};
use crate::utils::image_utils::save_image;
use crate::utils::logger::Logger;

/// Main interface to the studiosite library
pub struct StudioSite {
    logger: Logger,
}

impl StudioSite {
    /// Create a new StudioSite instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to the operation log; `None` disables it
    pub fn new(log_file: Option<&str>) -> StudioResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::disabled(),
        };
        Ok(StudioSite { logger })
    }

    /// Crop the border of an image and write it to `output_path`
    ///
    /// # Returns
    /// The cropped image, or an error if the input is unavailable or the
    /// output cannot be written
    pub fn crop(&self, input_path: &str, output_path: &str) -> StudioResult<DynamicImage> {
        let image = cropper::decode_image(input_path)?;
        let analysis = cropper::analyze_border(&image);
        let cropped = cropper::crop_to(image, analysis.bounding_box);

        save_image(&cropped, Path::new(output_path))?;
        self.logger.log_crop(input_path, &analysis, output_path)?;
        Ok(cropped)
    }

    /// Describe an image's border colour and content box
    pub fn inspect(&self, input_path: &str) -> StudioResult<String> {
        let image = cropper::decode_image(input_path)?;
        Ok(cropper::analyze_border(&image).to_report())
    }

    /// Build a site from a manifest file
    ///
    /// Gallery image paths are resolved against the manifest's directory.
    pub fn build(&self, manifest_path: &str, output_dir: &str) -> StudioResult<RenderReport> {
        let manifest = SiteManifest::load(manifest_path)?;
        let base_dir = Path::new(manifest_path).parent().unwrap_or_else(|| Path::new("."));
        info!("Building site from {}", manifest_path);

        SiteRenderer::new(base_dir, output_dir, &self.logger).render(&manifest)
    }

    /// Build the embedded studio page, reading its images from `images_dir`
    pub fn build_default(&self, images_dir: &str, output_dir: &str) -> StudioResult<RenderReport> {
        let manifest = SiteManifest::default_site()?;
        SiteRenderer::new(images_dir, output_dir, &self.logger).render(&manifest)
    }
}
