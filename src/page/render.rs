//! Static site rendering
//!
//! Walks a manifest in order, crops every gallery image and writes
//! `index.html` plus an `images/` directory. An image that is missing or
//! undecodable gets a notice on the page and its column is left empty; the
//! rest of the page still renders.

use std::fs;
use std::path::{Path, PathBuf};
use log::{info, warn};

use crate::cropper::{self, analyze_border};
use crate::errors::StudioResult;
use crate::page::builder::{Figure, PageBuilder};
use crate::page::manifest::{GalleryImage, SiteManifest};
use crate::utils::logger::Logger;
use crate::utils::path_utils::{resolve_relative, slot_file_name};
use crate::utils::image_utils::save_image;
use crate::utils::progress::ProgressTracker;

/// Directory under the output root holding cropped images
pub const IMAGE_DIR: &str = "images";

/// Name of the generated page
pub const PAGE_FILE: &str = "index.html";

/// A gallery image that was left out of the page
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedImage {
    /// Path as written in the manifest
    pub source: String,
    /// Why it could not be used
    pub reason: String,
}

/// Outcome of a site build
#[derive(Debug, Clone)]
pub struct RenderReport {
    /// Path of the written page
    pub page_path: PathBuf,
    /// Cropped images written, in page order
    pub images_written: Vec<PathBuf>,
    /// Slots skipped because their image was unavailable
    pub skipped: Vec<SkippedImage>,
}

impl RenderReport {
    /// One-paragraph summary for the console
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Wrote {} ({} image(s) cropped, {} skipped)",
            self.page_path.display(),
            self.images_written.len(),
            self.skipped.len()
        );
        for skipped in &self.skipped {
            summary.push_str(&format!("\n  skipped {}: {}", skipped.source, skipped.reason));
        }
        summary
    }
}

/// Renders a manifest into a static site directory
pub struct SiteRenderer<'a> {
    /// Directory manifest image paths are relative to
    base_dir: PathBuf,
    /// Output root
    output_dir: PathBuf,
    logger: &'a Logger,
    show_progress: bool,
}

impl<'a> SiteRenderer<'a> {
    pub fn new(base_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>, logger: &'a Logger) -> Self {
        SiteRenderer {
            base_dir: base_dir.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            logger,
            show_progress: false,
        }
    }

    /// Show a progress bar while cropping gallery images
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Render the manifest and write the page
    pub fn render(&self, manifest: &SiteManifest) -> StudioResult<RenderReport> {
        let image_dir = self.output_dir.join(IMAGE_DIR);
        fs::create_dir_all(&image_dir)?;

        let total_images = manifest.gallery_images().count() as u64;
        let progress = if self.show_progress {
            ProgressTracker::new(total_images, "Cropping images")
        } else {
            ProgressTracker::hidden(total_images)
        };

        let mut report = RenderReport {
            page_path: self.output_dir.join(PAGE_FILE),
            images_written: Vec::new(),
            skipped: Vec::new(),
        };

        let mut page = PageBuilder::new(&manifest.page.title, manifest.page.layout, &manifest.page.lang);
        page.hero(&manifest.hero)?;

        let mut slot_index = 0;
        for section in &manifest.sections {
            page.section_heading(&section.heading, &section.color)?;
            page.markdown(&section.body)?;

            if section.gallery.is_empty() {
                continue;
            }

            // Notices go above the columns, one per unavailable image.
            let mut figures = Vec::with_capacity(section.gallery.len());
            for image in &section.gallery {
                progress.set_message(&image.path);
                match self.render_slot(slot_index, image, &image_dir)? {
                    Ok(figure) => {
                        report.images_written.push(self.output_dir.join(&figure.src));
                        figures.push(Some(figure));
                    }
                    Err(skipped) => {
                        page.notice(&manifest.missing_image_notice(&skipped.source))?;
                        report.skipped.push(skipped);
                        figures.push(None);
                    }
                }
                slot_index += 1;
                progress.increment(1);
            }
            page.columns(&figures)?;
        }

        if let Some(footer) = &manifest.footer {
            page.caption(footer)?;
        }
        progress.finish();

        let html = page.finish()?;
        fs::write(&report.page_path, html)?;

        info!("{}", report.summary());
        self.logger.log(&report.summary())?;
        Ok(report)
    }

    /// Crop one gallery image into the image directory
    ///
    /// The outer error is fatal to the build; the inner one marks a slot to skip.
    fn render_slot(
        &self,
        index: usize,
        image: &GalleryImage,
        image_dir: &Path,
    ) -> StudioResult<Result<Figure, SkippedImage>> {
        let source_path = resolve_relative(&self.base_dir, &image.path);

        let decoded = match cropper::decode_image(&source_path) {
            Ok(decoded) => decoded,
            Err(e) if e.is_image_unavailable() => {
                warn!("{}", e);
                self.logger.log_skipped(&image.path, &e.to_string())?;
                return Ok(Err(SkippedImage {
                    source: image.path.clone(),
                    reason: e.to_string(),
                }));
            }
            Err(e) => return Err(e),
        };

        let analysis = analyze_border(&decoded);
        let cropped = cropper::crop_to(decoded, analysis.bounding_box);

        let file_name = slot_file_name(index, &image.path);
        let target = image_dir.join(&file_name);
        save_image(&cropped, &target)?;

        let target_display = target.display().to_string();
        self.logger.log_crop(&image.path, &analysis, &target_display)?;

        Ok(Ok(Figure {
            src: format!("{}/{}", IMAGE_DIR, file_name),
            caption: image.caption.clone(),
        }))
    }
}
