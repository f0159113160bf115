//! Site build command
//!
//! Renders a site manifest into a static HTML page with cropped images.

use clap::ArgMatches;
use log::info;
use std::path::{Path, PathBuf};

use crate::commands::command_traits::Command;
use crate::errors::{StudioError, StudioResult};
use crate::page::{SiteManifest, SiteRenderer};
use crate::utils::logger::Logger;

/// Default output directory for a site build
pub const DEFAULT_SITE_DIR: &str = "site";

/// Where the manifest comes from
#[derive(Debug, Clone)]
enum ManifestSource {
    /// Manifest file on disk
    File(PathBuf),
    /// Embedded manifest, images resolved against this directory
    Embedded(PathBuf),
}

/// Command for building the static site
pub struct BuildCommand<'a> {
    source: ManifestSource,
    /// Output directory
    output_dir: PathBuf,
    /// Whether to draw a progress bar
    show_progress: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> BuildCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> StudioResult<Self> {
        let source = if args.get_flag("default-site") {
            // The input, if any, is the directory holding the page images
            let images_dir = args.get_one::<String>("input")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            ManifestSource::Embedded(images_dir)
        } else {
            let manifest = args.get_one::<String>("input")
                .ok_or_else(|| StudioError::GenericError(
                    "Missing manifest path (or use --default-site)".to_string()))?;
            ManifestSource::File(PathBuf::from(manifest))
        };
        info!("Manifest source: {:?}", source);

        let output_dir = args.get_one::<String>("output")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_DIR));
        info!("Output directory: {}", output_dir.display());

        Ok(BuildCommand {
            source,
            output_dir,
            show_progress: !args.get_flag("quiet"),
            logger,
        })
    }

    /// Directory the site is written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Whether the embedded manifest is rendered instead of a file
    pub fn uses_embedded_manifest(&self) -> bool {
        matches!(self.source, ManifestSource::Embedded(_))
    }

    fn load(&self) -> StudioResult<(SiteManifest, PathBuf)> {
        match &self.source {
            ManifestSource::File(path) => {
                let manifest = SiteManifest::load(path)?;
                let base_dir = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
                Ok((manifest, base_dir))
            }
            ManifestSource::Embedded(images_dir) => Ok((SiteManifest::default_site()?, images_dir.clone())),
        }
    }
}

impl<'a> Command for BuildCommand<'a> {
    fn execute(&self) -> StudioResult<()> {
        let (manifest, base_dir) = self.load()?;
        info!("Building '{}' into {}", manifest.page.title, self.output_dir.display());

        let report = SiteRenderer::new(&base_dir, &self.output_dir, self.logger)
            .with_progress(self.show_progress)
            .render(&manifest)?;

        println!("{}", report.summary());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "build"
    }
}
