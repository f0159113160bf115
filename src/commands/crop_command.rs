//! Border crop command
//!
//! Crops the uniform border of a single image and writes the result.

use clap::ArgMatches;
use log::info;
use std::path::Path;

use crate::commands::command_traits::Command;
use crate::cropper;
use crate::errors::{StudioError, StudioResult};
use crate::utils::image_utils::save_image;
use crate::utils::logger::Logger;
use crate::utils::path_utils::cropped_output_path;

/// Command for cropping one image
pub struct CropCommand<'a> {
    /// Path to the input image
    input_file: String,
    /// Path to the output image
    output_file: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> CropCommand<'a> {
    /// Create a new crop command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> StudioResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| StudioError::GenericError("Missing input image".to_string()))?
            .clone();

        // Default to <stem>_cropped.png next to the input
        let output_file = args.get_one::<String>("output")
            .cloned()
            .unwrap_or_else(|| cropped_output_path(&input_file));

        if output_file == input_file {
            return Err(StudioError::GenericError(
                "Output path must differ from the input image".to_string(),
            ));
        }

        Ok(CropCommand {
            input_file,
            output_file,
            logger,
        })
    }

    pub fn output_file(&self) -> &str {
        &self.output_file
    }
}

impl<'a> Command for CropCommand<'a> {
    fn execute(&self) -> StudioResult<()> {
        info!("Cropping border of {}", self.input_file);

        let image = cropper::decode_image(&self.input_file)?;
        let analysis = cropper::analyze_border(&image);
        let cropped = cropper::crop_to(image, analysis.bounding_box);

        save_image(&cropped, Path::new(&self.output_file))?;
        self.logger.log_crop(&self.input_file, &analysis, &self.output_file)?;

        println!("{} -> {} ({}x{} -> {}x{})",
                 self.input_file, self.output_file,
                 analysis.width, analysis.height,
                 cropped.width(), cropped.height());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "crop"
    }
}
