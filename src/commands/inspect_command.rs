//! Border inspection command
//!
//! Reports the border colour and content box of an image without
//! writing anything.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::cropper;
use crate::errors::{StudioError, StudioResult};
use crate::utils::logger::Logger;

/// Command for inspecting an image's border
pub struct InspectCommand<'a> {
    /// Path to the input image
    input_file: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> InspectCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> StudioResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| StudioError::GenericError("Missing input image".to_string()))?
            .clone();

        Ok(InspectCommand { input_file, logger })
    }
}

impl<'a> Command for InspectCommand<'a> {
    fn execute(&self) -> StudioResult<()> {
        info!("Inspecting {}", self.input_file);

        let image = cropper::decode_image(&self.input_file)?;
        let report = cropper::analyze_border(&image).to_report();

        self.logger.log(&format!("inspect {}", self.input_file))?;
        self.logger.log(&report)?;
        print!("{}", report);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "inspect"
    }
}
