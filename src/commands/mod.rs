//! CLI command implementations
//!
//! This module contains implementations of the commands supported by the
//! CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod crop_command;
pub mod inspect_command;
pub mod build_command;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use crop_command::CropCommand;
pub use inspect_command::InspectCommand;
pub use build_command::BuildCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::errors::StudioResult;

/// Factory for creating command instances based on CLI arguments
pub struct StudioCommandFactory;

impl StudioCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        StudioCommandFactory
    }
}

impl Default for StudioCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for StudioCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> StudioResult<Box<dyn Command + 'a>> {
        if args.get_flag("build") || args.get_flag("default-site") {
            Ok(Box::new(BuildCommand::new(args, logger)?))
        } else if args.get_flag("crop") {
            Ok(Box::new(CropCommand::new(args, logger)?))
        } else {
            // Default to inspect command
            Ok(Box::new(InspectCommand::new(args, logger)?))
        }
    }
}
