//! Command pattern interfaces
//!
//! Each CLI operation is a Command built from parsed arguments by a
//! CommandFactory.

use crate::utils::logger::Logger;
use crate::errors::StudioResult;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self) -> StudioResult<()>;

    /// Short name of the operation, as used in log records
    fn name(&self) -> &'static str;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> StudioResult<Box<dyn Command + 'a>>;
}
