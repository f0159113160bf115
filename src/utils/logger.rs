//! Logger utility for application-wide logging
//!
//! Console output goes through the `log` facade, configured with
//! `env_logger`. The `Logger` struct keeps a separate record file of the
//! operations performed (crops written, slots skipped, pages built).

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::LevelFilter;

use crate::cropper::{BorderAnalysis, Region};

/// File-backed operation log
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
        })
    }

    /// Creates a logger that discards everything
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
        }
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;

        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Records the outcome of a border crop
    ///
    /// # Arguments
    ///
    /// * `source` - Path of the source image
    /// * `analysis` - Border analysis of the source
    /// * `output` - Where the result was written
    pub fn log_crop(&self, source: &str, analysis: &BorderAnalysis, output: &str) -> io::Result<()> {
        let kept = analysis
            .bounding_box
            .unwrap_or_else(|| Region::full(analysis.width, analysis.height));

        self.log(&format!(
            "crop {} ({}x{}, {}) -> {} [{}]",
            source,
            analysis.width,
            analysis.height,
            analysis.color_mode,
            output,
            kept.describe()
        ))
    }

    /// Records a page slot that was skipped
    pub fn log_skipped(&self, source: &str, reason: &str) -> io::Result<()> {
        self.log(&format!("skip {}: {}", source, reason))
    }
}

/// Configure console logging for the `log` facade
///
/// Defaults to `info`, or `debug` when `verbose` is set. `RUST_LOG`
/// overrides both.
pub fn init_console_logging(verbose: bool) {
    let default_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level);
    builder.format_timestamp(None);
    builder.parse_default_env();

    // A second initialisation (e.g. from tests) is harmless.
    if builder.try_init().is_err() {
        eprintln!("Warning: console logger was already initialized");
    }
}
