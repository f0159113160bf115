//! Custom error types for image cropping and site generation

use std::fmt;
use std::io;

/// Errors raised while cropping images or building the site
#[derive(Debug)]
pub enum StudioError {
    /// I/O error
    IoError(io::Error),
    /// Image file does not exist
    ImageNotFound(String),
    /// Image exists but could not be read or decoded
    ImageDecode {
        /// Path or description of the image source
        source: String,
        /// Decoder message
        reason: String,
    },
    /// Image could not be encoded or written
    ImageEncode(String),
    /// Manifest is missing a field or is not valid TOML
    ManifestError(String),
    /// HTML output could not be produced
    RenderError(String),
    /// Generic error with message
    GenericError(String),
}

impl StudioError {
    /// Whether this error means "no image available" for a slot
    ///
    /// Callers rendering several images treat these as recoverable and skip
    /// only the affected slot.
    pub fn is_image_unavailable(&self) -> bool {
        matches!(self, StudioError::ImageNotFound(_) | StudioError::ImageDecode { .. })
    }
}

impl fmt::Display for StudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudioError::IoError(e) => write!(f, "I/O error: {}", e),
            StudioError::ImageNotFound(path) => write!(f, "image not found: {}", path),
            StudioError::ImageDecode { source, reason } => {
                write!(f, "could not decode image {}: {}", source, reason)
            }
            StudioError::ImageEncode(msg) => write!(f, "could not write image: {}", msg),
            StudioError::ManifestError(msg) => write!(f, "Invalid site manifest: {}", msg),
            StudioError::RenderError(msg) => write!(f, "Render error: {}", msg),
            StudioError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StudioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StudioError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StudioError {
    fn from(error: io::Error) -> Self {
        StudioError::IoError(error)
    }
}

impl From<String> for StudioError {
    fn from(msg: String) -> Self {
        StudioError::GenericError(msg)
    }
}

/// Result type for studiosite operations
pub type StudioResult<T> = Result<T, StudioError>;
