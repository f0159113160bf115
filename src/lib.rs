pub mod errors;
pub mod utils;
pub mod cropper;
pub mod page;
pub mod commands;
pub mod api;

pub use crate::api::StudioSite;

pub use errors::{StudioError, StudioResult};
pub use cropper::{crop_border, crop_border_bytes, crop_border_image, crop_border_slot, Region};
pub use page::{SiteManifest, SiteRenderer};
