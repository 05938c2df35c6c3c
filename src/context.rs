//! Widget configuration context for Storyboard.
//!
//! Provides the uploader configuration to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_config);
//!
//! // In child components
//! let config = use_uploader_config();
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use storyboard_core::{SensorConfig, UploadConfig};

/// Everything the image uploader needs besides the list itself.
#[derive(Clone, Debug, PartialEq)]
pub struct UploaderConfig {
    /// Size limit and dialog filter
    pub upload: UploadConfig,
    /// Pointer and keyboard gesture settings
    pub sensors: SensorConfig,
    /// Thumbnail edge in pixels
    pub thumb_size: u32,
    /// Gap between thumbnails in pixels
    pub gap: u32,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            upload: UploadConfig::default(),
            sensors: SensorConfig::default(),
            thumb_size: 128,
            gap: 16,
        }
    }
}

/// Get the configuration built from command line args.
pub fn get_config() -> UploaderConfig {
    crate::get_config()
}

/// Get the files passed with --open.
pub fn get_preload() -> Vec<PathBuf> {
    crate::get_preload()
}

/// Hook to access the uploader configuration from context.
pub fn use_uploader_config() -> UploaderConfig {
    use_context::<UploaderConfig>()
}
