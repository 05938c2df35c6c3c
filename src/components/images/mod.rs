//! Image handling components
//!
//! Upload, preview, reorder, and remove images.

mod gesture;
mod image_upload;
mod mirror;
mod sortable_image;
mod upload_notice;

pub use image_upload::ImageUploader;
