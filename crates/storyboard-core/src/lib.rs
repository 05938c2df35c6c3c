//! Storyboard Core Library
//!
//! Headless logic behind the storyboard image uploader widget.
//!
//! ## Overview
//!
//! The widget lets an author pick image files, previews them as thumbnails,
//! and reorders or removes them with drag gestures. Everything that can be
//! decided without a window lives here:
//!
//! - **List edits**: move, remove, and append on an immutable [`ImageList`]
//! - **Upload**: reading selected files into data URIs, batched so one
//!   selection produces one ordered append
//! - **Drag coordination**: pointer and keyboard gestures translated into
//!   drop results, with collision detection and sorting offsets
//!
//! ## Quick Start
//!
//! ```ignore
//! use storyboard_core::{read_selection, FsSource, ImageList, UploadConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = UploadConfig::default();
//!     let outcome = read_selection(FsSource, vec!["cover.png".into()], &config).await;
//!
//!     let list = ImageList::default();
//!     if let Some(next) = outcome.apply(&list) {
//!         println!("{} images", next.len());
//!     }
//! }
//! ```

pub mod config;
pub mod data_uri;
pub mod drag;
pub mod error;
pub mod reorder;
pub mod types;
pub mod upload;

// Re-exports
pub use config::UploadConfig;
pub use data_uri::{sniff_image_mime, DataUri};
pub use drag::{
    resolve_drop, DragCoordinator, DragEnd, DragInput, KeyCode, KeyboardSensor, Layout, Point,
    PointerSensor, Rect, SensorConfig,
};
pub use error::{UploadError, UploadResult};
pub use reorder::{array_move, remove_at};
pub use types::{EntryId, ImageEntry, ImageList};
pub use upload::{read_entry, read_selection, BatchOutcome, FileSource, FsSource, UploadBatch};
