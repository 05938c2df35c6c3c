//! Drag coordination for the thumbnail list
//!
//! Pointer and keyboard gestures arrive as [`DragInput`] values, are checked
//! against the measured [`Layout`], and end as a [`DragEnd`] that
//! [`resolve_drop`] turns into a reordered list.

pub mod collision;
pub mod coordinator;
pub mod geometry;
pub mod keyboard;
pub mod layout;
pub mod sensor;
pub mod sorting;

pub use collision::{closest_center, nearest};
pub use coordinator::{resolve_drop, DragCoordinator, DragEnd, DragInput, Modality};
pub use geometry::{Point, Rect};
pub use keyboard::{sortable_coordinates, target_in_direction};
pub use layout::Layout;
pub use sensor::{Direction, KeyCode, KeyboardSensor, PointerSensor, SensorConfig};
pub use sorting::sorting_offsets;
