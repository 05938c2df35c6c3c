//! UI Components for Storyboard.

pub mod images;
