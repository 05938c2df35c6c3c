//! Theme for Storyboard.

mod styles;

pub use styles::GLOBAL_STYLES;
