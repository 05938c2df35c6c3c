//! The widget's view of the list between its own changes and the owner's
//! next render

use storyboard_core::ImageList;

/// Base list for every change the widget computes.
///
/// The owner's prop arrives a render late. Changes the widget makes itself
/// are recorded here at once, so an upload or drop that lands in between
/// builds on them instead of on the stale prop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListMirror {
    list: ImageList,
}

impl ListMirror {
    pub fn new(list: ImageList) -> Self {
        Self { list }
    }

    pub fn base(&self) -> &ImageList {
        &self.list
    }

    /// The owner rendered with `list`
    pub fn sync(&mut self, list: ImageList) {
        self.list = list;
    }

    /// Record a change the widget is about to report, returning it for the callback.
    pub fn commit(&mut self, next: ImageList) -> ImageList {
        self.list = next.clone();
        next
    }
}
