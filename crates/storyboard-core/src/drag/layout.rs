//! Measured thumbnail positions, in list order

use crate::types::EntryId;

use super::geometry::Rect;

/// Client rects of the thumbnails currently on screen.
///
/// Only measured items are droppable. An item that is scrolled away or not
/// yet mounted simply has no rect here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    items: Vec<(EntryId, Rect)>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: EntryId, rect: Rect) {
        self.items.push((id, rect));
    }

    pub fn with(mut self, id: EntryId, rect: Rect) -> Self {
        self.push(id, rect);
        self
    }

    pub fn rect_of(&self, id: &EntryId) -> Option<Rect> {
        self.items.iter().find(|(i, _)| i == id).map(|(_, r)| *r)
    }

    pub fn index_of(&self, id: &EntryId) -> Option<usize> {
        self.items.iter().position(|(i, _)| i == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(EntryId, Rect)> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<(EntryId, Rect)> for Layout {
    fn from_iter<I: IntoIterator<Item = (EntryId, Rect)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
