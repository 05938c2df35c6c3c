//! Core types for the storyboard image list

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::data_uri::DataUri;
use crate::reorder::{array_move, remove_at};

/// Unique identifier for an image entry
///
/// Identity is synthetic rather than derived from the image bytes, so two
/// uploads of the same file are still two distinct, independently movable
/// entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub Ulid);

impl EntryId {
    /// Create a new EntryId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Create an EntryId from a ULID
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Parse from string representation
    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One uploaded image: identity, source file name, and encoded bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub id: EntryId,
    pub name: String,
    pub uri: DataUri,
}

impl ImageEntry {
    /// Create an entry with a fresh id
    pub fn new(name: impl Into<String>, uri: DataUri) -> Self {
        Self {
            id: EntryId::new(),
            name: name.into(),
            uri,
        }
    }
}

/// Ordered sequence of image entries.
///
/// The list is never edited in place. Every operation returns a new list that
/// the owner swaps in wholesale, so cloning is a reference count bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageList(Arc<[ImageEntry]>);

impl ImageList {
    pub fn new(entries: Vec<ImageEntry>) -> Self {
        Self(entries.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageEntry> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ImageEntry> {
        self.0.get(index)
    }

    pub fn as_slice(&self) -> &[ImageEntry] {
        &self.0
    }

    pub fn ids(&self) -> Vec<EntryId> {
        self.0.iter().map(|e| e.id).collect()
    }

    /// Position of the entry with the given id
    pub fn position(&self, id: &EntryId) -> Option<usize> {
        self.0.iter().position(|e| &e.id == id)
    }

    /// `self ++ entries`. Existing entries keep their positions.
    pub fn appended(&self, entries: impl IntoIterator<Item = ImageEntry>) -> Self {
        let mut out = self.0.to_vec();
        out.extend(entries);
        Self::new(out)
    }

    /// Move the entry at `from` to `to`, or `None` if either index is out of
    /// range or they are equal.
    pub fn moved(&self, from: usize, to: usize) -> Option<Self> {
        if from == to || from >= self.len() || to >= self.len() {
            return None;
        }
        Some(Self::new(array_move(&self.0, from, to)))
    }

    /// Move `active` to where `over` currently sits.
    ///
    /// `None` when the ids are equal or either is no longer in the list.
    pub fn moved_by_id(&self, active: &EntryId, over: &EntryId) -> Option<Self> {
        if active == over {
            return None;
        }
        let from = self.position(active)?;
        let to = self.position(over)?;
        self.moved(from, to)
    }

    /// Drop the entry at `index`, or `None` if out of range
    pub fn removed(&self, index: usize) -> Option<Self> {
        if index >= self.len() {
            return None;
        }
        Some(Self::new(remove_at(&self.0, index)))
    }
}

impl Default for ImageList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<ImageEntry>> for ImageList {
    fn from(entries: Vec<ImageEntry>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<ImageEntry> for ImageList {
    fn from_iter<I: IntoIterator<Item = ImageEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ImageList {
    type Item = &'a ImageEntry;
    type IntoIter = std::slice::Iter<'a, ImageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> ImageEntry {
        ImageEntry::new(name, DataUri::encode("image/png", name.as_bytes()))
    }

    fn names(list: &ImageList) -> Vec<&str> {
        list.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_entry_ids_are_unique() {
        let a = entry("same");
        let b = entry("same");
        assert_eq!(a.uri, b.uri);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_entry_id_string_roundtrip() {
        let id = EntryId::new();
        assert_eq!(EntryId::from_string(&id.to_string()).unwrap(), id);
        assert!(EntryId::from_string("not-a-ulid").is_err());
    }

    #[test]
    fn test_move_first_to_last() {
        let list: ImageList = vec![entry("a"), entry("b"), entry("c")].into();
        let moved = list.moved(0, 2).unwrap();
        assert_eq!(names(&moved), vec!["b", "c", "a"]);
        // original untouched
        assert_eq!(names(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_move_same_index_is_none() {
        let list: ImageList = vec![entry("a"), entry("b")].into();
        assert!(list.moved(1, 1).is_none());
        assert!(list.moved(0, 9).is_none());
    }

    #[test]
    fn test_move_by_id() {
        let list: ImageList = vec![entry("a"), entry("b"), entry("c")].into();
        let ids = list.ids();
        let moved = list.moved_by_id(&ids[2], &ids[0]).unwrap();
        assert_eq!(names(&moved), vec!["c", "a", "b"]);

        assert!(list.moved_by_id(&ids[1], &ids[1]).is_none());
        assert!(list.moved_by_id(&ids[1], &EntryId::new()).is_none());
    }

    #[test]
    fn test_remove_middle() {
        let list: ImageList = vec![entry("a"), entry("b"), entry("c")].into();
        let removed = list.removed(1).unwrap();
        assert_eq!(names(&removed), vec!["a", "c"]);
        assert!(list.removed(3).is_none());
    }

    #[test]
    fn test_duplicates_move_independently() {
        let list: ImageList = vec![entry("x"), entry("x"), entry("y")].into();
        let ids = list.ids();
        let moved = list.moved_by_id(&ids[0], &ids[2]).unwrap();
        assert_eq!(moved.ids(), vec![ids[1], ids[2], ids[0]]);
        assert_ne!(moved, list);
    }

    #[test]
    fn test_append_keeps_prefix() {
        let list: ImageList = vec![entry("a")].into();
        let next = list.appended(vec![entry("b"), entry("c")]);
        assert_eq!(names(&next), vec!["a", "b", "c"]);
        assert_eq!(next.get(0), list.get(0));
    }
}
