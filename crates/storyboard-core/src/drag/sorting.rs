//! Where the other thumbnails slide to while a drag hovers over a slot
//!
//! Each item moves onto the rect of the slot it would occupy if the drop
//! happened now. Using measured rects rather than a fixed width keeps this
//! correct for wrapped rows.

use crate::reorder::array_move;
use crate::types::EntryId;

use super::geometry::Point;
use super::layout::Layout;

/// Render offset for every non-active item in `layout`.
///
/// The active item is skipped: it follows the drag delta instead. Returns an
/// empty vector when either id is unmeasured.
pub fn sorting_offsets(layout: &Layout, active: &EntryId, over: &EntryId) -> Vec<(EntryId, Point)> {
    let (Some(from), Some(to)) = (layout.index_of(active), layout.index_of(over)) else {
        return Vec::new();
    };

    let slots: Vec<_> = layout.iter().map(|(_, rect)| rect.origin).collect();
    let order: Vec<usize> = array_move(&(0..slots.len()).collect::<Vec<_>>(), from, to);

    order
        .iter()
        .enumerate()
        .filter(|(_, original)| **original != from)
        .filter_map(|(new_slot, original)| {
            let (id, rect) = layout.iter().nth(*original)?;
            Some((*id, slots[new_slot] - rect.origin))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::geometry::Rect;

    fn row(n: usize) -> (Vec<EntryId>, Layout) {
        let ids: Vec<EntryId> = (0..n).map(|_| EntryId::new()).collect();
        let layout = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, Rect::new(i as f64 * 100.0, 0.0, 90.0, 90.0)))
            .collect();
        (ids, layout)
    }

    fn offset_of(offsets: &[(EntryId, Point)], id: &EntryId) -> Point {
        offsets.iter().find(|(i, _)| i == id).map(|(_, p)| *p).unwrap()
    }

    #[test]
    fn dragging_right_shifts_intermediates_left() {
        let (ids, layout) = row(4);
        let offsets = sorting_offsets(&layout, &ids[0], &ids[2]);
        assert_eq!(offsets.len(), 3);
        assert_eq!(offset_of(&offsets, &ids[1]), Point::new(-100.0, 0.0));
        assert_eq!(offset_of(&offsets, &ids[2]), Point::new(-100.0, 0.0));
        assert_eq!(offset_of(&offsets, &ids[3]), Point::ZERO);
    }

    #[test]
    fn dragging_left_shifts_intermediates_right() {
        let (ids, layout) = row(4);
        let offsets = sorting_offsets(&layout, &ids[3], &ids[1]);
        assert_eq!(offset_of(&offsets, &ids[0]), Point::ZERO);
        assert_eq!(offset_of(&offsets, &ids[1]), Point::new(100.0, 0.0));
        assert_eq!(offset_of(&offsets, &ids[2]), Point::new(100.0, 0.0));
    }

    #[test]
    fn hovering_own_slot_moves_nothing() {
        let (ids, layout) = row(3);
        let offsets = sorting_offsets(&layout, &ids[1], &ids[1]);
        assert!(offsets.iter().all(|(_, p)| *p == Point::ZERO));
    }

    #[test]
    fn wrapped_rows_use_measured_slots() {
        let ids: Vec<EntryId> = (0..3).map(|_| EntryId::new()).collect();
        let layout = Layout::new()
            .with(ids[0], Rect::new(0.0, 0.0, 90.0, 90.0))
            .with(ids[1], Rect::new(100.0, 0.0, 90.0, 90.0))
            .with(ids[2], Rect::new(0.0, 100.0, 90.0, 90.0));
        let offsets = sorting_offsets(&layout, &ids[0], &ids[2]);
        // item 2 wraps back up to the end of the first row
        assert_eq!(offset_of(&offsets, &ids[2]), Point::new(100.0, -100.0));
        assert_eq!(offset_of(&offsets, &ids[1]), Point::new(-100.0, 0.0));
    }

    #[test]
    fn unknown_ids_yield_nothing() {
        let (ids, layout) = row(2);
        assert!(sorting_offsets(&layout, &ids[0], &EntryId::new()).is_empty());
    }
}
