//! Collision detection: nearest center wins

use crate::types::EntryId;

use super::geometry::Rect;
use super::layout::Layout;

/// Droppables sorted by the distance between their center and the center of
/// the dragged rect, nearest first. Ties keep list order.
pub fn closest_center(collision_rect: &Rect, layout: &Layout) -> Vec<(EntryId, f64)> {
    let center = collision_rect.center();
    let mut hits: Vec<(EntryId, f64)> = layout
        .iter()
        .map(|(id, rect)| (*id, rect.center().distance(&center)))
        .collect();
    hits.sort_by(|a, b| a.1.total_cmp(&b.1));
    hits
}

/// The single nearest droppable, if any are measured
pub fn nearest(collision_rect: &Rect, layout: &Layout) -> Option<EntryId> {
    closest_center(collision_rect, layout).first().map(|(id, _)| *id)
}
