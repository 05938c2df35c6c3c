//! Keyboard coordinate stepping for sortable lists
//!
//! An arrow key jumps the dragged rect onto the nearest droppable that lies
//! in that direction. With nothing there, the rect steps a fixed distance so
//! the gesture still visibly responds.

use crate::types::EntryId;

use super::collision::closest_center;
use super::geometry::{Point, Rect};
use super::layout::Layout;
use super::sensor::Direction;

/// New top-left for the dragged rect after one arrow press.
pub fn sortable_coordinates(
    direction: Direction,
    collision_rect: &Rect,
    layout: &Layout,
    step: f64,
) -> Point {
    match nearest_ahead(direction, collision_rect, layout) {
        Some((_, rect)) => rect.origin,
        None => collision_rect.origin + step_delta(direction, step),
    }
}

/// The droppable an arrow press would land on, if any
pub fn target_in_direction(
    direction: Direction,
    collision_rect: &Rect,
    layout: &Layout,
) -> Option<EntryId> {
    nearest_ahead(direction, collision_rect, layout).map(|(id, _)| id)
}

fn nearest_ahead(direction: Direction, collision_rect: &Rect, layout: &Layout) -> Option<(EntryId, Rect)> {
    let ahead: Layout = layout
        .iter()
        .filter(|(_, rect)| lies_ahead(direction, collision_rect, rect))
        .copied()
        .collect();
    let (id, _) = closest_center(collision_rect, &ahead).into_iter().next()?;
    ahead.rect_of(&id).map(|rect| (id, rect))
}

fn lies_ahead(direction: Direction, from: &Rect, candidate: &Rect) -> bool {
    match direction {
        Direction::Right => candidate.left() > from.left(),
        Direction::Left => candidate.left() < from.left(),
        Direction::Down => candidate.top() > from.top(),
        Direction::Up => candidate.top() < from.top(),
    }
}

fn step_delta(direction: Direction, step: f64) -> Point {
    match direction {
        Direction::Right => Point::new(step, 0.0),
        Direction::Left => Point::new(-step, 0.0),
        Direction::Down => Point::new(0.0, step),
        Direction::Up => Point::new(0.0, -step),
    }
}
