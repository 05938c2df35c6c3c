//! Drag coordinator state machine
//!
//! ```text
//! Idle --press--> Pending --moved past threshold--> Dragging --release--> Idle (DragEnd)
//!   |                 \--release-----------------------------------------> Idle
//!   \--start key-------------------------------------> Dragging --end key--> Idle (DragEnd)
//!                                                          \--cancel------> Idle
//! ```
//!
//! All transient gesture state lives here. The image list itself is never
//! touched; a drop yields a [`DragEnd`] that [`resolve_drop`] turns into a
//! replacement list.

use crate::types::{EntryId, ImageList};

use super::collision::nearest;
use super::geometry::{Point, Rect};
use super::keyboard::sortable_coordinates;
use super::layout::Layout;
use super::sensor::{KeyCode, SensorConfig};
use super::sorting::sorting_offsets;

/// A device-independent gesture event
#[derive(Debug, Clone, PartialEq)]
pub enum DragInput {
    PointerDown { target: EntryId, point: Point },
    PointerMove { point: Point },
    PointerUp,
    PointerCancel,
    Key { target: EntryId, key: KeyCode },
}

/// Which sensor owns the current drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Pointer,
    Keyboard,
}

/// Result of a completed gesture. `over` is `None` when nothing was under
/// the dragged thumbnail at release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEnd {
    pub active: EntryId,
    pub over: Option<EntryId>,
}

#[derive(Debug, Clone, PartialEq)]
enum DragState {
    Idle,
    Pending {
        active: EntryId,
        origin: Point,
    },
    Dragging {
        active: EntryId,
        modality: Modality,
        initial: Rect,
        origin: Point,
        delta: Point,
        over: Option<EntryId>,
    },
}

#[derive(Debug, Clone)]
pub struct DragCoordinator {
    sensors: SensorConfig,
    state: DragState,
}

impl DragCoordinator {
    pub fn new(sensors: SensorConfig) -> Self {
        Self {
            sensors,
            state: DragState::Idle,
        }
    }

    pub fn sensors(&self) -> &SensorConfig {
        &self.sensors
    }

    pub fn is_idle(&self) -> bool {
        self.state == DragState::Idle
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn modality(&self) -> Option<Modality> {
        match &self.state {
            DragState::Dragging { modality, .. } => Some(*modality),
            _ => None,
        }
    }

    /// The item being dragged (or pressed, while pending)
    pub fn active(&self) -> Option<EntryId> {
        match &self.state {
            DragState::Idle => None,
            DragState::Pending { active, .. } | DragState::Dragging { active, .. } => Some(*active),
        }
    }

    /// The droppable currently nearest the dragged rect
    pub fn over(&self) -> Option<EntryId> {
        match &self.state {
            DragState::Dragging { over, .. } => *over,
            _ => None,
        }
    }

    /// Offset of the dragged thumbnail from its resting place
    pub fn delta(&self) -> Point {
        match &self.state {
            DragState::Dragging { delta, .. } => *delta,
            _ => Point::ZERO,
        }
    }

    /// Render offsets for the items that make room for the dragged one
    pub fn offsets(&self, layout: &Layout) -> Vec<(EntryId, Point)> {
        match &self.state {
            DragState::Dragging {
                active,
                over: Some(over),
                ..
            } => sorting_offsets(layout, active, over),
            _ => Vec::new(),
        }
    }

    /// Abandon any gesture in progress without producing a drop
    pub fn reset(&mut self) {
        if !self.is_idle() {
            tracing::debug!("Drag cancelled");
        }
        self.state = DragState::Idle;
    }

    /// Feed one input. Returns a [`DragEnd`] when the input completes a drop.
    pub fn handle(&mut self, input: DragInput, layout: &Layout) -> Option<DragEnd> {
        match input {
            DragInput::PointerDown { target, point } => {
                self.pointer_down(target, point, layout);
                None
            }
            DragInput::PointerMove { point } => {
                self.pointer_move(point, layout);
                None
            }
            DragInput::PointerUp => match self.state {
                DragState::Dragging {
                    modality: Modality::Pointer,
                    ..
                } => self.finish(),
                DragState::Pending { .. } => {
                    self.state = DragState::Idle;
                    None
                }
                _ => None,
            },
            DragInput::PointerCancel => {
                if self.modality() != Some(Modality::Keyboard) {
                    self.reset();
                }
                None
            }
            DragInput::Key { target, key } => self.key(target, key, layout),
        }
    }

    fn pointer_down(&mut self, target: EntryId, point: Point, layout: &Layout) {
        if !self.is_idle() || layout.rect_of(&target).is_none() {
            return;
        }
        self.state = DragState::Pending {
            active: target,
            origin: point,
        };
        if self.sensors.pointer.activation_distance <= 0.0 {
            self.start(target, Modality::Pointer, point, layout);
        }
    }

    fn pointer_move(&mut self, point: Point, layout: &Layout) {
        match self.state.clone() {
            DragState::Pending { active, origin } => {
                if origin.distance(&point) >= self.sensors.pointer.activation_distance {
                    self.start(active, Modality::Pointer, origin, layout);
                    self.update(point - origin, layout);
                }
            }
            DragState::Dragging {
                modality: Modality::Pointer,
                origin,
                ..
            } => self.update(point - origin, layout),
            _ => {}
        }
    }

    fn key(&mut self, target: EntryId, key: KeyCode, layout: &Layout) -> Option<DragEnd> {
        let keyboard = self.sensors.keyboard.clone();
        match self.state.clone() {
            DragState::Idle => {
                if keyboard.start.contains(&key) && layout.rect_of(&target).is_some() {
                    self.start(target, Modality::Keyboard, Point::ZERO, layout);
                }
                None
            }
            DragState::Pending { .. } => None,
            DragState::Dragging { modality, initial, delta, .. } => {
                if keyboard.cancel.contains(&key) {
                    self.reset();
                    return None;
                }
                if modality != Modality::Keyboard {
                    return None;
                }
                if keyboard.end.contains(&key) {
                    return self.finish();
                }
                if let Some(direction) = key.direction() {
                    let current = initial.translate(delta);
                    let next = sortable_coordinates(direction, &current, layout, keyboard.step);
                    self.update(next - initial.origin, layout);
                }
                None
            }
        }
    }

    fn start(&mut self, active: EntryId, modality: Modality, origin: Point, layout: &Layout) {
        let Some(initial) = layout.rect_of(&active) else {
            self.state = DragState::Idle;
            return;
        };
        tracing::debug!("Drag started on {} ({:?})", active, modality);
        self.state = DragState::Dragging {
            active,
            modality,
            initial,
            origin,
            delta: Point::ZERO,
            over: nearest(&initial, layout),
        };
    }

    fn update(&mut self, new_delta: Point, layout: &Layout) {
        if let DragState::Dragging {
            initial,
            delta,
            over,
            ..
        } = &mut self.state
        {
            *delta = new_delta;
            *over = nearest(&initial.translate(new_delta), layout);
        }
    }

    fn finish(&mut self) -> Option<DragEnd> {
        let end = match &self.state {
            DragState::Dragging { active, over, .. } => Some(DragEnd {
                active: *active,
                over: *over,
            }),
            _ => None,
        };
        self.state = DragState::Idle;
        if let Some(end) = &end {
            tracing::debug!("Dropped {} over {:?}", end.active, end.over);
        }
        end
    }
}

impl Default for DragCoordinator {
    fn default() -> Self {
        Self::new(SensorConfig::default())
    }
}

/// Turn a drop into a replacement list.
///
/// `None` means "leave the list alone and do not notify the owner": no
/// target, a drop onto itself, or ids that left the list mid-drag.
pub fn resolve_drop(list: &ImageList, end: &DragEnd) -> Option<ImageList> {
    let over = end.over?;
    list.moved_by_id(&end.active, &over)
}
