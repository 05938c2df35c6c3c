//! Bridging between Dioxus events and the headless drag coordinator

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use storyboard_core::{EntryId, KeyCode, Layout, Point, Rect};

/// Map a keyboard key onto the keys the drag sensor understands
pub fn key_code(key: &Key) -> Option<KeyCode> {
    match key {
        Key::Enter => Some(KeyCode::Enter),
        Key::Escape => Some(KeyCode::Escape),
        Key::Tab => Some(KeyCode::Tab),
        Key::ArrowLeft => Some(KeyCode::ArrowLeft),
        Key::ArrowRight => Some(KeyCode::ArrowRight),
        Key::ArrowUp => Some(KeyCode::ArrowUp),
        Key::ArrowDown => Some(KeyCode::ArrowDown),
        Key::Character(c) if c == " " => Some(KeyCode::Space),
        _ => None,
    }
}

/// Client position of a pointer event
pub fn pointer_point(evt: &PointerEvent) -> Point {
    let p = evt.client_coordinates();
    Point::new(p.x, p.y)
}

/// Inline style moving a thumbnail off its resting slot
pub fn transform_style(offset: Point, animate: bool) -> String {
    let transition = if animate {
        "transition: transform 200ms ease;"
    } else {
        ""
    };
    format!(
        "transform: translate3d({}px, {}px, 0);{}",
        offset.x, offset.y, transition
    )
}

/// Measure the mounted thumbnails, in list order.
///
/// Thumbnails that are not mounted or fail to report a rect are left out
/// and cannot be dropped onto.
pub async fn measure_layout(order: Vec<EntryId>, nodes: HashMap<EntryId, Rc<MountedData>>) -> Layout {
    let mut layout = Layout::new();
    for id in order {
        let Some(node) = nodes.get(&id) else {
            continue;
        };
        match node.get_client_rect().await {
            Ok(rect) => layout.push(
                id,
                Rect::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height),
            ),
            Err(e) => tracing::debug!("Could not measure thumbnail {}: {:?}", id, e),
        }
    }
    layout
}
