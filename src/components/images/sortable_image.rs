//! Sortable Image Component
//!
//! One draggable, focusable thumbnail with a hover-revealed remove button.

use std::rc::Rc;

use dioxus::prelude::*;
use storyboard_core::{ImageEntry, KeyCode, Point};

use super::gesture::{key_code, pointer_point, transform_style};

/// A single thumbnail in the reorderable list.
///
/// Gestures are reported upward; the thumbnail holds no drag state.
/// The remove button swallows its own press and click so removing never
/// starts a drag.
#[component]
pub fn SortableImage(
    entry: ImageEntry,
    /// Edge length in pixels
    size: u32,
    /// Render offset while a drag is in progress
    offset: Point,
    /// This thumbnail is the one being dragged
    dragging: bool,
    on_mounted: EventHandler<Rc<MountedData>>,
    on_pointer_down: EventHandler<Point>,
    on_key: EventHandler<KeyCode>,
    on_remove: EventHandler<()>,
) -> Element {
    let class = if dragging {
        "sortable-image sortable-image--dragging"
    } else {
        "sortable-image"
    };
    let style = format!(
        "width: {size}px; height: {size}px; {}",
        transform_style(offset, !dragging)
    );
    let pressed = if dragging { "true" } else { "false" };
    let title = format!("{} ({} KB)", entry.name, entry.uri.byte_len().div_ceil(1024));

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            tabindex: "0",
            role: "button",
            "aria-roledescription": "sortable",
            "aria-pressed": pressed,
            title: "{title}",
            onmounted: move |evt| on_mounted.call(evt.data()),
            onpointerdown: move |evt| on_pointer_down.call(pointer_point(&evt)),
            onkeydown: move |evt| {
                if let Some(key) = key_code(&evt.key()) {
                    if key != KeyCode::Tab || dragging {
                        evt.prevent_default();
                    }
                    on_key.call(key);
                }
            },
            img {
                class: "sortable-image__img",
                src: "{entry.uri}",
                alt: "Uploaded",
                draggable: "false",
            }
            button {
                class: "sortable-image__remove",
                "aria-label": "Remove image",
                title: "remove",
                onpointerdown: move |evt| evt.stop_propagation(),
                onkeydown: move |evt| evt.stop_propagation(),
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_remove.call(());
                },
                "\u{00D7}"
            }
        }
    }
}
