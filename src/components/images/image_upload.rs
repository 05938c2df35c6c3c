//! Image Upload Component
//!
//! File picker, thumbnail list, and drag-to-reorder in one widget.
//!
//! The widget owns no images. It renders the list it is given and answers
//! every change (append, reorder, removal) with one call to
//! `on_images_change` carrying the whole replacement list.

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use rfd::FileDialog;
use storyboard_core::{
    read_selection, resolve_drop, DragCoordinator, DragInput, EntryId, FsSource, ImageEntry,
    ImageList, KeyCode, Layout, Point,
};

use super::gesture::{measure_layout, pointer_point};
use super::mirror::ListMirror;
use super::sortable_image::SortableImage;
use super::upload_notice::UploadNotice;
use crate::context::use_uploader_config;

/// Image upload button with a sortable thumbnail list
///
/// # Examples
///
/// ```rust,ignore
/// let mut images = use_signal(ImageList::default);
///
/// rsx! {
///     ImageUploader {
///         images: images(),
///         on_images_change: move |next| images.set(next),
///     }
/// }
/// ```
#[component]
pub fn ImageUploader(
    /// Current images, in display order
    images: ImageList,
    /// Receives the full replacement list after every change
    on_images_change: EventHandler<ImageList>,
    /// Optional button label
    #[props(default = "Upload Images".to_string())]
    label: String,
) -> Element {
    let config = use_uploader_config();
    let thumb_size = config.thumb_size;
    let gap = config.gap;
    let sensors = config.sensors.clone();
    let upload = config.upload.clone();

    // Base for async completions that outlive this render
    let mut latest = use_signal(|| ListMirror::new(images.clone()));
    use_effect(use_reactive((&images,), move |(images,)| latest.write().sync(images)));

    let mut coordinator = use_signal(move || DragCoordinator::new(sensors));
    let mut layout = use_signal(Layout::new);
    let mut nodes: Signal<HashMap<EntryId, Rc<MountedData>>> = use_signal(HashMap::new);
    let mut pointer_held = use_signal(|| false);
    let mut uploads_in_flight = use_signal(|| 0usize);
    let mut failures: Signal<Vec<String>> = use_signal(Vec::new);

    // Forget handles of thumbnails that left the list
    use_effect(use_reactive((&images,), move |(images,)| {
        nodes.write().retain(|id, _| images.position(id).is_some());
    }));

    let handle_upload = move |_| {
        let upload = upload.clone();
        spawn(async move {
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let dialog_config = upload.clone();
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", dialog_config.extension_refs().as_slice())
                    .set_title("Select Images")
                    .pick_files()
            })
            .await;

            let paths = match picked {
                Ok(Some(paths)) if !paths.is_empty() => paths,
                Ok(_) => {
                    // User cancelled
                    return;
                }
                Err(e) => {
                    tracing::error!("File picker failed: {}", e);
                    failures.write().push(format!("File picker error: {}", e));
                    return;
                }
            };

            uploads_in_flight += 1;
            let outcome = read_selection(FsSource, paths, &upload).await;
            uploads_in_flight -= 1;

            if !outcome.failures.is_empty() {
                failures
                    .write()
                    .extend(outcome.failures.iter().map(|e| e.to_string()));
            }

            let next = outcome.apply(latest.peek().base());
            if let Some(next) = next {
                let next = latest.write().commit(next);
                on_images_change.call(next);
            }
        });
    };

    // Release, cancel, or key press that may finish a drag
    let mut dispatch = move |input: DragInput| {
        let current = layout.peek().clone();
        let end = coordinator.write().handle(input, &current);
        let Some(end) = end else {
            return;
        };
        let next = resolve_drop(latest.peek().base(), &end);
        if let Some(next) = next {
            let next = latest.write().commit(next);
            on_images_change.call(next);
        }
    };

    // Starting a gesture needs fresh measurements first
    let begin = move |input: DragInput| {
        let order = latest.peek().base().ids();
        let measured_nodes = nodes.peek().clone();
        spawn(async move {
            let measured = measure_layout(order, measured_nodes).await;
            let is_pointer = matches!(input, DragInput::PointerDown { .. });
            if is_pointer && !pointer_held() {
                // released before measurement finished: it was a click
                return;
            }
            coordinator.write().handle(input, &measured);
            layout.set(measured);
        });
    };

    let drag = coordinator.read();
    let active = drag.active().filter(|_| drag.is_dragging());
    let delta = drag.delta();
    let offsets: HashMap<EntryId, Point> = drag.offsets(&layout.read()).into_iter().collect();
    let is_dragging = drag.is_dragging();
    drop(drag);

    let thumbnails: Vec<(ImageEntry, Point, bool)> = images
        .iter()
        .map(|entry| {
            let dragging = active == Some(entry.id);
            let offset = if dragging {
                delta
            } else {
                offsets.get(&entry.id).copied().unwrap_or(Point::ZERO)
            };
            (entry.clone(), offset, dragging)
        })
        .collect();

    let list_class = if is_dragging {
        "sortable-list sortable-list--dragging"
    } else {
        "sortable-list"
    };
    let in_flight = uploads_in_flight();

    rsx! {
        div { class: "image-upload",
            button {
                class: "image-upload-btn",
                onclick: handle_upload,
                span { class: "image-upload-btn__icon", "⇪" }
                if in_flight > 0 {
                    "Uploading..."
                } else {
                    "{label}"
                }
            }

            UploadNotice {
                messages: failures(),
                on_dismiss: move |_| failures.write().clear(),
            }

            if !images.is_empty() {
                div { class: "image-upload__board",
                    p { class: "image-upload__hint", "Drag to reorder • Click × to remove" }
                    div {
                        class: "{list_class}",
                        style: "gap: {gap}px;",
                        onpointermove: move |evt| {
                            if !coordinator.peek().is_idle() {
                                dispatch(DragInput::PointerMove { point: pointer_point(&evt) });
                            }
                        },
                        onpointerup: move |_| {
                            pointer_held.set(false);
                            dispatch(DragInput::PointerUp);
                        },
                        onpointerleave: move |_| {
                            pointer_held.set(false);
                            dispatch(DragInput::PointerCancel);
                        },
                        for (entry, offset, dragging) in thumbnails {
                            SortableImage {
                                key: "{entry.id}",
                                entry: entry.clone(),
                                size: thumb_size,
                                offset: offset,
                                dragging: dragging,
                                on_mounted: {
                                    let id = entry.id;
                                    move |node: Rc<MountedData>| {
                                        nodes.write().insert(id, node);
                                    }
                                },
                                on_pointer_down: {
                                    let id = entry.id;
                                    move |point: Point| {
                                        pointer_held.set(true);
                                        begin(DragInput::PointerDown { target: id, point });
                                    }
                                },
                                on_key: {
                                    let id = entry.id;
                                    move |key: KeyCode| {
                                        let input = DragInput::Key { target: id, key };
                                        if coordinator.peek().is_idle() {
                                            begin(input);
                                        } else {
                                            dispatch(input);
                                        }
                                    }
                                },
                                on_remove: {
                                    let id = entry.id;
                                    move |_| {
                                        let next = {
                                            let mirror = latest.peek();
                                            let base = mirror.base();
                                            base.position(&id).and_then(|index| base.removed(index))
                                        };
                                        if let Some(next) = next {
                                            let next = latest.write().commit(next);
                                            on_images_change.call(next);
                                        }
                                    }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
