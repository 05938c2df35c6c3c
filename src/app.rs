use dioxus::prelude::*;
use storyboard_core::{read_selection, FsSource, ImageList};

use crate::components::images::ImageUploader;
use crate::context::{get_config, get_preload};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the image list and hands it to the uploader, which only ever
/// answers with whole replacement lists.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(get_config);
    let mut images: Signal<ImageList> = use_signal(ImageList::default);

    // Load --open files on mount
    use_effect(move || {
        let paths = get_preload();
        if paths.is_empty() {
            return;
        }
        let upload = config.upload.clone();
        spawn(async move {
            let outcome = read_selection(FsSource, paths, &upload).await;
            for failure in &outcome.failures {
                tracing::error!("Startup image skipped: {}", failure);
            }
            let next = outcome.apply(&images.peek());
            if let Some(next) = next {
                images.set(next);
            }
        });
    });

    let on_images_change = move |next: ImageList| {
        tracing::debug!("Board now holds {} image(s)", next.len());
        images.set(next);
    };

    let count = images.read().len();

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "storyboard",
            header { class: "storyboard__header",
                h1 { class: "storyboard__title", "Storyboard" }
                span { class: "storyboard__count",
                    if count == 1 { "1 image" } else { "{count} images" }
                }
            }
            ImageUploader {
                images: images(),
                on_images_change: on_images_change,
            }
        }
    }
}
