use dioxus::prelude::*;

/// Dismissable list of files that could not be added.
#[component]
pub fn UploadNotice(messages: Vec<String>, on_dismiss: EventHandler<()>) -> Element {
    if messages.is_empty() {
        return rsx! {};
    }

    let heading = if messages.len() == 1 {
        "1 file could not be added".to_string()
    } else {
        format!("{} files could not be added", messages.len())
    };

    rsx! {
        div { class: "upload-notice", role: "alert",
            div { class: "upload-notice__header",
                span { class: "upload-notice__title", "⚠️ {heading}" }
                button {
                    class: "upload-notice__dismiss",
                    "aria-label": "Dismiss",
                    onclick: move |_| on_dismiss.call(()),
                    "\u{00D7}"
                }
            }
            ul { class: "upload-notice__list",
                for (i, message) in messages.iter().enumerate() {
                    li { key: "{i}", "{message}" }
                }
            }
        }
    }
}
