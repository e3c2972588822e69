//! Error display component

use crate::components::icons::XIcon;
use dioxus::prelude::*;

/// Generic error banner with an optional dismiss button
#[component]
pub fn ErrorBanner(message: String, #[props(default)] on_dismiss: Option<EventHandler<()>>) -> Element {
    rsx! {
        div { class: "bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded mb-4 flex items-center justify-between gap-4",
            p { "{message}" }
            if let Some(dismiss) = on_dismiss {
                button {
                    class: "text-red-300 hover:text-white transition-colors",
                    aria_label: "Dismiss",
                    onclick: move |_| dismiss.call(()),
                    XIcon {}
                }
            }
        }
    }
}
