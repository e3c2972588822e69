//! Modal dialog shell
//!
//! Backdrop-plus-panel chrome shared by dialogs. Clicking the backdrop or the
//! corner close button dismisses, as does Escape. Enter is forwarded through
//! `on_enter` so a dialog can treat it as its primary action. Hosts decide
//! whether the dialog is shown by rendering it conditionally.

use crate::components::button::ChromelessButton;
use crate::components::icons::XIcon;
use crate::i18n::{use_lang, UiText};
use dioxus::prelude::*;

#[component]
pub fn DialogShell(
    title: String,
    on_dismiss: EventHandler<()>,
    #[props(default)] on_enter: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let lang = use_lang();

    let on_keydown = move |evt: KeyboardEvent| match evt.key() {
        Key::Escape => on_dismiss.call(()),
        Key::Enter => {
            if let Some(handler) = on_enter {
                handler.call(());
            }
        }
        _ => {}
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center z-50",
            onclick: move |_| on_dismiss.call(()),

            div {
                class: "bg-gray-800 rounded-lg p-6 max-w-md w-full mx-4 relative",
                role: "dialog",
                aria_modal: "true",
                tabindex: "-1",
                onclick: move |evt| evt.stop_propagation(),
                onkeydown: on_keydown,

                ChromelessButton {
                    class: Some("absolute top-4 right-4 text-gray-400 hover:text-white transition-colors".to_string()),
                    aria_label: Some(lang.text(UiText::CloseDialog).to_string()),
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        on_dismiss.call(());
                    },
                    XIcon { class: "w-5 h-5" }
                }

                h2 { class: "text-xl font-bold text-white mb-4 pr-8", "{title}" }

                {children}
            }
        }
    }
}
