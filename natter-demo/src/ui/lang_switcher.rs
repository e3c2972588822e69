//! Language switcher

use crate::storage;
use crate::ui::ToggleButton;
use dioxus::prelude::*;
use natter_ui::Lang;

/// Buttons for every supported language, writing the app-wide language
/// signal and persisting the choice.
#[component]
pub fn LangSwitcher() -> Element {
    let mut lang = use_context::<Signal<Lang>>();

    rsx! {
        div { class: "flex gap-2",
            for option in Lang::ALL {
                ToggleButton {
                    selected: lang() == option,
                    label: option.display_name(),
                    onclick: move |_| {
                        lang.set(option);
                        storage::set_string(storage::LANG_KEY, option.code());
                    },
                }
            }
        }
    }
}
