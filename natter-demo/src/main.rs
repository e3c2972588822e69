//! natter demo - Web demo of the natter UI components
//!
//! Serves an index of component mocks plus a small roster app that hosts
//! the member action confirmation dialog end to end.

mod demo_data;
mod mocks;
mod pages;
mod storage;
mod ui;

use dioxus::prelude::*;
use natter_ui::Lang;
use pages::{DemoLayout, MockConfirmDialog, MockIndex, Roster};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    MockIndex {},

    #[layout(DemoLayout)]
        #[route("/roster")]
        Roster {},
    #[end_layout]

    #[route("/confirm-dialog")]
    MockConfirmDialog {},
}

/// Language saved by the switcher, falling back to English.
fn initial_lang() -> Lang {
    storage::get_string(storage::LANG_KEY)
        .and_then(|code| Lang::from_code(&code))
        .unwrap_or_default()
}

#[component]
fn App() -> Element {
    let lang = use_signal(initial_lang);
    use_context_provider(|| lang);
    let code = lang().code();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-gray-900", lang: "{code}", Router::<Route> {} }
    }
}

fn main() {
    dioxus::launch(App);
}
