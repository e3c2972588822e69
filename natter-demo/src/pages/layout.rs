//! Shared chrome for the demo app pages

use crate::ui::LangSwitcher;
use crate::Route;
use dioxus::prelude::*;
use natter_ui::UsersIcon;

#[component]
pub fn DemoLayout() -> Element {
    let route = use_route::<Route>();
    let roster_class = if matches!(route, Route::Roster {}) {
        "text-white font-medium"
    } else {
        "text-gray-400 hover:text-white transition-colors"
    };

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white",
            header { class: "bg-gray-800 border-b border-gray-700",
                div { class: "max-w-4xl mx-auto px-6 py-3 flex items-center gap-6",
                    Link {
                        class: "flex items-center gap-2 text-white font-semibold",
                        to: Route::MockIndex {},
                        UsersIcon { class: "w-5 h-5" }
                        "natter demo"
                    }
                    nav { class: "flex items-center gap-4 text-sm",
                        Link { class: "{roster_class}", to: Route::Roster {}, "Roster" }
                    }
                    div { class: "ml-auto", LangSwitcher {} }
                }
            }
            Outlet::<Route> {}
        }
    }
}
