//! Index of all demo pages

use crate::mocks;
use crate::ui::LinkCard;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn MockIndex() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            div { class: "max-w-4xl mx-auto",
                h1 { class: "text-2xl font-bold mb-6", "natter mocks" }

                h2 { class: "text-lg font-semibold text-gray-300 mb-3", "Demo app" }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4 mb-8",
                    LinkCard {
                        to: Route::Roster {},
                        title: "Roster",
                        description: "Room and community rosters wired to the confirmation dialog",
                    }
                }

                h2 { class: "text-lg font-semibold text-gray-300 mb-3", "Components" }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    LinkCard {
                        to: Route::MockConfirmDialog {},
                        title: "ConfirmMemberActionView",
                        description: "Confirmation dialog with every prop on a switch",
                    }
                }
            }
        }
    }
}

#[component]
pub fn Roster() -> Element {
    rsx! {
        mocks::RosterMock {}
    }
}

#[component]
pub fn MockConfirmDialog() -> Element {
    rsx! {
        mocks::ConfirmDialogMock {}
    }
}
