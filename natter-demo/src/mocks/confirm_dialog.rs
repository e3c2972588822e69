//! ConfirmMemberActionView mock with interactive controls

use crate::demo_data;
use crate::mocks::MockHeader;
use crate::storage;
use crate::ui::{LangSwitcher, ToggleButton};
use dioxus::prelude::*;
use natter_ui::{
    ActionOutcome, ActionTarget, Button, ButtonSize, ButtonVariant, ConfirmMemberActionView,
    GroupMember, RoomMember, TextInput, TextInputSize,
};
use serde::{Deserialize, Serialize};

const LAB_KEY: &str = "natter.confirm-dialog.lab";

/// Persisted control panel settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct LabState {
    title: String,
    action_label: String,
    danger: bool,
    ask_reason: bool,
    group_target: bool,
}

impl Default for LabState {
    fn default() -> Self {
        LabState {
            title: "Kick this user?".to_string(),
            action_label: "Kick".to_string(),
            danger: true,
            ask_reason: true,
            group_target: false,
        }
    }
}

fn load_lab_state() -> LabState {
    storage::get_string(LAB_KEY)
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

fn save_lab_state(state: &LabState) {
    if let Ok(json) = serde_json::to_string(state) {
        storage::set_string(LAB_KEY, &json);
    }
}

#[component]
pub fn ConfirmDialogMock() -> Element {
    let mut lab = use_signal(load_lab_state);
    let mut dialog_open = use_signal(|| false);
    let mut last_outcome = use_signal(|| None::<ActionOutcome>);

    let mut set_lab = move |state: LabState| {
        save_lab_state(&state);
        lab.set(state);
    };

    let target = if lab().group_target {
        ActionTarget::Group(GroupMember {
            user_id: "@rex:natter.chat".to_string(),
        })
    } else {
        ActionTarget::Room(RoomMember {
            user_id: "@mira:natter.chat".to_string(),
            name: "Mira Vance".to_string(),
            avatar_url: Some(demo_data::AVATAR_MIRA.to_string()),
        })
    };

    let outcome_text = match last_outcome() {
        None => "No outcome yet".to_string(),
        Some(ActionOutcome::Cancelled) => "Cancelled".to_string(),
        Some(ActionOutcome::Confirmed { reason: None }) => "Confirmed".to_string(),
        Some(ActionOutcome::Confirmed { reason: Some(r) }) => {
            format!("Confirmed, reason: \"{r}\"")
        }
    };

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white",
            // Controls panel at top
            div { class: "sticky top-0 z-40 bg-gray-800 border-b border-gray-700 p-4",
                div { class: "max-w-4xl mx-auto",
                    MockHeader { title: "ConfirmMemberActionView" }
                    div { class: "flex flex-wrap gap-2 mb-3",
                        ToggleButton {
                            selected: lab().danger,
                            label: "Danger",
                            onclick: move |_| {
                                let mut s = lab();
                                s.danger = !s.danger;
                                set_lab(s);
                            },
                        }
                        ToggleButton {
                            selected: lab().ask_reason,
                            label: "Ask reason",
                            onclick: move |_| {
                                let mut s = lab();
                                s.ask_reason = !s.ask_reason;
                                set_lab(s);
                            },
                        }
                        ToggleButton {
                            selected: lab().group_target,
                            label: "Group target",
                            onclick: move |_| {
                                let mut s = lab();
                                s.group_target = !s.group_target;
                                set_lab(s);
                            },
                        }
                    }
                    div { class: "flex flex-wrap gap-4 text-sm mb-3",
                        label { class: "flex items-center gap-2 text-gray-400",
                            "Title:"
                            TextInput {
                                value: lab().title,
                                on_input: move |v| {
                                    let mut s = lab();
                                    s.title = v;
                                    set_lab(s);
                                },
                                size: TextInputSize::Small,
                            }
                        }
                        label { class: "flex items-center gap-2 text-gray-400",
                            "Action label:"
                            TextInput {
                                value: lab().action_label,
                                on_input: move |v| {
                                    let mut s = lab();
                                    s.action_label = v;
                                    set_lab(s);
                                },
                                size: TextInputSize::Small,
                            }
                        }
                    }
                    LangSwitcher {}
                }
            }

            // Component render area
            div { class: "max-w-4xl mx-auto p-6",
                div { class: "flex items-center gap-4 mb-6",
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        disabled: dialog_open(),
                        onclick: move |_| dialog_open.set(true),
                        "Open dialog"
                    }
                    span { class: "text-sm text-gray-400", "Last outcome: {outcome_text}" }
                    if last_outcome().is_some() {
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Small,
                            onclick: move |_| last_outcome.set(None),
                            "Clear"
                        }
                    }
                }

                if dialog_open() {
                    ConfirmMemberActionView {
                        target,
                        title: lab().title,
                        action_label: lab().action_label,
                        ask_reason: lab().ask_reason,
                        danger: lab().danger,
                        on_complete: move |outcome| {
                            last_outcome.set(Some(outcome));
                            dialog_open.set(false);
                        },
                    }
                }
            }
        }
    }
}
