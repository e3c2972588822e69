//! Member action confirmation dialog
//!
//! Asks the user to confirm a moderation action against a room or group
//! member, optionally collecting a free-text reason. The outcome is reported
//! through `on_complete` exactly once; hosts close the dialog by unmounting
//! it when the callback fires.

use crate::components::avatar::MemberAvatar;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::dialog_shell::DialogShell;
use crate::components::text_input::{TextInput, TextInputSize};
use crate::display_types::ActionTarget;
use crate::i18n::{use_lang, UiText};
use dioxus::prelude::*;

/// Result of a confirmation dialog
#[derive(Clone, Debug, PartialEq)]
pub enum ActionOutcome {
    /// The user confirmed. `reason` is `None` when the dialog did not ask
    /// for one; when it did, it holds the field's raw value, so confirming
    /// with the field untouched yields `Some("")`.
    Confirmed { reason: Option<String> },
    Cancelled,
}

impl ActionOutcome {
    /// Confirmed outcome, capturing the reason field only when it was shown
    pub fn confirmed(ask_reason: bool, reason: &str) -> Self {
        ActionOutcome::Confirmed {
            reason: ask_reason.then(|| reason.to_string()),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, ActionOutcome::Confirmed { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            ActionOutcome::Confirmed { reason } => reason.as_deref(),
            ActionOutcome::Cancelled => None,
        }
    }
}

/// Confirmation dialog for a moderation action aimed at one member
///
/// Pure view component - the host owns the open/closed state and whatever
/// happens after confirmation. Enter anywhere in the dialog confirms,
/// Escape/backdrop/close cancel. Focus lands on the reason field when one
/// is requested, otherwise on the confirm button.
#[component]
pub fn ConfirmMemberActionView(
    target: ActionTarget,
    title: String,
    action_label: String,
    #[props(default)] ask_reason: bool,
    #[props(default)] danger: bool,
    on_complete: EventHandler<ActionOutcome>,
) -> Element {
    let lang = use_lang();
    let mut reason = use_signal(String::new);
    let mut completed = use_signal(|| false);

    // Collapse double-fire paths (Enter on a focused button, racing clicks)
    // into a single report.
    let mut finish = move |outcome: ActionOutcome| {
        if completed() {
            return;
        }
        completed.set(true);
        tracing::debug!(?outcome, "member action dialog completed");
        on_complete.call(outcome);
    };

    let mut confirm = move || finish(ActionOutcome::confirmed(ask_reason, &reason()));
    let mut cancel = move || finish(ActionOutcome::Cancelled);

    let confirm_variant = if danger {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };

    let display_name = target.display_name().to_string();
    let user_id = target.user_id().to_string();
    let avatar_url = target.avatar_url().map(|url| url.to_string());
    let cancel_label = lang.text(UiText::Cancel);

    rsx! {
        DialogShell {
            title,
            on_dismiss: move |_| cancel(),
            on_enter: move |_| confirm(),

            div { class: "flex items-center gap-4 mb-6",
                MemberAvatar {
                    name: display_name.clone(),
                    avatar_url,
                    size: 48,
                }
                div { class: "min-w-0",
                    div {
                        class: "text-white font-semibold truncate",
                        "data-testid": "member-name",
                        "{display_name}"
                    }
                    div {
                        class: "text-gray-400 text-sm truncate",
                        "data-testid": "member-user-id",
                        "{user_id}"
                    }
                }
            }

            if ask_reason {
                div { class: "mb-6",
                    TextInput {
                        value: reason(),
                        on_input: move |v| reason.set(v),
                        size: TextInputSize::Medium,
                        placeholder: lang.text(UiText::Reason),
                        autofocus: true,
                    }
                }
            }

            div { class: "flex gap-3 justify-end",
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Medium,
                    onclick: move |_| cancel(),
                    "{cancel_label}"
                }
                Button {
                    variant: confirm_variant,
                    size: ButtonSize::Medium,
                    autofocus: !ask_reason,
                    onclick: move |_| confirm(),
                    "{action_label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmed_without_reason_field() {
        let outcome = ActionOutcome::confirmed(false, "typed into nowhere");
        assert!(outcome.is_confirmed());
        assert_eq!(outcome.reason(), None);
    }

    #[test]
    fn confirmed_with_reason() {
        let outcome = ActionOutcome::confirmed(true, "spamming the room");
        assert!(outcome.is_confirmed());
        assert_eq!(outcome.reason(), Some("spamming the room"));
    }

    #[test]
    fn confirmed_with_empty_reason_keeps_the_field_value() {
        let outcome = ActionOutcome::confirmed(true, "");
        assert_eq!(outcome.reason(), Some(""));
    }

    #[test]
    fn cancelled_has_no_reason() {
        let outcome = ActionOutcome::Cancelled;
        assert!(!outcome.is_confirmed());
        assert_eq!(outcome.reason(), None);
    }
}
