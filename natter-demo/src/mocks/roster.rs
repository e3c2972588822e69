//! Room and community roster demo
//!
//! Hosts `ConfirmMemberActionView` the way the chat client does: row buttons
//! queue a pending action, the dialog confirms it, and the host applies the
//! result to its lists. Admin rows stay actionable so the rejection path and
//! error banner can be exercised.

use crate::demo_data;
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use natter_ui::stores::{MemberAction, PendingMemberAction};
use natter_ui::{
    use_lang, ActionOutcome, ActionTarget, Button, ButtonSize, ButtonVariant,
    ConfirmMemberActionView, ErrorBanner, GroupMember, MemberAvatar, RoomMember,
};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Role {
    Admin,
    Moderator,
    Member,
}

impl Role {
    fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Moderator => "Moderator",
            Role::Member => "Member",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct RosterEntry {
    member: RoomMember,
    role: Role,
    banned: bool,
}

#[derive(Debug, Error)]
enum ModerationError {
    #[error("{0} is an admin and cannot be moderated")]
    TargetIsAdmin(String),
    #[error("{0} is not banned")]
    NotBanned(String),
    #[error("{0} is not in this room")]
    UnknownUser(String),
}

/// Applies a confirmed action to the room roster.
///
/// Kicks remove the entry, bans keep it with the banned flag set, and unbans
/// clear the flag. Admins are rejected outright.
fn apply_room_action(
    entries: &mut Vec<RosterEntry>,
    action: MemberAction,
    user_id: &str,
) -> Result<(), ModerationError> {
    let idx = entries
        .iter()
        .position(|entry| entry.member.user_id == user_id)
        .ok_or_else(|| ModerationError::UnknownUser(user_id.to_string()))?;
    if entries[idx].role == Role::Admin {
        return Err(ModerationError::TargetIsAdmin(entries[idx].member.name.clone()));
    }
    match action {
        MemberAction::Kick | MemberAction::RemoveFromGroup => {
            entries.remove(idx);
        }
        MemberAction::Ban => entries[idx].banned = true,
        MemberAction::Unban => {
            if !entries[idx].banned {
                return Err(ModerationError::NotBanned(entries[idx].member.name.clone()));
            }
            entries[idx].banned = false;
        }
    }
    Ok(())
}

#[derive(Clone, Debug)]
struct AppliedAction {
    action: MemberAction,
    user_id: String,
    reason: Option<String>,
    at: DateTime<Utc>,
}

impl AppliedAction {
    fn log_line(&self) -> String {
        let verb = match self.action {
            MemberAction::Kick => "Kicked",
            MemberAction::Ban => "Banned",
            MemberAction::Unban => "Unbanned",
            MemberAction::RemoveFromGroup => "Removed",
        };
        let mut line = format!("{} {} {}", self.at.format("%H:%M:%S"), verb, self.user_id);
        if let Some(reason) = self.reason.as_deref() {
            if !reason.is_empty() {
                line.push_str(&format!(" (\"{reason}\")"));
            }
        }
        line
    }
}

fn initial_entries() -> Vec<RosterEntry> {
    demo_data::room_members()
        .into_iter()
        .map(|member| {
            let role = match member.user_id.as_str() {
                "@mira:natter.chat" => Role::Admin,
                "@sol:natter.chat" => Role::Moderator,
                _ => Role::Member,
            };
            RosterEntry {
                member,
                role,
                banned: false,
            }
        })
        .collect()
}

#[component]
pub fn RosterMock() -> Element {
    let mut entries = use_signal(initial_entries);
    let mut group = use_signal(demo_data::group_members);
    let mut pending = use_signal(|| None::<PendingMemberAction>);
    let mut history = use_signal(Vec::<AppliedAction>::new);
    let mut error = use_signal(|| None::<String>);

    let open_dialog = move |request: PendingMemberAction| {
        error.set(None);
        pending.set(Some(request));
    };

    let on_complete = move |outcome: ActionOutcome| {
        let Some(request) = pending() else {
            return;
        };
        pending.set(None);
        let ActionOutcome::Confirmed { reason } = outcome else {
            return;
        };
        let user_id = request.target.user_id().to_string();
        let result = match request.action {
            MemberAction::RemoveFromGroup => {
                group.write().retain(|member| member.user_id != user_id);
                Ok(())
            }
            action => apply_room_action(&mut entries.write(), action, &user_id),
        };
        match result {
            Ok(()) => {
                tracing::info!(action = ?request.action, user_id = %user_id, "moderation action applied");
                history.write().push(AppliedAction {
                    action: request.action,
                    user_id,
                    reason,
                    at: Utc::now(),
                });
            }
            Err(err) => {
                tracing::warn!(action = ?request.action, user_id = %user_id, error = %err, "moderation action rejected");
                error.set(Some(err.to_string()));
            }
        }
    };

    let log: Vec<AppliedAction> = history().into_iter().rev().collect();

    rsx! {
        div { class: "max-w-4xl mx-auto p-6",
            if let Some(message) = error() {
                ErrorBanner {
                    message,
                    on_dismiss: move |_| error.set(None),
                }
            }

            section {
                h2 { class: "text-lg font-semibold text-white mb-3", "Room members" }
                if entries().is_empty() {
                    p { class: "text-sm text-gray-500", "Nobody left in the room" }
                } else {
                    div { class: "space-y-2",
                        for entry in entries() {
                            RosterRow {
                                key: "{entry.member.user_id}",
                                entry: entry.clone(),
                                on_action: open_dialog,
                            }
                        }
                    }
                }
            }

            section { class: "mt-8",
                h2 { class: "text-lg font-semibold text-white mb-3", "Community members" }
                if group().is_empty() {
                    p { class: "text-sm text-gray-500", "Nobody left in the community" }
                } else {
                    div { class: "space-y-2",
                        for member in group() {
                            GroupRow {
                                key: "{member.user_id}",
                                member: member.clone(),
                                on_action: open_dialog,
                            }
                        }
                    }
                }
            }

            section { class: "mt-8",
                h2 { class: "text-lg font-semibold text-white mb-3", "Moderation log" }
                if log.is_empty() {
                    p { class: "text-sm text-gray-500", "No actions yet" }
                } else {
                    ul { class: "space-y-1 text-sm text-gray-300 font-mono",
                        for item in log {
                            li { "{item.log_line()}" }
                        }
                    }
                }
            }

            if let Some(request) = pending() {
                ConfirmDialogHost { request, on_complete }
            }
        }
    }
}

/// Binds a pending action to the dialog's props.
#[component]
fn ConfirmDialogHost(
    request: PendingMemberAction,
    on_complete: EventHandler<ActionOutcome>,
) -> Element {
    let lang = use_lang();
    rsx! {
        ConfirmMemberActionView {
            target: request.target.clone(),
            title: lang.text(request.action.title()).to_string(),
            action_label: lang.text(request.action.label()).to_string(),
            ask_reason: request.action.asks_reason(),
            danger: request.action.is_destructive(),
            on_complete: move |outcome| on_complete.call(outcome),
        }
    }
}

#[component]
fn RosterRow(entry: RosterEntry, on_action: EventHandler<PendingMemberAction>) -> Element {
    let lang = use_lang();
    let kick_label = lang.text(MemberAction::Kick.label());
    let ban_label = lang.text(MemberAction::Ban.label());
    let unban_label = lang.text(MemberAction::Unban.label());
    let kick_target = entry.member.clone();
    let ban_target = entry.member.clone();
    let unban_target = entry.member.clone();

    rsx! {
        div { class: "flex items-center gap-3 p-3 bg-gray-800 rounded-lg",
            MemberAvatar {
                name: entry.member.name.clone(),
                avatar_url: entry.member.avatar_url.clone(),
                size: 32,
            }
            div { class: "min-w-0 flex-1",
                div { class: "flex items-center gap-2",
                    span { class: "text-white font-medium truncate", "{entry.member.name}" }
                    if entry.role != Role::Member {
                        span { class: "text-xs px-2 py-0.5 rounded-full bg-gray-700 text-gray-300",
                            "{entry.role.label()}"
                        }
                    }
                    if entry.banned {
                        span { class: "text-xs px-2 py-0.5 rounded-full bg-red-900 text-red-200",
                            "Banned"
                        }
                    }
                }
                div { class: "text-gray-400 text-sm truncate", "{entry.member.user_id}" }
            }
            div { class: "flex gap-2",
                if entry.banned {
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Small,
                        onclick: move |_| on_action.call(PendingMemberAction {
                            action: MemberAction::Unban,
                            target: ActionTarget::Room(unban_target.clone()),
                        }),
                        "{unban_label}"
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Small,
                        onclick: move |_| on_action.call(PendingMemberAction {
                            action: MemberAction::Kick,
                            target: ActionTarget::Room(kick_target.clone()),
                        }),
                        "{kick_label}"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Small,
                        onclick: move |_| on_action.call(PendingMemberAction {
                            action: MemberAction::Ban,
                            target: ActionTarget::Room(ban_target.clone()),
                        }),
                        "{ban_label}"
                    }
                }
            }
        }
    }
}

#[component]
fn GroupRow(member: GroupMember, on_action: EventHandler<PendingMemberAction>) -> Element {
    let lang = use_lang();
    let remove_label = lang.text(MemberAction::RemoveFromGroup.label());
    let target = member.clone();

    rsx! {
        div { class: "flex items-center gap-3 p-3 bg-gray-800 rounded-lg",
            MemberAvatar {
                name: member.user_id.clone(),
                avatar_url: None,
                size: 32,
            }
            div { class: "min-w-0 flex-1 text-white truncate", "{member.user_id}" }
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Small,
                onclick: move |_| on_action.call(PendingMemberAction {
                    action: MemberAction::RemoveFromGroup,
                    target: ActionTarget::Group(target.clone()),
                }),
                "{remove_label}"
            }
        }
    }
}
