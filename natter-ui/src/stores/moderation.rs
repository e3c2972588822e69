//! Moderation actions that go through the confirmation dialog

use crate::display_types::ActionTarget;
use crate::i18n::UiText;

/// A moderation action a host can ask the user to confirm
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberAction {
    /// Remove from the room; the member can rejoin
    Kick,
    /// Remove from the room and block rejoining
    Ban,
    /// Lift an earlier ban
    Unban,
    /// Remove from a community
    RemoveFromGroup,
}

impl MemberAction {
    /// Confirm-button label
    pub fn label(&self) -> UiText {
        match self {
            MemberAction::Kick => UiText::Kick,
            MemberAction::Ban => UiText::Ban,
            MemberAction::Unban => UiText::Unban,
            MemberAction::RemoveFromGroup => UiText::RemoveFromGroup,
        }
    }

    /// Dialog heading
    pub fn title(&self) -> UiText {
        match self {
            MemberAction::Kick => UiText::KickTitle,
            MemberAction::Ban => UiText::BanTitle,
            MemberAction::Unban => UiText::UnbanTitle,
            MemberAction::RemoveFromGroup => UiText::RemoveFromGroupTitle,
        }
    }

    /// Whether the confirm button gets danger styling
    pub fn is_destructive(&self) -> bool {
        !matches!(self, MemberAction::Unban)
    }

    /// Whether the dialog collects a reason to send with the action
    pub fn asks_reason(&self) -> bool {
        matches!(self, MemberAction::Kick | MemberAction::Ban)
    }
}

/// An action waiting for the user's confirmation
#[derive(Clone, Debug, PartialEq)]
pub struct PendingMemberAction {
    pub action: MemberAction,
    pub target: ActionTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unban_is_not_destructive() {
        assert!(MemberAction::Kick.is_destructive());
        assert!(MemberAction::Ban.is_destructive());
        assert!(MemberAction::RemoveFromGroup.is_destructive());
        assert!(!MemberAction::Unban.is_destructive());
    }

    #[test]
    fn room_removals_ask_for_a_reason() {
        assert!(MemberAction::Kick.asks_reason());
        assert!(MemberAction::Ban.asks_reason());
        assert!(!MemberAction::Unban.asks_reason());
        assert!(!MemberAction::RemoveFromGroup.asks_reason());
    }

    #[test]
    fn labels_and_titles_are_distinct_per_action() {
        let actions = [
            MemberAction::Kick,
            MemberAction::Ban,
            MemberAction::Unban,
            MemberAction::RemoveFromGroup,
        ];
        for action in actions {
            assert_ne!(action.label(), action.title());
        }
    }
}
