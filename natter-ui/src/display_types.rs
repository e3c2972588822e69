//! Display types for UI components
//!
//! These types are lightweight versions of the client's room-state models,
//! containing only the fields needed for display. They enable props-based
//! components that can work with either real or demo data.

/// Room member display info
#[derive(Clone, Debug, PartialEq)]
pub struct RoomMember {
    pub user_id: String,
    /// Resolved display name (falls back to the user id upstream)
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Group member display info
///
/// Group membership carries no profile data, so the user id doubles as the
/// display name.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupMember {
    pub user_id: String,
}

/// The person a moderation action is aimed at
#[derive(Clone, Debug, PartialEq)]
pub enum ActionTarget {
    Room(RoomMember),
    Group(GroupMember),
}

impl ActionTarget {
    pub fn display_name(&self) -> &str {
        match self {
            ActionTarget::Room(member) => &member.name,
            ActionTarget::Group(member) => &member.user_id,
        }
    }

    pub fn user_id(&self) -> &str {
        match self {
            ActionTarget::Room(member) => &member.user_id,
            ActionTarget::Group(member) => &member.user_id,
        }
    }

    pub fn avatar_url(&self) -> Option<&str> {
        match self {
            ActionTarget::Room(member) => member.avatar_url.as_deref(),
            ActionTarget::Group(_) => None,
        }
    }
}
