//! Demo data for the web demo
//!
//! Static fixture members for rendering the UI without a homeserver.

use dioxus::prelude::*;
use natter_ui::{GroupMember, RoomMember};

pub const AVATAR_MIRA: Asset = asset!("/assets/avatar-mira.svg");

/// Members of the demo room, first one with a profile image
pub fn room_members() -> Vec<RoomMember> {
    vec![
        RoomMember {
            user_id: "@mira:natter.chat".to_string(),
            name: "Mira Vance".to_string(),
            avatar_url: Some(AVATAR_MIRA.to_string()),
        },
        RoomMember {
            user_id: "@sol:natter.chat".to_string(),
            name: "Sol Arden".to_string(),
            avatar_url: None,
        },
        RoomMember {
            user_id: "@petra:natter.chat".to_string(),
            name: "Petra Holt".to_string(),
            avatar_url: None,
        },
        RoomMember {
            user_id: "@theo:natter.chat".to_string(),
            name: "Theo Brandt".to_string(),
            avatar_url: None,
        },
        RoomMember {
            user_id: "@nyx:natter.chat".to_string(),
            name: "nyx".to_string(),
            avatar_url: None,
        },
    ]
}

/// Members of the demo community; group membership has no profile data
pub fn group_members() -> Vec<GroupMember> {
    vec![
        GroupMember {
            user_id: "@rex:natter.chat".to_string(),
        },
        GroupMember {
            user_id: "@vera:natter.chat".to_string(),
        },
        GroupMember {
            user_id: "@juno:natter.chat".to_string(),
        },
    ]
}
