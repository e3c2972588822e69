//! Shared UI components

pub mod avatar;
pub mod button;
pub mod confirm_member_action;
pub mod dialog_shell;
pub mod error_display;
pub mod icons;
pub mod text_input;

pub use avatar::{InitialAvatar, MemberAvatar};
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use confirm_member_action::{ActionOutcome, ConfirmMemberActionView};
pub use dialog_shell::DialogShell;
pub use error_display::ErrorBanner;
pub use icons::{UsersIcon, XIcon};
pub use text_input::{TextInput, TextInputSize};
