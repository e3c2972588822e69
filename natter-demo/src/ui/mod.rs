//! Shared UI components for natter-demo

mod lang_switcher;
mod link_card;
mod toggle_button;

pub use lang_switcher::LangSwitcher;
pub use link_card::LinkCard;
pub use toggle_button::ToggleButton;
