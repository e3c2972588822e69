//! natter-ui - Shared UI types and components for natter
//!
//! Contains display types, localized strings, stores, and pure view
//! components used by both the chat client and the web demo.

pub mod components;
pub mod display_types;
pub mod i18n;
pub mod stores;

pub use components::*;
pub use display_types::*;
pub use i18n::{use_lang, Lang, UiText};
