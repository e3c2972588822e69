//! Store types for UI state management
//!
//! These types hold UI state that can be shared between a real client and
//! the web demo.

pub mod moderation;

pub use moderation::*;
