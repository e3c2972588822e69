//! Demo app pages

mod layout;
mod mock_index;

pub use layout::DemoLayout;
pub use mock_index::{MockConfirmDialog, MockIndex, Roster};
