//! Component mocks with interactive controls

mod confirm_dialog;
mod mock_header;
mod roster;

pub use confirm_dialog::ConfirmDialogMock;
pub use mock_header::MockHeader;
pub use roster::RosterMock;
