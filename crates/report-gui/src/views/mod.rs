//! View components
//!
//! Views render from state and report user intent back as actions; the app
//! dispatches those after the frame's borrows end.

pub mod confirm;
pub mod grid;
pub mod header;
pub mod notices;
pub mod rail;
pub mod suppliers;
pub mod toolbar;

pub use suppliers::SuppliersAction;
pub use toolbar::ToolbarAction;
