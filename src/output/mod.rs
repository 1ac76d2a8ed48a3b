//! Terminal output formatting
//!
//! Display utilities shared by the text commands and the TUI.

pub mod display;
pub mod formatters;
pub mod messages;

pub use display::{print_board_with, print_notifications, print_session};
pub use formatters::{format_address, memory_value_label};
pub use messages::{MESSAGE_LINES, MessageLog};
