//! Command handlers, one module per command group.

pub mod balance;
pub mod entries;
pub mod init;
pub mod menu;
pub mod misc;

pub use balance::handle_balance;
pub use entries::{handle_add, handle_edit, handle_list, handle_search};
pub use init::handle_init;
pub use menu::handle_menu;
pub use misc::handle_completions;
