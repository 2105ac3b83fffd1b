//! Interactive menu session: prompting, dispatch, and handlers.

pub mod menu;
pub mod prompt;
pub mod runner;

pub use menu::MenuChoice;
pub use runner::Session;
