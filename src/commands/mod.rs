//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against a directory listing.

pub mod completions;
pub mod config;
pub mod expand;
pub mod list;
pub mod pick;

// Re-export execute functions for convenience
pub use completions::execute as completions;
pub use self::config::execute as config;
pub use expand::execute as expand;
pub use list::execute as list;
pub use pick::execute as pick;
