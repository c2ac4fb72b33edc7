//! Interactive session module
//!
//! Provides a readline-based interface: log in once, then analyze reviews
//! one per line.

mod command;
mod session_repl;

pub use command::ReplCommand;
pub use session_repl::ReviewRepl;
