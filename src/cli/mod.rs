//! Terminal front end: parses arguments, installs logging and maps the
//! chosen subcommand to an [`actions::Action`] that drives the session store.

pub mod actions;
pub mod commands;
pub mod dispatch;
mod start;
pub mod telemetry;

pub use start::start;
