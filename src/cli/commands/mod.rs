//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`dem list`, `dem install`)
//! - Shared platform construction
//! - Consistent global flag handling

pub mod completions;
pub mod dispatcher;
pub mod export;
pub mod import;
pub mod info;
pub mod install;
pub mod list;
pub mod run;
pub mod uninstall;
pub mod update;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
