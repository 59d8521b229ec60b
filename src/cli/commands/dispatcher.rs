//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and confirmations
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    home: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given dem home directory.
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }

    /// Get the dem home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::debug!("dispatching {:?}", cli.command);

        match &cli.command {
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(&self.home, args.clone());
                cmd.execute(ui)
            }
            Commands::Info(args) => {
                let cmd = super::info::InfoCommand::new(&self.home, args.clone());
                cmd.execute(ui)
            }
            Commands::Install(args) => {
                let cmd = super::install::InstallCommand::new(&self.home, args.clone());
                cmd.execute(ui)
            }
            Commands::Uninstall(args) => {
                let cmd = super::uninstall::UninstallCommand::new(&self.home, args.clone());
                cmd.execute(ui)
            }
            Commands::Update(args) => {
                let cmd = super::update::UpdateCommand::new(&self.home, args.clone());
                cmd.execute(ui)
            }
            Commands::Run(args) => {
                let cmd = super::run::RunCommand::new(&self.home, args.clone());
                cmd.execute(ui)
            }
            Commands::Export(args) => {
                let cmd = super::export::ExportCommand::new(&self.home, args.clone());
                cmd.execute(ui)
            }
            Commands::Import(args) => {
                let cmd = super::import::ImportCommand::new(&self.home, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
