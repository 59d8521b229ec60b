//! Import command implementation.
//!
//! `dem import <path>` adds a descriptor file to the local store as a
//! not-installed Development Environment; overwriting an existing name
//! requires confirmation.

use std::path::{Path, PathBuf};

use crate::cli::args::ImportArgs;
use crate::dev_env::DevEnv;
use crate::error::Result;
use crate::store::LocalDevEnvStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The import command implementation.
pub struct ImportCommand {
    home: PathBuf,
    args: ImportArgs,
}

impl ImportCommand {
    /// Create a new import command.
    pub fn new(home: &Path, args: ImportArgs) -> Self {
        Self {
            home: home.to_path_buf(),
            args,
        }
    }
}

impl Command for ImportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = LocalDevEnvStore::new(&self.home);
        let mut dev_env = DevEnv::from_file(&self.args.path)?;

        if store.exists(&dev_env.name) {
            let question = format!(
                "A Development Environment named '{}' already exists. Overwrite it?",
                dev_env.name
            );
            if !ui.confirm(&question, false)? {
                ui.message("Import cancelled.");
                return Ok(CommandResult::failure(1));
            }
        }

        // Whatever the file claims, an imported environment starts out
        // not installed.
        dev_env.installed = None;
        store.save(&dev_env)?;
        ui.success(&format!("Imported '{}'", dev_env.name));

        Ok(CommandResult::success())
    }
}
