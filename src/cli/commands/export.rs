//! Export command implementation.
//!
//! `dem export <name> <path>` writes a local Development Environment's
//! descriptor to a file, install flag omitted (catalog form).

use std::path::{Path, PathBuf};

use crate::cli::args::ExportArgs;
use crate::error::Result;
use crate::store::LocalDevEnvStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The export command implementation.
pub struct ExportCommand {
    home: PathBuf,
    args: ExportArgs,
}

impl ExportCommand {
    /// Create a new export command.
    pub fn new(home: &Path, args: ExportArgs) -> Self {
        Self {
            home: home.to_path_buf(),
            args,
        }
    }
}

impl Command for ExportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = LocalDevEnvStore::new(&self.home);
        let dev_env = store.load(&self.args.name)?;

        dev_env.export(&self.args.path)?;
        ui.success(&format!(
            "Exported '{}' to {}",
            dev_env.name,
            self.args.path.display()
        ));

        Ok(CommandResult::success())
    }
}
