//! Uninstall command implementation.
//!
//! `dem uninstall <name>` removes the environment's local tool images
//! unless another installed environment still declares them, then clears
//! the install flag. The descriptor stays in the store.

use std::path::{Path, PathBuf};

use crate::cli::args::UninstallArgs;
use crate::engine::DockerCli;
use crate::error::Result;
use crate::install::Installer;
use crate::platform::Platform;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The uninstall command implementation.
pub struct UninstallCommand {
    home: PathBuf,
    args: UninstallArgs,
}

impl UninstallCommand {
    /// Create a new uninstall command.
    pub fn new(home: &Path, args: UninstallArgs) -> Self {
        Self {
            home: home.to_path_buf(),
            args,
        }
    }
}

impl Command for UninstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut platform = Platform::new(&self.home, Box::new(DockerCli::new()))?;
        let mut dev_envs = platform.local_dev_envs(ui)?;
        Platform::find_dev_env(&mut dev_envs, &self.args.name)?;

        platform.refresh_tool_images(&mut dev_envs, ui)?;

        // Snapshot for the shared-image check before taking the mutable
        // borrow of the environment being uninstalled.
        let all_dev_envs = dev_envs.clone();
        let dev_env = Platform::find_dev_env(&mut dev_envs, &self.args.name)?;

        let mut installer = Installer::new(platform.engine(), ui);
        installer.uninstall(dev_env, &all_dev_envs)?;

        platform.store.save(dev_env)?;
        ui.success(&format!("Uninstalled '{}'", dev_env.name));

        Ok(CommandResult::success())
    }
}
