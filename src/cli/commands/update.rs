//! Update command implementation.
//!
//! `dem update <name>` refreshes an installed Development Environment:
//! vanished local images are re-pulled; a status-Ok environment gets every
//! image re-pulled to the latest matching tag.

use std::path::{Path, PathBuf};

use crate::cli::args::UpdateArgs;
use crate::engine::DockerCli;
use crate::error::Result;
use crate::install::Installer;
use crate::platform::Platform;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The update command implementation.
pub struct UpdateCommand {
    home: PathBuf,
    args: UpdateArgs,
}

impl UpdateCommand {
    /// Create a new update command.
    pub fn new(home: &Path, args: UpdateArgs) -> Self {
        Self {
            home: home.to_path_buf(),
            args,
        }
    }
}

impl Command for UpdateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut platform = Platform::new(&self.home, Box::new(DockerCli::new()))?;
        let mut dev_envs = platform.local_dev_envs(ui)?;
        Platform::find_dev_env(&mut dev_envs, &self.args.name)?;

        platform.refresh_tool_images(&mut dev_envs, ui)?;

        let dev_env = Platform::find_dev_env(&mut dev_envs, &self.args.name)?;
        let mut installer = Installer::new(platform.engine(), ui);
        installer.update(dev_env)?;

        ui.success(&format!("Updated '{}'", dev_env.name));

        Ok(CommandResult::success())
    }
}
