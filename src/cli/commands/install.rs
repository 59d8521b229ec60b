//! Install command implementation.
//!
//! `dem install <name>` pulls the missing tool images of a local, not yet
//! installed Development Environment and marks it installed.

use std::path::{Path, PathBuf};

use crate::cli::args::InstallArgs;
use crate::engine::DockerCli;
use crate::error::Result;
use crate::install::Installer;
use crate::platform::Platform;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    home: PathBuf,
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(home: &Path, args: InstallArgs) -> Self {
        Self {
            home: home.to_path_buf(),
            args,
        }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut platform = Platform::new(&self.home, Box::new(DockerCli::new()))?;
        let mut dev_envs = platform.local_dev_envs(ui)?;
        Platform::find_dev_env(&mut dev_envs, &self.args.name)?;

        platform.refresh_tool_images(&mut dev_envs, ui)?;

        let dev_env = Platform::find_dev_env(&mut dev_envs, &self.args.name)?;
        let mut installer = Installer::new(platform.engine(), ui);
        installer.install(dev_env)?;

        platform.store.save(dev_env)?;
        ui.success(&format!("Installed '{}'", dev_env.name));

        Ok(CommandResult::success())
    }
}
