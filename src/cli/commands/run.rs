//! Run command implementation.
//!
//! `dem run <name> <image> -- <command…>` runs a command in one of an
//! installed Development Environment's tool containers, with the
//! workspace mounted read-write at `/work` and the container removed on
//! completion. Log lines are streamed to the UI as they arrive.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::dev_env::DevEnvStatus;
use crate::engine::DockerCli;
use crate::error::{DemError, Result};
use crate::platform::Platform;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    home: PathBuf,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(home: &Path, args: RunArgs) -> Self {
        Self {
            home: home.to_path_buf(),
            args,
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut platform = Platform::new(&self.home, Box::new(DockerCli::new()))?;
        let mut dev_env = platform.local_dev_env(&self.args.name)?;

        if !dev_env.is_installed() {
            return Err(DemError::InvalidArgument {
                message: format!("'{}' is not installed", dev_env.name),
            });
        }

        platform.refresh_tool_images(std::slice::from_mut(&mut dev_env), ui)?;

        match dev_env.status() {
            DevEnvStatus::Ok => {}
            status => {
                return Err(DemError::InvalidArgument {
                    message: format!(
                        "'{}' is not ready to run tools (status: {})",
                        dev_env.name,
                        status.label()
                    ),
                });
            }
        }

        // Accept the full image name or the bare repository of a declared
        // tool.
        let image = dev_env
            .tool_images
            .iter()
            .find(|image| image.name == self.args.image || image.repository() == self.args.image)
            .ok_or_else(|| DemError::InvalidArgument {
                message: format!(
                    "'{}' does not declare tool image '{}'",
                    dev_env.name, self.args.image
                ),
            })?;

        let workspace = if self.args.workspace.is_absolute() {
            self.args.workspace.clone()
        } else {
            std::env::current_dir()?.join(&self.args.workspace)
        };
        let command = self.args.command.join(" ");

        let show_logs = ui.output_mode().shows_container_output();
        let mut on_log = |line: &str| {
            if show_logs {
                println!("{}", line);
            }
        };
        platform.engine().run(
            &image.name,
            &workspace,
            &command,
            self.args.privileged,
            &mut on_log,
        )?;

        Ok(CommandResult::success())
    }
}
