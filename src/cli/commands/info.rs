//! Info command implementation.
//!
//! `dem info <name>` shows one Development Environment's declared tool
//! images with their availability and the derived aggregate status.
//! With `--cat` the environment is looked up in the catalogs instead.

use std::path::{Path, PathBuf};

use crate::cli::args::InfoArgs;
use crate::dev_env::{DevEnv, DevEnvStatus};
use crate::engine::DockerCli;
use crate::error::{DemError, Result};
use crate::platform::Platform;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The info command implementation.
pub struct InfoCommand {
    home: PathBuf,
    args: InfoArgs,
}

impl InfoCommand {
    /// Create a new info command.
    pub fn new(home: &Path, args: InfoArgs) -> Self {
        Self {
            home: home.to_path_buf(),
            args,
        }
    }

    fn show(&self, dev_env: &DevEnv, status: DevEnvStatus, ui: &mut dyn UserInterface) {
        let mut table = Table::new(vec!["Image", "Availability"]);
        for image in &dev_env.tool_images {
            table.add_row(vec![&image.name, image.availability.label()]);
        }
        ui.message(&table.render());

        match status {
            DevEnvStatus::Ok => ui.success("Status: Ok"),
            DevEnvStatus::NotInstalled => ui.message("Status: Not installed"),
            DevEnvStatus::ReinstallNeeded => ui.warning(
                "Some local tool images are gone; run 'dem update' to re-pull them.",
            ),
            DevEnvStatus::UnavailableImage => {
                let missing: Vec<&str> = dev_env
                    .tool_images
                    .iter()
                    .filter(|image| {
                        !image.availability.is_local() && !image.availability.in_registry()
                    })
                    .map(|image| image.name.as_str())
                    .collect();
                ui.error(&format!(
                    "Required image(s) not available: {}",
                    missing.join(", ")
                ));
            }
        }
    }

    fn info_local(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut platform = Platform::new(&self.home, Box::new(DockerCli::new()))?;
        let mut dev_envs = platform.local_dev_envs(ui)?;
        Platform::find_dev_env(&mut dev_envs, &self.args.name)?;

        platform.refresh_tool_images(&mut dev_envs, ui)?;

        let dev_env = Platform::find_dev_env(&mut dev_envs, &self.args.name)?;
        ui.show_header(&dev_env.name);
        let status = dev_env.status();
        self.show(dev_env, status, ui);

        Ok(CommandResult::success())
    }

    fn info_catalog(
        &self,
        selected: &[String],
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let mut platform = Platform::new(&self.home, Box::new(DockerCli::new()))?;

        let Some((mut dev_env, catalog_name)) =
            platform.aggregator.find(&self.args.name, selected)?
        else {
            return Err(DemError::UnknownDevEnv {
                name: self.args.name.clone(),
            });
        };

        platform.refresh_tool_images(std::slice::from_mut(&mut dev_env), ui)?;

        ui.show_header(&format!("{} (catalog: {})", dev_env.name, catalog_name));
        // Install state is meaningless for catalog entries; show the
        // availability-only aggregate.
        let status = dev_env.tool_image_status();
        self.show(&dev_env, status, ui);

        Ok(CommandResult::success())
    }
}

impl Command for InfoCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.args.cat {
            None => self.info_local(ui),
            Some(selected) => self.info_catalog(selected, ui),
        }
    }
}
