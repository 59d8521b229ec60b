//! List command implementation.
//!
//! `dem list` lists local Development Environments with their aggregate
//! status; `dem list --cat [names]` lists catalog environments instead.

use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::engine::DockerCli;
use crate::error::{DemError, Result};
use crate::platform::Platform;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    home: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(home: &Path, args: ListArgs) -> Self {
        Self {
            home: home.to_path_buf(),
            args,
        }
    }

    fn list_local(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut platform = Platform::new(&self.home, Box::new(DockerCli::new()))?;
        let mut dev_envs = platform.local_dev_envs(ui)?;

        if dev_envs.is_empty() {
            ui.message("No Development Environments in the local store.");
            return Ok(CommandResult::success());
        }

        platform.refresh_tool_images(&mut dev_envs, ui)?;

        let mut table = Table::new(vec!["Name", "Status"]);
        for dev_env in &dev_envs {
            table.add_row(vec![&dev_env.name, dev_env.status().label()]);
        }
        ui.message(&table.render());

        Ok(CommandResult::success())
    }

    fn list_catalogs(
        &self,
        selected: &[String],
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let platform = Platform::new(&self.home, Box::new(DockerCli::new()))?;
        let mut aggregator = platform.aggregator;

        if aggregator.is_empty() {
            ui.message("No catalogs configured.");
            return Ok(CommandResult::success());
        }

        let names: Vec<String> = if selected.is_empty() {
            aggregator.names().iter().map(|s| s.to_string()).collect()
        } else {
            for name in selected {
                if !aggregator.names().contains(&name.as_str()) {
                    return Err(DemError::UnknownCatalog { name: name.clone() });
                }
            }
            selected.to_vec()
        };

        let mut table = Table::new(vec!["Catalog", "Name"]);
        for catalog_name in &names {
            match aggregator.dev_envs_of(catalog_name) {
                Ok(dev_envs) => {
                    for dev_env in dev_envs {
                        table.add_row(vec![catalog_name, &dev_env.name]);
                    }
                }
                Err(e) => ui.warning(&format!("skipping catalog '{}': {}", catalog_name, e)),
            }
        }

        if table.is_empty() {
            ui.message("No Development Environments found in the catalogs.");
        } else {
            ui.message(&table.render());
        }

        Ok(CommandResult::success())
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.args.cat {
            None => self.list_local(ui),
            Some(selected) => self.list_catalogs(selected, ui),
        }
    }
}
