//! Install/update/uninstall orchestration.
//!
//! The `Installer` sequences the minimum set of engine operations for a
//! DevEnv's computed status. Pulls are blocking; each progress event is
//! forwarded to the UI one at a time, in engine order, without buffering.
//! An engine failure aborts the current DevEnv's operation only.

use crate::dev_env::{DevEnv, DevEnvStatus};
use crate::engine::ContainerEngine;
use crate::error::{DemError, Result};
use crate::images::ToolImage;
use crate::ui::UserInterface;

/// Orchestrates engine operations for one DevEnv at a time.
pub struct Installer<'a> {
    engine: &'a dyn ContainerEngine,
    ui: &'a mut dyn UserInterface,
}

impl<'a> Installer<'a> {
    /// Create an installer over an engine and a UI.
    pub fn new(engine: &'a dyn ContainerEngine, ui: &'a mut dyn UserInterface) -> Self {
        Self { engine, ui }
    }

    /// Install a not-installed DevEnv: pull every declared image that is
    /// not already local, then mark it installed.
    ///
    /// Refuses with `UnavailableImage` when any declared image exists
    /// neither locally nor in a registry, and with `InvalidArgument` when
    /// the DevEnv is already installed.
    pub fn install(&mut self, dev_env: &mut DevEnv) -> Result<()> {
        if dev_env.is_installed() {
            return Err(DemError::InvalidArgument {
                message: format!("'{}' is already installed", dev_env.name),
            });
        }

        self.refuse_unavailable(dev_env)?;

        for image in images_to_pull(&dev_env.tool_images, PullSet::Missing) {
            self.pull(&image)?;
        }

        dev_env.installed = Some(true);
        Ok(())
    }

    /// Update an installed DevEnv per its status: `ReinstallNeeded`
    /// re-pulls only the images whose local copy is gone, `Ok` re-pulls
    /// everything unconditionally.
    pub fn update(&mut self, dev_env: &mut DevEnv) -> Result<()> {
        if !dev_env.is_installed() {
            return Err(DemError::InvalidArgument {
                message: format!("'{}' is not installed, nothing to update", dev_env.name),
            });
        }

        self.refuse_unavailable(dev_env)?;

        let pull_set = match dev_env.tool_image_status() {
            DevEnvStatus::ReinstallNeeded => PullSet::Missing,
            _ => PullSet::All,
        };

        for image in images_to_pull(&dev_env.tool_images, pull_set) {
            self.pull(&image)?;
        }

        Ok(())
    }

    /// Uninstall an installed DevEnv: remove each of its local images from
    /// the engine unless another installed DevEnv still declares it, then
    /// clear the install flag. The descriptor itself is kept.
    pub fn uninstall(&mut self, dev_env: &mut DevEnv, all_dev_envs: &[DevEnv]) -> Result<()> {
        if !dev_env.is_installed() {
            return Err(DemError::InvalidArgument {
                message: format!("'{}' is not installed", dev_env.name),
            });
        }

        for image in &dev_env.tool_images {
            if !image.availability.is_local() {
                continue;
            }
            if image_shared_elsewhere(&image.name, &dev_env.name, all_dev_envs) {
                self.ui.message(&format!(
                    "Keeping {} (still used by another installed Development Environment)",
                    image.name
                ));
                continue;
            }
            self.engine.remove(&image.name)?;
            self.ui.message(&format!("Removed {}", image.name));
        }

        dev_env.installed = Some(false);
        Ok(())
    }

    fn refuse_unavailable(&self, dev_env: &DevEnv) -> Result<()> {
        let unavailable: Vec<String> = dev_env
            .tool_images
            .iter()
            .filter(|image| !image.availability.is_local() && !image.availability.in_registry())
            .map(|image| image.name.clone())
            .collect();

        if unavailable.is_empty() {
            Ok(())
        } else {
            Err(DemError::UnavailableImage {
                images: unavailable.join(", "),
            })
        }
    }

    fn pull(&mut self, name: &str) -> Result<()> {
        self.ui.message(&format!("Pulling {}", name));

        let engine = self.engine;
        let ui = &mut *self.ui;
        let mut on_progress = |event: crate::engine::PullProgress| ui.pull_progress(&event);
        let result = engine.pull(name, &mut on_progress);
        self.ui.pull_complete();
        result
    }
}

/// Which declared images an operation pulls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PullSet {
    /// Only images without a local copy.
    Missing,
    /// Every image, unconditionally.
    All,
}

fn images_to_pull(tool_images: &[ToolImage], set: PullSet) -> Vec<String> {
    tool_images
        .iter()
        .filter(|image| match set {
            PullSet::Missing => !image.availability.is_local(),
            PullSet::All => true,
        })
        .map(|image| image.name.clone())
        .collect()
}

fn image_shared_elsewhere(image_name: &str, owner: &str, all_dev_envs: &[DevEnv]) -> bool {
    all_dev_envs
        .iter()
        .filter(|other| other.name != owner && other.is_installed())
        .any(|other| {
            other
                .tool_image_descriptors
                .iter()
                .any(|descriptor| descriptor.full_name() == image_name)
        })
}
