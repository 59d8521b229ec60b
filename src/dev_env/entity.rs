//! The Development Environment entity.

use std::fs;
use std::path::Path;

use crate::error::{DemError, Result};
use crate::images::{ToolImage, ToolImageRegistry};

use super::descriptor::{DevEnvDescriptor, ToolImageDescriptor};
use super::status::{self, DevEnvStatus};

/// One Development Environment: declared tools, bound tool images, and
/// install state.
#[derive(Debug, Clone)]
pub struct DevEnv {
    /// Unique identifier.
    pub name: String,

    /// Declared tool image references, in descriptor order.
    pub tool_image_descriptors: Vec<ToolImageDescriptor>,

    /// Tool images bound from the registry. Empty until [`DevEnv::bind`]
    /// runs; unique by name.
    pub tool_images: Vec<ToolImage>,

    /// Install state. `None` for catalog-only environments.
    pub installed: Option<bool>,
}

impl DevEnv {
    /// Construct from an in-memory descriptor.
    pub fn from_descriptor(descriptor: DevEnvDescriptor) -> Self {
        Self {
            name: descriptor.name,
            tool_image_descriptors: descriptor.tools,
            tool_images: Vec::new(),
            installed: descriptor.installed,
        }
    }

    /// Load from a descriptor file.
    ///
    /// Fails with `DescriptorNotFound` if the path does not exist and with
    /// `DescriptorParse` if the content is not a valid descriptor.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DemError::DescriptorNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let descriptor: DevEnvDescriptor =
            serde_json::from_str(&content).map_err(|e| DemError::DescriptorParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(Self::from_descriptor(descriptor))
    }

    /// Whether this environment is installed locally.
    pub fn is_installed(&self) -> bool {
        self.installed == Some(true)
    }

    /// Bind declared tools to registry entries.
    ///
    /// For each declared `(image_name, image_version)` pair the composed
    /// `repository:tag` name is looked up in the registry; matches are
    /// cloned into `tool_images` (deduplicated by name). The returned list
    /// holds the composed names that had no registry entry so the caller
    /// can surface a partial-resolution warning; such entries contribute
    /// nothing to status computation.
    pub fn bind(&mut self, registry: &ToolImageRegistry) -> Vec<String> {
        self.tool_images.clear();
        let mut unresolved = Vec::new();

        for descriptor in &self.tool_image_descriptors {
            let full_name = descriptor.full_name();
            match registry.get(&full_name) {
                Some(image) => {
                    if !self.tool_images.iter().any(|bound| bound.name == image.name) {
                        self.tool_images.push(image.clone());
                    }
                }
                None => unresolved.push(full_name),
            }
        }

        unresolved
    }

    /// Aggregate status with install-state gating, highest precedence
    /// first: NotInstalled, then UnavailableImage, then ReinstallNeeded,
    /// then Ok. An uninstalled environment's image availability is
    /// irrelevant to the user, so installation state gates everything.
    pub fn status(&self) -> DevEnvStatus {
        if !self.is_installed() {
            return DevEnvStatus::NotInstalled;
        }
        self.tool_image_status()
    }

    /// Availability-only aggregate status, used for catalog environments
    /// where install state is meaningless.
    pub fn tool_image_status(&self) -> DevEnvStatus {
        status::aggregate(&self.tool_images)
    }

    /// Produce the descriptor mapping form. The install flag is dropped
    /// entirely when `omit_install_flag` is set (catalog export path).
    pub fn to_descriptor(&self, omit_install_flag: bool) -> DevEnvDescriptor {
        DevEnvDescriptor {
            name: self.name.clone(),
            installed: if omit_install_flag { None } else { self.installed },
            tools: self.tool_image_descriptors.clone(),
        }
    }

    /// Write the descriptor form to `path`, pretty-printed, always with
    /// the install flag omitted.
    pub fn export(&self, path: &Path) -> Result<()> {
        let descriptor = self.to_descriptor(true);
        let content = serde_json::to_string_pretty(&descriptor)
            .map_err(|e| anyhow::anyhow!("failed to serialize descriptor: {e}"))?;
        fs::write(path, content)?;
        Ok(())
    }
}
