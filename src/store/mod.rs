//! Persistent storage of installed Development Environment descriptors.
//!
//! Each locally known DevEnv is one JSON descriptor file under
//! `<home>/envs/<name>.json`, install flag included. Writes go through
//! the write-to-temp-then-rename pattern so a crash mid-write never
//! leaves a truncated descriptor behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::dev_env::DevEnv;
use crate::error::{DemError, Result};
use crate::ui::UserInterface;

/// Store of local DevEnv descriptors, rooted at the dem home directory.
#[derive(Debug, Clone)]
pub struct LocalDevEnvStore {
    envs_dir: PathBuf,
}

impl LocalDevEnvStore {
    /// Create a store rooted at the given dem home.
    pub fn new(home: &Path) -> Self {
        Self {
            envs_dir: home.join("envs"),
        }
    }

    /// The default dem home, `~/.dem`.
    pub fn default_home() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join(".dem")
    }

    /// Whether a descriptor with this name exists.
    pub fn exists(&self, name: &str) -> bool {
        self.descriptor_path(name)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Names of all stored descriptors, sorted.
    pub fn list_names(&self) -> Result<Vec<String>> {
        if !self.envs_dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.envs_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Load one descriptor by name.
    pub fn load(&self, name: &str) -> Result<DevEnv> {
        let path = self.descriptor_path(name)?;
        if !path.exists() {
            return Err(DemError::UnknownDevEnv {
                name: name.to_string(),
            });
        }
        DevEnv::from_file(&path)
    }

    /// Load every stored descriptor.
    ///
    /// A descriptor that fails to parse triggers a confirmation: on yes
    /// the file is deleted and skipped, on no the parse error is fatal.
    pub fn load_all(&self, ui: &mut dyn UserInterface) -> Result<Vec<DevEnv>> {
        let mut dev_envs = Vec::new();
        for name in self.list_names()? {
            match self.load(&name) {
                Ok(dev_env) => dev_envs.push(dev_env),
                Err(DemError::DescriptorParse { path, message }) => {
                    tracing::warn!("malformed descriptor at {}: {}", path.display(), message);
                    let question = format!(
                        "The descriptor of '{}' is malformed. Delete it?",
                        name
                    );
                    if ui.confirm(&question, false)? {
                        fs::remove_file(&path)?;
                        ui.warning(&format!("Deleted malformed descriptor of '{}'", name));
                    } else {
                        return Err(DemError::DescriptorParse { path, message });
                    }
                }
                Err(e) => return Err(e),
            }
        }
        Ok(dev_envs)
    }

    /// Save a descriptor, install flag included. Atomic via temp+rename.
    pub fn save(&self, dev_env: &DevEnv) -> Result<()> {
        fs::create_dir_all(&self.envs_dir)?;

        let path = self.descriptor_path(&dev_env.name)?;
        let descriptor = dev_env.to_descriptor(false);
        let content =
            serde_json::to_string_pretty(&descriptor).map_err(|e| DemError::InvalidArgument {
                message: format!("cannot serialize descriptor of '{}': {}", dev_env.name, e),
            })?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    /// Delete a stored descriptor.
    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.descriptor_path(name)?;
        if !path.exists() {
            return Err(DemError::UnknownDevEnv {
                name: name.to_string(),
            });
        }
        fs::remove_file(&path)?;
        Ok(())
    }

    fn descriptor_path(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() || name.contains('/') || name.contains('\\') || name == ".." {
            return Err(DemError::InvalidArgument {
                message: format!("invalid Development Environment name: '{}'", name),
            });
        }
        Ok(self.envs_dir.join(format!("{}.json", name)))
    }
}
