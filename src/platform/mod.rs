//! Composition root binding store, catalogs, registry and engine.
//!
//! One `Platform` is built per invocation. It owns the availability
//! resolution pass: register every declared image name, ask the engine
//! for the local cache and registry search results, classify, then
//! re-bind the DevEnvs so their tool images carry fresh availability.

use std::path::{Path, PathBuf};

use crate::catalog::CatalogAggregator;
use crate::config::DemConfig;
use crate::dev_env::DevEnv;
use crate::engine::ContainerEngine;
use crate::error::{DemError, Result};
use crate::images::ToolImageRegistry;
use crate::store::LocalDevEnvStore;
use crate::ui::UserInterface;

/// The wired-up application core.
pub struct Platform {
    home: PathBuf,
    /// Local descriptor store.
    pub store: LocalDevEnvStore,
    /// Configured remote catalogs.
    pub aggregator: CatalogAggregator,
    /// Tool image registry, populated by the resolution pass.
    pub registry: ToolImageRegistry,
    engine: Box<dyn ContainerEngine>,
}

impl Platform {
    /// Build a platform rooted at the given dem home directory.
    pub fn new(home: &Path, engine: Box<dyn ContainerEngine>) -> Result<Self> {
        let config = DemConfig::load(home)?;
        Ok(Self {
            home: home.to_path_buf(),
            store: LocalDevEnvStore::new(home),
            aggregator: CatalogAggregator::new(&config.catalog_sources()),
            registry: ToolImageRegistry::new(),
            engine,
        })
    }

    /// The dem home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// The container engine.
    pub fn engine(&self) -> &dyn ContainerEngine {
        self.engine.as_ref()
    }

    /// Load every local DevEnv, running malformed-descriptor recovery
    /// through the given UI.
    pub fn local_dev_envs(&self, ui: &mut dyn UserInterface) -> Result<Vec<DevEnv>> {
        self.store.load_all(ui)
    }

    /// Load one local DevEnv by name.
    pub fn local_dev_env(&self, name: &str) -> Result<DevEnv> {
        self.store.load(name)
    }

    /// Run an availability resolution pass over the given DevEnvs and
    /// re-bind each of them.
    ///
    /// Every declared image name is registered, the local cache is listed
    /// once, and the registry is searched once per distinct repository.
    /// Unresolved declared names are surfaced as a warning per DevEnv.
    pub fn refresh_tool_images(
        &mut self,
        dev_envs: &mut [DevEnv],
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        for dev_env in dev_envs.iter() {
            for descriptor in &dev_env.tool_image_descriptors {
                self.registry.register(&descriptor.full_name());
            }
        }

        if self.registry.is_empty() {
            tracing::debug!("no tool images declared, skipping engine queries");
            for dev_env in dev_envs.iter_mut() {
                dev_env.bind(&self.registry);
            }
            return Ok(());
        }

        let local_images = self.engine.local_images()?;

        let mut registry_repos = Vec::new();
        for repository in self.registry.repositories() {
            let mut found = self.engine.search(&repository)?;
            tracing::debug!(
                "registry search for '{}' returned {} repositories",
                repository,
                found.len()
            );
            registry_repos.append(&mut found);
        }
        registry_repos.sort();
        registry_repos.dedup();

        self.registry.resolve(&local_images, &registry_repos);

        for dev_env in dev_envs.iter_mut() {
            let unresolved = dev_env.bind(&self.registry);
            if !unresolved.is_empty() {
                ui.warning(&format!(
                    "'{}' declares tool images missing from the registry: {}",
                    dev_env.name,
                    unresolved.join(", ")
                ));
            }
        }

        Ok(())
    }

    /// Find a DevEnv by name within an already-loaded set.
    pub fn find_dev_env<'a>(dev_envs: &'a mut [DevEnv], name: &str) -> Result<&'a mut DevEnv> {
        dev_envs
            .iter_mut()
            .find(|dev_env| dev_env.name == name)
            .ok_or_else(|| DemError::UnknownDevEnv {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev_env::{DevEnvDescriptor, DevEnvStatus};
    use crate::engine::MockEngine;
    use crate::images::Availability;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn descriptor(name: &str, tools: &[(&str, &str)]) -> DevEnvDescriptor {
        let tools: Vec<serde_json::Value> = tools
            .iter()
            .map(|(image, version)| {
                serde_json::json!({ "image_name": image, "image_version": version })
            })
            .collect();
        serde_json::from_value(serde_json::json!({
            "name": name,
            "installed": "True",
            "tools": tools,
        }))
        .unwrap()
    }

    fn platform_with(engine: MockEngine) -> (TempDir, Platform) {
        let home = TempDir::new().unwrap();
        let platform = Platform::new(home.path(), Box::new(engine)).unwrap();
        (home, platform)
    }

    #[test]
    fn resolution_pass_classifies_and_binds() {
        let mut engine = MockEngine::new();
        engine.set_local_images(&["gcc-arm:v1"]);
        engine.set_search_result("make", &["make"]);
        let (_home, mut platform) = platform_with(engine);

        let mut dev_envs = vec![DevEnv::from_descriptor(descriptor(
            "embedded",
            &[("gcc-arm", "v1"), ("make", "latest")],
        ))];

        let mut ui = MockUI::new();
        platform
            .refresh_tool_images(&mut dev_envs, &mut ui)
            .unwrap();

        let dev_env = &dev_envs[0];
        assert_eq!(dev_env.tool_images.len(), 2);
        assert_eq!(
            platform.registry.get("gcc-arm:v1").unwrap().availability,
            Availability::LocalOnly
        );
        assert_eq!(
            platform.registry.get("make:latest").unwrap().availability,
            Availability::RegistryOnly
        );
        assert_eq!(dev_env.status(), DevEnvStatus::ReinstallNeeded);
        assert!(ui.warnings.is_empty());
    }

    #[test]
    fn searches_once_per_distinct_repository() {
        let mut engine = MockEngine::new();
        engine.set_local_images(&[]);
        let (_home, mut platform) = platform_with(engine);

        // Same repository under two tags.
        let mut dev_envs = vec![DevEnv::from_descriptor(descriptor(
            "multi",
            &[("gcc-arm", "v1"), ("gcc-arm", "v2")],
        ))];

        let mut ui = MockUI::new();
        platform
            .refresh_tool_images(&mut dev_envs, &mut ui)
            .unwrap();

        // The mock records nothing for unknown terms; the pass still
        // classified both tags from the one repository lookup.
        assert_eq!(platform.registry.len(), 2);
    }

    #[test]
    fn unavailable_images_surface_status() {
        let (_home, mut platform) = platform_with(MockEngine::new());

        let mut dev_envs = vec![DevEnv::from_descriptor(descriptor(
            "embedded",
            &[("gcc-arm", "v1")],
        ))];

        let mut ui = MockUI::new();
        platform
            .refresh_tool_images(&mut dev_envs, &mut ui)
            .unwrap();

        assert_eq!(dev_envs[0].status(), DevEnvStatus::UnavailableImage);
    }

    #[test]
    fn find_dev_env_by_name() {
        let mut dev_envs = vec![
            DevEnv::from_descriptor(descriptor("a", &[])),
            DevEnv::from_descriptor(descriptor("b", &[])),
        ];

        assert_eq!(
            Platform::find_dev_env(&mut dev_envs, "b").unwrap().name,
            "b"
        );
        assert!(matches!(
            Platform::find_dev_env(&mut dev_envs, "c").unwrap_err(),
            DemError::UnknownDevEnv { .. }
        ));
    }
}
