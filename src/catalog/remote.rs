//! A single remote catalog with lazy, cached fetching.

use serde::{Deserialize, Serialize};

use crate::dev_env::{DevEnv, DevEnvDescriptor};
use crate::error::{DemError, Result};

use super::fetch::HttpFetcher;

/// Wire format of a catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogIndex {
    /// Published Development Environment descriptors, without install state.
    pub development_environments: Vec<DevEnvDescriptor>,
}

/// One named remote catalog.
///
/// The environment list is fetched at most once per process; after the
/// first success, `request_dev_envs` returns the cached copy.
#[derive(Debug)]
pub struct DevEnvCatalog {
    /// Catalog name, as configured.
    pub name: String,

    /// Listing URL.
    pub url: String,

    dev_envs: Option<Vec<DevEnv>>,
}

impl DevEnvCatalog {
    /// Create a catalog that has not been fetched yet.
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            dev_envs: None,
        }
    }

    /// Whether the listing is already cached.
    pub fn is_fetched(&self) -> bool {
        self.dev_envs.is_some()
    }

    /// Fetch the catalog's environment list, idempotent after first
    /// success. Network or parse failures are reported as catalog errors
    /// and leave the catalog unfetched, so a later call retries.
    pub fn request_dev_envs(&mut self, fetcher: &HttpFetcher) -> Result<&[DevEnv]> {
        if self.dev_envs.is_none() {
            let content = fetcher.fetch(&self.url).map_err(|e| DemError::Catalog {
                catalog: self.name.clone(),
                message: e.to_string(),
            })?;

            let index: CatalogIndex =
                serde_json::from_str(&content).map_err(|e| DemError::Catalog {
                    catalog: self.name.clone(),
                    message: format!("malformed catalog listing: {e}"),
                })?;

            tracing::debug!(
                "catalog '{}' listed {} environments",
                self.name,
                index.development_environments.len()
            );

            self.dev_envs = Some(
                index
                    .development_environments
                    .into_iter()
                    .map(DevEnv::from_descriptor)
                    .collect(),
            );
        }

        Ok(self.dev_envs.as_deref().unwrap_or_default())
    }

    /// Look up a fetched environment by name. `None` when the name is
    /// absent or the catalog has not been fetched.
    pub fn get_dev_env_by_name(&self, name: &str) -> Option<&DevEnv> {
        self.dev_envs
            .as_ref()?
            .iter()
            .find(|dev_env| dev_env.name == name)
    }

    /// Test-only constructor with a pre-populated cache, so unit tests
    /// stay off the network.
    #[cfg(test)]
    pub(crate) fn with_cached(name: &str, dev_envs: Vec<DevEnv>) -> Self {
        Self {
            name: name.to_string(),
            url: format!("http://localhost/{name}.json"),
            dev_envs: Some(dev_envs),
        }
    }
}
