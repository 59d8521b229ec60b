//! Catalog aggregation with first-catalog-wins precedence.

use crate::dev_env::DevEnv;
use crate::error::{DemError, Result};

use super::fetch::HttpFetcher;
use super::remote::DevEnvCatalog;

/// An ordered sequence of catalogs, scanned in configured order.
pub struct CatalogAggregator {
    catalogs: Vec<DevEnvCatalog>,
    fetcher: HttpFetcher,
}

impl CatalogAggregator {
    /// Create an aggregator over (name, url) pairs, in configured order.
    pub fn new(sources: &[(String, String)]) -> Self {
        Self {
            catalogs: sources
                .iter()
                .map(|(name, url)| DevEnvCatalog::new(name, url))
                .collect(),
            fetcher: HttpFetcher::new(),
        }
    }

    /// Create an aggregator with a custom fetcher (tests use short timeouts).
    pub fn with_fetcher(sources: &[(String, String)], fetcher: HttpFetcher) -> Self {
        Self {
            catalogs: sources
                .iter()
                .map(|(name, url)| DevEnvCatalog::new(name, url))
                .collect(),
            fetcher,
        }
    }

    /// Configured catalog names, in scan order.
    pub fn names(&self) -> Vec<&str> {
        self.catalogs.iter().map(|c| c.name.as_str()).collect()
    }

    /// Whether no catalogs are configured.
    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// Fetch one catalog's environment list (cached after first success).
    /// Fails with `UnknownCatalog` for an unconfigured name.
    pub fn dev_envs_of(&mut self, catalog_name: &str) -> Result<&[DevEnv]> {
        let fetcher = &self.fetcher;
        let catalog = self
            .catalogs
            .iter_mut()
            .find(|c| c.name == catalog_name)
            .ok_or_else(|| DemError::UnknownCatalog {
                name: catalog_name.to_string(),
            })?;
        catalog.request_dev_envs(fetcher)
    }

    /// Find an environment by name with first-catalog-wins precedence.
    ///
    /// With an empty `selected` filter every catalog is scanned in
    /// configured order; otherwise the scan is restricted to the selected
    /// names (which must all be configured, else `UnknownCatalog`). A
    /// catalog whose fetch fails is logged and skipped; the scan goes on.
    /// Returns the first match together with its owning catalog's name.
    pub fn find(&mut self, name: &str, selected: &[String]) -> Result<Option<(DevEnv, String)>> {
        for wanted in selected {
            if !self.catalogs.iter().any(|c| &c.name == wanted) {
                return Err(DemError::UnknownCatalog {
                    name: wanted.clone(),
                });
            }
        }

        let mut found = None;
        for (index, catalog) in self.catalogs.iter_mut().enumerate() {
            if !selected.is_empty() && !selected.contains(&catalog.name) {
                continue;
            }

            if let Err(e) = catalog.request_dev_envs(&self.fetcher) {
                tracing::warn!("skipping catalog '{}': {}", catalog.name, e);
                continue;
            }

            if catalog.get_dev_env_by_name(name).is_some() {
                found = Some(index);
                break;
            }
        }

        if let Some(index) = found {
            let catalog = &self.catalogs[index];
            if let Some(dev_env) = catalog.get_dev_env_by_name(name) {
                return Ok(Some((dev_env.clone(), catalog.name.clone())));
            }
        }

        Ok(None)
    }
}
