//! dem configuration.
//!
//! The config file lives at `<home>/config.json` and lists the remote
//! catalogs in scan order. A missing file means no catalogs configured.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DemError, Result};

/// One configured catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog name, unique among configured catalogs.
    pub name: String,
    /// Listing URL.
    pub url: String,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemConfig {
    /// Catalogs, in scan order.
    #[serde(default)]
    pub catalogs: Vec<CatalogConfig>,
}

impl DemConfig {
    /// Load configuration from `<home>/config.json`.
    ///
    /// A missing file yields the default (empty) configuration; a file
    /// that exists but does not parse is an error.
    pub fn load(home: &Path) -> Result<Self> {
        let path = home.join("config.json");
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| DemError::ConfigParse {
            path,
            message: e.to_string(),
        })
    }

    /// Catalog sources as (name, url) pairs, in scan order.
    pub fn catalog_sources(&self) -> Vec<(String, String)> {
        self.catalogs
            .iter()
            .map(|c| (c.name.clone(), c.url.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_is_empty() {
        let home = TempDir::new().unwrap();
        let config = DemConfig::load(home.path()).unwrap();
        assert!(config.catalogs.is_empty());
    }

    #[test]
    fn parses_catalog_list() {
        let home = TempDir::new().unwrap();
        fs::write(
            home.path().join("config.json"),
            r#"{ "catalogs": [ { "name": "org", "url": "https://example.org/envs.json" } ] }"#,
        )
        .unwrap();

        let config = DemConfig::load(home.path()).unwrap();
        assert_eq!(config.catalogs.len(), 1);
        assert_eq!(config.catalogs[0].name, "org");
        assert_eq!(
            config.catalog_sources(),
            vec![(
                "org".to_string(),
                "https://example.org/envs.json".to_string()
            )]
        );
    }

    #[test]
    fn malformed_config_is_an_error() {
        let home = TempDir::new().unwrap();
        fs::write(home.path().join("config.json"), "{ not json").unwrap();

        let err = DemConfig::load(home.path()).unwrap_err();
        assert!(matches!(err, DemError::ConfigParse { .. }));
    }

    #[test]
    fn catalog_order_is_preserved() {
        let home = TempDir::new().unwrap();
        fs::write(
            home.path().join("config.json"),
            r#"{ "catalogs": [
                { "name": "first", "url": "https://a" },
                { "name": "second", "url": "https://b" }
            ] }"#,
        )
        .unwrap();

        let config = DemConfig::load(home.path()).unwrap();
        let names: Vec<&str> = config.catalogs.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
