//! Remote Development Environment catalogs.
//!
//! A catalog is a named remote source publishing a list of DevEnv
//! definitions. Each catalog's listing is fetched lazily, at most once per
//! process. The [`CatalogAggregator`] scans catalogs in configured order
//! with first-catalog-wins precedence; one catalog's failure does not
//! abort lookups against the others.

pub mod aggregator;
pub mod fetch;
pub mod remote;

pub use aggregator::CatalogAggregator;
pub use fetch::HttpFetcher;
pub use remote::{CatalogIndex, DevEnvCatalog};
