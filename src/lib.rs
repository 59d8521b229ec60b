//! dem - Development Environment Manager for containerized tools.
//!
//! dem tracks named Development Environments, each composed of a set of
//! tool container images, and reconciles their state across a local
//! descriptor store, the container engine's image cache, and remote
//! catalogs of environment definitions.
//!
//! # Modules
//!
//! - [`catalog`] - Remote catalogs: fetching, caching, aggregation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading (catalog list)
//! - [`dev_env`] - Development Environment entity and status machine
//! - [`engine`] - Container engine abstraction and docker implementation
//! - [`error`] - Error types and result aliases
//! - [`images`] - Tool image registry and availability resolution
//! - [`install`] - Install/update/uninstall orchestration
//! - [`platform`] - Composition root wiring the pieces together
//! - [`store`] - Local descriptor storage
//! - [`ui`] - Terminal output, confirmations, and progress rendering
//!
//! # Example
//!
//! ```
//! use dem::images::{Availability, ToolImageRegistry};
//!
//! // Classify a declared image against the engine's caches
//! let mut registry = ToolImageRegistry::new();
//! registry.register("gcc-arm:v1");
//! registry.resolve(&["gcc-arm:v1".to_string()], &[]);
//! assert_eq!(
//!     registry.get("gcc-arm:v1").unwrap().availability,
//!     Availability::LocalOnly
//! );
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod dev_env;
pub mod engine;
pub mod error;
pub mod images;
pub mod install;
pub mod platform;
pub mod store;
pub mod ui;

pub use error::{DemError, Result};
