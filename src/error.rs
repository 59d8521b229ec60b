//! Error types for dem operations.
//!
//! This module defines [`DemError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DemError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DemError::Other`) for unexpected errors
//! - NotFound and InvalidArgument cases are deterministic and always
//!   surfaced to the caller; they are never silently recovered
//! - One catalog's failure never aborts lookups against the others
//! - Engine failures are never retried; the underlying cause is reported
//!   verbatim so the user can act on it

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dem operations.
#[derive(Debug, Error)]
pub enum DemError {
    /// Descriptor file not found at the given path.
    #[error("Descriptor not found: {path}")]
    DescriptorNotFound { path: PathBuf },

    /// Failed to parse a descriptor file.
    #[error("Failed to parse descriptor at {path}: {message}")]
    DescriptorParse { path: PathBuf, message: String },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// No Development Environment with this name exists.
    #[error("Unknown Development Environment: {name}")]
    UnknownDevEnv { name: String },

    /// No configured catalog with this name exists.
    #[error("Unknown catalog: {name}")]
    UnknownCatalog { name: String },

    /// Conflicting or nonsensical arguments for a local operation.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Required tool images exist neither locally nor in a registry.
    /// Terminal for the requested operation, never retried.
    #[error("Required image(s) not available locally or in a registry: {images}")]
    UnavailableImage { images: String },

    /// A remote catalog was unreachable or returned a malformed listing.
    #[error("Catalog '{catalog}' error: {message}")]
    Catalog { catalog: String, message: String },

    /// Transport-level failure from the container engine.
    #[error("Container engine error: {message}")]
    Engine { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DemError {
    /// A remediation hint for engine errors, derived from the message the
    /// engine transport raised. Returns `None` for non-engine errors.
    pub fn engine_hint(&self) -> Option<&'static str> {
        let DemError::Engine { message } = self else {
            return None;
        };

        if message.to_lowercase().contains("permission denied") {
            Some("Is your user part of the docker group?")
        } else if message.contains("invalid reference format") {
            Some("The input repository might not exist in the registry.")
        } else {
            Some(
                "Probably something is wrong with your container engine installation. \
                 Try to reinstall it.",
            )
        }
    }
}

/// Result type alias for dem operations.
pub type Result<T> = std::result::Result<T, DemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_not_found_displays_path() {
        let err = DemError::DescriptorNotFound {
            path: PathBuf::from("/home/user/.dem/envs/embedded.json"),
        };
        assert!(err.to_string().contains("embedded.json"));
    }

    #[test]
    fn descriptor_parse_displays_path_and_message() {
        let err = DemError::DescriptorParse {
            path: PathBuf::from("/bad.json"),
            message: "missing field `tools`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/bad.json"));
        assert!(msg.contains("missing field `tools`"));
    }

    #[test]
    fn unknown_dev_env_displays_name() {
        let err = DemError::UnknownDevEnv {
            name: "nonexistent".into(),
        };
        assert!(err.to_string().contains("nonexistent"));
    }

    #[test]
    fn unknown_catalog_displays_name() {
        let err = DemError::UnknownCatalog { name: "axem".into() };
        assert!(err.to_string().contains("axem"));
    }

    #[test]
    fn unavailable_image_displays_images() {
        let err = DemError::UnavailableImage {
            images: "gcc-arm:v1, cpputest:latest".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("gcc-arm:v1"));
        assert!(msg.contains("cpputest:latest"));
    }

    #[test]
    fn catalog_error_displays_catalog_and_message() {
        let err = DemError::Catalog {
            catalog: "org".into(),
            message: "HTTP 503".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("org"));
        assert!(msg.contains("HTTP 503"));
    }

    #[test]
    fn engine_hint_permission_denied() {
        let err = DemError::Engine {
            message: "Got permission denied while trying to connect to the Docker daemon socket"
                .into(),
        };
        assert_eq!(
            err.engine_hint(),
            Some("Is your user part of the docker group?")
        );
    }

    #[test]
    fn engine_hint_invalid_reference() {
        let err = DemError::Engine {
            message: "invalid reference format".into(),
        };
        assert!(err.engine_hint().unwrap().contains("registry"));
    }

    #[test]
    fn engine_hint_generic() {
        let err = DemError::Engine {
            message: "Cannot connect to the Docker daemon".into(),
        };
        assert!(err.engine_hint().unwrap().contains("installation"));
    }

    #[test]
    fn engine_hint_none_for_other_errors() {
        let err = DemError::UnknownDevEnv { name: "x".into() };
        assert_eq!(err.engine_hint(), None);
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DemError = io_err.into();
        assert!(matches!(err, DemError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(DemError::InvalidArgument {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
