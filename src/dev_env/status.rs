//! Aggregate Development Environment status.

use crate::images::{Availability, ToolImage};

/// Derived status of a Development Environment. Recomputed on demand from
/// the currently bound tool images, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevEnvStatus {
    /// Every bound image is locally available.
    Ok,

    /// At least one previously-installed image vanished locally and must
    /// be re-pulled from a registry.
    ReinstallNeeded,

    /// At least one image exists neither locally nor in a registry.
    UnavailableImage,

    /// The environment is not installed locally.
    NotInstalled,
}

impl DevEnvStatus {
    /// Short human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DevEnvStatus::Ok => "Ok",
            DevEnvStatus::ReinstallNeeded => "Reinstall needed",
            DevEnvStatus::UnavailableImage => "Unavailable image",
            DevEnvStatus::NotInstalled => "Not installed",
        }
    }
}

/// Availability-only aggregate over a set of bound tool images.
///
/// Total unavailability is a harder failure than a merely-stale local
/// cache, so it wins over ReinstallNeeded.
pub fn aggregate(tool_images: &[ToolImage]) -> DevEnvStatus {
    if tool_images
        .iter()
        .any(|image| image.availability == Availability::NotAvailable)
    {
        DevEnvStatus::UnavailableImage
    } else if tool_images
        .iter()
        .any(|image| image.availability == Availability::RegistryOnly)
    {
        DevEnvStatus::ReinstallNeeded
    } else {
        DevEnvStatus::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::ToolImage;

    fn image(name: &str, availability: Availability) -> ToolImage {
        ToolImage {
            name: name.to_string(),
            availability,
        }
    }

    #[test]
    fn all_local_is_ok() {
        let images = vec![
            image("a:1", Availability::LocalAndRegistry),
            image("b:1", Availability::LocalOnly),
        ];
        assert_eq!(aggregate(&images), DevEnvStatus::Ok);
    }

    #[test]
    fn any_not_available_wins() {
        let images = vec![
            image("a:1", Availability::NotAvailable),
            image("b:1", Availability::LocalOnly),
            image("c:1", Availability::RegistryOnly),
        ];
        assert_eq!(aggregate(&images), DevEnvStatus::UnavailableImage);
    }

    #[test]
    fn registry_only_forces_reinstall() {
        let images = vec![
            image("a:1", Availability::RegistryOnly),
            image("b:1", Availability::LocalOnly),
        ];
        assert_eq!(aggregate(&images), DevEnvStatus::ReinstallNeeded);
    }

    #[test]
    fn empty_set_is_ok() {
        assert_eq!(aggregate(&[]), DevEnvStatus::Ok);
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(DevEnvStatus::Ok.label(), "Ok");
        assert_eq!(DevEnvStatus::NotInstalled.label(), "Not installed");
        assert_eq!(DevEnvStatus::ReinstallNeeded.label(), "Reinstall needed");
        assert_eq!(DevEnvStatus::UnavailableImage.label(), "Unavailable image");
    }
}
