//! The deduplicated tool image registry and its resolution pass.

use std::collections::{BTreeMap, BTreeSet};

use super::{Availability, ToolImage};

/// One entry per distinct image name referenced across all Development
/// Environments and catalogs. A resolution pass rewrites every entry's
/// availability in place; Development Environments are never touched by it.
#[derive(Debug, Clone, Default)]
pub struct ToolImageRegistry {
    // BTreeMap keeps iteration order stable for display and for the
    // per-repository search pass.
    images: BTreeMap<String, ToolImage>,
}

impl ToolImageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image name. Registering the same name twice is a no-op;
    /// the existing entry (and its availability) is kept.
    pub fn register(&mut self, name: &str) {
        self.images
            .entry(name.to_string())
            .or_insert_with(|| ToolImage::new(name));
    }

    /// Look up an image by its full `repository:tag` name.
    pub fn get(&self, name: &str) -> Option<&ToolImage> {
        self.images.get(name)
    }

    /// All registered images in name order.
    pub fn all(&self) -> impl Iterator<Item = &ToolImage> {
        self.images.values()
    }

    /// Number of registered images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether no images are registered.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The distinct repositories among all registered image names, in
    /// stable order. These are the search terms for the registry side of a
    /// resolution pass.
    pub fn repositories(&self) -> Vec<String> {
        let repos: BTreeSet<String> = self
            .images
            .values()
            .map(|image| image.repository().to_string())
            .collect();
        repos.into_iter().collect()
    }

    /// Classify every registered image against the current local and
    /// registry state. A pure function of the two input sets; each entry's
    /// availability is replaced wholesale.
    ///
    /// Local presence is checked at full `repository:tag` granularity.
    /// Registry presence is checked at repository granularity only, because
    /// registry search cannot enumerate tags cheaply. Known limitation: a
    /// tag missing from the registry under a repository that does exist is
    /// still reported as registry-side available.
    pub fn resolve(&mut self, local_images: &[String], registry_repos: &[String]) {
        for image in self.images.values_mut() {
            let local = local_images.iter().any(|name| name == &image.name);
            let in_registry = registry_repos
                .iter()
                .any(|repo| repo == image.repository());

            image.availability = match (local, in_registry) {
                (true, true) => Availability::LocalAndRegistry,
                (true, false) => Availability::LocalOnly,
                (false, true) => Availability::RegistryOnly,
                (false, false) => Availability::NotAvailable,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn register_deduplicates_by_name() {
        let mut registry = ToolImageRegistry::new();
        registry.register("gcc-arm:v1");
        registry.register("gcc-arm:v1");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_keeps_existing_availability() {
        let mut registry = ToolImageRegistry::new();
        registry.register("gcc-arm:v1");
        registry.resolve(&strings(&["gcc-arm:v1"]), &[]);
        registry.register("gcc-arm:v1");
        assert_eq!(
            registry.get("gcc-arm:v1").unwrap().availability,
            Availability::LocalOnly
        );
    }

    #[test]
    fn resolve_local_only() {
        let mut registry = ToolImageRegistry::new();
        registry.register("gcc-arm:v1");
        registry.resolve(&strings(&["gcc-arm:v1"]), &[]);
        assert_eq!(
            registry.get("gcc-arm:v1").unwrap().availability,
            Availability::LocalOnly
        );
    }

    #[test]
    fn resolve_registry_only() {
        let mut registry = ToolImageRegistry::new();
        registry.register("gcc-arm:v1");
        registry.resolve(&[], &strings(&["gcc-arm"]));
        assert_eq!(
            registry.get("gcc-arm:v1").unwrap().availability,
            Availability::RegistryOnly
        );
    }

    #[test]
    fn resolve_local_and_registry() {
        let mut registry = ToolImageRegistry::new();
        registry.register("gcc-arm:v1");
        registry.resolve(&strings(&["gcc-arm:v1"]), &strings(&["gcc-arm"]));
        assert_eq!(
            registry.get("gcc-arm:v1").unwrap().availability,
            Availability::LocalAndRegistry
        );
    }

    #[test]
    fn resolve_not_available() {
        let mut registry = ToolImageRegistry::new();
        registry.register("gcc-arm:v1");
        registry.resolve(&[], &[]);
        assert_eq!(
            registry.get("gcc-arm:v1").unwrap().availability,
            Availability::NotAvailable
        );
    }

    #[test]
    fn local_presence_is_tag_sensitive() {
        let mut registry = ToolImageRegistry::new();
        registry.register("gcc-arm:v2");
        // Only v1 is present locally, so v2 does not count as local.
        registry.resolve(&strings(&["gcc-arm:v1"]), &[]);
        assert_eq!(
            registry.get("gcc-arm:v2").unwrap().availability,
            Availability::NotAvailable
        );
    }

    #[test]
    fn registry_presence_is_tag_insensitive() {
        let mut registry = ToolImageRegistry::new();
        registry.register("gcc-arm:no-such-tag");
        // The repository exists in the registry, so the entry is reported
        // RegistryOnly even though this particular tag may not exist.
        registry.resolve(&[], &strings(&["gcc-arm"]));
        assert_eq!(
            registry.get("gcc-arm:no-such-tag").unwrap().availability,
            Availability::RegistryOnly
        );
    }

    #[test]
    fn resolve_replaces_availability_wholesale() {
        let mut registry = ToolImageRegistry::new();
        registry.register("gcc-arm:v1");
        registry.resolve(&strings(&["gcc-arm:v1"]), &[]);
        registry.resolve(&[], &strings(&["gcc-arm"]));
        assert_eq!(
            registry.get("gcc-arm:v1").unwrap().availability,
            Availability::RegistryOnly
        );
    }

    #[test]
    fn resolve_classifies_every_entry() {
        let mut registry = ToolImageRegistry::new();
        registry.register("a:1");
        registry.register("b:1");
        registry.register("c:1");
        registry.register("d:1");
        registry.resolve(
            &strings(&["a:1", "b:1"]),
            &strings(&["b", "c"]),
        );
        assert_eq!(registry.get("a:1").unwrap().availability, Availability::LocalOnly);
        assert_eq!(
            registry.get("b:1").unwrap().availability,
            Availability::LocalAndRegistry
        );
        assert_eq!(
            registry.get("c:1").unwrap().availability,
            Availability::RegistryOnly
        );
        assert_eq!(
            registry.get("d:1").unwrap().availability,
            Availability::NotAvailable
        );
    }

    #[test]
    fn repositories_are_distinct_and_ordered() {
        let mut registry = ToolImageRegistry::new();
        registry.register("stlink:v1");
        registry.register("gcc-arm:v1");
        registry.register("gcc-arm:v2");
        assert_eq!(registry.repositories(), vec!["gcc-arm", "stlink"]);
    }

    #[test]
    fn all_iterates_in_name_order() {
        let mut registry = ToolImageRegistry::new();
        registry.register("zlib:1");
        registry.register("arm:1");
        let names: Vec<_> = registry.all().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["arm:1", "zlib:1"]);
    }

    #[test]
    fn empty_registry() {
        let registry = ToolImageRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("anything").is_none());
        assert!(registry.repositories().is_empty());
    }
}
