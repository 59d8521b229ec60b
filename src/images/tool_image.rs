//! Tool image state.
//!
//! A tool image is one container image providing a single development tool
//! (compiler, flasher, test runner). Each image is classified by where it
//! is currently present: the local engine cache, a remote registry, both,
//! or neither.

/// Where a tool image is currently available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    /// Present neither locally nor in a registry.
    #[default]
    NotAvailable,

    /// Present in the local engine cache only.
    LocalOnly,

    /// Present in a registry only (the local copy is gone or never pulled).
    RegistryOnly,

    /// Present both locally and in a registry.
    LocalAndRegistry,
}

impl Availability {
    /// Whether the image can be used without pulling.
    pub fn is_local(&self) -> bool {
        matches!(self, Availability::LocalOnly | Availability::LocalAndRegistry)
    }

    /// Whether the image can be pulled from a registry.
    pub fn in_registry(&self) -> bool {
        matches!(
            self,
            Availability::RegistryOnly | Availability::LocalAndRegistry
        )
    }

    /// Human-readable label for list/info output.
    pub fn label(&self) -> &'static str {
        match self {
            Availability::NotAvailable => "Not available",
            Availability::LocalOnly => "Local",
            Availability::RegistryOnly => "Registry",
            Availability::LocalAndRegistry => "Local and registry",
        }
    }
}

/// A single tool image, unique by name within the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolImage {
    /// Full image name in `<repository>:<tag>` form.
    pub name: String,

    /// Current availability classification. Replaced as a whole by each
    /// resolution pass, never partially mutated.
    pub availability: Availability,
}

impl ToolImage {
    /// Create a tool image with unresolved availability.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            availability: Availability::NotAvailable,
        }
    }

    /// The repository part of the name (everything before the tag).
    pub fn repository(&self) -> &str {
        self.name.split(':').next().unwrap_or(&self.name)
    }

    /// The tag part of the name, if any.
    pub fn tag(&self) -> Option<&str> {
        self.name.split_once(':').map(|(_, tag)| tag)
    }
}
