//! Descriptor wire format.
//!
//! Descriptors are JSON objects with top-level keys `name`, `installed`
//! (optional) and `tools`. The `installed` flag is encoded as the literal
//! strings "True"/"False" for backward file-format compatibility with
//! existing descriptor files; it is absent for catalog entries, where
//! install state is meaningless.

use serde::{Deserialize, Serialize};

/// One declared tool image reference inside a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolImageDescriptor {
    /// Image repository name, without tag.
    pub image_name: String,

    /// Image tag.
    pub image_version: String,
}

impl ToolImageDescriptor {
    /// The composed `repository:tag` image name.
    pub fn full_name(&self) -> String {
        format!("{}:{}", self.image_name, self.image_version)
    }
}

/// A Development Environment descriptor, validated at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevEnvDescriptor {
    /// Unique Development Environment name.
    pub name: String,

    /// Install state, present only for locally-registered environments.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "install_flag")]
    pub installed: Option<bool>,

    /// Declared tool images, in descriptor order.
    pub tools: Vec<ToolImageDescriptor>,
}

/// "True"/"False" string encoding of the install flag.
mod install_flag {
    use serde::de::{Error, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(true) => serializer.serialize_str("True"),
            Some(false) => serializer.serialize_str("False"),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        match value.as_str() {
            "True" => Ok(Some(true)),
            "False" => Ok(Some(false)),
            other => Err(D::Error::invalid_value(
                Unexpected::Str(other),
                &"\"True\" or \"False\"",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "name": "embedded",
            "installed": "True",
            "tools": [
                { "image_name": "gcc-arm", "image_version": "v1" },
                { "image_name": "stlink", "image_version": "latest" }
            ]
        }"#
    }

    #[test]
    fn parses_full_descriptor() {
        let descriptor: DevEnvDescriptor = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(descriptor.name, "embedded");
        assert_eq!(descriptor.installed, Some(true));
        assert_eq!(descriptor.tools.len(), 2);
        assert_eq!(descriptor.tools[0].image_name, "gcc-arm");
        assert_eq!(descriptor.tools[0].image_version, "v1");
    }

    #[test]
    fn installed_false_string() {
        let json = r#"{ "name": "x", "installed": "False", "tools": [] }"#;
        let descriptor: DevEnvDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.installed, Some(false));
    }

    #[test]
    fn installed_missing_is_none() {
        let json = r#"{ "name": "x", "tools": [] }"#;
        let descriptor: DevEnvDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.installed, None);
    }

    #[test]
    fn installed_rejects_native_boolean() {
        let json = r#"{ "name": "x", "installed": true, "tools": [] }"#;
        assert!(serde_json::from_str::<DevEnvDescriptor>(json).is_err());
    }

    #[test]
    fn installed_rejects_other_strings() {
        let json = r#"{ "name": "x", "installed": "yes", "tools": [] }"#;
        let err = serde_json::from_str::<DevEnvDescriptor>(json).unwrap_err();
        assert!(err.to_string().contains("True"));
    }

    #[test]
    fn missing_tools_is_an_error_naming_the_field() {
        let json = r#"{ "name": "x" }"#;
        let err = serde_json::from_str::<DevEnvDescriptor>(json).unwrap_err();
        assert!(err.to_string().contains("tools"));
    }

    #[test]
    fn serializes_installed_as_string() {
        let descriptor = DevEnvDescriptor {
            name: "x".into(),
            installed: Some(true),
            tools: vec![],
        };
        let json = serde_json::to_string(&descriptor).unwrap();
        assert!(json.contains(r#""installed":"True""#));
    }

    #[test]
    fn serializes_without_installed_when_none() {
        let descriptor = DevEnvDescriptor {
            name: "x".into(),
            installed: None,
            tools: vec![],
        };
        let json = serde_json::to_string(&descriptor).unwrap();
        assert!(!json.contains("installed"));
    }

    #[test]
    fn round_trips_exactly() {
        let original: serde_json::Value = serde_json::from_str(sample_json()).unwrap();
        let descriptor: DevEnvDescriptor = serde_json::from_str(sample_json()).unwrap();
        let round_tripped = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(original, round_tripped);
    }

    #[test]
    fn full_name_composes_repository_and_tag() {
        let tool = ToolImageDescriptor {
            image_name: "gcc-arm".into(),
            image_version: "v1".into(),
        };
        assert_eq!(tool.full_name(), "gcc-arm:v1");
    }
}
