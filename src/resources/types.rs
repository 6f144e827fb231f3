//! Definition types: tiers, catalog entries, aggregation groups

use crate::error::{RegistryError, Result};
use crate::resources::routing::Endpoint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// API layer a resource type is served from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Always present
    Core,
    /// Present only when the management control plane is installed
    Management,
    /// Present only when an optional package is installed in a cluster
    Addon,
}

impl Tier {
    /// Endpoint used when a definition does not name one
    pub fn default_endpoint(&self) -> Endpoint {
        match self {
            Tier::Core => Endpoint::Cluster,
            Tier::Management => Endpoint::Steve,
            Tier::Addon => Endpoint::Cluster,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Core => "core",
            Tier::Management => "management",
            Tier::Addon => "addon",
        };
        f.write_str(name)
    }
}

/// One row of the tier catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTypeEntry {
    pub logical_name: String,
    pub wire_identifier: String,
    pub tier: Tier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addon_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,
}

impl ResourceTypeEntry {
    /// A core entry served from the tier's default endpoint
    pub fn core(logical_name: &str, wire_identifier: &str) -> Self {
        Self::new(logical_name, wire_identifier, Tier::Core, None)
    }

    /// A management-plane entry
    pub fn management(logical_name: &str, wire_identifier: &str) -> Self {
        Self::new(logical_name, wire_identifier, Tier::Management, None)
    }

    /// An add-on entry, usable only where `addon_key` is installed
    pub fn addon(logical_name: &str, wire_identifier: &str, addon_key: &str) -> Self {
        Self::new(
            logical_name,
            wire_identifier,
            Tier::Addon,
            Some(addon_key.to_string()),
        )
    }

    fn new(logical_name: &str, wire_identifier: &str, tier: Tier, addon_key: Option<String>) -> Self {
        Self {
            logical_name: logical_name.to_string(),
            wire_identifier: wire_identifier.to_string(),
            tier,
            addon_key,
            endpoint: None,
        }
    }

    /// Override the endpoint this entry is served from
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Effective endpoint, falling back to the tier default
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint.unwrap_or_else(|| self.tier.default_endpoint())
    }

    /// Check the tier/addon-key pairing
    pub(crate) fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| RegistryError::InvalidAddonEntry {
            name: self.logical_name.clone(),
            reason: reason.to_string(),
        };

        match (self.tier, self.addon_key.as_deref()) {
            (Tier::Addon, None) => Err(invalid("addon entry has no addon key")),
            (Tier::Addon, Some(key)) if key.trim().is_empty() => {
                Err(invalid("addon entry has an empty addon key"))
            }
            (Tier::Addon, Some(_)) if !self.endpoint().is_cluster_scoped() => {
                Err(invalid("addon entry must use a cluster-scoped endpoint"))
            }
            (Tier::Core | Tier::Management, Some(_)) => {
                Err(invalid("only addon entries may carry an addon key"))
            }
            _ => Ok(()),
        }
    }
}

/// A logical name standing for several underlying resource types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationGroup {
    pub group_name: String,
    pub member_names: Vec<String>,
}

impl AggregationGroup {
    pub fn new(group_name: &str, member_names: &[&str]) -> Self {
        Self {
            group_name: group_name.to_string(),
            member_names: member_names.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// A versioned set of entries and groups a registry is built from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionSet {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub entries: Vec<ResourceTypeEntry>,
    #[serde(default)]
    pub groups: Vec<AggregationGroup>,
}

impl DefinitionSet {
    /// Load a definition set from a TOML, YAML or JSON file.
    ///
    /// The format is picked from the file extension; anything other than
    /// `.yaml`, `.yml` or `.json` is read as TOML.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Ok(toml::from_str(&content)?),
        }
    }
}
