//! Error types for kubetypes

use thiserror::Error;

/// Main error type for kubetypes
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Unknown resource type: {0}")]
    NotFound(String),

    #[error("Not an aggregation group: {0}")]
    NotAGroup(String),

    #[error("Duplicate logical name: {0}")]
    DuplicateName(String),

    #[error("Invalid addon entry '{name}': {reason}")]
    InvalidAddonEntry { name: String, reason: String },

    #[error("Group '{group}' references unknown member '{member}'")]
    UnknownMember { group: String, member: String },

    #[error("'{name}' is claimed by group '{first}' and group '{second}'")]
    ConflictingGroup {
        name: String,
        first: String,
        second: String,
    },

    #[error("Group '{0}' has no members")]
    EmptyGroup(String),

    #[error("Endpoint for '{0}' is cluster-scoped and no cluster was given")]
    ClusterRequired(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RegistryError {
    /// True for errors that indicate a defective definition set.
    ///
    /// These can only be produced while building a registry and must abort
    /// startup; everything else is a call-time error the caller may recover
    /// from.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            RegistryError::DuplicateName(_)
                | RegistryError::InvalidAddonEntry { .. }
                | RegistryError::UnknownMember { .. }
                | RegistryError::ConflictingGroup { .. }
                | RegistryError::EmptyGroup(_)
        )
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(e: serde_json::Error) -> Self {
        RegistryError::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for RegistryError {
    fn from(e: serde_yaml::Error) -> Self {
        RegistryError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for RegistryError {
    fn from(e: toml::de::Error) -> Self {
        RegistryError::Serialization(e.to_string())
    }
}

/// Result type alias for kubetypes
pub type Result<T> = std::result::Result<T, RegistryError>;
