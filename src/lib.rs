//! kubetypes - Resource type registry for clients of layered Kubernetes-adjacent APIs
//!
//! Resolves logical resource names to the API tier that serves them, the wire
//! identifier to send, and whether the type is usable given the installed
//! management plane and per-cluster add-ons.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod output;
pub mod resources;

pub use error::{RegistryError, Result};
pub use resources::{
    InstalledFeatures, Resolution, ResourceRegistry, Tier, RESOURCE_REGISTRY,
};
