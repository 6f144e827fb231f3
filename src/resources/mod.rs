//! Resource type catalog, aggregation groups and availability resolution

pub mod aggregation;
pub mod catalog;
pub mod definitions;
pub mod features;
pub mod registry;
pub mod routing;
pub mod types;

pub use aggregation::AggregationIndex;
pub use catalog::TierCatalog;
pub use definitions::builtin_definitions;
pub use features::{FeatureStore, InstalledFeatures};
pub use registry::{GroupResolution, Resolution, ResourceRegistry, TypeResolution, RESOURCE_REGISTRY};
pub use routing::Endpoint;
pub use types::{AggregationGroup, DefinitionSet, ResourceTypeEntry, Tier};
