//! Resource type registry: catalog, aggregation and availability resolution

use crate::error::{RegistryError, Result};
use crate::resources::aggregation::AggregationIndex;
use crate::resources::catalog::TierCatalog;
use crate::resources::definitions::builtin_definitions;
use crate::resources::features::InstalledFeatures;
use crate::resources::routing::Endpoint;
use crate::resources::types::{DefinitionSet, ResourceTypeEntry, Tier};
use serde::Serialize;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Global registry built from the compiled-in definitions.
///
/// The built-in set is covered by tests; a defect in it aborts the process
/// on first access instead of serving inconsistent routing data.
pub static RESOURCE_REGISTRY: LazyLock<ResourceRegistry> = LazyLock::new(|| {
    match ResourceRegistry::build(builtin_definitions()) {
        Ok(registry) => registry,
        Err(e) => panic!("built-in resource definitions are invalid: {}", e),
    }
});

/// Resolution of a plain resource type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeResolution {
    pub logical_name: String,
    pub tier: Tier,
    pub wire_identifier: String,
    pub endpoint: Endpoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addon_key: Option<String>,
    pub available: bool,
}

impl TypeResolution {
    /// Request path for this type, `<base>/<wire identifier>`
    pub fn url(&self, cluster: Option<&str>) -> Result<String> {
        let base = self
            .endpoint
            .base_path(cluster)
            .map_err(|_| RegistryError::ClusterRequired(self.logical_name.clone()))?;
        Ok(format!("{}/{}", base, self.wire_identifier))
    }
}

/// Resolution of an aggregation group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupResolution {
    pub group_name: String,
    /// Available members, in group order
    pub available_members: Vec<String>,
    pub available: bool,
}

/// Result of resolving a logical name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Resolution {
    Type(TypeResolution),
    Group(GroupResolution),
}

impl Resolution {
    pub fn is_available(&self) -> bool {
        match self {
            Resolution::Type(t) => t.available,
            Resolution::Group(g) => g.available,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Resolution::Type(t) => &t.logical_name,
            Resolution::Group(g) => &g.group_name,
        }
    }
}

/// Validated, immutable registry of resource types
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    version: String,
    catalog: TierCatalog,
    aggregation: AggregationIndex,
}

impl ResourceRegistry {
    /// Build a registry from a definition set.
    ///
    /// Either every entry and group validates, or nothing is returned.
    pub fn build(definitions: DefinitionSet) -> Result<Self> {
        let DefinitionSet {
            version,
            entries,
            groups,
        } = definitions;

        let catalog = TierCatalog::build(entries)?;
        let aggregation = AggregationIndex::build(groups, &catalog)?;

        debug!(
            version = %version,
            entries = catalog.len(),
            groups = aggregation.len(),
            "Built resource registry"
        );

        Ok(Self {
            version,
            catalog,
            aggregation,
        })
    }

    /// Registry over the built-in definitions, without touching the global
    pub fn builtin() -> Result<Self> {
        Self::build(builtin_definitions())
    }

    /// Version of the definition set this registry was built from
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn catalog(&self) -> &TierCatalog {
        &self.catalog
    }

    pub fn aggregation(&self) -> &AggregationIndex {
        &self.aggregation
    }

    /// Look up a catalog entry by logical name
    pub fn lookup(&self, logical_name: &str) -> Result<&ResourceTypeEntry> {
        self.catalog.lookup(logical_name)
    }

    /// Entries of one tier, in definition order
    pub fn entries_by_tier(&self, tier: Tier) -> impl Iterator<Item = &ResourceTypeEntry> + Clone {
        self.catalog.entries_by_tier(tier)
    }

    /// Ordered members of a group
    pub fn members_of(&self, group_name: &str) -> Result<&[String]> {
        self.aggregation.members_of(group_name)
    }

    /// Owning group of a member, if any
    pub fn group_of(&self, member_name: &str) -> Option<&str> {
        self.aggregation.group_of(member_name)
    }

    /// Whether a catalog entry is usable under `features`.
    ///
    /// Add-on entries need a cluster; without one, or with an empty id, they
    /// are unavailable.
    pub fn entry_available(
        &self,
        entry: &ResourceTypeEntry,
        features: &InstalledFeatures,
        cluster: Option<&str>,
    ) -> bool {
        match entry.tier {
            Tier::Core => true,
            Tier::Management => features.management_plane_present,
            Tier::Addon => match (cluster, entry.addon_key.as_deref()) {
                (Some(cluster), Some(key)) if !cluster.is_empty() => {
                    features.addon_installed(cluster, key)
                }
                _ => false,
            },
        }
    }

    /// Resolve a logical name to routing metadata and availability.
    ///
    /// Unknown names fail with [`RegistryError::NotFound`]; known but
    /// unavailable types are reported through `available`, never as errors.
    /// Group names resolve to their available members; the group's own
    /// catalog entry stays reachable through [`ResourceRegistry::lookup`].
    pub fn resolve(
        &self,
        logical_name: &str,
        features: &InstalledFeatures,
        cluster: Option<&str>,
    ) -> Result<Resolution> {
        if self.aggregation.is_group(logical_name) {
            let available_members = self.available_members_of(logical_name, features, cluster)?;
            trace!(
                group = logical_name,
                available = available_members.len(),
                "Resolved aggregation group"
            );
            return Ok(Resolution::Group(GroupResolution {
                group_name: logical_name.to_string(),
                available: !available_members.is_empty(),
                available_members,
            }));
        }

        let entry = self.catalog.lookup(logical_name)?;
        let available = self.entry_available(entry, features, cluster);
        trace!(name = logical_name, tier = %entry.tier, available, "Resolved resource type");

        Ok(Resolution::Type(TypeResolution {
            logical_name: entry.logical_name.clone(),
            tier: entry.tier,
            wire_identifier: entry.wire_identifier.clone(),
            endpoint: entry.endpoint(),
            addon_key: entry.addon_key.clone(),
            available,
        }))
    }

    /// Whether `logical_name` is usable right now
    pub fn is_available(
        &self,
        logical_name: &str,
        features: &InstalledFeatures,
        cluster: Option<&str>,
    ) -> Result<bool> {
        self.resolve(logical_name, features, cluster)
            .map(|r| r.is_available())
    }

    /// Members of `group_name` that are available, in group order
    pub fn available_members_of(
        &self,
        group_name: &str,
        features: &InstalledFeatures,
        cluster: Option<&str>,
    ) -> Result<Vec<String>> {
        let members = self.aggregation.members_of(group_name)?;
        Ok(members
            .iter()
            .filter(|m| {
                self.catalog
                    .get(m)
                    .is_some_and(|e| self.entry_available(e, features, cluster))
            })
            .cloned()
            .collect())
    }

    /// Every usable catalog entry, in definition order
    pub fn available_entries<'a>(
        &'a self,
        features: &'a InstalledFeatures,
        cluster: Option<&'a str>,
    ) -> impl Iterator<Item = &'a ResourceTypeEntry> + 'a {
        self.catalog
            .iter()
            .filter(move |e| self.entry_available(e, features, cluster))
    }

    /// All logical names known to the registry, groups included
    pub fn all_names(&self) -> Vec<&str> {
        let mut names = self.catalog.names();
        names.extend(self.aggregation.groups());
        names.sort();
        names.dedup();
        names
    }
}
