//! Installed-feature snapshots supplied by callers

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};

/// Which optional layers are present in the target environment.
///
/// Add-on presence is tracked per cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledFeatures {
    /// Management control plane installed
    #[serde(default, alias = "management_plane")]
    pub management_plane_present: bool,

    /// Installed add-on keys by cluster id
    #[serde(default, alias = "addons")]
    pub installed_addons_by_cluster: BTreeMap<String, BTreeSet<String>>,
}

impl InstalledFeatures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the management plane as present or absent
    pub fn with_management_plane(mut self, present: bool) -> Self {
        self.management_plane_present = present;
        self
    }

    /// Mark `addon_key` as installed in `cluster`
    pub fn with_addon(mut self, cluster: &str, addon_key: &str) -> Self {
        self.add_addon(cluster, addon_key);
        self
    }

    /// Register a cluster with no add-ons
    pub fn with_cluster(mut self, cluster: &str) -> Self {
        self.installed_addons_by_cluster
            .entry(cluster.to_string())
            .or_default();
        self
    }

    pub fn add_addon(&mut self, cluster: &str, addon_key: &str) {
        self.installed_addons_by_cluster
            .entry(cluster.to_string())
            .or_default()
            .insert(addon_key.to_string());
    }

    /// Whether `addon_key` is installed in `cluster`
    pub fn addon_installed(&self, cluster: &str, addon_key: &str) -> bool {
        self.installed_addons_by_cluster
            .get(cluster)
            .is_some_and(|addons| addons.contains(addon_key))
    }

    /// Known cluster ids
    pub fn clusters(&self) -> impl Iterator<Item = &str> {
        self.installed_addons_by_cluster.keys().map(String::as_str)
    }

    /// Combine with `other`; flags are OR-ed and add-on sets unioned
    pub fn merge(mut self, other: &InstalledFeatures) -> Self {
        self.management_plane_present |= other.management_plane_present;
        for (cluster, addons) in &other.installed_addons_by_cluster {
            self.installed_addons_by_cluster
                .entry(cluster.clone())
                .or_default()
                .extend(addons.iter().cloned());
        }
        self
    }
}

/// Holder of the current feature snapshot.
///
/// A refresh publishes a whole new snapshot; readers that already took one
/// keep a consistent view until they drop it.
#[derive(Debug, Default)]
pub struct FeatureStore {
    current: RwLock<Arc<InstalledFeatures>>,
}

impl FeatureStore {
    pub fn new(initial: InstalledFeatures) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// The snapshot in effect right now
    pub fn snapshot(&self) -> Arc<InstalledFeatures> {
        // A poisoned lock still guards a complete Arc
        match self.current.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    /// Replace the current snapshot
    pub fn publish(&self, features: InstalledFeatures) {
        let next = Arc::new(features);
        match self.current.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
        tracing::debug!("Published new installed-feature snapshot");
    }
}
