//! Command implementations

pub mod check;
pub mod list;
pub mod resolve;

pub use check::*;
pub use list::*;
pub use resolve::*;

use crate::config::AppConfig;
use crate::error::Result;
use crate::resources::{InstalledFeatures, ResourceRegistry, RESOURCE_REGISTRY};
use std::borrow::Cow;
use std::path::PathBuf;
use tracing::debug;

/// Everything a command needs: the registry, the feature snapshot and the
/// cluster in scope
pub struct Session {
    pub registry: Cow<'static, ResourceRegistry>,
    pub features: InstalledFeatures,
    pub cluster: Option<String>,
    /// Configured add-on keys no resource type uses
    pub unused_addons: Vec<String>,
}

impl Session {
    /// Build a session from config and command line overrides.
    ///
    /// Features named on the command line are merged into the configured
    /// ones; `definitions` and `cluster` replace the configured values.
    pub fn open(
        config: &AppConfig,
        definitions: Option<PathBuf>,
        cluster: Option<String>,
        features: &InstalledFeatures,
    ) -> Result<Self> {
        let registry = match definitions.or_else(|| config.definitions.clone()) {
            Some(path) => {
                debug!("Loading definitions from {}", path.display());
                let set = crate::resources::DefinitionSet::from_path(&path)?;
                Cow::Owned(ResourceRegistry::build(set)?)
            }
            None => Cow::Borrowed(&*RESOURCE_REGISTRY),
        };

        let features = config.features.clone().merge(features);
        let unused_addons = check::unused_addons(&registry, &features);

        Ok(Self {
            registry,
            features,
            cluster: cluster.or_else(|| config.default_cluster.clone()),
            unused_addons,
        })
    }

    /// Session over the built-in registry
    pub fn builtin(features: InstalledFeatures, cluster: Option<&str>) -> Self {
        let unused_addons = check::unused_addons(&RESOURCE_REGISTRY, &features);
        Self {
            registry: Cow::Borrowed(&*RESOURCE_REGISTRY),
            features,
            cluster: cluster.map(str::to_string),
            unused_addons,
        }
    }

    pub fn cluster(&self) -> Option<&str> {
        self.cluster.as_deref()
    }
}
