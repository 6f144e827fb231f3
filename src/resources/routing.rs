//! API surfaces that serve resource types and their base paths

use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The API surface a resource type is requested from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Endpoint {
    /// Standalone resource gateway, `/v1`
    Steve,
    /// Authentication API, `/v3`
    Norman,
    /// Unauthenticated auth API, `/v3-public`
    Public,
    /// Gateway proxied into a downstream cluster, `/k8s/clusters/<id>/v1`
    Cluster,
    /// Cluster-scoped types stored in the management plane,
    /// `/v1/management.cattle.io.clusters/<id>`
    ManagementCluster,
}

impl Endpoint {
    /// Whether requests to this endpoint need a cluster id
    pub fn is_cluster_scoped(&self) -> bool {
        matches!(self, Endpoint::Cluster | Endpoint::ManagementCluster)
    }

    /// Base path for requests to this endpoint.
    ///
    /// Cluster-scoped endpoints fail with [`RegistryError::ClusterRequired`]
    /// when `cluster` is `None` or empty.
    pub fn base_path(&self, cluster: Option<&str>) -> Result<String> {
        let cluster = cluster.filter(|id| !id.is_empty());
        match self {
            Endpoint::Steve => Ok("/v1".to_string()),
            Endpoint::Norman => Ok("/v3".to_string()),
            Endpoint::Public => Ok("/v3-public".to_string()),
            Endpoint::Cluster => cluster
                .map(|id| format!("/k8s/clusters/{}/v1", id))
                .ok_or_else(|| RegistryError::ClusterRequired(self.to_string())),
            Endpoint::ManagementCluster => cluster
                .map(|id| format!("/v1/management.cattle.io.clusters/{}", id))
                .ok_or_else(|| RegistryError::ClusterRequired(self.to_string())),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endpoint::Steve => "steve",
            Endpoint::Norman => "norman",
            Endpoint::Public => "public",
            Endpoint::Cluster => "cluster",
            Endpoint::ManagementCluster => "management-cluster",
        };
        f.write_str(name)
    }
}
