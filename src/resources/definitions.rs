//! Built-in definition set compiled into the client

use crate::resources::routing::Endpoint;
use crate::resources::types::{AggregationGroup, DefinitionSet};

/// Version of the built-in definition set
pub const DEFINITIONS_VERSION: &str = "2024.1";

/// Add-on keys
pub mod addons {
    pub const RIO: &str = "rio";
    pub const GATEKEEPER: &str = "gatekeeper";
}

/// Namespace the rio add-on installs its system components into
pub const RIO_SYSTEM_NAMESPACE: &str = "rio-system";

/// Logical names of the built-in resource types
pub mod names {
    // Standalone gateway
    pub const USER_PREFERENCE: &str = "userpreference";
    pub const STEVE_CLUSTER: &str = "steve-cluster";

    // Auth
    pub const AUTH_CONFIG: &str = "authconfig";
    pub const PRINCIPAL: &str = "principal";
    pub const SETTING: &str = "setting";
    pub const AUTH_PROVIDER: &str = "authprovider";

    // Native cluster types
    pub const API_GROUP: &str = "apigroup";
    pub const CONFIG_MAP: &str = "configmap";
    pub const COUNT: &str = "count";
    pub const EVENT: &str = "event";
    pub const INGRESS: &str = "ingress";
    pub const NAMESPACE: &str = "namespace";
    pub const NODE: &str = "node";
    pub const POD: &str = "pod";
    pub const PV: &str = "persistentvolume";
    pub const PVC: &str = "persistentvolumeclaim";
    pub const RESOURCE_QUOTA: &str = "resourcequota";
    pub const SCHEMA: &str = "schema";
    pub const SERVICE: &str = "service";
    pub const SECRET: &str = "secret";
    pub const SERVICE_ACCOUNT: &str = "serviceaccount";

    pub const ROLE: &str = "role";
    pub const CLUSTER_ROLE: &str = "clusterrole";
    pub const ROLE_BINDING: &str = "rolebinding";
    pub const CLUSTER_ROLE_BINDING: &str = "clusterrolebinding";

    pub const WORKLOAD: &str = "workload";
    pub const DEPLOYMENT: &str = "deployment";
    pub const DAEMON_SET: &str = "daemonset";
    pub const STATEFUL_SET: &str = "statefulset";
    pub const CRON_JOB: &str = "cronjob";
    pub const JOB: &str = "job";
    pub const REPLICA_SET: &str = "replicaset";
    pub const REPLICATION_CONTROLLER: &str = "replicationcontroller";

    pub const NODE_METRICS: &str = "nodemetrics";
    pub const POD_METRICS: &str = "podmetrics";

    // Management plane
    pub const CATALOG: &str = "catalog";
    pub const CATALOG_TEMPLATE: &str = "catalogtemplate";
    pub const CLUSTER: &str = "cluster";
    pub const USER: &str = "user";
    pub const NODE_POOL: &str = "nodepool";
    pub const NODE_TEMPLATE: &str = "nodetemplate";
    pub const PROJECT: &str = "project";
    pub const APP: &str = "app";

    // rio
    pub const RIO_CLUSTER_DOMAIN: &str = "rio-clusterdomain";
    pub const RIO_FEATURE: &str = "rio-feature";
    pub const RIO_INFO: &str = "rio-info";
    pub const RIO_PUBLIC_DOMAIN: &str = "rio-publicdomain";
    pub const RIO_APP: &str = "rio-app";
    pub const RIO_EXTERNAL_SERVICE: &str = "rio-externalservice";
    pub const RIO_STACK: &str = "rio-stack";
    pub const RIO_ROUTER: &str = "rio-router";
    pub const RIO_SERVICE: &str = "rio-service";

    // gatekeeper
    pub const CONSTRAINT_TEMPLATE: &str = "constrainttemplate";
}

/// Members of the workload group, in display order
pub const WORKLOAD_TYPES: &[&str] = &[
    names::DEPLOYMENT,
    names::DAEMON_SET,
    names::STATEFUL_SET,
    names::CRON_JOB,
    names::JOB,
    names::REPLICA_SET,
    names::REPLICATION_CONTROLLER,
];

/// The definition set shipped with this client
pub fn builtin_definitions() -> DefinitionSet {
    use self::names::*;
    use crate::resources::types::ResourceTypeEntry as E;

    let entries = vec![
        E::core(USER_PREFERENCE, "userpreference").with_endpoint(Endpoint::Steve),
        E::core(STEVE_CLUSTER, "cluster").with_endpoint(Endpoint::Steve),
        E::core(AUTH_CONFIG, "authconfig").with_endpoint(Endpoint::Norman),
        E::core(PRINCIPAL, "principal").with_endpoint(Endpoint::Norman),
        E::core(SETTING, "setting").with_endpoint(Endpoint::Norman),
        E::core(AUTH_PROVIDER, "authprovider").with_endpoint(Endpoint::Public),
        E::core(API_GROUP, "apiGroups"),
        E::core(CONFIG_MAP, "configmap"),
        E::core(COUNT, "count"),
        E::core(EVENT, "event"),
        E::core(INGRESS, "networking.k8s.io.ingress"),
        E::core(NAMESPACE, "namespace"),
        E::core(NODE, "node"),
        E::core(POD, "pod"),
        E::core(PV, "persistentvolume"),
        E::core(PVC, "persistentvolumeclaim"),
        E::core(RESOURCE_QUOTA, "resourcequota"),
        E::core(SCHEMA, "schema"),
        E::core(SERVICE, "service"),
        E::core(SECRET, "secret"),
        E::core(SERVICE_ACCOUNT, "serviceaccount"),
        E::core(ROLE, "rbac.authorization.k8s.io.role"),
        E::core(CLUSTER_ROLE, "rbac.authorization.k8s.io.clusterrole"),
        E::core(ROLE_BINDING, "rbac.authorization.k8s.io.rolebinding"),
        E::core(CLUSTER_ROLE_BINDING, "rbac.authorization.k8s.io.clusterrolebinding"),
        E::core(WORKLOAD, "workload"),
        E::core(DEPLOYMENT, "apps.deployment"),
        E::core(DAEMON_SET, "apps.daemonset"),
        E::core(STATEFUL_SET, "apps.statefulset"),
        E::core(CRON_JOB, "batch.cronjob"),
        E::core(JOB, "batch.job"),
        E::core(REPLICA_SET, "apps.replicaset"),
        E::core(REPLICATION_CONTROLLER, "replicationcontroller"),
        E::core(NODE_METRICS, "metrics.k8s.io.nodemetrics"),
        E::core(POD_METRICS, "metrics.k8s.io.podmetrics"),
        E::management(CATALOG, "management.cattle.io.catalog"),
        E::management(CATALOG_TEMPLATE, "management.cattle.io.catalogtemplate"),
        E::management(CLUSTER, "management.cattle.io.cluster"),
        E::management(USER, "management.cattle.io.user"),
        E::management(NODE_POOL, "management.cattle.io.nodepool"),
        E::management(NODE_TEMPLATE, "management.cattle.io.nodetemplate"),
        E::management(PROJECT, "project").with_endpoint(Endpoint::ManagementCluster),
        E::management(APP, "app").with_endpoint(Endpoint::ManagementCluster),
        E::addon(RIO_CLUSTER_DOMAIN, "admin.rio.cattle.io.clusterdomain", addons::RIO),
        E::addon(RIO_FEATURE, "admin.rio.cattle.io.feature", addons::RIO),
        E::addon(RIO_INFO, "admin.rio.cattle.io.rioinfo", addons::RIO),
        E::addon(RIO_PUBLIC_DOMAIN, "admin.rio.cattle.io.publicdomain", addons::RIO),
        E::addon(RIO_APP, "rio.cattle.io.app", addons::RIO),
        E::addon(RIO_EXTERNAL_SERVICE, "rio.cattle.io.externalservice", addons::RIO),
        E::addon(RIO_STACK, "rio.cattle.io.stack", addons::RIO),
        E::addon(RIO_ROUTER, "rio.cattle.io.router", addons::RIO),
        E::addon(RIO_SERVICE, "rio.cattle.io.service", addons::RIO),
        E::addon(
            CONSTRAINT_TEMPLATE,
            "templates.gatekeeper.sh.constrainttemplate",
            addons::GATEKEEPER,
        ),
    ];

    DefinitionSet {
        version: DEFINITIONS_VERSION.to_string(),
        entries,
        groups: vec![AggregationGroup::new(WORKLOAD, WORKLOAD_TYPES)],
    }
}
