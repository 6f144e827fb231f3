//! Tests for src/resources/registry.rs - ResourceRegistry

use kubetypes::error::RegistryError;
use kubetypes::resources::definitions::{addons, names, WORKLOAD_TYPES};
use kubetypes::resources::{
    AggregationGroup, DefinitionSet, Endpoint, InstalledFeatures, Resolution, ResourceRegistry,
    ResourceTypeEntry, Tier, RESOURCE_REGISTRY,
};

fn scenario() -> ResourceRegistry {
    ResourceRegistry::build(DefinitionSet {
        version: "scenario".to_string(),
        entries: vec![
            ResourceTypeEntry::core("pod", "pod"),
            ResourceTypeEntry::management("cluster", "management.cattle.io.cluster"),
            ResourceTypeEntry::addon("stack", "rio.cattle.io.stack", "rio"),
            ResourceTypeEntry::core("deployment", "apps.deployment"),
            ResourceTypeEntry::core("daemonset", "apps.daemonset"),
            ResourceTypeEntry::addon("constrainttemplate", "templates.gatekeeper.sh.constrainttemplate", "gatekeeper"),
            ResourceTypeEntry::core("workload", "workload"),
        ],
        groups: vec![AggregationGroup::new("workload", &["deployment", "daemonset"])],
    })
    .unwrap()
}

fn no_addons() -> InstalledFeatures {
    InstalledFeatures::new().with_cluster("c1")
}

// ============================================================================
// availability scenario tests
// ============================================================================

#[test]
fn test_core_type_available_without_features() {
    let registry = scenario();
    assert!(registry.is_available("pod", &no_addons(), Some("c1")).unwrap());
}

#[test]
fn test_management_type_needs_management_plane() {
    let registry = scenario();
    assert!(!registry.is_available("cluster", &no_addons(), None).unwrap());

    let features = no_addons().with_management_plane(true);
    assert!(registry.is_available("cluster", &features, None).unwrap());
}

#[test]
fn test_addon_type_without_addon() {
    let registry = scenario();
    assert!(!registry.is_available("stack", &no_addons(), Some("c1")).unwrap());
}

#[test]
fn test_addon_type_with_addon() {
    let registry = scenario();
    let features = InstalledFeatures::new().with_addon("c1", "rio");
    assert!(registry.is_available("stack", &features, Some("c1")).unwrap());
}

#[test]
fn test_addon_availability_is_per_cluster() {
    let registry = scenario();
    let features = InstalledFeatures::new()
        .with_addon("c1", "rio")
        .with_addon("c2", "gatekeeper");

    assert!(registry.is_available("stack", &features, Some("c1")).unwrap());
    assert!(!registry.is_available("stack", &features, Some("c2")).unwrap());
    assert!(!registry.is_available("constrainttemplate", &features, Some("c1")).unwrap());
    assert!(registry.is_available("constrainttemplate", &features, Some("c2")).unwrap());
}

#[test]
fn test_addon_type_without_cluster_is_unavailable() {
    let registry = scenario();
    let features = InstalledFeatures::new().with_addon("c1", "rio");
    assert!(!registry.is_available("stack", &features, None).unwrap());
}

#[test]
fn test_addon_type_with_empty_cluster_id_is_unavailable() {
    let registry = scenario();
    let features = InstalledFeatures::new()
        .with_addon("", "rio")
        .with_addon("c1", "rio");

    assert!(!registry.is_available("stack", &features, Some("")).unwrap());
    assert!(registry.is_available("stack", &features, Some("c1")).unwrap());
    // CORE and MANAGEMENT ignore the cluster, empty or not
    assert!(registry.is_available("pod", &features, Some("")).unwrap());
}

#[test]
fn test_unavailable_is_not_an_error() {
    let registry = scenario();
    let resolution = registry.resolve("stack", &no_addons(), Some("c1")).unwrap();
    assert!(!resolution.is_available());
}

// ============================================================================
// group resolution tests
// ============================================================================

#[test]
fn test_available_members_of_workload() {
    let registry = scenario();
    let members = registry
        .available_members_of("workload", &no_addons(), Some("c1"))
        .unwrap();
    assert_eq!(members, vec!["deployment", "daemonset"]);
}

#[test]
fn test_available_members_keeps_order_and_filters() {
    let registry = ResourceRegistry::build(DefinitionSet {
        version: String::new(),
        entries: vec![
            ResourceTypeEntry::core("deployment", "apps.deployment"),
            ResourceTypeEntry::addon("rollout", "argoproj.io.rollout", "argo"),
            ResourceTypeEntry::management("fleetbundle", "fleet.cattle.io.bundle"),
            ResourceTypeEntry::core("job", "batch.job"),
            ResourceTypeEntry::core("workload", "workload"),
        ],
        groups: vec![AggregationGroup::new(
            "workload",
            &["rollout", "deployment", "fleetbundle", "job"],
        )],
    })
    .unwrap();

    let features = InstalledFeatures::new();
    assert_eq!(
        registry.available_members_of("workload", &features, Some("c1")).unwrap(),
        vec!["deployment", "job"]
    );

    let features = InstalledFeatures::new()
        .with_management_plane(true)
        .with_addon("c1", "argo");
    assert_eq!(
        registry.available_members_of("workload", &features, Some("c1")).unwrap(),
        vec!["rollout", "deployment", "fleetbundle", "job"]
    );
}

#[test]
fn test_group_available_when_any_member_is() {
    let registry = ResourceRegistry::build(DefinitionSet {
        version: String::new(),
        entries: vec![
            ResourceTypeEntry::addon("stack", "rio.cattle.io.stack", "rio"),
            ResourceTypeEntry::addon("router", "rio.cattle.io.router", "rio"),
            ResourceTypeEntry::core("rio", "rio"),
        ],
        groups: vec![AggregationGroup::new("rio", &["stack", "router"])],
    })
    .unwrap();

    let none = registry.resolve("rio", &InstalledFeatures::new(), Some("c1")).unwrap();
    match none {
        Resolution::Group(g) => {
            assert!(!g.available);
            assert!(g.available_members.is_empty());
        }
        other => panic!("expected group, got {:?}", other),
    }

    let features = InstalledFeatures::new().with_addon("c1", "rio");
    assert!(registry.is_available("rio", &features, Some("c1")).unwrap());
}

#[test]
fn test_members_of_non_group() {
    let registry = scenario();
    assert!(matches!(
        registry.members_of("pod"),
        Err(RegistryError::NotAGroup(ref n)) if n == "pod"
    ));
    assert!(matches!(
        registry.available_members_of("pod", &no_addons(), None),
        Err(RegistryError::NotAGroup(_))
    ));
}

#[test]
fn test_group_of() {
    let registry = scenario();
    assert_eq!(registry.group_of("deployment"), Some("workload"));
    assert_eq!(registry.group_of("pod"), None);
}

// ============================================================================
// resolve tests
// ============================================================================

#[test]
fn test_resolve_plain_type() {
    let registry = scenario();
    let features = InstalledFeatures::new().with_management_plane(true);

    match registry.resolve("cluster", &features, None).unwrap() {
        Resolution::Type(t) => {
            assert_eq!(t.tier, Tier::Management);
            assert_eq!(t.wire_identifier, "management.cattle.io.cluster");
            assert_eq!(t.endpoint, Endpoint::Steve);
            assert!(t.available);
            assert_eq!(t.url(None).unwrap(), "/v1/management.cattle.io.cluster");
        }
        other => panic!("expected type, got {:?}", other),
    }
}

#[test]
fn test_resolve_unknown_name() {
    let registry = scenario();
    let features = InstalledFeatures::new()
        .with_management_plane(true)
        .with_addon("c1", "rio");

    let err = registry.resolve("doesNotExist", &features, Some("c1")).unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(ref n) if n == "doesNotExist"));
    assert!(!err.is_construction_error());
    assert!(registry.is_available("doesNotExist", &features, None).is_err());
}

#[test]
fn test_available_entries() {
    let registry = scenario();
    let features = InstalledFeatures::new().with_addon("c1", "rio");

    let names: Vec<_> = registry
        .available_entries(&features, Some("c1"))
        .map(|e| e.logical_name.as_str())
        .collect();
    assert_eq!(names, vec!["pod", "stack", "deployment", "daemonset", "workload"]);
}

// ============================================================================
// global registry tests
// ============================================================================

#[test]
fn test_global_registry_builds() {
    assert_eq!(RESOURCE_REGISTRY.version(), kubetypes::resources::definitions::DEFINITIONS_VERSION);
    assert!(RESOURCE_REGISTRY.catalog().len() > 50);
}

#[test]
fn test_global_core_types_always_available() {
    let feature_sets = [
        InstalledFeatures::new(),
        InstalledFeatures::new().with_management_plane(true),
        InstalledFeatures::new()
            .with_addon("c1", addons::RIO)
            .with_addon("c2", addons::GATEKEEPER),
        InstalledFeatures::new()
            .with_management_plane(true)
            .with_addon("local", addons::RIO)
            .with_addon("local", addons::GATEKEEPER)
            .with_cluster("c2"),
    ];

    for features in &feature_sets {
        for cluster in [None, Some("c1"), Some("c2"), Some("local")] {
            for entry in RESOURCE_REGISTRY.entries_by_tier(Tier::Core) {
                assert!(
                    RESOURCE_REGISTRY.entry_available(entry, features, cluster),
                    "{} should be available under {:?} in {:?}",
                    entry.logical_name,
                    features,
                    cluster
                );
                assert!(RESOURCE_REGISTRY
                    .is_available(&entry.logical_name, features, cluster)
                    .unwrap());
            }
        }
    }
}

#[test]
fn test_global_workload_group() {
    let members = RESOURCE_REGISTRY.members_of(names::WORKLOAD).unwrap();
    assert_eq!(members, WORKLOAD_TYPES);

    match RESOURCE_REGISTRY
        .resolve(names::WORKLOAD, &InstalledFeatures::new(), Some("local"))
        .unwrap()
    {
        Resolution::Group(g) => assert_eq!(g.available_members, WORKLOAD_TYPES),
        other => panic!("expected group, got {:?}", other),
    }

    // The group name is also a plain gateway type
    assert_eq!(RESOURCE_REGISTRY.lookup(names::WORKLOAD).unwrap().wire_identifier, "workload");
}

#[test]
fn test_global_rio_stack_route() {
    let features = InstalledFeatures::new().with_addon("local", addons::RIO);
    match RESOURCE_REGISTRY.resolve(names::RIO_STACK, &features, Some("local")).unwrap() {
        Resolution::Type(t) => {
            assert!(t.available);
            assert_eq!(t.url(Some("local")).unwrap(), "/k8s/clusters/local/v1/rio.cattle.io.stack");
        }
        other => panic!("expected type, got {:?}", other),
    }
}

#[test]
fn test_global_project_route() {
    let features = InstalledFeatures::new().with_management_plane(true);
    let Resolution::Type(project) = RESOURCE_REGISTRY
        .resolve(names::PROJECT, &features, Some("c-abc"))
        .unwrap()
    else {
        panic!("project is not a group");
    };

    assert!(project.available);
    assert_eq!(
        project.url(Some("c-abc")).unwrap(),
        "/v1/management.cattle.io.clusters/c-abc/project"
    );
}

#[test]
fn test_global_auth_routes() {
    let features = InstalledFeatures::new();
    for (name, url) in [
        (names::PRINCIPAL, "/v3/principal"),
        (names::AUTH_PROVIDER, "/v3-public/authprovider"),
        (names::USER_PREFERENCE, "/v1/userpreference"),
    ] {
        let Resolution::Type(t) = RESOURCE_REGISTRY.resolve(name, &features, None).unwrap() else {
            panic!("{} is not a group", name);
        };
        assert_eq!(t.url(None).unwrap(), url);
    }
}

#[test]
fn test_all_names_sorted_unique() {
    let names = RESOURCE_REGISTRY.all_names();
    let mut sorted = names.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(names, sorted);
    assert!(names.contains(&"workload"));
}
