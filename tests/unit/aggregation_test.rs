//! Tests for src/resources/aggregation.rs - AggregationIndex

use kubetypes::error::RegistryError;
use kubetypes::resources::definitions::WORKLOAD_TYPES;
use kubetypes::resources::{
    builtin_definitions, AggregationGroup, AggregationIndex, DefinitionSet, ResourceRegistry,
    ResourceTypeEntry, TierCatalog,
};

fn catalog() -> TierCatalog {
    TierCatalog::build(vec![
        ResourceTypeEntry::core("pod", "pod"),
        ResourceTypeEntry::core("workload", "workload"),
        ResourceTypeEntry::core("batch", "batch"),
        ResourceTypeEntry::core("deployment", "apps.deployment"),
        ResourceTypeEntry::core("daemonset", "apps.daemonset"),
        ResourceTypeEntry::core("job", "batch.job"),
        ResourceTypeEntry::core("cronjob", "batch.cronjob"),
    ])
    .unwrap()
}

#[test]
fn test_builtin_members_exist_in_catalog() {
    let definitions = builtin_definitions();
    let catalog = TierCatalog::build(definitions.entries).unwrap();
    let index = AggregationIndex::build(definitions.groups, &catalog).unwrap();

    for group in index.groups() {
        for member in index.members_of(group).unwrap() {
            assert!(catalog.contains(member), "{} missing from catalog", member);
            assert_eq!(index.group_of(member), Some(group));
        }
    }
    assert_eq!(index.members_of("workload").unwrap(), WORKLOAD_TYPES);
}

#[test]
fn test_multiple_groups() {
    let index = AggregationIndex::build(
        vec![
            AggregationGroup::new("workload", &["deployment", "daemonset"]),
            AggregationGroup::new("batch", &["cronjob", "job"]),
        ],
        &catalog(),
    )
    .unwrap();

    assert_eq!(index.len(), 2);
    assert_eq!(index.groups().collect::<Vec<_>>(), vec!["workload", "batch"]);
    assert_eq!(index.members_of("batch").unwrap(), ["cronjob", "job"]);
    assert_eq!(index.group_of("job"), Some("batch"));
}

#[test]
fn test_unknown_member() {
    let err = AggregationIndex::build(
        vec![AggregationGroup::new("workload", &["deployment", "statefulset"])],
        &catalog(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        RegistryError::UnknownMember { ref member, .. } if member == "statefulset"
    ));
}

#[test]
fn test_group_name_unknown_to_catalog() {
    let err = AggregationIndex::build(
        vec![AggregationGroup::new("ghost", &["deployment"])],
        &catalog(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        RegistryError::UnknownMember { ref group, ref member } if group == "ghost" && member == "ghost"
    ));
}

#[test]
fn test_member_claimed_twice() {
    let err = AggregationIndex::build(
        vec![
            AggregationGroup::new("workload", &["deployment", "job"]),
            AggregationGroup::new("batch", &["cronjob", "job"]),
        ],
        &catalog(),
    )
    .unwrap_err();

    assert!(matches!(err, RegistryError::ConflictingGroup { ref name, .. } if name == "job"));
}

#[test]
fn test_member_repeated_in_one_group() {
    let err = AggregationIndex::build(
        vec![AggregationGroup::new("workload", &["deployment", "deployment"])],
        &catalog(),
    )
    .unwrap_err();
    assert!(matches!(err, RegistryError::ConflictingGroup { .. }));
}

#[test]
fn test_group_defined_twice() {
    let err = AggregationIndex::build(
        vec![
            AggregationGroup::new("workload", &["deployment"]),
            AggregationGroup::new("workload", &["daemonset"]),
        ],
        &catalog(),
    )
    .unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateName(ref n) if n == "workload"));
}

#[test]
fn test_nested_group() {
    let err = AggregationIndex::build(
        vec![
            AggregationGroup::new("job", &["cronjob"]),
            AggregationGroup::new("workload", &["deployment", "job"]),
        ],
        &catalog(),
    )
    .unwrap_err();
    assert!(matches!(err, RegistryError::ConflictingGroup { ref name, .. } if name == "job"));
}

#[test]
fn test_registry_build_is_atomic() {
    // A bad group fails the whole build, not just the index
    let result = ResourceRegistry::build(DefinitionSet {
        version: "broken".to_string(),
        entries: vec![
            ResourceTypeEntry::core("workload", "workload"),
            ResourceTypeEntry::core("deployment", "apps.deployment"),
        ],
        groups: vec![AggregationGroup::new("workload", &["deployment", "missing"])],
    });

    let err = result.unwrap_err();
    assert!(err.is_construction_error());
    assert!(matches!(err, RegistryError::UnknownMember { .. }));
}
