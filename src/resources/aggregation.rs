//! Aggregation index: groups of resource types treated as one concept

use crate::error::{RegistryError, Result};
use crate::resources::catalog::TierCatalog;
use crate::resources::types::AggregationGroup;
use std::collections::HashMap;

/// Bidirectional group/member index, validated against a [`TierCatalog`]
#[derive(Debug, Clone, Default)]
pub struct AggregationIndex {
    members: HashMap<String, Vec<String>>,
    owner: HashMap<String, String>,
    order: Vec<String>,
}

impl AggregationIndex {
    /// Build the index.
    ///
    /// Group names and members must exist in `catalog`; every member belongs
    /// to exactly one group and is not a group itself.
    pub fn build(groups: Vec<AggregationGroup>, catalog: &TierCatalog) -> Result<Self> {
        let mut index = Self::default();

        for group in groups {
            let AggregationGroup {
                group_name,
                member_names,
            } = group;

            if index.members.contains_key(&group_name) {
                return Err(RegistryError::DuplicateName(group_name));
            }
            if !catalog.contains(&group_name) {
                return Err(RegistryError::UnknownMember {
                    member: group_name.clone(),
                    group: group_name,
                });
            }
            if member_names.is_empty() {
                return Err(RegistryError::EmptyGroup(group_name));
            }

            for member in &member_names {
                if !catalog.contains(member) {
                    return Err(RegistryError::UnknownMember {
                        group: group_name,
                        member: member.clone(),
                    });
                }
                if let Some(first) = index.owner.insert(member.clone(), group_name.clone()) {
                    return Err(RegistryError::ConflictingGroup {
                        name: member.clone(),
                        first,
                        second: group_name,
                    });
                }
            }

            index.order.push(group_name.clone());
            index.members.insert(group_name, member_names);
        }

        // No nesting: a group may not also be somebody's member
        for group_name in &index.order {
            if let Some(owner) = index.owner.get(group_name) {
                return Err(RegistryError::ConflictingGroup {
                    name: group_name.clone(),
                    first: owner.clone(),
                    second: group_name.clone(),
                });
            }
        }

        Ok(index)
    }

    /// Ordered members of `group_name`
    pub fn members_of(&self, group_name: &str) -> Result<&[String]> {
        self.members
            .get(group_name)
            .map(Vec::as_slice)
            .ok_or_else(|| RegistryError::NotAGroup(group_name.to_string()))
    }

    /// Owning group of `member_name`; most types belong to none
    pub fn group_of(&self, member_name: &str) -> Option<&str> {
        self.owner.get(member_name).map(String::as_str)
    }

    pub fn is_group(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Group names, in definition order
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
