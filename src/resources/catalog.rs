//! Tier catalog: logical name to tier, wire identifier and addon key

use crate::error::{RegistryError, Result};
use crate::resources::types::{ResourceTypeEntry, Tier};
use std::collections::HashMap;

/// Immutable table of validated resource type entries.
///
/// Entries keep their definition order; lookups go through a name index.
#[derive(Debug, Clone)]
pub struct TierCatalog {
    entries: Vec<ResourceTypeEntry>,
    by_name: HashMap<String, usize>,
}

impl TierCatalog {
    /// Build a catalog, rejecting duplicate names and bad addon pairings
    pub fn build(entries: Vec<ResourceTypeEntry>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(entries.len());

        for (idx, entry) in entries.iter().enumerate() {
            entry.validate()?;
            if by_name.insert(entry.logical_name.clone(), idx).is_some() {
                return Err(RegistryError::DuplicateName(entry.logical_name.clone()));
            }
        }

        Ok(Self { entries, by_name })
    }

    /// Look up an entry by logical name
    pub fn lookup(&self, logical_name: &str) -> Result<&ResourceTypeEntry> {
        self.get(logical_name)
            .ok_or_else(|| RegistryError::NotFound(logical_name.to_string()))
    }

    /// Look up an entry, returning `None` when it is unknown
    pub fn get(&self, logical_name: &str) -> Option<&ResourceTypeEntry> {
        self.by_name.get(logical_name).map(|&idx| &self.entries[idx])
    }

    /// Whether the catalog knows `logical_name`
    pub fn contains(&self, logical_name: &str) -> bool {
        self.by_name.contains_key(logical_name)
    }

    /// Entries of one tier, in definition order
    pub fn entries_by_tier(&self, tier: Tier) -> impl Iterator<Item = &ResourceTypeEntry> + Clone {
        self.entries.iter().filter(move |e| e.tier == tier)
    }

    /// All entries, in definition order
    pub fn iter(&self) -> impl Iterator<Item = &ResourceTypeEntry> + Clone {
        self.entries.iter()
    }

    /// All logical names, in definition order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.logical_name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
