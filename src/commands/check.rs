//! Definition set validation

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::{format_json, format_table_raw, format_yaml};
use crate::resources::{DefinitionSet, InstalledFeatures, ResourceRegistry, Tier};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::warn;

/// Summary of a validated definition set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub version: String,
    pub core: usize,
    pub management: usize,
    pub addon: usize,
    pub groups: usize,
    /// Add-on keys named in the features but used by no entry
    pub unused_addons: Vec<String>,
}

/// Add-on keys present in `features` that no entry of `registry` uses,
/// sorted and deduplicated across clusters. Each one is logged as a warning.
pub fn unused_addons(registry: &ResourceRegistry, features: &InstalledFeatures) -> Vec<String> {
    let known: BTreeSet<&str> = registry
        .entries_by_tier(Tier::Addon)
        .filter_map(|e| e.addon_key.as_deref())
        .collect();
    let unused_addons: Vec<String> = features
        .installed_addons_by_cluster
        .values()
        .flatten()
        .filter(|key| !known.contains(key.as_str()))
        .map(String::clone)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    for key in &unused_addons {
        warn!("Add-on '{}' is configured but no resource type uses it", key);
    }

    unused_addons
}

/// Build a registry from `definitions` and summarize it
pub fn check_definitions(definitions: DefinitionSet, features: &InstalledFeatures) -> Result<CheckReport> {
    let registry = ResourceRegistry::build(definitions)?;
    let unused_addons = unused_addons(&registry, features);

    Ok(CheckReport {
        version: registry.version().to_string(),
        core: registry.entries_by_tier(Tier::Core).count(),
        management: registry.entries_by_tier(Tier::Management).count(),
        addon: registry.entries_by_tier(Tier::Addon).count(),
        groups: registry.aggregation().len(),
        unused_addons,
    })
}

/// Validate the definition set and print a summary
pub fn run_check(definitions: DefinitionSet, features: &InstalledFeatures, output: OutputFormat) -> Result<()> {
    let report = check_definitions(definitions, features)?;

    match output {
        OutputFormat::Json => println!("{}", format_json(&report, true)?),
        OutputFormat::Yaml => print!("{}", format_yaml(&report)?),
        OutputFormat::Name => println!("{}", report.version),
        OutputFormat::Table => {
            let rows = vec![
                vec!["Version".to_string(), report.version.clone()],
                vec!["Core types".to_string(), report.core.to_string()],
                vec!["Management types".to_string(), report.management.to_string()],
                vec!["Addon types".to_string(), report.addon.to_string()],
                vec!["Groups".to_string(), report.groups.to_string()],
            ];
            println!("{}", format_table_raw(&["FIELD", "VALUE"], &rows));
        }
    }

    Ok(())
}
