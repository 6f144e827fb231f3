//! Resource type listing

use super::Session;
use crate::cli::{ListArgs, OutputFormat};
use crate::error::Result;
use crate::output::{colorize_available, format_json, format_table_raw, format_yaml};
use crate::resources::{Endpoint, ResourceTypeEntry, Tier};
use serde::Serialize;

/// One row of `kt list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    pub name: String,
    pub tier: Tier,
    pub wire_identifier: String,
    pub endpoint: Endpoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub available: bool,
}

/// Rows for the entries `args` selects, in definition order
pub fn list_rows(session: &Session, args: &ListArgs) -> Vec<ListRow> {
    let registry = &session.registry;
    let tier: Option<Tier> = args.tier.map(Into::into);

    let entries: Box<dyn Iterator<Item = &ResourceTypeEntry> + '_> = if args.available {
        Box::new(registry.available_entries(&session.features, session.cluster()))
    } else {
        Box::new(registry.catalog().iter())
    };

    entries
        .filter(|e| tier.map_or(true, |t| e.tier == t))
        .map(|e| to_row(session, e))
        .collect()
}

fn to_row(session: &Session, entry: &ResourceTypeEntry) -> ListRow {
    let registry = &session.registry;
    ListRow {
        name: entry.logical_name.clone(),
        tier: entry.tier,
        wire_identifier: entry.wire_identifier.clone(),
        endpoint: entry.endpoint(),
        addon: entry.addon_key.clone(),
        group: registry.group_of(&entry.logical_name).map(str::to_string),
        available: registry.entry_available(entry, &session.features, session.cluster()),
    }
}

/// Print resource types
pub fn list_types(session: &Session, args: &ListArgs, output: OutputFormat) -> Result<()> {
    let rows = list_rows(session, args);

    match output {
        OutputFormat::Json => println!("{}", format_json(&rows, true)?),
        OutputFormat::Yaml => print!("{}", format_yaml(&rows)?),
        OutputFormat::Name => {
            for row in &rows {
                println!("{}", row.name);
            }
        }
        OutputFormat::Table => {
            let headers = ["NAME", "TIER", "WIRE IDENTIFIER", "ENDPOINT", "ADDON", "GROUP", "AVAILABLE"];
            let cells: Vec<Vec<String>> = rows
                .iter()
                .map(|r| {
                    vec![
                        r.name.clone(),
                        r.tier.to_string(),
                        r.wire_identifier.clone(),
                        r.endpoint.to_string(),
                        r.addon.clone().unwrap_or_else(|| "-".to_string()),
                        r.group.clone().unwrap_or_else(|| "-".to_string()),
                        colorize_available(r.available),
                    ]
                })
                .collect();
            println!("{}", format_table_raw(&headers, &cells));
        }
    }

    Ok(())
}
