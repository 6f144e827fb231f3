//! Name resolution commands: resolve, members, group-of

use super::Session;
use crate::cli::OutputFormat;
use crate::error::{RegistryError, Result};
use crate::fuzzy::suggest;
use crate::output::{colorize_available, format_json, format_table_raw, format_yaml};
use crate::resources::Resolution;
use owo_colors::{OwoColorize, Stream};

/// Resolve a logical name and print the routing metadata
pub fn run_resolve(session: &Session, name: &str, output: OutputFormat) -> Result<()> {
    let resolution = session
        .registry
        .resolve(name, &session.features, session.cluster())
        .inspect_err(|e| hint_unknown(session, e))?;

    match output {
        OutputFormat::Json => println!("{}", format_json(&resolution, true)?),
        OutputFormat::Yaml => print!("{}", format_yaml(&resolution)?),
        OutputFormat::Name => match &resolution {
            Resolution::Type(t) => println!("{}", t.wire_identifier),
            Resolution::Group(g) => {
                for member in &g.available_members {
                    println!("{}", member);
                }
            }
        },
        OutputFormat::Table => print_resolution(session, &resolution),
    }

    Ok(())
}

fn print_resolution(session: &Session, resolution: &Resolution) {
    let mut rows = Vec::new();
    match resolution {
        Resolution::Type(t) => {
            rows.push(vec!["Name".to_string(), t.logical_name.clone()]);
            rows.push(vec!["Tier".to_string(), t.tier.to_string()]);
            rows.push(vec!["Wire identifier".to_string(), t.wire_identifier.clone()]);
            rows.push(vec!["Endpoint".to_string(), t.endpoint.to_string()]);
            if let Some(key) = &t.addon_key {
                rows.push(vec!["Addon".to_string(), key.clone()]);
            }
            let url = t
                .url(session.cluster())
                .unwrap_or_else(|_| "(needs --cluster)".to_string());
            rows.push(vec!["URL".to_string(), url]);
            rows.push(vec!["Available".to_string(), colorize_available(t.available)]);
        }
        Resolution::Group(g) => {
            rows.push(vec!["Group".to_string(), g.group_name.clone()]);
            rows.push(vec!["Members".to_string(), g.available_members.join(", ")]);
            rows.push(vec!["Available".to_string(), colorize_available(g.available)]);
        }
    }
    println!("{}", format_table_raw(&["FIELD", "VALUE"], &rows));
}

/// Print every member of a group and whether it is available
pub fn run_members(session: &Session, group: &str, output: OutputFormat) -> Result<()> {
    let registry = &session.registry;
    let members = registry
        .members_of(group)
        .inspect_err(|e| hint_unknown(session, e))?;
    let available = registry.available_members_of(group, &session.features, session.cluster())?;

    match output {
        OutputFormat::Json => println!("{}", format_json(&available, true)?),
        OutputFormat::Yaml => print!("{}", format_yaml(&available)?),
        OutputFormat::Name => {
            for member in &available {
                println!("{}", member);
            }
        }
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = members
                .iter()
                .map(|m| vec![m.clone(), colorize_available(available.contains(m))])
                .collect();
            println!("{}", format_table_raw(&["MEMBER", "AVAILABLE"], &rows));
        }
    }

    Ok(())
}

/// Print the group owning a resource type
pub fn run_group_of(session: &Session, name: &str, output: OutputFormat) -> Result<()> {
    let registry = &session.registry;
    registry
        .lookup(name)
        .inspect_err(|e| hint_unknown(session, e))?;
    let group = registry.group_of(name);

    match output {
        OutputFormat::Json => println!("{}", format_json(&group, true)?),
        OutputFormat::Yaml => print!("{}", format_yaml(&group)?),
        OutputFormat::Name | OutputFormat::Table => match group {
            Some(group) => println!("{}", group),
            None => println!("{} belongs to no group", name),
        },
    }

    Ok(())
}

/// Print "did you mean" suggestions for unknown names
fn hint_unknown(session: &Session, err: &RegistryError) {
    let name = match err {
        RegistryError::NotFound(name) | RegistryError::NotAGroup(name) => name,
        _ => return,
    };

    let candidates: Vec<&str> = match err {
        RegistryError::NotAGroup(_) => session.registry.aggregation().groups().collect(),
        _ => session.registry.all_names(),
    };

    let suggestions = suggest(name, &candidates, 3);
    if !suggestions.is_empty() {
        eprintln!(
            "{} {}",
            "Did you mean:".if_supports_color(Stream::Stderr, |t| t.yellow()),
            suggestions.join(", ")
        );
    }
}
