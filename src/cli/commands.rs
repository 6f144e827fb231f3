//! CLI command definitions using clap

use crate::resources::{InstalledFeatures, Tier};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kt",
    version,
    about = "Resolve logical resource types to API tiers, wire identifiers and availability",
    long_about = None,
)]
pub struct Cli {
    /// Cluster to resolve add-on availability and routes for
    #[arg(long, global = true, env = "KT_CLUSTER")]
    pub cluster: Option<String>,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Treat the management control plane as installed
    #[arg(long, global = true)]
    pub management: bool,

    /// Installed add-on, as CLUSTER=KEY (repeatable)
    #[arg(long = "addon", global = true, value_name = "CLUSTER=KEY", value_parser = parse_addon)]
    pub addons: Vec<(String, String)>,

    /// Definition set file to use instead of the built-in one
    #[arg(long, global = true)]
    pub definitions: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Installed features named on the command line
    pub fn features(&self) -> InstalledFeatures {
        let mut features = InstalledFeatures::new().with_management_plane(self.management);
        for (cluster, key) in &self.addons {
            features.add_addon(cluster, key);
        }
        features
    }
}

fn parse_addon(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((cluster, key)) if !cluster.is_empty() && !key.is_empty() => {
            Ok((cluster.to_string(), key.to_string()))
        }
        _ => Err(format!("expected CLUSTER=KEY, got '{}'", s)),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
    Name,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TierArg {
    Core,
    Management,
    Addon,
}

impl From<TierArg> for Tier {
    fn from(arg: TierArg) -> Self {
        match arg {
            TierArg::Core => Tier::Core,
            TierArg::Management => Tier::Management,
            TierArg::Addon => Tier::Addon,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List resource types
    #[command(alias = "ls")]
    List(ListArgs),

    /// Resolve a logical name
    Resolve(NameArgs),

    /// Show the available members of a group
    Members(NameArgs),

    /// Show the group a resource type belongs to
    GroupOf(NameArgs),

    /// Validate the active definition set
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Clone, Debug, Default)]
pub struct ListArgs {
    /// Only list types of this tier
    #[arg(long, value_enum)]
    pub tier: Option<TierArg>,

    /// Only list types available with the current features
    #[arg(short = 'a', long)]
    pub available: bool,
}

#[derive(Args, Clone, Debug)]
pub struct NameArgs {
    /// Logical resource name
    pub name: String,
}

#[derive(Args, Clone, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
