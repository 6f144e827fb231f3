//! kt - Resolve logical resource types against the installed API tiers

use anyhow::{Context, Result};
use clap::Parser;
use kubetypes::cli::{Cli, Command};
use kubetypes::commands::{self, Session};
use kubetypes::config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let app_config = config::load_config().context("failed to load ~/.kt/config.toml")?;

    if cli.no_color || !app_config.colors {
        owo_colors::set_override(false);
    }

    let features = cli.features();

    let result = match &cli.command {
        Command::Check => {
            let definitions = match &cli.definitions {
                Some(path) => kubetypes::resources::DefinitionSet::from_path(path),
                None => app_config.definition_set(),
            };
            definitions.and_then(|set| {
                commands::run_check(set, &app_config.features.clone().merge(&features), cli.output)
            })
        }
        Command::Completions(args) => {
            generate_completions(args.shell);
            Ok(())
        }
        command => Session::open(
            &app_config,
            cli.definitions.clone(),
            cli.cluster.clone(),
            &features,
        )
        .and_then(|session| match command {
            Command::List(args) => commands::list_types(&session, args, cli.output),
            Command::Resolve(args) => commands::run_resolve(&session, &args.name, cli.output),
            Command::Members(args) => commands::run_members(&session, &args.name, cli.output),
            Command::GroupOf(args) => commands::run_group_of(&session, &args.name, cli.output),
            Command::Check | Command::Completions(_) => Ok(()),
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn setup_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "kt", &mut std::io::stdout());
}
