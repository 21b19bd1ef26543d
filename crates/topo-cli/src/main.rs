//! topo - command-line interface for the user service topology
//!
//! This CLI lets operators and the delivery pipeline:
//! - Synthesize the resource graph for a stage and write it out
//! - Inspect what a stage name implies (flags, features, rollout, domain)
//! - List the route table
//! - Fingerprint a topology and diff it against a previous one
//!
//! Diagnostics go to stderr; stdout carries only command output.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::DescriptorArgs;
use config::CliConfig;
use output::{print_error, OutputFormat};

/// topo CLI application
#[derive(Parser)]
#[command(name = "topo")]
#[command(about = "Synthesize and inspect the user service deployment topology", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "TOPO_CONFIG", global = true)]
    config: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    descriptor: DescriptorArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Synthesize the topology for the configured environment
    Synth {
        /// Write the topology to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Show what the policy layer derives from a stage name
    Classify {
        /// Stage name
        stage: String,
    },

    /// List the route table
    Routes,

    /// Print the topology fingerprint
    Fingerprint,

    /// Compare the synthesized topology with a previous one
    Diff {
        /// Topology file written by `topo synth --out`
        #[arg(long)]
        previous: PathBuf,
    },

    /// Show the effective configuration
    Config,
}

fn init_tracing(config: &CliConfig, verbose: bool) {
    let level = if verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref()).context("loading configuration")?;
    init_tracing(&config, cli.verbose);

    let format = cli.output;
    let descriptor = &cli.descriptor;

    match cli.command {
        Commands::Synth { out } => commands::synth::execute(descriptor, &config, out, format)?,
        Commands::Classify { stage } => commands::classify::execute(&stage, &config, format)?,
        Commands::Routes => commands::routes::execute(format)?,
        Commands::Fingerprint => commands::fingerprint::execute(descriptor, &config)?,
        Commands::Diff { previous } => {
            commands::diff::execute(descriptor, &config, &previous, format)
                .with_context(|| format!("diffing against {}", previous.display()))?
        }
        Commands::Config => output::print_single(&config, format)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
