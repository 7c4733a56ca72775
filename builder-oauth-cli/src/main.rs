//! builder-oauth CLI tool

#![forbid(unsafe_code)]

use anyhow::Result;
use builder_oauth::observability::{self, ObservabilityConfig};
use builder_oauth_cli::{CheckCommand, ConfigSource, ProvidersCommand, ShowCommand};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "builder-oauth")]
#[command(version)]
#[command(about = "Lint and inspect Builder's OAuth provider configuration", long_about = None)]
struct Cli {
    /// Emit library log events (filter with `RUST_LOG`)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Read a single configuration file instead of the layered search
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Service name for the layered search (`~/.config/builder/<service>/config.toml`)
    #[arg(short, long)]
    service: Option<String>,
}

impl SourceArgs {
    fn into_source(self) -> ConfigSource {
        ConfigSource::from_args(self.config, self.service)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Report every problem in the OAuth configuration
    Check {
        #[command(flatten)]
        source: SourceArgs,

        /// Fail on any error, not only on a missing or unsupported provider
        #[arg(long)]
        strict: bool,
    },
    /// Print the selected provider config as JSON
    Show {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List supported providers
    Providers,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        observability::init_with(&ObservabilityConfig::new("builder-oauth").with_filter("debug"))?;
    }

    match cli.command {
        Commands::Check { source, strict } => {
            CheckCommand::new(source.into_source())
                .strict(strict)
                .execute()?;
        }
        Commands::Show { source } => {
            ShowCommand::new(source.into_source()).execute()?;
        }
        Commands::Providers => {
            ProvidersCommand::execute();
        }
    }

    Ok(())
}
