//! olscheck - end-to-end validation of OLS-generated Kubernetes manifests
//!
//! Checks OLS is up, sends every prompt, runs kubeconform on the returned
//! manifest and records whether the resource kind matched.

use anyhow::{Context, Result};
use clap::Parser;
use olscheck::cli::{Cli, Commands};
use olscheck::{commands, logging};
use olscheck_common::OlsCheckConfig;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config =
        OlsCheckConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    debug!("Effective configuration: {:?}", config);

    let code = match cli.selected_command() {
        Commands::Run { .. } => commands::run(&config)?,
        Commands::Health => commands::health(&config)?,
        Commands::Validate {
            file,
            expected_kind,
        } => commands::validate(&config, &file, &expected_kind)?,
    };

    std::process::exit(code);
}
