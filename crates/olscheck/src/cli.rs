//! Command-line surface

use clap::{Parser, Subcommand};
use olscheck_common::OlsCheckConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "olscheck")]
#[command(about = "End-to-end validation of OLS-generated Kubernetes manifests", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: ./olscheck.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// OLS base URL, overrides config and OLSCHECK_BASE_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `run`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Health check, then send every prompt and write the report
    Run {
        /// Prompts file (JSON array of {prompt, expected_kind})
        #[arg(long)]
        prompts: Option<PathBuf>,

        /// Report output path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Do not pull the kubeconform image first
        #[arg(long)]
        skip_pull: bool,
    },

    /// Only check that OLS is up
    Health,

    /// Validate a local response or manifest file without querying OLS
    Validate {
        /// Text file holding an OLS answer or a bare manifest
        file: PathBuf,

        /// Kind every resource must have
        #[arg(long)]
        expected_kind: String,
    },
}

impl Cli {
    /// Subcommand to execute, `run` with config values when none was given
    pub fn selected_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run {
            prompts: None,
            report: None,
            skip_pull: false,
        })
    }

    /// Fold flag values over the loaded configuration
    pub fn apply_overrides(&self, config: &mut OlsCheckConfig) {
        if let Some(url) = &self.base_url {
            config.service.base_url = url.clone();
        }

        if let Some(Commands::Run {
            prompts,
            report,
            skip_pull,
        }) = &self.command
        {
            if let Some(p) = prompts {
                config.run.prompts = p.clone();
            }
            if let Some(r) = report {
                config.run.report = r.clone();
            }
            if *skip_pull {
                config.run.pull_image = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_run() {
        let cli = Cli::parse_from(["olscheck"]);
        assert_eq!(
            cli.selected_command(),
            Commands::Run {
                prompts: None,
                report: None,
                skip_pull: false
            }
        );
    }

    #[test]
    fn test_run_flags_override_config() {
        let cli = Cli::parse_from([
            "olscheck",
            "--base-url",
            "http://ols.test:8080",
            "run",
            "--prompts",
            "cases.json",
            "--report",
            "out.json",
            "--skip-pull",
        ]);
        let mut config = OlsCheckConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.service.base_url, "http://ols.test:8080");
        assert_eq!(config.run.prompts, PathBuf::from("cases.json"));
        assert_eq!(config.run.report, PathBuf::from("out.json"));
        assert!(!config.run.pull_image);
    }

    #[test]
    fn test_unset_flags_keep_config() {
        let cli = Cli::parse_from(["olscheck", "health"]);
        let mut config = OlsCheckConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, OlsCheckConfig::default());
    }

    #[test]
    fn test_validate_requires_kind() {
        assert!(Cli::try_parse_from(["olscheck", "validate", "answer.txt"]).is_err());

        let cli = Cli::parse_from(["olscheck", "validate", "answer.txt", "--expected-kind", "Pod"]);
        assert_eq!(
            cli.selected_command(),
            Commands::Validate {
                file: PathBuf::from("answer.txt"),
                expected_kind: "Pod".to_string()
            }
        );
    }
}
