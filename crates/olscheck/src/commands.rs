//! Subcommand handlers
//!
//! Each handler returns the process exit code. Errors that escape are
//! fatal and leave no report behind.

use crate::errors::{EXIT_HEALTH_CHECK_FAILED, EXIT_SUCCESS, EXIT_VALIDATION_FAILED};
use anyhow::{Context, Result};
use olscheck_common::health::check_service_health_with;
use olscheck_common::ols_client::build_http_client;
use olscheck_common::runner::evaluate_response;
use olscheck_common::{
    load_prompts, write_report, HealthStatus, HttpOlsClient, KubeconformValidator,
    OlsCheckConfig, RunSummary, Runner,
};
use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Health gate, image pull, every prompt, report
pub fn run(config: &OlsCheckConfig) -> Result<i32> {
    let client = build_http_client(config.service.timeout_secs)?;

    let health = check_service_health_with(&client, &config.service.base_url);
    if !health.is_healthy() {
        println!("{}", health);
        return Ok(EXIT_HEALTH_CHECK_FAILED);
    }
    println!("Health Check Passed");

    let validator = KubeconformValidator::new(&config.validator);
    if config.run.pull_image {
        validator.pull_image()?;
    } else {
        info!("Skipping image pull");
    }

    let prompts = load_prompts(&config.run.prompts)?;

    let ols = HttpOlsClient::with_client(&config.service.base_url, client);
    info!("Sending {} prompts to {}", prompts.len(), ols.query_url());

    let runner = Runner::new(ols, validator);
    let outcomes = runner.run(&prompts)?;
    write_report(&config.run.report, &outcomes)?;

    let summary = RunSummary::from_outcomes(&outcomes);
    info!("Run finished: {}", summary);
    println!("{}", render_summary(&summary, &config.run.report));

    Ok(EXIT_SUCCESS)
}

/// Only the health gate
pub fn health(config: &OlsCheckConfig) -> Result<i32> {
    let client = build_http_client(config.service.timeout_secs)?;
    let status = check_service_health_with(&client, &config.service.base_url);
    println!("{}", status);

    Ok(health_exit_code(&status))
}

/// Extract, kubeconform and kind-check a local file
pub fn validate(config: &OlsCheckConfig, file: &Path, expected_kind: &str) -> Result<i32> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let validator = KubeconformValidator::new(&config.validator);
    let outcome = evaluate_response(
        &validator,
        &file.display().to_string(),
        &text,
        expected_kind,
    )?;

    println!(
        "{}",
        serde_json::to_string_pretty(&outcome).context("Failed to render outcome")?
    );

    Ok(if outcome.passed {
        EXIT_SUCCESS
    } else {
        EXIT_VALIDATION_FAILED
    })
}

pub fn health_exit_code(status: &HealthStatus) -> i32 {
    if status.is_healthy() {
        EXIT_SUCCESS
    } else {
        EXIT_HEALTH_CHECK_FAILED
    }
}

fn render_summary(summary: &RunSummary, report: &Path) -> String {
    let failed = if summary.failed > 0 {
        format!("{} failed", summary.failed).red().to_string()
    } else {
        format!("{} failed", summary.failed)
    };

    format!(
        "{} prompts, {}, {} (report: {})",
        summary.total,
        format!("{} passed", summary.passed).green(),
        failed,
        report.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn test_health_exit_code() {
        assert_eq!(health_exit_code(&HealthStatus::Healthy), 0);
        assert_eq!(health_exit_code(&HealthStatus::Failed), 1);
        assert_eq!(health_exit_code(&HealthStatus::Error("refused".into())), 1);
    }

    #[test]
    fn test_run_stops_at_health_gate() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let dir = tempfile::tempdir().unwrap();
        let mut config = OlsCheckConfig::default();
        config.service.base_url = url;
        config.run.report = dir.path().join("validation_report.json");
        config.run.prompts = dir.path().join("missing.json");

        assert_eq!(run(&config).unwrap(), EXIT_HEALTH_CHECK_FAILED);
        assert!(!config.run.report.exists());
    }

    #[test]
    fn test_validate_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = OlsCheckConfig::default();
        assert!(validate(&config, &dir.path().join("nope.txt"), "Pod").is_err());
    }

    #[test]
    fn test_render_summary_mentions_counts() {
        let summary = RunSummary {
            total: 3,
            passed: 2,
            failed: 1,
        };
        let line = render_summary(&summary, Path::new("validation_report.json"));
        assert!(line.starts_with("3 prompts, "));
        assert!(line.contains("2 passed"));
        assert!(line.contains("1 failed"));
        assert!(line.ends_with("(report: validation_report.json)"));
    }
}
