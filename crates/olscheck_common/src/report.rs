//! Validation report
//!
//! One outcome per prompt, written once at the end of a run as a
//! 4-space indented JSON array. Each run overwrites the previous report.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Result of validating one prompt. Field order is the report's key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub prompt: String,
    /// Raw kubeconform stdout (exit 0) or stderr (otherwise)
    pub kubeconform_result: String,
    pub kind_validation_result: String,
    pub passed: bool,
}

/// Counts derived from a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[ValidationOutcome]) -> Self {
        let passed = outcomes.iter().filter(|o| o.passed).count();
        Self {
            total: outcomes.len(),
            passed,
            failed: outcomes.len() - passed,
        }
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} prompts, {} passed, {} failed",
            self.total, self.passed, self.failed
        )
    }
}

/// Render outcomes as 4-space indented JSON. Non-ASCII text stays raw UTF-8.
pub fn render_report(outcomes: &[ValidationOutcome]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    outcomes
        .serialize(&mut ser)
        .context("Failed to serialize validation report")?;

    String::from_utf8(buf).context("Validation report is not UTF-8")
}

/// Write the report, replacing whatever was there
pub fn write_report(path: &Path, outcomes: &[ValidationOutcome]) -> Result<()> {
    let rendered = render_report(outcomes)?;
    fs::write(path, rendered)
        .with_context(|| format!("Failed to write report {}", path.display()))?;

    tracing::info!("Wrote {} outcomes to {}", outcomes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(prompt: &str, passed: bool) -> ValidationOutcome {
        ValidationOutcome {
            prompt: prompt.to_string(),
            kubeconform_result: "{\"resources\": []}".to_string(),
            kind_validation_result: if passed {
                "Kind matches expected value".to_string()
            } else {
                "Expected kind Pod, but got Service".to_string()
            },
            passed,
        }
    }

    #[test]
    fn test_render_layout() {
        let rendered = render_report(&[outcome("Create a pod", true)]).unwrap();
        let expected = "[\n    {\n        \"prompt\": \"Create a pod\",\n        \"kubeconform_result\": \"{\\\"resources\\\": []}\",\n        \"kind_validation_result\": \"Kind matches expected value\",\n        \"passed\": true\n    }\n]";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_non_ascii_written_as_utf8() {
        let rendered = render_report(&[outcome("Créer un pod nommé café ☕", true)]).unwrap();
        assert!(rendered.contains("\"prompt\": \"Créer un pod nommé café ☕\""));
        assert!(!rendered.contains("\\u"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_report(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("validation_report.json");
        fs::write(&path, "stale content that is much longer than the new report").unwrap();

        write_report(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_write_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let outcomes = vec![outcome("a", true), outcome("b", false)];

        write_report(&path, &outcomes).unwrap();
        let first = fs::read(&path).unwrap();
        write_report(&path, &outcomes).unwrap();
        assert_eq!(first, fs::read(&path).unwrap());

        let back: Vec<ValidationOutcome> = serde_json::from_slice(&first).unwrap();
        assert_eq!(back, outcomes);
    }

    #[test]
    fn test_summary() {
        let outcomes = vec![outcome("a", true), outcome("b", false), outcome("c", true)];
        let summary = RunSummary::from_outcomes(&outcomes);
        assert_eq!(summary, RunSummary { total: 3, passed: 2, failed: 1 });
        assert_eq!(summary.to_string(), "3 prompts, 2 passed, 1 failed");

        assert_eq!(RunSummary::from_outcomes(&[]), RunSummary::default());
    }
}
