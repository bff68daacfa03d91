//! Kind check over kubeconform JSON output
//!
//! Walks `resources` in order and stops at the first entry whose `kind`
//! differs from the expectation. Entries without `kind` are skipped.
//! Output that is not JSON is a recorded failure; JSON without a
//! `resources` list is an error that ends the run.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MSG_KIND_MATCHES: &str = "Kind matches expected value";
pub const MSG_INVALID_JSON: &str = "Invalid JSON output from Kubeconform";

/// Verdict for one prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCheck {
    pub message: String,
    pub passed: bool,
}

impl KindCheck {
    fn pass() -> Self {
        Self {
            message: MSG_KIND_MATCHES.to_string(),
            passed: true,
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            passed: false,
        }
    }
}

/// Compare every listed resource kind against `expected_kind`
pub fn check_kind(validator_output: &str, expected_kind: &str) -> Result<KindCheck> {
    let parsed: Value = match serde_json::from_str(validator_output) {
        Ok(v) => v,
        Err(_) => return Ok(KindCheck::fail(MSG_INVALID_JSON)),
    };

    let resources = parsed
        .get("resources")
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("Kubeconform output has no resources list"))?;

    for resource in resources {
        let Some(kind) = resource.get("kind") else {
            continue;
        };
        if kind.as_str() != Some(expected_kind) {
            return Ok(KindCheck::fail(format!(
                "Expected kind {}, but got {}",
                expected_kind,
                display_kind(kind)
            )));
        }
    }

    Ok(KindCheck::pass())
}

/// Strings print bare; anything else prints as its JSON text (`null`, `true`).
fn display_kind(kind: &Value) -> String {
    match kind {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
