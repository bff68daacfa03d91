//! Prompt records
//!
//! Input file is a JSON array of `{"prompt": ..., "expected_kind": ...}`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One test case: what to ask OLS and which resource kind should come back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub prompt: String,
    pub expected_kind: String,
}

/// Load prompt records in file order
///
/// A missing or malformed file is fatal; nothing is recovered.
pub fn load_prompts(path: &Path) -> Result<Vec<PromptRecord>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read prompts file {}", path.display()))?;
    let prompts: Vec<PromptRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse prompts file {}", path.display()))?;

    tracing::info!("Loaded {} prompts from {}", prompts.len(), path.display());
    Ok(prompts)
}
