//! Prompt runner
//!
//! For each prompt in order: query OLS, extract the manifest, run the
//! validator, check the kind. One outcome per prompt, no parallelism.
//! A query failure, validator launch failure or validator JSON without a
//! `resources` list aborts the whole run.

use crate::extract::extract_yaml;
use crate::kind_check::check_kind;
use crate::kubeconform::ManifestValidator;
use crate::ols_client::OlsClient;
use crate::prompts::PromptRecord;
use crate::report::ValidationOutcome;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Extract, validate and kind-check one response text
pub fn evaluate_response<V: ManifestValidator + ?Sized>(
    validator: &V,
    prompt: &str,
    response_text: &str,
    expected_kind: &str,
) -> Result<ValidationOutcome> {
    let yaml = extract_yaml(response_text);
    if yaml.is_empty() {
        debug!("No manifest marker in response, validating empty content");
    } else {
        debug!("Extracted {} bytes of manifest", yaml.len());
    }

    let kubeconform_result = validator.validate(yaml)?;
    let check = check_kind(&kubeconform_result, expected_kind)?;

    Ok(ValidationOutcome {
        prompt: prompt.to_string(),
        kubeconform_result,
        kind_validation_result: check.message,
        passed: check.passed,
    })
}

pub struct Runner<C, V> {
    client: C,
    validator: V,
}

impl<C: OlsClient, V: ManifestValidator> Runner<C, V> {
    pub fn new(client: C, validator: V) -> Self {
        Self { client, validator }
    }

    /// Run one prompt record through the full cycle
    pub fn run_one(&self, record: &PromptRecord) -> Result<ValidationOutcome> {
        debug!("Querying OLS: {}", record.prompt);
        let response_text = self
            .client
            .query(&record.prompt)
            .with_context(|| format!("OLS query failed for prompt '{}'", record.prompt))?;

        evaluate_response(
            &self.validator,
            &record.prompt,
            &response_text,
            &record.expected_kind,
        )
    }

    /// Run every record in list order
    pub fn run(&self, prompts: &[PromptRecord]) -> Result<Vec<ValidationOutcome>> {
        let mut outcomes = Vec::with_capacity(prompts.len());

        for (idx, record) in prompts.iter().enumerate() {
            let outcome = self.run_one(record)?;
            info!(
                "[{}/{}] {} - {}",
                idx + 1,
                prompts.len(),
                if outcome.passed { "PASS" } else { "FAIL" },
                outcome.kind_validation_result
            );
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}
