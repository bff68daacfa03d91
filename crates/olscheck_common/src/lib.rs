//! olscheck Common - building blocks for OLS end-to-end manifest validation
//!
//! Health check, prompt loading, query client, YAML extraction,
//! kubeconform invocation, kind checking and report writing.
//! Everything runs sequentially and blocks the caller.

pub mod config;
pub mod error;
pub mod extract;
pub mod health;
pub mod kind_check;
pub mod kubeconform;
pub mod ols_client;
pub mod prompts;
pub mod report;
pub mod runner;

pub use config::OlsCheckConfig;
pub use error::{ConfigError, OlsError};
pub use extract::extract_yaml;
pub use health::{check_service_health, HealthStatus};
pub use kind_check::{check_kind, KindCheck};
pub use kubeconform::{KubeconformValidator, ManifestValidator};
pub use ols_client::{FakeOlsClient, HttpOlsClient, OlsClient};
pub use prompts::{load_prompts, PromptRecord};
pub use report::{write_report, RunSummary, ValidationOutcome};
pub use runner::Runner;
