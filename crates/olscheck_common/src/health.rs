//! Service health gate
//!
//! One GET against the OLS root URL. The body must equal the fixed
//! sentinel object exactly; the status code is not consulted.

use serde_json::{json, Value};
use tracing::debug;

/// Message OLS serves on its default endpoint
pub const HEALTH_MESSAGE: &str = "This is the default endpoint for OLS";

/// Status OLS reports while running
pub const HEALTH_STATUS: &str = "running";

/// Outcome of the health check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Body matched the sentinel
    Healthy,
    /// Well-formed JSON that is not the sentinel
    Failed,
    /// Transport failure or a body that is not JSON
    Error(String),
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }

    /// Line printed to the operator
    pub fn message(&self) -> String {
        match self {
            HealthStatus::Healthy => "Service is healthy".to_string(),
            HealthStatus::Failed => "Service health check failed".to_string(),
            HealthStatus::Error(detail) => format!("Service health check error: {}", detail),
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// The exact body a running OLS answers with
pub fn expected_health_response() -> Value {
    json!({
        "message": HEALTH_MESSAGE,
        "status": HEALTH_STATUS,
    })
}

/// Classify an already decoded health body
pub fn classify_health_body(body: &Value) -> HealthStatus {
    if *body == expected_health_response() {
        HealthStatus::Healthy
    } else {
        HealthStatus::Failed
    }
}

/// Check service health with a default blocking client
pub fn check_service_health(base_url: &str) -> HealthStatus {
    match reqwest::blocking::Client::builder().build() {
        Ok(client) => check_service_health_with(&client, base_url),
        Err(e) => HealthStatus::Error(e.to_string()),
    }
}

/// Check service health with a caller-provided client
///
/// Never fails: every transport problem is folded into `HealthStatus::Error`.
pub fn check_service_health_with(client: &reqwest::blocking::Client, base_url: &str) -> HealthStatus {
    debug!("Health check GET {}", base_url);

    let response = match client.get(base_url).send() {
        Ok(resp) => resp,
        Err(e) => return HealthStatus::Error(e.to_string()),
    };

    debug!("Health check answered with HTTP {}", response.status());

    match response.json::<Value>() {
        Ok(body) => classify_health_body(&body),
        Err(e) => HealthStatus::Error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_healthy() {
        let body = json!({
            "message": "This is the default endpoint for OLS",
            "status": "running"
        });
        assert_eq!(classify_health_body(&body), HealthStatus::Healthy);
    }

    #[test]
    fn test_key_order_is_irrelevant() {
        let body: Value = serde_json::from_str(
            r#"{"status": "running", "message": "This is the default endpoint for OLS"}"#,
        )
        .unwrap();
        assert!(classify_health_body(&body).is_healthy());
    }

    #[test]
    fn test_other_json_fails() {
        let bodies = [
            json!({"status": "down"}),
            json!({"message": "This is the default endpoint for OLS", "status": "starting"}),
            json!({"message": "This is the default endpoint for OLS", "status": "running", "extra": 1}),
            json!([]),
            json!(null),
            json!("running"),
        ];
        for body in &bodies {
            assert_eq!(classify_health_body(body), HealthStatus::Failed, "{}", body);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(HealthStatus::Healthy.message(), "Service is healthy");
        assert_eq!(HealthStatus::Failed.message(), "Service health check failed");
        assert_eq!(
            HealthStatus::Error("connection refused".to_string()).to_string(),
            "Service health check error: connection refused"
        );
    }
}
