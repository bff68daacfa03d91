//! OLS Query Client
//!
//! Sends a natural-language prompt to `POST <base_url>/ols` and returns the
//! `response` text. Real HTTP implementation plus a scripted fake for tests.

use crate::error::OlsError;
use anyhow::Result;
use serde::Serialize;
use std::sync::Mutex;
use std::time::Duration;

/// Body of a query request
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest<'a> {
    pub query: &'a str,
}

/// Anything that can answer a prompt with text
pub trait OlsClient: Send + Sync {
    fn query(&self, prompt: &str) -> Result<String, OlsError>;
}

/// Build the blocking HTTP client shared by health and query calls
pub fn build_http_client(timeout_secs: Option<u64>) -> Result<reqwest::blocking::Client> {
    let mut builder = reqwest::blocking::Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))
}

/// Real OLS client over HTTP
pub struct HttpOlsClient {
    query_url: String,
    client: reqwest::blocking::Client,
}

impl HttpOlsClient {
    pub fn new(base_url: &str, timeout_secs: Option<u64>) -> Result<Self> {
        Ok(Self::with_client(base_url, build_http_client(timeout_secs)?))
    }

    pub fn with_client(base_url: &str, client: reqwest::blocking::Client) -> Self {
        Self {
            query_url: format!("{}/ols", base_url.trim_end_matches('/')),
            client,
        }
    }

    pub fn query_url(&self) -> &str {
        &self.query_url
    }
}

impl OlsClient for HttpOlsClient {
    fn query(&self, prompt: &str) -> Result<String, OlsError> {
        let response = self
            .client
            .post(&self.query_url)
            .json(&QueryRequest { query: prompt })
            .send()
            .map_err(|e| OlsError::Http(format!("Request failed: {}", e)))?;

        // Status is not checked; the body decides.
        let response_json: serde_json::Value = response
            .json()
            .map_err(|e| OlsError::InvalidJson(format!("Failed to parse response: {}", e)))?;

        response_json
            .get("response")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or(OlsError::MissingResponse)
    }
}

/// Fake OLS client for testing
///
/// Pops scripted responses in order and keeps repeating the last one.
pub struct FakeOlsClient {
    responses: Mutex<Vec<Result<String, OlsError>>>,
    prompts: Mutex<Vec<String>>,
}

impl FakeOlsClient {
    pub fn new(responses: Vec<Result<String, OlsError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always answer with the same text
    pub fn always(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl OlsClient for FakeOlsClient {
    fn query(&self, prompt: &str) -> Result<String, OlsError> {
        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(prompt.to_string());

        let mut responses = self.responses.lock().unwrap_or_else(|e| e.into_inner());
        match responses.len() {
            0 => Err(OlsError::MissingResponse),
            1 => responses[0].clone(),
            _ => responses.remove(0),
        }
    }
}
