use crate::domain::constants::SUBMIT_TIMEOUT_MS;
use crate::domain::models::SubmissionOutcome;
use crate::registry::{Specification, SubmitError};
use reqwest::StatusCode;
use std::time::Duration;

/// Boundary to the registry API. The state machine only needs this one
/// capability; retry policy, if any, belongs to the caller.
pub trait Registry {
    fn submit(&self, spec: &Specification) -> Result<SubmissionOutcome, SubmitError>;
}

pub struct HttpRegistryClient {
    endpoint: String,
    timeout: Duration,
}

impl HttpRegistryClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_millis(SUBMIT_TIMEOUT_MS),
        }
    }
}

impl Registry for HttpRegistryClient {
    fn submit(&self, spec: &Specification) -> Result<SubmissionOutcome, SubmitError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| SubmitError::Registry(e.to_string()))?;
        let resp = client
            .post(&self.endpoint)
            .json(spec)
            .send()
            .map_err(|e| SubmitError::Registry(format!("network error: {e}")))?;

        let status = resp.status();
        if status == StatusCode::OK || status == StatusCode::CREATED {
            let submission_id = resp
                .json::<serde_json::Value>()
                .ok()
                .and_then(|v| v.get("id").and_then(|x| x.as_str()).map(str::to_string));
            return Ok(SubmissionOutcome {
                success: true,
                message: "successfully submitted to registry".to_string(),
                submission_id,
                errors: vec![],
            });
        }

        // Registry-side rejection: surface the payload, keep the file intact.
        let body = resp.text().unwrap_or_default();
        let detail = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|x| x.as_str()).map(str::to_string))
            .unwrap_or(body);
        Ok(SubmissionOutcome {
            success: false,
            message: format!("registry rejected submission with status {status}"),
            submission_id: None,
            errors: vec![detail],
        })
    }
}
