use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Failure envelope. `data` carries the itemized validation report when the
/// failure is a validation one, so machine callers never have to re-parse the
/// joined message.
#[derive(Serialize)]
pub struct ErrorOut {
    pub ok: bool,
    pub error: ErrorBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ValidationReport>,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Result of checking a specification against the registry rules.
/// `warnings` and `suggestions` never affect `valid`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Outcome of staging a submission file (first half of the two-phase flow).
/// `success` stays false here: nothing has been sent to the registry yet.
#[derive(Debug, Serialize)]
pub struct CreateReport {
    pub success: bool,
    pub requires_confirmation: bool,
    pub yaml_file: String,
    pub confirmation_message: String,
    pub submission_preview: SubmissionPreview,
    pub validation: ValidationReport,
}

#[derive(Debug, Serialize)]
pub struct SubmissionPreview {
    pub identifier: String,
    pub name: String,
    #[serde(rename = "codeRepository")]
    pub code_repository: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Serialize)]
pub struct StatusReport {
    pub file_exists: bool,
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub user_confirmed: bool,
    pub ready_for_submission: bool,
    pub validation: ValidationReport,
}

#[derive(Serialize, Default)]
pub struct AnalysisReport {
    pub project_path: String,
    pub detected_files: Vec<String>,
    pub suggested_metadata: serde_json::Map<String, serde_json::Value>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub registry: RegistryConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct RegistryConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
}
