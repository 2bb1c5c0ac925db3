use crate::domain::models::ValidationReport;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Schema.org `SoftwareApplication` document as submitted to the registry.
///
/// Every field is optional at parse time: deserialization is permissive and
/// the validator is the single gate that decides submittability, so a draft
/// with missing fields still parses and gets an itemized report.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Specification {
    #[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "codeRepository", default, skip_serializing_if = "Option::is_none")]
    pub code_repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "softwareHelp", default, skip_serializing_if = "Option::is_none")]
    pub software_help: Option<SoftwareHelp>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maintainer: Vec<Maintainer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(rename = "applicationCategory", default, skip_serializing_if = "Option::is_none")]
    pub application_category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(rename = "operatingSystem", default, skip_serializing_if = "Vec::is_empty")]
    pub operating_system: Vec<String>,
    #[serde(rename = "programmingLanguage", default, skip_serializing_if = "Vec::is_empty")]
    pub programming_language: Vec<String>,
    #[serde(rename = "featureList", default, skip_serializing_if = "Vec::is_empty")]
    pub feature_list: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SoftwareHelp {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Maintainer {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// On-disk record of a pending submission. The `user_confirmed` flag in this
/// file is the only confirmation state that is ever trusted; nothing held in
/// process memory survives across tool invocations.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SubmissionDoc {
    #[serde(flatten)]
    pub spec: Specification,
    #[serde(default)]
    pub user_confirmed: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
    #[error("specification failed validation: {}", .0.errors.join("; "))]
    ValidationFailed(ValidationReport),
    #[error("submission not confirmed yet: review {} and run `regkit confirm` on it", .0.display())]
    ConfirmationRequired(PathBuf),
    #[error("submission file not found: {}", .0.display())]
    SubmissionNotFound(PathBuf),
    #[error("submission file unreadable: {0}")]
    FileState(String),
    #[error("registry submission failed: {0}")]
    Registry(String),
}

impl SubmitError {
    /// Stable machine-readable code for the `--json` error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            SubmitError::ValidationFailed(_) => "VALIDATION_ERROR",
            SubmitError::ConfirmationRequired(_) => "CONFIRMATION_REQUIRED",
            SubmitError::SubmissionNotFound(_) => "FILE_NOT_FOUND",
            SubmitError::FileState(_) => "FILE_STATE",
            SubmitError::Registry(_) => "REGISTRY_ERROR",
        }
    }
}

pub const REGISTRY_SCHEMA_JSON: &str = include_str!("../docs/registry.schema.json");

/// The JSON schema the registry validates submissions against.
pub fn schema_document() -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::from_str(REGISTRY_SCHEMA_JSON)?)
}

pub fn parse_spec(raw: &str) -> anyhow::Result<Specification> {
    if raw.trim().is_empty() {
        anyhow::bail!("YAML content is empty");
    }
    Ok(serde_yaml::from_str(raw)?)
}

pub fn load_submission(path: &Path) -> Result<SubmissionDoc, SubmitError> {
    if !path.exists() {
        return Err(SubmitError::SubmissionNotFound(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path)
        .map_err(|e| SubmitError::FileState(format!("cannot read {}: {}", path.display(), e)))?;
    serde_yaml::from_str(&raw)
        .map_err(|e| SubmitError::FileState(format!("cannot parse {}: {}", path.display(), e)))
}

pub fn save_submission(path: &Path, doc: &SubmissionDoc) -> Result<(), SubmitError> {
    let raw = serde_yaml::to_string(doc)
        .map_err(|e| SubmitError::FileState(format!("cannot serialize submission: {}", e)))?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| SubmitError::FileState(format!("cannot create {}: {}", parent.display(), e)))?;
    }
    std::fs::write(path, raw)
        .map_err(|e| SubmitError::FileState(format!("cannot write {}: {}", path.display(), e)))
}
