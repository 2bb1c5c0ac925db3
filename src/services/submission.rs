//! Two-phase submission lifecycle: stage a file, require an explicit confirm,
//! only then call the registry. The file on disk is the durable state; every
//! transition re-validates the stored specification instead of trusting a
//! cached result, so hand-edited files are caught at the next operation.

use crate::domain::models::{
    CreateReport, StatusReport, SubmissionOutcome, SubmissionPreview, ValidationReport,
};
use crate::registry::{self, Specification, SubmissionDoc, SubmitError};
use crate::services::client::Registry;
use crate::services::storage::audit;
use crate::services::validator;
use std::path::{Path, PathBuf};

/// Deterministic per-identifier path. Both segments of `owner/repository`
/// land in the file name, so distinct components sharing a directory cannot
/// overwrite each other's pending submission.
pub fn submission_file_path(project_dir: &Path, identifier: &str) -> PathBuf {
    project_dir.join(format!("{}.meta.yaml", identifier.replace('/', "__")))
}

/// Stage a validated specification as a pending submission file. Validation
/// failure means no file is written at all. No network call happens here.
pub fn create(spec: &Specification, project_dir: &Path) -> Result<CreateReport, SubmitError> {
    let validation = validator::validate(spec);
    if !validation.valid {
        return Err(SubmitError::ValidationFailed(validation));
    }

    let identifier = spec.identifier.clone().unwrap_or_default();
    let name = spec.name.clone().unwrap_or_default();
    let code_repository = spec.code_repository.clone().unwrap_or_default();

    let path = submission_file_path(project_dir, &identifier);
    let doc = SubmissionDoc {
        spec: spec.clone(),
        user_confirmed: false,
    };
    registry::save_submission(&path, &doc)?;
    audit(
        "create",
        serde_json::json!({"identifier": identifier, "file": path.display().to_string()}),
    );

    let confirmation_message = format!(
        "Staged submission for {} ({}, {}).\nReview {} and run `regkit confirm {}` to send it to the registry.",
        identifier,
        name,
        code_repository,
        path.display(),
        path.display()
    );

    Ok(CreateReport {
        success: false,
        requires_confirmation: true,
        yaml_file: path.display().to_string(),
        confirmation_message,
        submission_preview: SubmissionPreview {
            identifier,
            name,
            code_repository,
        },
        validation,
    })
}

/// Flip the durable confirmation flag. The stored specification is
/// re-validated first: the file may have been hand-edited since `create`.
pub fn confirm(path: &Path) -> Result<SubmissionDoc, SubmitError> {
    let mut doc = registry::load_submission(path)?;
    let validation = validator::validate(&doc.spec);
    if !validation.valid {
        return Err(SubmitError::ValidationFailed(validation));
    }
    doc.user_confirmed = true;
    registry::save_submission(path, &doc)?;
    audit(
        "confirm",
        serde_json::json!({"file": path.display().to_string()}),
    );
    Ok(doc)
}

/// Send a confirmed submission to the registry. The confirmation gate is
/// checked before anything else and is unconditional. On registry or network
/// failure the file stays confirmed on disk so the caller can retry.
pub fn submit(path: &Path, client: &dyn Registry) -> Result<SubmissionOutcome, SubmitError> {
    let doc = registry::load_submission(path)?;
    if !doc.user_confirmed {
        return Err(SubmitError::ConfirmationRequired(path.to_path_buf()));
    }
    let validation = validator::validate(&doc.spec);
    if !validation.valid {
        return Err(SubmitError::ValidationFailed(validation));
    }
    let outcome = client.submit(&doc.spec)?;
    audit(
        "submit",
        serde_json::json!({
            "file": path.display().to_string(),
            "success": outcome.success,
            "submission_id": outcome.submission_id,
        }),
    );
    Ok(outcome)
}

/// Pure read of a submission file's state. Validation is recomputed live;
/// a previously confirmed file that was edited into an invalid state reports
/// `ready_for_submission: false`.
pub fn status(path: &Path) -> StatusReport {
    let file_path = path.display().to_string();
    if !path.exists() {
        return StatusReport {
            file_exists: false,
            file_path,
            identifier: None,
            name: None,
            user_confirmed: false,
            ready_for_submission: false,
            validation: ValidationReport::default(),
        };
    }

    match registry::load_submission(path) {
        Ok(doc) => {
            let validation = validator::validate(&doc.spec);
            StatusReport {
                file_exists: true,
                file_path,
                identifier: doc.spec.identifier.clone(),
                name: doc.spec.name.clone(),
                user_confirmed: doc.user_confirmed,
                ready_for_submission: doc.user_confirmed && validation.valid,
                validation,
            }
        }
        Err(e) => StatusReport {
            file_exists: true,
            file_path,
            identifier: None,
            name: None,
            user_confirmed: false,
            ready_for_submission: false,
            validation: ValidationReport {
                valid: false,
                errors: vec![e.to_string()],
                warnings: vec![],
                suggestions: vec![],
            },
        },
    }
}
