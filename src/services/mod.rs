//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `validator.rs` — submission rule checks, itemized reports.
//! - `submission.rs` — create/confirm/submit/status over the submission file.
//! - `client.rs` — HTTP registry client behind the `Registry` trait.
//! - `analyze.rs` — project directory scan and metadata suggestions.
//! - `template.rs` — YAML specification drafts from a metadata map.
//! - `guidance.rs` — embedded workflow/examples/troubleshooting/field help.
//! - `storage.rs` — config loading, endpoint resolution, audit log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod analyze;
pub mod client;
pub mod guidance;
pub mod output;
pub mod storage;
pub mod submission;
pub mod template;
pub mod validator;
