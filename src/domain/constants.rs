//! Stable constants shared across services and command handlers.

pub const DEFAULT_API_ENDPOINT: &str = "https://api.biocontext.ai/registry/submit";

/// Hosting platforms accepted for `codeRepository`.
pub const ALLOWED_REPOSITORY_HOSTS: &[&str] =
    &["github.com", "gitlab.com", "bitbucket.org", "codeberg.org"];

pub const APPLICATION_CATEGORIES: &[&str] = &[
    "HealthApplication",
    "EducationApplication",
    "ReferenceApplication",
    "DeveloperApplication",
    "UtilitiesApplication",
];

pub const SPDX_LICENSE_BASE: &str = "https://spdx.org/licenses/";

pub const MAX_KEYWORDS: usize = 10;

pub const SUBMIT_TIMEOUT_MS: u64 = 30_000;
