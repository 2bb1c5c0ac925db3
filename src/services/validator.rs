use crate::domain::constants::{
    ALLOWED_REPOSITORY_HOSTS, APPLICATION_CATEGORIES, MAX_KEYWORDS, SPDX_LICENSE_BASE,
};
use crate::domain::models::ValidationReport;
use crate::registry::{self, Specification};
use url::Url;

/// Check a specification against the registry rules. Pure: no side effects,
/// every violated rule contributes its own error so the caller sees the full
/// picture in one pass instead of fixing fields one at a time.
pub fn validate(spec: &Specification) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    match spec.identifier.as_deref() {
        None => errors.push("missing required field: identifier".to_string()),
        Some(id) if !identifier_is_wellformed(id) => {
            errors.push("identifier must be in format 'owner/repository'".to_string());
        }
        Some(_) => {}
    }

    match spec.name.as_deref() {
        None => errors.push("missing required field: name".to_string()),
        Some(name) => {
            let len = name.chars().count();
            if !(1..=100).contains(&len) {
                errors.push("name must be 1-100 characters".to_string());
            }
        }
    }

    match spec.description.as_deref() {
        None => errors.push("missing required field: description".to_string()),
        Some(desc) => {
            let len = desc.chars().count();
            if !(10..=1000).contains(&len) {
                errors.push("description must be 10-1000 characters".to_string());
            }
        }
    }

    match spec.code_repository.as_deref() {
        None => errors.push("missing required field: codeRepository".to_string()),
        Some(repo) if !repository_host_is_allowed(repo) => {
            errors.push(format!(
                "codeRepository must be an https URL on a supported platform ({})",
                ALLOWED_REPOSITORY_HOSTS.join(", ")
            ));
        }
        Some(_) => {}
    }

    match spec.license.as_deref() {
        None => errors.push("missing required field: license".to_string()),
        Some(license) if !license_is_spdx(license) => {
            errors.push(
                "license must use SPDX format (https://spdx.org/licenses/<ID>.html)".to_string(),
            );
        }
        Some(_) => {}
    }

    match spec.application_category.as_deref() {
        None => errors.push("missing required field: applicationCategory".to_string()),
        Some(category) if !APPLICATION_CATEGORIES.contains(&category) => {
            errors.push(format!(
                "applicationCategory must be one of: {}",
                APPLICATION_CATEGORIES.join(", ")
            ));
        }
        Some(_) => {}
    }

    if spec.keywords.is_empty() || spec.keywords.len() > MAX_KEYWORDS {
        errors.push(format!("keywords must contain 1-{} entries", MAX_KEYWORDS));
    } else if spec.keywords.iter().any(|k| k.trim().is_empty()) {
        errors.push("keywords must not contain empty entries".to_string());
    }

    if spec.maintainer.is_empty() {
        errors.push("maintainer must contain at least one entry".to_string());
    } else if spec
        .maintainer
        .iter()
        .any(|m| m.name.as_deref().map(str::trim).unwrap_or("").is_empty())
    {
        errors.push("maintainer entries must include a non-empty name".to_string());
    }

    if spec.programming_language.is_empty() {
        errors.push("programmingLanguage must contain at least one entry".to_string());
    }

    if spec.software_help.is_none() {
        warnings.push("consider adding 'softwareHelp' with a documentation URL".to_string());
    }
    if spec.url.is_none() {
        warnings
            .push("consider adding a 'url' field if the component is remotely hosted".to_string());
    }
    if spec.feature_list.is_empty() {
        suggestions.push("consider adding 'featureList' to describe capabilities".to_string());
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
        warnings,
        suggestions,
    }
}

/// Validate raw YAML content; parse failures become itemized errors instead
/// of aborting the call.
pub fn validate_content(raw: &str) -> ValidationReport {
    match registry::parse_spec(raw) {
        Ok(spec) => validate(&spec),
        Err(e) => ValidationReport {
            valid: false,
            errors: vec![format!("YAML parsing error: {e}")],
            warnings: vec![],
            suggestions: vec![],
        },
    }
}

fn identifier_is_wellformed(id: &str) -> bool {
    let Some((owner, repo)) = id.split_once('/') else {
        return false;
    };
    !owner.is_empty()
        && !repo.is_empty()
        && !repo.contains('/')
        && owner.chars().all(identifier_char)
        && repo.chars().all(identifier_char)
}

fn identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

fn repository_host_is_allowed(repo: &str) -> bool {
    let Ok(parsed) = Url::parse(repo) else {
        return false;
    };
    parsed.scheme() == "https"
        && parsed
            .host_str()
            .map(|h| ALLOWED_REPOSITORY_HOSTS.contains(&h))
            .unwrap_or(false)
}

fn license_is_spdx(license: &str) -> bool {
    let Some(rest) = license.strip_prefix(SPDX_LICENSE_BASE) else {
        return false;
    };
    let Some(id) = rest.strip_suffix(".html") else {
        return false;
    };
    !id.is_empty() && !id.contains('/')
}
