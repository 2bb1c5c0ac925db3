//! Turn a loose metadata map into a well-formed specification draft. The
//! output is valid YAML with schema.org framing filled in; whether it passes
//! validation depends on how much metadata the caller supplied.

use crate::registry::Specification;
use anyhow::Context;

const SCHEMA_CONTEXT: &str = "https://schema.org";
const SCHEMA_TYPE: &str = "SoftwareApplication";

pub fn generate_yaml(metadata: serde_json::Value) -> anyhow::Result<String> {
    anyhow::ensure!(metadata.is_object(), "metadata must be a JSON object");
    let mut spec: Specification =
        serde_json::from_value(metadata).context("metadata does not match the submission shape")?;

    spec.context = Some(SCHEMA_CONTEXT.to_string());
    spec.schema_type = Some(SCHEMA_TYPE.to_string());
    if spec.id.is_none() {
        if let Some(identifier) = &spec.identifier {
            spec.id = Some(format!("https://github.com/{identifier}"));
        }
    }

    if let Some(help) = &mut spec.software_help {
        help.kind.get_or_insert_with(|| "CreativeWork".to_string());
        help.name.get_or_insert_with(|| "Documentation".to_string());
    }
    for maintainer in &mut spec.maintainer {
        maintainer.kind.get_or_insert_with(|| "Person".to_string());
    }

    if spec.application_category.is_none() {
        spec.application_category = Some("HealthApplication".to_string());
    }
    if spec.operating_system.is_empty() {
        spec.operating_system = vec!["Cross-platform".to_string()];
    }

    serde_yaml::to_string(&spec).context("serializing specification template")
}
