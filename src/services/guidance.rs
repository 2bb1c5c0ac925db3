//! Static guidance payloads: workflow walkthrough, worked examples,
//! troubleshooting notes, and per-field help. All content is embedded; the
//! commands that serve it never touch the network or the filesystem.

use serde_json::{json, Value};

const FIELD_NAMES: &[&str] = &[
    "identifier",
    "name",
    "description",
    "codeRepository",
    "maintainer",
    "license",
    "applicationCategory",
    "keywords",
    "programmingLanguage",
];

pub fn workflow() -> Value {
    json!({
        "workflow_overview": {
            "name": "Registry Submission Workflow",
            "description": "End-to-end workflow for submitting a component to the registry",
            "estimated_time": "10-30 minutes",
            "prerequisites": [
                "component ready for submission",
                "public repository on a supported platform",
                "basic understanding of the component's functionality"
            ]
        },
        "workflow_steps": [
            {
                "step": 1,
                "name": "Project Analysis",
                "command": "regkit analyze",
                "description": "Scan the project directory to extract existing metadata",
                "outputs": ["detected configuration files", "suggested metadata fields"]
            },
            {
                "step": 2,
                "name": "Metadata Collection",
                "description": "Gather all required metadata for submission",
                "required_fields": [
                    "identifier", "name", "description", "codeRepository", "maintainer",
                    "license", "applicationCategory", "keywords", "programmingLanguage"
                ],
                "optional_fields": ["url", "softwareHelp", "featureList", "operatingSystem"]
            },
            {
                "step": 3,
                "name": "Template Generation",
                "command": "regkit template",
                "description": "Generate a schema.org-compatible YAML specification",
                "outputs": ["complete YAML specification draft"]
            },
            {
                "step": 4,
                "name": "Validation",
                "command": "regkit validate",
                "description": "Validate the specification against the registry rules",
                "outputs": ["itemized errors, warnings, and suggestions"]
            },
            {
                "step": 5,
                "name": "Confirmation and Submission",
                "command": "regkit submit, then regkit confirm",
                "description": "Write the submission file, review it, then confirm to send it",
                "outputs": ["submission file on disk", "registry submission result"]
            }
        ],
        "best_practices": [
            "use descriptive names that clearly indicate the component's purpose",
            "write comprehensive descriptions that explain functionality and use cases",
            "include relevant keywords to improve discoverability",
            "provide a documentation URL in softwareHelp",
            "use SPDX license identifiers",
            "keep metadata up to date with your project"
        ]
    })
}

pub fn examples() -> Value {
    json!({
        "developer_tool_example": {
            "name": "Knowledge Graph Toolkit",
            "description": "Developer-facing component maintained by an organization",
            "yaml_content": "\"@context\": https://schema.org\n\"@type\": SoftwareApplication\n\"@id\": https://github.com/acme/graph-toolkit\nidentifier: acme/graph-toolkit\nname: Knowledge Graph Toolkit\ndescription: >\n  Deterministic mapping of diverse inputs to harmonised knowledge graphs,\n  with implementation guidelines and structured documentation.\ncodeRepository: https://github.com/acme/graph-toolkit\nsoftwareHelp:\n  \"@type\": CreativeWork\n  url: https://acme.example/docs\n  name: Toolkit Documentation\nmaintainer:\n  - \"@type\": Organization\n    name: Acme\n    identifier: \"GitHub: acme\"\n    url: https://github.com/acme\nlicense: https://spdx.org/licenses/MIT.html\napplicationCategory: DeveloperApplication\nkeywords:\n  - Knowledge Graph\n  - Harmonisation\noperatingSystem:\n  - Cross-platform\nprogrammingLanguage:\n  - Python\nfeatureList:\n  - Pipeline Setup\n  - Adapter Design\n"
        },
        "health_tool_example": {
            "name": "Literature Search Service",
            "description": "Health-domain component maintained by an individual",
            "yaml_content": "\"@context\": https://schema.org\n\"@type\": SoftwareApplication\n\"@id\": https://github.com/janedoe/litsearch\nidentifier: janedoe/litsearch\nname: Literature Search Service\ndescription: >\n  Searches and retrieves biomedical literature, with advanced query support,\n  metadata extraction, and citation management.\ncodeRepository: https://github.com/janedoe/litsearch\nsoftwareHelp:\n  \"@type\": CreativeWork\n  url: https://github.com/janedoe/litsearch/blob/main/README.md\n  name: Litsearch Documentation\nmaintainer:\n  - \"@type\": Person\n    name: Jane Doe\n    identifier: \"GitHub: janedoe\"\n    url: https://github.com/janedoe\nlicense: https://spdx.org/licenses/Apache-2.0.html\napplicationCategory: HealthApplication\nkeywords:\n  - Biomedical Literature\n  - Search\n  - Citations\noperatingSystem:\n  - Cross-platform\nprogrammingLanguage:\n  - Python\nfeatureList:\n  - Search\n  - Citation Management\n"
        }
    })
}

pub fn troubleshooting() -> Value {
    json!({
        "validation_errors": {
            "invalid_identifier": {
                "error": "identifier must be in format 'owner/repository'",
                "solutions": [
                    "use format: 'your-username/your-repo-name'",
                    "only alphanumeric characters, hyphens, underscores, and dots",
                    "both owner and repository name must be present"
                ],
                "example_fix": {"wrong": "my-tool", "correct": "johndoe/my-tool"}
            },
            "missing_required_fields": {
                "error": "missing required fields",
                "solutions": [
                    "run `regkit validate` to get the full list of missing fields",
                    "ensure no required field is empty"
                ],
                "required_fields": FIELD_NAMES
            },
            "invalid_license_format": {
                "error": "license must use SPDX format",
                "solutions": [
                    "use https://spdx.org/licenses/<ID>.html",
                    "find your license at https://spdx.org/licenses/"
                ],
                "examples": {
                    "MIT": "https://spdx.org/licenses/MIT.html",
                    "Apache-2.0": "https://spdx.org/licenses/Apache-2.0.html",
                    "GPL-3.0": "https://spdx.org/licenses/GPL-3.0.html"
                }
            },
            "invalid_repository_url": {
                "error": "repository URL not supported",
                "solutions": [
                    "use an https URL on a supported platform",
                    "include the full repository path"
                ],
                "supported_platforms": [
                    "https://github.com/owner/repo",
                    "https://gitlab.com/owner/repo",
                    "https://bitbucket.org/owner/repo",
                    "https://codeberg.org/owner/repo"
                ]
            }
        },
        "submission_errors": {
            "confirmation_required": {
                "error": "submission not confirmed yet",
                "solutions": [
                    "review the generated .meta.yaml file",
                    "run `regkit confirm <file>` to confirm and submit"
                ]
            },
            "api_connection_failed": {
                "error": "failed to reach the registry endpoint",
                "solutions": [
                    "check network connectivity",
                    "verify the endpoint with --endpoint or the config file",
                    "retry later if the registry is down"
                ]
            },
            "duplicate_submission": {
                "error": "component already exists in the registry",
                "solutions": [
                    "use a unique identifier",
                    "check existing registry entries first"
                ]
            }
        },
        "common_warnings": {
            "missing_optional_fields": {
                "warning": "optional fields improve discoverability",
                "fields": ["url", "softwareHelp", "featureList"]
            },
            "generic_keywords": {
                "warning": "keywords may be too generic",
                "suggestion": "prefer domain-specific terms over 'tool' or 'api'"
            }
        }
    })
}

pub fn field(name: &str) -> anyhow::Result<Value> {
    let payload = match name {
        "identifier" => json!({
            "description": "unique identifier in format 'owner/repository'",
            "requirements": [
                "owner and repository separated by a single slash",
                "alphanumeric characters, hyphens, underscores, and dots",
                "must be unique across the registry"
            ],
            "examples": ["acme/graph-toolkit", "janedoe/litsearch"]
        }),
        "name" => json!({
            "description": "the display name of the component",
            "requirements": ["1-100 characters", "descriptive and clear"],
            "examples": ["Knowledge Graph Toolkit", "Literature Search Service"]
        }),
        "description" => json!({
            "description": "what the component does, for whom",
            "requirements": ["10-1000 characters", "explain functionality and use cases"],
            "tips": [
                "start with the main purpose",
                "mention key features and target users"
            ]
        }),
        "codeRepository" => json!({
            "description": "URL of the source code repository",
            "requirements": ["https URL", "supported platform", "full repository path"],
            "supported_platforms": ["github.com", "gitlab.com", "bitbucket.org", "codeberg.org"]
        }),
        "maintainer" => json!({
            "description": "the people or organizations maintaining the component",
            "requirements": ["at least one entry", "each entry needs @type and name"],
            "types": {
                "Person": {"@type": "Person", "name": "Jane Doe", "url": "https://github.com/janedoe"},
                "Organization": {"@type": "Organization", "name": "Acme", "url": "https://github.com/acme"}
            }
        }),
        "license" => json!({
            "description": "license as an SPDX reference URL",
            "requirements": ["format https://spdx.org/licenses/<ID>.html"],
            "common_licenses": {
                "MIT": "https://spdx.org/licenses/MIT.html",
                "Apache-2.0": "https://spdx.org/licenses/Apache-2.0.html",
                "GPL-3.0": "https://spdx.org/licenses/GPL-3.0.html",
                "BSD-3-Clause": "https://spdx.org/licenses/BSD-3-Clause.html"
            }
        }),
        "applicationCategory" => json!({
            "description": "type of software application",
            "options": [
                "HealthApplication", "EducationApplication", "ReferenceApplication",
                "DeveloperApplication", "UtilitiesApplication"
            ],
            "default": "HealthApplication"
        }),
        "keywords" => json!({
            "description": "tags for discoverability",
            "requirements": ["1-10 keywords", "no empty entries"],
            "tips": ["prefer specific, domain terms", "think about what users would search for"]
        }),
        "programmingLanguage" => json!({
            "description": "programming languages used in the component",
            "requirements": ["at least one entry"],
            "examples": [["Python"], ["Rust", "TypeScript"]]
        }),
        other => anyhow::bail!(
            "unknown field '{other}' (available: {})",
            FIELD_NAMES.join(", ")
        ),
    };
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::{examples, field, troubleshooting, workflow, FIELD_NAMES};

    #[test]
    fn workflow_lists_five_steps() {
        let steps = workflow()["workflow_steps"].as_array().cloned().unwrap();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0]["command"], "regkit analyze");
    }

    #[test]
    fn example_yaml_parses_and_validates() {
        let payload = examples();
        for (_, example) in payload.as_object().unwrap() {
            let yaml = example["yaml_content"].as_str().unwrap();
            let report = crate::services::validator::validate_content(yaml);
            assert!(report.valid, "example invalid: {:?}", report.errors);
        }
    }

    #[test]
    fn every_documented_field_has_guidance() {
        for name in FIELD_NAMES {
            assert!(field(name).is_ok(), "no guidance for {name}");
        }
    }

    #[test]
    fn unknown_field_lists_available_fields() {
        let err = field("nope").unwrap_err().to_string();
        assert!(err.contains("unknown field 'nope'"));
        assert!(err.contains("identifier"));
    }

    #[test]
    fn troubleshooting_covers_confirmation_gate() {
        let guide = troubleshooting();
        assert!(guide["submission_errors"]["confirmation_required"].is_object());
    }
}
