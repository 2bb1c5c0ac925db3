mod common;

use common::{TestEnv, VALID_SPEC_YAML};
use serde_json::Value;
use std::fs;

// Endpoint that refuses connections immediately; keeps network tests offline.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:1/submit";

#[test]
fn validate_reports_valid_spec() {
    let env = TestEnv::new();
    let spec = env.write_spec("spec.yaml", VALID_SPEC_YAML);

    let out = env.run_json(&["validate", spec.to_str().unwrap()]);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"]["valid"], true);
    assert_eq!(out["data"]["errors"].as_array().unwrap().len(), 0);
}

#[test]
fn validate_itemizes_errors_and_fails() {
    let env = TestEnv::new();
    let spec = env.write_spec(
        "bad.yaml",
        "identifier: not-a-pair\nname: X\ndescription: short\n",
    );

    let out = env.run_json_failure(&["validate", spec.to_str().unwrap()]);
    assert_eq!(out["ok"], false);
    let errors = out["data"]["errors"].as_array().unwrap();
    assert!(errors.len() >= 3, "expected several errors: {errors:?}");
    assert!(errors
        .iter()
        .any(|e| e.as_str().unwrap().contains("owner/repository")));
}

#[test]
fn submit_writes_unconfirmed_file_and_asks_for_review() {
    let env = TestEnv::new();
    let spec = env.write_spec("spec.yaml", VALID_SPEC_YAML);

    let out = env.run_json(&[
        "submit",
        spec.to_str().unwrap(),
        "--project-dir",
        env.work.to_str().unwrap(),
    ]);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"]["success"], false);
    assert_eq!(out["data"]["requires_confirmation"], true);
    assert_eq!(out["data"]["submission_preview"]["identifier"], "acme/widget");

    let yaml_file = out["data"]["yaml_file"].as_str().unwrap();
    assert!(yaml_file.ends_with("acme__widget.meta.yaml"));
    let written = fs::read_to_string(yaml_file).expect("submission file written");
    assert!(written.contains("user_confirmed: false"));
}

#[test]
fn submit_rejects_invalid_spec_without_writing() {
    let env = TestEnv::new();
    let spec = env.write_spec("bad.yaml", "identifier: acme/widget\nname: X\n");

    let err = env.run_json_failure(&[
        "submit",
        spec.to_str().unwrap(),
        "--project-dir",
        env.work.to_str().unwrap(),
    ]);
    assert_eq!(err["ok"], false);
    assert_eq!(err["error"]["code"], "VALIDATION_ERROR");
    assert!(!env.work.join("acme__widget.meta.yaml").exists());

    // The envelope carries the itemized report, not just a joined message.
    let errors = err["data"]["errors"].as_array().unwrap();
    assert!(errors
        .iter()
        .any(|e| e.as_str().unwrap().contains("description")));
    assert!(err["data"]["warnings"].is_array());
    assert!(err["data"]["suggestions"].is_array());
}

#[test]
fn confirm_on_invalidated_file_reports_itemized_errors() {
    let env = TestEnv::new();
    let spec = env.write_spec("spec.yaml", VALID_SPEC_YAML);
    let created = env.run_json(&[
        "submit",
        spec.to_str().unwrap(),
        "--project-dir",
        env.work.to_str().unwrap(),
    ]);
    let yaml_file = created["data"]["yaml_file"].as_str().unwrap().to_string();

    let raw = fs::read_to_string(&yaml_file).unwrap();
    fs::write(
        &yaml_file,
        raw.replace("identifier: acme/widget", "identifier: broken"),
    )
    .unwrap();

    let err = env.run_json_failure(&["confirm", &yaml_file]);
    assert_eq!(err["error"]["code"], "VALIDATION_ERROR");
    let errors = err["data"]["errors"].as_array().unwrap();
    assert!(errors
        .iter()
        .any(|e| e.as_str().unwrap().contains("owner/repository")));
}

#[test]
fn confirm_on_missing_file_reports_not_found() {
    let env = TestEnv::new();
    let missing = env.work.join("nope.meta.yaml");

    let err = env.run_json_failure(&["confirm", missing.to_str().unwrap()]);
    assert_eq!(err["ok"], false);
    assert_eq!(err["error"]["code"], "FILE_NOT_FOUND");
}

#[test]
fn confirm_flips_flag_even_when_registry_is_unreachable() {
    let env = TestEnv::new();
    let spec = env.write_spec("spec.yaml", VALID_SPEC_YAML);
    let created = env.run_json(&[
        "submit",
        spec.to_str().unwrap(),
        "--project-dir",
        env.work.to_str().unwrap(),
    ]);
    let yaml_file = created["data"]["yaml_file"].as_str().unwrap().to_string();

    let err = env.run_json_failure(&[
        "--endpoint",
        DEAD_ENDPOINT,
        "confirm",
        &yaml_file,
    ]);
    assert_eq!(err["ok"], false);
    assert_eq!(err["error"]["code"], "REGISTRY_ERROR");

    // The confirmation itself persisted; only the network step failed.
    let status = env.run_json(&["status", &yaml_file]);
    assert_eq!(status["ok"], true);
    assert_eq!(status["data"]["user_confirmed"], true);
    assert_eq!(status["data"]["ready_for_submission"], true);
}

#[test]
fn status_on_missing_file_is_a_report_not_an_error() {
    let env = TestEnv::new();
    let missing = env.work.join("absent.meta.yaml");

    let out = env.run_json(&["status", missing.to_str().unwrap()]);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"]["file_exists"], false);
    assert_eq!(out["data"]["ready_for_submission"], false);
}

#[test]
fn status_reflects_edits_made_after_confirmation() {
    let env = TestEnv::new();
    let spec = env.write_spec("spec.yaml", VALID_SPEC_YAML);
    let created = env.run_json(&[
        "submit",
        spec.to_str().unwrap(),
        "--project-dir",
        env.work.to_str().unwrap(),
    ]);
    let yaml_file = created["data"]["yaml_file"].as_str().unwrap().to_string();

    // Hand-edit the file into an invalid state with the flag set.
    let raw = fs::read_to_string(&yaml_file).unwrap();
    let broken = raw
        .replace("user_confirmed: false", "user_confirmed: true")
        .replace("identifier: acme/widget", "identifier: broken");
    fs::write(&yaml_file, broken).unwrap();

    let status = env.run_json(&["status", &yaml_file]);
    assert_eq!(status["data"]["user_confirmed"], true);
    assert_eq!(status["data"]["ready_for_submission"], false);
    assert_eq!(status["data"]["validation"]["valid"], false);
}

#[test]
fn analyze_suggests_metadata_from_manifest() {
    let env = TestEnv::new();
    fs::write(
        env.work.join("Cargo.toml"),
        r#"[package]
name = "widget"
description = "A widget service for widget people"
repository = "https://github.com/acme/widget"
"#,
    )
    .unwrap();

    let out = env.run_json(&["analyze", env.work.to_str().unwrap()]);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"]["suggested_metadata"]["identifier"], "acme/widget");
    assert!(out["data"]["detected_files"]
        .as_array()
        .unwrap()
        .iter()
        .any(|f| f == "Cargo.toml"));
}

#[test]
fn template_output_round_trips_through_validate() {
    let env = TestEnv::new();
    let metadata = env.work.join("meta.json");
    fs::write(
        &metadata,
        serde_json::json!({
            "identifier": "acme/widget",
            "name": "Widget Service",
            "description": "A service that does widget things for widget people.",
            "codeRepository": "https://github.com/acme/widget",
            "license": "https://spdx.org/licenses/MIT.html",
            "applicationCategory": "DeveloperApplication",
            "keywords": ["widgets"],
            "programmingLanguage": ["Rust"],
            "maintainer": [{"name": "A. Maintainer"}]
        })
        .to_string(),
    )
    .unwrap();

    let out = env.run_json(&["template", "--metadata", metadata.to_str().unwrap()]);
    assert_eq!(out["ok"], true);
    let yaml = out["data"]["yaml_content"].as_str().unwrap();
    assert!(yaml.contains("SoftwareApplication"));

    let generated = env.write_spec("generated.yaml", yaml);
    let check = env.run_json(&["validate", generated.to_str().unwrap()]);
    assert_eq!(check["data"]["valid"], true);
}

#[test]
fn endpoint_config_file_is_honored() {
    let env = TestEnv::new();
    let config_dir = env.home.join(".config/regkit");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!("[registry]\nendpoint = \"{DEAD_ENDPOINT}\"\n"),
    )
    .unwrap();

    let spec = env.write_spec("spec.yaml", VALID_SPEC_YAML);
    let created = env.run_json(&[
        "submit",
        spec.to_str().unwrap(),
        "--project-dir",
        env.work.to_str().unwrap(),
    ]);
    let yaml_file = created["data"]["yaml_file"].as_str().unwrap().to_string();

    // No --endpoint flag: the config file routes the call to the dead port.
    let err = env.run_json_failure(&["confirm", &yaml_file]);
    assert_eq!(err["error"]["code"], "REGISTRY_ERROR");
}

#[test]
fn audit_log_records_submission_lifecycle() {
    let env = TestEnv::new();
    let spec = env.write_spec("spec.yaml", VALID_SPEC_YAML);
    env.run_json(&[
        "submit",
        spec.to_str().unwrap(),
        "--project-dir",
        env.work.to_str().unwrap(),
    ]);

    let log = fs::read_to_string(env.home.join(".config/regkit/audit.jsonl"))
        .expect("audit log written");
    let first: Value = serde_json::from_str(log.lines().next().unwrap()).unwrap();
    assert_eq!(first["action"], "create");
    assert_eq!(first["data"]["identifier"], "acme/widget");
}
