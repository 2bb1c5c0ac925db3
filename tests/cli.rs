mod common;

use common::{TestEnv, VALID_SPEC_YAML};
use predicates::str::contains;

#[test]
fn validate_text_mode() {
    let env = TestEnv::new();
    let spec = env.write_spec("spec.yaml", VALID_SPEC_YAML);
    env.cmd()
        .args(["validate", spec.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("valid"));
}

#[test]
fn schema_prints_registry_title() {
    let env = TestEnv::new();
    env.cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(contains("BioContextAI Registry"));
}

#[test]
fn guide_field_unknown_name_fails_with_field_list() {
    let env = TestEnv::new();
    env.cmd()
        .args(["guide", "field", "nope"])
        .assert()
        .failure()
        .stderr(contains("unknown field 'nope'"));
}
