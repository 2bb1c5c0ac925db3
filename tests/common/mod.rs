use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const VALID_SPEC_YAML: &str = r#""@context": https://schema.org
"@type": SoftwareApplication
"@id": https://github.com/acme/widget
identifier: acme/widget
name: Widget Service
description: A service that does widget things for widget people.
codeRepository: https://github.com/acme/widget
maintainer:
  - "@type": Person
    name: A. Maintainer
license: https://spdx.org/licenses/MIT.html
applicationCategory: DeveloperApplication
keywords:
  - widgets
programmingLanguage:
  - Rust
"#;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&work).expect("create work dir");
        Self {
            _tmp: tmp,
            home,
            work,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("regkit");
        cmd.env("HOME", &self.home);
        cmd
    }

    /// Write a specification YAML into the work dir, returning its path.
    pub fn write_spec(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work.join(name);
        fs::write(&path, content).expect("write spec fixture");
        path
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Like `run_json` but for commands expected to exit non-zero while
    /// still printing an envelope.
    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
