//! Heuristic project-directory scan: best-effort metadata suggestions for a
//! draft specification. Parse failures are warnings, never hard errors.

use crate::domain::models::AnalysisReport;
use serde_json::{json, Value};
use std::path::Path;

const COMMON_FILES: &[&str] = &[
    "pyproject.toml",
    "package.json",
    "Cargo.toml",
    "go.mod",
    "requirements.txt",
    "setup.py",
    "README.md",
    "LICENSE",
];

const LICENSE_FILES: &[&str] = &["LICENSE", "LICENSE.txt", "LICENSE.md"];

pub fn analyze_project(project_path: &Path) -> AnalysisReport {
    let mut report = AnalysisReport {
        project_path: project_path
            .canonicalize()
            .unwrap_or_else(|_| project_path.to_path_buf())
            .display()
            .to_string(),
        ..Default::default()
    };

    for file in COMMON_FILES {
        if project_path.join(file).exists() {
            report.detected_files.push(file.to_string());
        }
    }

    if project_path.join("pyproject.toml").exists() {
        scrape_pyproject(project_path, &mut report);
    } else if project_path.join("Cargo.toml").exists() {
        scrape_cargo_manifest(project_path, &mut report);
    }

    if report.suggested_metadata.get("description").is_none() {
        if let Some(desc) = readme_first_paragraph(project_path) {
            report
                .suggested_metadata
                .insert("description".to_string(), json!(desc));
        }
    }

    if LICENSE_FILES
        .iter()
        .any(|f| project_path.join(f).exists())
    {
        report
            .suggested_metadata
            .insert("has_license_file".to_string(), json!(true));
    }

    if report.suggested_metadata.get("identifier").is_none() {
        report.recommendations.push(
            "provide a GitHub repository URL to automatically extract the identifier".to_string(),
        );
    }
    if report.suggested_metadata.get("description").is_none() {
        report
            .recommendations
            .push("provide a description of your component".to_string());
    }
    if report.suggested_metadata.get("has_license_file").is_none() {
        report
            .recommendations
            .push("consider adding a LICENSE file to your project".to_string());
    }

    report
}

fn scrape_pyproject(project_path: &Path, report: &mut AnalysisReport) {
    let path = project_path.join("pyproject.toml");
    let raw = match std::fs::read_to_string(&path) {
        Ok(r) => r,
        Err(e) => {
            report
                .warnings
                .push(format!("could not read pyproject.toml: {e}"));
            return;
        }
    };
    let parsed: toml::Value = match toml::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            report
                .warnings
                .push(format!("could not parse pyproject.toml: {e}"));
            return;
        }
    };
    let Some(project) = parsed.get("project") else {
        return;
    };

    insert_str(report, "name", project.get("name"));
    insert_str(report, "description", project.get("description"));
    if let Some(keywords) = project.get("keywords").and_then(|k| k.as_array()) {
        let kw: Vec<Value> = keywords
            .iter()
            .filter_map(|k| k.as_str().map(|s| json!(s)))
            .collect();
        if !kw.is_empty() {
            report
                .suggested_metadata
                .insert("keywords".to_string(), Value::Array(kw));
        }
    }
    report
        .suggested_metadata
        .insert("programmingLanguage".to_string(), json!(["Python"]));

    let homepage = project
        .get("urls")
        .and_then(|u| u.get("Homepage"))
        .and_then(|h| h.as_str());
    if let Some(url) = homepage {
        suggest_repository(report, url);
    }
}

fn scrape_cargo_manifest(project_path: &Path, report: &mut AnalysisReport) {
    let path = project_path.join("Cargo.toml");
    let raw = match std::fs::read_to_string(&path) {
        Ok(r) => r,
        Err(e) => {
            report
                .warnings
                .push(format!("could not read Cargo.toml: {e}"));
            return;
        }
    };
    let parsed: toml::Value = match toml::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            report
                .warnings
                .push(format!("could not parse Cargo.toml: {e}"));
            return;
        }
    };
    let Some(package) = parsed.get("package") else {
        return;
    };

    insert_str(report, "name", package.get("name"));
    insert_str(report, "description", package.get("description"));
    if let Some(keywords) = package.get("keywords").and_then(|k| k.as_array()) {
        let kw: Vec<Value> = keywords
            .iter()
            .filter_map(|k| k.as_str().map(|s| json!(s)))
            .collect();
        if !kw.is_empty() {
            report
                .suggested_metadata
                .insert("keywords".to_string(), Value::Array(kw));
        }
    }
    report
        .suggested_metadata
        .insert("programmingLanguage".to_string(), json!(["Rust"]));

    if let Some(repo) = package.get("repository").and_then(|r| r.as_str()) {
        suggest_repository(report, repo);
    }
}

fn insert_str(report: &mut AnalysisReport, key: &str, value: Option<&toml::Value>) {
    if let Some(s) = value.and_then(|v| v.as_str()) {
        if !s.is_empty() {
            report
                .suggested_metadata
                .insert(key.to_string(), json!(s));
        }
    }
}

fn suggest_repository(report: &mut AnalysisReport, url: &str) {
    if !url.contains("github.com") {
        return;
    }
    report
        .suggested_metadata
        .insert("codeRepository".to_string(), json!(url));
    if let Some(identifier) = github_identifier(url) {
        report
            .suggested_metadata
            .insert("identifier".to_string(), json!(identifier));
    }
}

fn github_identifier(url: &str) -> Option<String> {
    let rest = url.split("github.com/").nth(1)?;
    let mut parts = rest.split('/');
    let owner = parts.next().filter(|s| !s.is_empty())?;
    let repo = parts
        .next()
        .map(|r| r.trim_end_matches(".git"))
        .filter(|s| !s.is_empty())?;
    Some(format!("{owner}/{repo}"))
}

fn readme_first_paragraph(project_path: &Path) -> Option<String> {
    let raw = std::fs::read_to_string(project_path.join("README.md")).ok()?;
    let mut lines = Vec::new();
    for line in raw.lines() {
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            lines.push(trimmed.to_string());
        } else if !lines.is_empty() {
            break;
        }
    }
    if lines.is_empty() {
        return None;
    }
    lines.truncate(3);
    Some(lines.join(" "))
}
