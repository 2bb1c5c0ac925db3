use crate::cli::{Cli, Commands};
use crate::domain::models::JsonOut;
use crate::services::client::HttpRegistryClient;
use crate::services::output::print_one;
use crate::services::{analyze, storage, submission, template, validator};
use anyhow::Context;
use std::io::Read;
use std::path::Path;

pub fn handle_runtime_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Analyze { project_path } => {
            let report = analyze::analyze_project(Path::new(project_path));
            print_one(cli.json, report, |r| {
                let mut lines = vec![format!("analyzed {}", r.project_path)];
                lines.push(format!("detected: {}", r.detected_files.join(", ")));
                for (key, value) in &r.suggested_metadata {
                    lines.push(format!("  {key}: {value}"));
                }
                for rec in &r.recommendations {
                    lines.push(format!("recommend: {rec}"));
                }
                lines.join("\n")
            })?;
        }
        Commands::Template { metadata } => {
            let raw = read_input(metadata)?;
            let parsed: serde_json::Value =
                serde_json::from_str(&raw).context("metadata file is not valid JSON")?;
            let yaml = template::generate_yaml(parsed)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: serde_json::json!({"yaml_content": yaml})
                    })?
                );
            } else {
                print!("{yaml}");
            }
        }
        Commands::Validate { file } => {
            let raw = read_input(file)?;
            let report = validator::validate_content(&raw);
            let valid = report.valid;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: valid,
                        data: report
                    })?
                );
            } else {
                if valid {
                    println!("valid");
                } else {
                    for e in &report.errors {
                        println!("error: {e}");
                    }
                }
                for w in &report.warnings {
                    println!("warning: {w}");
                }
                for s in &report.suggestions {
                    println!("suggestion: {s}");
                }
            }
            if !valid {
                std::process::exit(1);
            }
        }
        Commands::Submit { file, project_dir } => {
            let raw = std::fs::read_to_string(file)
                .with_context(|| format!("cannot read {file}"))?;
            let spec = crate::registry::parse_spec(&raw)?;
            let report = submission::create(&spec, Path::new(project_dir))?;
            print_one(cli.json, report, |r| {
                format!("{}\nwrote {}", r.confirmation_message, r.yaml_file)
            })?;
        }
        Commands::Confirm { yaml_file } => {
            let path = Path::new(yaml_file);
            submission::confirm(path)?;
            let config = storage::load_config()?;
            let endpoint = storage::resolve_endpoint(cli.endpoint.as_deref(), &config);
            let client = HttpRegistryClient::new(endpoint);
            let outcome = submission::submit(path, &client)?;
            let success = outcome.success;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: success,
                        data: outcome
                    })?
                );
            } else {
                println!("{}", outcome.message);
                for e in &outcome.errors {
                    println!("error: {e}");
                }
            }
            if !success {
                std::process::exit(1);
            }
        }
        Commands::Status { yaml_file } => {
            let report = submission::status(Path::new(yaml_file));
            print_one(cli.json, report, |r| {
                if !r.file_exists {
                    return format!("no submission file at {}", r.file_path);
                }
                format!(
                    "file: {}\nidentifier: {}\nconfirmed: {}\nready: {}",
                    r.file_path,
                    r.identifier.as_deref().unwrap_or("n/a"),
                    r.user_confirmed,
                    r.ready_for_submission
                )
            })?;
        }
        Commands::Schema | Commands::Guide { .. } => {
            unreachable!("handled by guidance commands")
        }
    }
    Ok(())
}

fn read_input(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("cannot read {source}"))
    }
}
