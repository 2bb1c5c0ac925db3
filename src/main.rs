use clap::Parser;

mod cli;
mod commands;
mod domain;
mod registry;
mod services;

use cli::Cli;
use domain::models::{ErrorBody, ErrorOut};
use registry::SubmitError;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        emit_error(cli.json, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if commands::handle_guidance_commands(cli)? {
        return Ok(());
    }
    commands::handle_runtime_commands(cli)
}

/// Failures print a stable envelope on stdout under `--json` so callers can
/// branch on `error.code`; plain text goes to stderr otherwise. Validation
/// failures carry the full itemized report, not just the joined message.
fn emit_error(json: bool, err: &anyhow::Error) {
    let submit_err = err.downcast_ref::<SubmitError>();
    let code = submit_err.map(SubmitError::code).unwrap_or("INTERNAL");
    let report = match submit_err {
        Some(SubmitError::ValidationFailed(report)) => Some(report.clone()),
        _ => None,
    };
    if json {
        let out = ErrorOut {
            ok: false,
            error: ErrorBody {
                code: code.to_string(),
                message: format!("{err:#}"),
            },
            data: report,
        };
        match serde_json::to_string_pretty(&out) {
            Ok(s) => println!("{s}"),
            Err(_) => println!("{{\"ok\":false}}"),
        }
    } else {
        eprintln!("error[{code}]: {err:#}");
        if let Some(report) = report {
            for w in &report.warnings {
                eprintln!("warning: {w}");
            }
            for s in &report.suggestions {
                eprintln!("suggestion: {s}");
            }
        }
    }
}
