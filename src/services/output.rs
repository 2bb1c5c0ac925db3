use crate::domain::models::JsonOut;
use serde::Serialize;

/// Print one report: pretty envelope under `--json`, the rendered row
/// otherwise. Rendering is the caller's business.
pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Free-form payloads (guidance, schema) print as pretty JSON either way;
/// `--json` only adds the envelope.
pub fn print_value(json: bool, data: serde_json::Value) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", serde_json::to_string_pretty(&data)?);
    }
    Ok(())
}
