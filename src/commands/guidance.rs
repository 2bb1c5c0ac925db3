use crate::cli::{Cli, Commands, GuideCommands};
use crate::registry;
use crate::services::guidance;
use crate::services::output::print_value;

/// Handles the read-only guidance tree. Returns `Ok(false)` when the command
/// belongs to the runtime handler instead.
pub fn handle_guidance_commands(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Schema => {
            print_value(cli.json, registry::schema_document()?)?;
        }
        Commands::Guide { command } => match command {
            GuideCommands::Workflow => print_value(cli.json, guidance::workflow())?,
            GuideCommands::Examples => print_value(cli.json, guidance::examples())?,
            GuideCommands::Troubleshooting => {
                print_value(cli.json, guidance::troubleshooting())?
            }
            GuideCommands::Field { name } => print_value(cli.json, guidance::field(name)?)?,
        },
        _ => return Ok(false),
    }
    Ok(true)
}
