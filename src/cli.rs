use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "regkit", version, about = "Registry submission assistant CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Registry endpoint URL (overrides the config file)"
    )]
    pub endpoint: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a project directory and suggest submission metadata
    Analyze {
        #[arg(default_value = ".")]
        project_path: String,
    },
    /// Generate a YAML specification draft from a metadata JSON file
    Template {
        #[arg(long, help = "Path to a metadata JSON file, or '-' for stdin")]
        metadata: String,
    },
    /// Validate a YAML specification against the registry rules
    Validate {
        #[arg(help = "Path to a YAML file, or '-' for stdin")]
        file: String,
    },
    /// Validate a specification and write the submission file for review
    Submit {
        #[arg(help = "Path to the YAML specification")]
        file: String,
        #[arg(long, default_value = ".")]
        project_dir: String,
    },
    /// Confirm a reviewed submission file and send it to the registry
    Confirm {
        yaml_file: String,
    },
    /// Report the lifecycle state of a submission file
    Status {
        yaml_file: String,
    },
    /// Print the registry JSON schema
    Schema,
    /// Guidance on the submission workflow and fields
    Guide {
        #[command(subcommand)]
        command: GuideCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum GuideCommands {
    Workflow,
    Examples,
    Troubleshooting,
    Field { name: String },
}
