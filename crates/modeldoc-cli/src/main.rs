use anyhow::Result;
use clap::{Parser, Subcommand};
use modeldoc_config::DocFormat;

mod commands;
mod logging;
use commands::{cmd_init, cmd_list, cmd_model_to_doc};

/// modeldoc command-line interface.
#[derive(Parser, Debug)]
#[command(name = "modeldoc", author, version, about)]
struct Cli {
    /// Print debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the database design document for the given apps (all when none).
    #[command(name = "model_to_doc")]
    ModelToDoc {
        apps: Vec<String>,
        /// Output format; asked interactively when omitted.
        #[arg(short, long, value_enum)]
        format: Option<DocFormat>,
    },
    /// List apps, their models and field counts.
    List { apps: Vec<String> },
    /// Initialize modeldoc.json with defaults.
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match cli.command {
        Commands::ModelToDoc { apps, format } => cmd_model_to_doc(apps, format),
        Commands::List { apps } => cmd_list(apps),
        Commands::Init => cmd_init(),
    }
}
