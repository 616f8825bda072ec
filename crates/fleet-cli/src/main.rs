//! Fleet CLI - command-line interface for the fleet registry
//!
//! Usage:
//!   fleet                 - Start an interactive session
//!   fleet demo            - Run the scripted demo scenario
//!   fleet run <file>      - Execute fleet commands from a script file

use clap::{Parser, Subcommand};

use fleet_cli::commands::{DemoCommand, RunCommand};
use fleet_cli::interactive::InteractiveCli;

#[derive(Parser)]
#[command(name = "fleet")]
#[command(about = "Rocket fleet registry - assignments, statuses, reports")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output lookups as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted demo scenario
    Demo(DemoCommand),
    /// Execute fleet commands from a script file
    Run(RunCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo(cmd)) => cmd.run(),
        Some(Commands::Run(cmd)) => cmd.run(cli.json),
        None => {
            // No subcommand - start interactive mode
            let mut interactive = InteractiveCli::new(cli.json);
            interactive.run()
        }
    }
}
