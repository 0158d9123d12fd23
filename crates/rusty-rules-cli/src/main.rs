mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rusty-rules")]
#[command(version, about = "Check field values against rusty-rules form schemas", long_about = None)]
struct Cli {
    /// Log more detail (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON object of field values against a form
    Check {
        /// Config file declaring the forms
        #[arg(short, long, default_value = "rusty-rules.toml")]
        config: PathBuf,

        /// Form name under [forms.<name>]
        #[arg(short, long)]
        form: String,

        /// JSON file with field values (use - for stdin)
        #[arg(long)]
        values: PathBuf,

        /// Print errors as a JSON object
        #[arg(long)]
        json: bool,
    },

    /// List the rule names usable in a schema
    #[command(name = "list-rules")]
    ListRules,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Execute command
    let outcome = match cli.command {
        Commands::Check {
            config,
            form,
            values,
            json,
        } => commands::check::execute(&config, &form, &values, json),
        Commands::ListRules => commands::list_rules::execute().map(|()| true),
    };

    if let Err(err) = &outcome {
        eprintln!("{} {:#}", "error:".red().bold(), err);
    }
    ExitCode::from(exit_status(&outcome))
}

/// 0 when every field passed, 1 when any field failed, 2 on config or input errors
fn exit_status(outcome: &anyhow::Result<bool>) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}
