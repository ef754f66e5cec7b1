//! scorecast CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "scorecast", version, about = "Student exam score predictor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the model status and the features it expects
    Schema {
        /// Model artifact path (overrides config)
        #[arg(long)]
        model: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the input form derived from the model
    Form {
        /// Model artifact path (overrides config)
        #[arg(long)]
        model: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the form as an HTML page
        #[arg(long)]
        html: Option<PathBuf>,

        /// Print the form fields as JSON
        #[arg(long)]
        json: bool,
    },

    /// Predict an exam score
    Predict {
        /// Model artifact path (overrides config)
        #[arg(long)]
        model: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Feature value as NAME=VALUE (repeatable)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        sets: Vec<String>,

        /// JSON file mapping feature names to values
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output format: text, json, html
        #[arg(long)]
        format: Option<String>,

        /// Write the result to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Save a JSON report into the configured output directory
        #[arg(long)]
        save: bool,
    },

    /// Create starter config and sample model
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scorecast=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Schema { model, config } => commands::schema::execute(model, config),
        Commands::Form {
            model,
            config,
            html,
            json,
        } => commands::form::execute(model, config, html, json),
        Commands::Predict {
            model,
            config,
            sets,
            input,
            format,
            output,
            save,
        } => commands::predict::execute(model, config, sets, input, format, output, save),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
