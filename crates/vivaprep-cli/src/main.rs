//! vivaprep CLI — the terminal presentation shell.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use vivaprep_core::bank::{DEFAULT_HR_COUNT, DEFAULT_TECH_COUNT};

mod commands;

#[derive(Parser)]
#[command(
    name = "vivaprep",
    version,
    about = "Self-administered interview practice with keyword scoring"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interview session
    Run {
        /// Number of technical questions
        #[arg(long, default_value_t = DEFAULT_TECH_COUNT)]
        tech: usize,

        /// Number of HR questions
        #[arg(long, default_value_t = DEFAULT_HR_COUNT)]
        hr: usize,

        /// Path to a TOML question catalog (defaults to the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Seed for reproducible question sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Write the summary report as JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the questions in the catalog
    Questions {
        /// Path to a TOML question catalog (defaults to the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Validate a TOML question catalog
    Validate {
        /// Path to the catalog file
        #[arg(long)]
        catalog: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vivaprep_cli=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            tech,
            hr,
            catalog,
            seed,
            output,
        } => commands::run::execute(tech, hr, catalog, seed, output),
        Commands::Questions { catalog } => commands::questions::execute(catalog),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
