use std::path::PathBuf;

use clap::{Parser, Subcommand};
use faq_match::Result;
use faq_match::commands::{ask, interactive, show_config, show_status};

#[derive(Parser)]
#[command(name = "faq-match")]
#[command(about = "Match free-text questions against an authored Q&A corpus")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single question from the corpus
    Ask {
        /// The question to look up
        question: String,
        /// Minimum similarity in [0.0, 1.0]; defaults to the configured value
        #[arg(long)]
        threshold: Option<f32>,
        /// Override the configured corpus CSV path
        #[arg(long)]
        corpus: Option<PathBuf>,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start an interactive question session
    Interactive {
        /// Minimum similarity in [0.0, 1.0]; defaults to the configured value
        #[arg(long)]
        threshold: Option<f32>,
        /// Override the configured corpus CSV path
        #[arg(long)]
        corpus: Option<PathBuf>,
    },
    /// Show corpus and vocabulary statistics
    Status {
        /// Override the configured corpus CSV path
        #[arg(long)]
        corpus: Option<PathBuf>,
    },
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            question,
            threshold,
            corpus,
            json,
        } => {
            ask(&question, threshold, corpus.as_ref(), json)?;
        }
        Commands::Interactive { threshold, corpus } => {
            interactive(threshold, corpus.as_ref())?;
        }
        Commands::Status { corpus } => {
            show_status(corpus.as_ref())?;
        }
        Commands::Config => {
            show_config()?;
        }
    }

    Ok(())
}
