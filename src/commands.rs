use anyhow::{Context, Result};
use console::style;
use dialoguer::Input;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info};

use crate::config::{Config, get_config_dir};
use crate::corpus::Corpus;
use crate::matcher::{MatchOutcome, Matcher};

/// The built matcher is published exactly once per process and shared
/// read-only afterwards; repeated commands in-process reuse it rather than
/// re-reading the corpus.
static ENGINE: OnceLock<Matcher> = OnceLock::new();

fn engine(corpus_path: &Path) -> Result<&'static Matcher> {
    if let Some(matcher) = ENGINE.get() {
        debug!("Reusing already-built matcher");
        return Ok(matcher);
    }

    info!("Loading corpus from {}", corpus_path.display());
    let corpus = Corpus::load(corpus_path)?;
    let matcher = Matcher::build(corpus)?;

    // If another thread published first, its matcher wins; both were built
    // from the same corpus file
    Ok(ENGINE.get_or_init(|| matcher))
}

fn load_config() -> Result<Config> {
    let config_dir = get_config_dir().context("Failed to resolve config directory")?;
    Config::load(&config_dir)
}

fn resolve_corpus_path(config: &Config, corpus_override: Option<&PathBuf>) -> PathBuf {
    corpus_override.unwrap_or(&config.corpus_file).clone()
}

/// Answer a single question and exit
#[inline]
pub fn ask(
    question: &str,
    threshold: Option<f32>,
    corpus_override: Option<&PathBuf>,
    json: bool,
) -> Result<()> {
    let config = load_config()?;
    let matcher = engine(&resolve_corpus_path(&config, corpus_override))?;
    let threshold = threshold.unwrap_or(config.default_threshold);

    let outcome = matcher.find_match(question, threshold)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome).context("Failed to serialize outcome")?
        );
        return Ok(());
    }

    print_outcome(&outcome, &config.no_match_message);
    Ok(())
}

fn print_outcome(outcome: &MatchOutcome, no_match_message: &str) {
    match outcome {
        MatchOutcome::Match {
            question,
            answer,
            score,
            ..
        } => {
            println!("{} {}", style("Question:").bold(), style(question).cyan());
            println!("{} {}", style("Answer:").bold(), answer);
            println!("{} {:.2}", style("Similarity:").dim(), score);
        }
        MatchOutcome::NoMatch { .. } => {
            println!("{}", style(no_match_message).yellow());
        }
    }
}

/// Interactive question loop with a transient, in-memory transcript.
///
/// `history` shows the transcript so far, `reset` clears it, `quit` exits.
/// Nothing is persisted.
#[inline]
pub fn interactive(threshold: Option<f32>, corpus_override: Option<&PathBuf>) -> Result<()> {
    let config = load_config()?;
    let matcher = engine(&resolve_corpus_path(&config, corpus_override))?;
    let threshold = threshold.unwrap_or(config.default_threshold);

    eprintln!("{}", style("FAQ lookup").bold().cyan());
    eprintln!(
        "{} entries loaded; threshold {:.2}. Type 'history', 'reset' or 'quit'.",
        matcher.corpus().len(),
        threshold
    );

    let mut transcript: Vec<String> = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("question")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;

        match input.trim() {
            "quit" | "exit" => break,
            "history" => {
                if transcript.is_empty() {
                    eprintln!("{}", style("No history yet.").dim());
                }
                for line in &transcript {
                    println!("{line}");
                }
            }
            "reset" => {
                transcript.clear();
                eprintln!("{}", style("History cleared.").dim());
            }
            "" => {}
            question => {
                let outcome = matcher.find_match(question, threshold)?;
                print_outcome(&outcome, &config.no_match_message);

                transcript.push(format!("You: {question}"));
                transcript.push(match &outcome {
                    MatchOutcome::Match { question, answer, .. } => {
                        format!("Assistant: {question} — {answer}")
                    }
                    MatchOutcome::NoMatch { .. } => {
                        format!("Assistant: {}", config.no_match_message)
                    }
                });
            }
        }
    }

    Ok(())
}

/// Show corpus and index statistics
#[inline]
pub fn show_status(corpus_override: Option<&PathBuf>) -> Result<()> {
    let config = load_config()?;
    let corpus_path = resolve_corpus_path(&config, corpus_override);
    let matcher = engine(&corpus_path)?;

    println!("{}", style("📊 Corpus Status").bold().cyan());
    println!();
    println!("Corpus file: {}", style(corpus_path.display()).cyan());
    println!("Entries: {}", style(matcher.corpus().len()).cyan());
    println!(
        "Vocabulary terms: {}",
        style(matcher.vocabulary_size()).cyan()
    );
    println!();

    for (index, entry) in matcher.corpus().entries().iter().take(5).enumerate() {
        println!("  [{index}] {}", entry.question);
    }
    if matcher.corpus().len() > 5 {
        println!("  … and {} more", matcher.corpus().len() - 5);
    }

    Ok(())
}

/// Display current configuration
#[inline]
pub fn show_config() -> Result<()> {
    let config = load_config()?;
    let config_dir = get_config_dir().context("Failed to resolve config directory")?;

    eprintln!("{}", style("📋 Current Configuration").bold().cyan());
    eprintln!();
    eprintln!(
        "  Corpus file: {}",
        style(config.corpus_file.display()).cyan()
    );
    eprintln!(
        "  Default threshold: {}",
        style(config.default_threshold).cyan()
    );
    eprintln!(
        "  No-match message: {}",
        style(&config.no_match_message).cyan()
    );
    eprintln!();
    eprintln!(
        "Config file: {}",
        style(config_dir.join("config.toml").display()).dim()
    );

    Ok(())
}
