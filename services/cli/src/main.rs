//! Command-line front end for the content generator.
//!
//! Collects a topic and a level, validates the topic and prints the
//! explanation, quiz and study plan either as text or as JSON.

mod render;

use anyhow::{Context, Result, bail};
use clap::Parser;
use eduassist_core::{ContentFacade, DifficultyTier, GeneratedContent, KnowledgeStore};
use render::Section;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const EMPTY_TOPIC_MESSAGE: &str = "Please enter a learning topic to continue.";

#[derive(Parser, Debug)]
#[command(version, about = "Generate an explanation, quiz and study plan for a topic")]
struct Cli {
    /// What you would like to learn about, e.g. "Photosynthesis".
    #[arg(short, long, required_unless_present = "schema")]
    topic: Option<String>,

    /// Beginner, Intermediate or Advanced. Anything else is treated as Beginner.
    #[arg(short, long, default_value = "Beginner")]
    level: String,

    /// Which part of the content to print.
    #[arg(short, long, value_enum, default_value_t = Section::All)]
    section: Section,

    /// Print the selected section(s) as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Replacement knowledge document (same shape as the built-in table).
    #[arg(long, env = "KNOWLEDGE_PATH")]
    knowledge: Option<PathBuf>,

    /// Print the JSON schema of the generated content and exit.
    #[arg(long)]
    schema: bool,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn facade(knowledge: Option<&PathBuf>) -> Result<ContentFacade> {
    match knowledge {
        Some(path) => {
            let store = KnowledgeStore::load(path)
                .with_context(|| format!("Failed to load knowledge from {}", path.display()))?;
            info!(path = %path.display(), topics = store.topics().len(), "Loaded knowledge file");
            Ok(ContentFacade::new(Arc::new(store)))
        }
        None => Ok(ContentFacade::builtin()),
    }
}

fn validate_topic(topic: Option<&str>) -> Result<&str> {
    match topic {
        Some(topic) if !topic.trim().is_empty() => Ok(topic),
        _ => bail!(EMPTY_TOPIC_MESSAGE),
    }
}

fn run(cli: Cli) -> Result<String> {
    if cli.schema {
        let schema = schemars::schema_for!(GeneratedContent);
        return Ok(serde_json::to_string_pretty(&schema)?);
    }

    let topic = validate_topic(cli.topic.as_deref())?;
    if !DifficultyTier::is_known_label(&cli.level) {
        warn!(level = %cli.level, "Unknown level, using Beginner");
    }

    let content = facade(cli.knowledge.as_ref())?.build_all(topic, &cli.level);
    if cli.json {
        let value = render::to_json(&content, cli.section)?;
        Ok(serde_json::to_string_pretty(&value)?)
    } else {
        Ok(render::render(&content, cli.section))
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let output = run(Cli::parse())?;
    println!("{}", output);
    Ok(())
}
