//! CLI `new` and `add` commands — conversation creation and artifact ingestion.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use tracewright::config::TracewrightConfig;
use tracewright::{ArtifactKind, Conversation};

/// Start a fresh conversation about `topic`, replacing any existing snapshot.
pub fn new(config: &TracewrightConfig, topic: &str) -> Result<()> {
    let conversation = Conversation::new(topic)?;
    super::save_conversation(config, &conversation)?;
    println!(
        "Started conversation about \"{}\" at {}",
        conversation.topic(),
        config.resolved_snapshot_path().display()
    );
    Ok(())
}

/// Add one generated artifact from a file (or stdin) to the conversation.
pub fn add(config: &TracewrightConfig, kind: ArtifactKind, file: Option<&Path>) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read artifact text from stdin")?;
            buf
        }
    };

    let mut conversation = super::load_conversation(config)?;
    match conversation.add_artifact(kind, &text) {
        Some(artifact_id) => {
            super::save_conversation(config, &conversation)?;
            let artifact = conversation
                .get(&artifact_id)
                .expect("just-inserted artifact is present");
            println!(
                "Stored {} ({} component{})",
                artifact_id,
                artifact.components.len(),
                if artifact.components.len() == 1 { "" } else { "s" }
            );
        }
        None => {
            println!("Skipped: artifact text is empty");
        }
    }
    Ok(())
}
