//! CLI `export` and `context` commands — JSON views for collaborators.

use anyhow::Result;

use tracewright::config::TracewrightConfig;

/// Print the full snapshot as JSON to stdout — the exact shape the session
/// transport persists across turns.
pub fn export(config: &TracewrightConfig) -> Result<()> {
    let conversation = super::load_conversation(config)?;
    let json = serde_json::to_string_pretty(&conversation.to_snapshot())?;
    println!("{json}");

    eprintln!(
        "Exported {} artifact(s) and {} trace(s).",
        conversation.len(),
        conversation.traces().len()
    );
    Ok(())
}

/// Print the prompt-assembly context object: the topic alongside every
/// artifact, keyed by ID at the top level.
pub fn context(config: &TracewrightConfig) -> Result<()> {
    let conversation = super::load_conversation(config)?;
    let json = serde_json::to_string_pretty(&conversation.context())?;
    println!("{json}");
    Ok(())
}
