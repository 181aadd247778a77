//! CLI `inspect` command — display full details for a single artifact.

use anyhow::{bail, Result};

use tracewright::config::TracewrightConfig;

/// Inspect a single artifact by ID and display full details.
pub fn inspect(config: &TracewrightConfig, artifact_id: &str) -> Result<()> {
    let conversation = super::load_conversation(config)?;

    let Some(artifact) = conversation.get(artifact_id) else {
        bail!("no artifact with ID {artifact_id}");
    };

    println!("Artifact: {}", artifact.id);
    println!("{}", "=".repeat(50));
    println!("  Kind:           {}", artifact.kind);
    println!("  Components:     {}", artifact.components.len());
    println!();
    println!("Text:");
    for line in artifact.text.lines() {
        println!("  {line}");
    }

    if !artifact.components.is_empty() {
        println!();
        println!("Components:");
        for component in &artifact.components {
            println!("  {}:", component.name);
            for detail in &component.details {
                println!("    - {detail}");
            }
        }
    }

    let related: Vec<String> = conversation
        .traces()
        .iter()
        .filter(|t| t.from == artifact.id || t.to == artifact.id)
        .map(|t| format!("{} -> {}", t.from, t.to))
        .collect();
    if !related.is_empty() {
        println!();
        println!("Traces:");
        for edge in related {
            println!("  {edge}");
        }
    }

    Ok(())
}
