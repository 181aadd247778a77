//! CLI `trace` command — rebuild and display the traceability graph.

use anyhow::Result;

use tracewright::config::TracewrightConfig;

/// Recompute traces over the full artifact set, persist, and print the edges.
pub fn trace(config: &TracewrightConfig) -> Result<()> {
    let mut conversation = super::load_conversation(config)?;
    conversation.build_traces();
    super::save_conversation(config, &conversation)?;

    if conversation.traces().is_empty() {
        println!("No traces found among {} artifact(s).", conversation.len());
        return Ok(());
    }

    println!("Traces ({}):", conversation.traces().len());
    for trace in conversation.traces() {
        println!("  {} -> {}", trace.from, trace.to);
    }
    Ok(())
}
