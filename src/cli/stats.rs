use anyhow::Result;

use tracewright::config::TracewrightConfig;
use tracewright::ArtifactKind;

/// Display conversation statistics in the terminal.
pub fn stats(config: &TracewrightConfig) -> Result<()> {
    let conversation = super::load_conversation(config)?;

    println!("Conversation Statistics");
    println!("{}", "=".repeat(40));
    println!("  Topic:           {}", conversation.topic());
    println!("  Total artifacts: {}", conversation.len());
    println!();

    println!("By Kind:");
    for kind in [
        ArtifactKind::Requirement,
        ArtifactKind::Design,
        ArtifactKind::VerificationRequirement,
        ArtifactKind::VerificationMethod,
    ] {
        println!("  {:<12} {}", kind.as_str(), conversation.count_of(kind));
    }
    println!();

    println!("Traces:            {}", conversation.traces().len());
    Ok(())
}
