pub mod export;
pub mod ingest;
pub mod inspect;
pub mod stats;
pub mod trace;

use std::path::Path;

use anyhow::{Context, Result};

use tracewright::config::TracewrightConfig;
use tracewright::{Conversation, Snapshot};

/// Load the conversation from the configured snapshot file.
///
/// The CLI plays the session-transport role: the whole aggregate is read,
/// mutated, and rewritten wholesale on each invocation.
pub fn load_conversation(config: &TracewrightConfig) -> Result<Conversation> {
    let path = config.resolved_snapshot_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("no conversation snapshot at {}", path.display()))?;
    let snapshot: Snapshot =
        serde_json::from_str(&contents).context("failed to parse snapshot JSON")?;
    Conversation::from_snapshot(snapshot).context("snapshot is not a valid conversation")
}

/// Write the conversation back to the configured snapshot file.
pub fn save_conversation(config: &TracewrightConfig, conversation: &Conversation) -> Result<()> {
    let path = config.resolved_snapshot_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&conversation.to_snapshot())?;
    write_atomic(&path, &json)
        .with_context(|| format!("failed to write snapshot to {}", path.display()))
}

/// Atomic write (tmp + rename) so a crash never leaves a half-written snapshot.
fn write_atomic(dest: &Path, contents: &str) -> Result<()> {
    let tmp_path = dest.with_extension("tmp");
    std::fs::write(&tmp_path, contents)?;
    std::fs::rename(&tmp_path, dest)?;
    Ok(())
}
