//! Artifact text normalization.
//!
//! The upstream generator sometimes prefixes its output with a duplicated
//! header of the form `SR-001: ### SR-001: `. That prefix is stripped once,
//! case-insensitively, and only when anchored at the very start of the text —
//! later occurrences of the same ID in the body are left alone.

use regex::Regex;
use tracing::debug;

/// Strip the duplicated-header prefix for `id`, then trim surrounding
/// whitespace. Text without the prefix comes back trimmed but otherwise
/// unchanged.
pub(crate) fn clean_artifact_text(id: &str, text: &str) -> String {
    // The ID varies per call, so the pattern is built on the fly.
    let pattern = format!(r"(?i)^{0}:\s*###\s*{0}:\s*", regex::escape(id));
    let re = Regex::new(&pattern).expect("escaped ID yields a valid pattern");

    let cleaned = re.replacen(text, 1, "");
    if cleaned.len() != text.len() {
        debug!(id, "stripped duplicated header");
    }
    cleaned.trim().to_string()
}
