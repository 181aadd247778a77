//! Artifact identifier extraction and synthesis.
//!
//! Generated text may carry its own ID in a markdown header (`### SR-001: …`).
//! When it does, that ID wins — re-importing the same text is idempotent. When
//! it does not, a fresh ID is synthesized from the conversation's counter.

use std::sync::OnceLock;

use regex::Regex;

use crate::conversation::types::ArtifactKind;

/// Matches any ID-like token (`SR-001`, `VM-12`) on word boundaries.
fn id_token_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b([A-Z]{2}-\d+)\b").expect("hard-coded pattern compiles"))
}

/// Matches an ID embedded in a markdown header, e.g. `### SR-001: Payload`.
fn header_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"###\s*([A-Z]{2}-\d+)").expect("hard-coded pattern compiles"))
}

/// Extract an explicit ID from a `### XX-DDD` header, if the text carries one.
pub(crate) fn extract_embedded_id(text: &str) -> Option<String> {
    header_pattern()
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// Synthesize a fresh ID from the kind tag and a counter value,
/// zero-padded to at least three digits (`SR-007`, `SD-1234`).
pub(crate) fn synthesize_id(kind: ArtifactKind, counter: u64) -> String {
    format!("{}-{:03}", kind.as_str(), counter)
}

/// Numeric suffix of an ID (`SR-017` → 17), or `None` if there is none.
///
/// Used to rebuild the counter from stored IDs on reconstruction, so a stale
/// persisted counter can never cause a collision.
pub(crate) fn numeric_suffix(id: &str) -> Option<u64> {
    let (_, digits) = id.rsplit_once('-')?;
    digits.parse().ok()
}

/// All distinct ID-like tokens in `text`, in first-occurrence order.
pub(crate) fn mentioned_ids(text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for caps in id_token_pattern().captures_iter(text) {
        let id = &caps[1];
        if !seen.iter().any(|s| s == id) {
            seen.push(id.to_string());
        }
    }
    seen
}
