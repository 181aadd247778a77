//! The `Conversation` aggregate — topic, artifact map, trace list.
//!
//! [`Conversation`] owns the working memory of one engineering conversation
//! and orchestrates the insertion pipeline on every artifact: extract or
//! generate the ID, strip the duplicated header, parse components, store.
//! A snapshot of the whole aggregate is handed to the session transport
//! between turns and must reconstruct an equivalent conversation on the way
//! back in.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conversation::types::{Artifact, ArtifactKind, Trace};
use crate::conversation::{components, id, normalize, traces};

/// Errors surfaced to the embedding application.
///
/// Everything else — empty generator output, unparseable components, mentions
/// of unknown IDs — degrades to an empty or partial result instead of
/// erroring, so malformed generated text can never crash storage or trace
/// construction.
#[derive(Debug, thiserror::Error)]
pub enum ConversationError {
    /// A conversation cannot exist without a subject system.
    #[error("conversation topic must be a non-empty string")]
    EmptyTopic,
}

/// Working memory of one multi-turn systems-engineering conversation.
///
/// Exclusively owned by a single in-flight turn; purely computational, no
/// I/O. Artifacts accumulate monotonically (an insertion with an existing ID
/// overwrites — last write wins) and traces are wholly recomputed on demand.
#[derive(Debug, Clone)]
pub struct Conversation {
    topic: String,
    artifacts: IndexMap<String, Artifact>,
    traces: Vec<Trace>,
    /// Monotonic counter for synthesized IDs. Never persisted as
    /// authoritative — always recomputed from stored IDs on reconstruction.
    counter: u64,
}

/// Equality covers the observable state: topic, artifacts, traces. The
/// counter is a derived cache — reconstruction computes it from stored ID
/// suffixes, which need not match the live value when every inserted text
/// carried its own embedded ID.
impl PartialEq for Conversation {
    fn eq(&self, other: &Self) -> bool {
        self.topic == other.topic
            && self.artifacts == other.artifacts
            && self.traces == other.traces
    }
}

impl Conversation {
    /// Create a conversation about `topic`. Blank topics are rejected.
    pub fn new(topic: impl Into<String>) -> Result<Self, ConversationError> {
        let topic = topic.into();
        if topic.trim().is_empty() {
            return Err(ConversationError::EmptyTopic);
        }
        Ok(Self {
            topic,
            artifacts: IndexMap::new(),
            traces: Vec::new(),
            counter: 0,
        })
    }

    /// The subject system under discussion.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Explicitly reassign the topic. The only mutation path besides
    /// construction; blank topics are rejected here too.
    pub fn set_topic(&mut self, topic: impl Into<String>) -> Result<(), ConversationError> {
        let topic = topic.into();
        if topic.trim().is_empty() {
            return Err(ConversationError::EmptyTopic);
        }
        self.topic = topic;
        Ok(())
    }

    /// Run the insertion pipeline on one piece of generated text and store
    /// the resulting artifact. Returns the assigned ID, or `None` when the
    /// text is blank (documented silent skip — malformed generator output is
    /// tolerated, not rejected).
    pub fn add_artifact(&mut self, kind: ArtifactKind, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            debug!(%kind, "skipping artifact with empty text");
            return None;
        }

        let artifact_id = match id::extract_embedded_id(text) {
            Some(embedded) => embedded,
            None => {
                self.counter += 1;
                id::synthesize_id(kind, self.counter)
            }
        };

        let cleaned = normalize::clean_artifact_text(&artifact_id, text);
        let parsed = components::parse_components(&cleaned);

        if self.artifacts.contains_key(&artifact_id) {
            debug!(id = %artifact_id, "overwriting existing artifact");
        }
        self.artifacts.insert(
            artifact_id.clone(),
            Artifact {
                id: artifact_id.clone(),
                kind,
                text: cleaned,
                components: parsed,
            },
        );

        Some(artifact_id)
    }

    /// Recompute the trace graph from the current artifact set, replacing
    /// the previous trace list wholesale. Call after a batch of insertions.
    pub fn build_traces(&mut self) {
        self.traces = traces::rebuild(&self.artifacts);
    }

    /// Look up one artifact by ID.
    pub fn get(&self, artifact_id: &str) -> Option<&Artifact> {
        self.artifacts.get(artifact_id)
    }

    /// All artifacts in insertion order.
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.values()
    }

    /// Flat ordered artifact list for rendering collaborators.
    pub fn structured_artifacts(&self) -> Vec<&Artifact> {
        self.artifacts.values().collect()
    }

    /// Current trace list, in first-seen order of the last rebuild.
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    /// Number of stored artifacts.
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Artifact count for one kind — the grouping the diagram surface renders.
    pub fn count_of(&self, kind: ArtifactKind) -> usize {
        self.artifacts.values().filter(|a| a.kind == kind).count()
    }

    /// Read view for prompt assembly: the topic alongside every artifact,
    /// keyed by ID at the top level.
    pub fn context(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert(
            "system_topic".to_string(),
            serde_json::Value::String(self.topic.clone()),
        );
        for (artifact_id, artifact) in &self.artifacts {
            // Artifact serialization is infallible (plain strings and enums).
            let value = serde_json::to_value(artifact)
                .unwrap_or(serde_json::Value::Null);
            map.insert(artifact_id.clone(), value);
        }
        serde_json::Value::Object(map)
    }

    /// Capture the aggregate for the session transport.
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            topic: self.topic.clone(),
            artifacts: self.artifacts.clone(),
            traces: self.traces.clone(),
        }
    }

    /// Reconstruct a conversation from a persisted snapshot.
    ///
    /// The counter is recomputed as the maximum numeric ID suffix — any
    /// counter value in the payload is ignored, since externally edited
    /// artifacts can make a persisted counter stale. Traces with missing
    /// endpoints, self-loops, or duplicates are dropped so the reconstructed
    /// aggregate always satisfies the store invariants.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, ConversationError> {
        let mut conversation = Self::new(snapshot.topic)?;
        conversation.artifacts = snapshot.artifacts;
        conversation.counter = conversation
            .artifacts
            .keys()
            .filter_map(|artifact_id| id::numeric_suffix(artifact_id))
            .max()
            .unwrap_or(0);

        for trace in snapshot.traces {
            let endpoints_exist = conversation.artifacts.contains_key(&trace.from)
                && conversation.artifacts.contains_key(&trace.to);
            if !endpoints_exist || trace.from == trace.to {
                debug!(from = %trace.from, to = %trace.to, "dropping invalid persisted trace");
                continue;
            }
            if !conversation.traces.contains(&trace) {
                conversation.traces.push(trace);
            }
        }

        Ok(conversation)
    }
}

/// The exact aggregate shape persisted across turns.
///
/// Unknown fields in older payloads (a stale `counter`, for instance) are
/// ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Subject system of the conversation.
    #[serde(rename = "system_topic")]
    pub topic: String,
    /// ID → artifact map, insertion-ordered for serialization stability.
    #[serde(default)]
    pub artifacts: IndexMap<String, Artifact>,
    /// Trace list as ordered `(from, to)` pairs.
    #[serde(default)]
    pub traces: Vec<Trace>,
}
