#![allow(dead_code)]

use tracewright::{ArtifactKind, Conversation};

/// Fresh conversation about the canonical test topic.
pub fn drone_conversation() -> Conversation {
    Conversation::new("drone delivery system").unwrap()
}

/// Requirement text with an embedded header ID and one component.
pub fn sr_payload() -> &'static str {
    "### SR-001: Payload\n- **Payload Capacity:** Must carry 5kg."
}

/// Design text referencing SR-001.
pub fn sd_airframe() -> &'static str {
    "### SD-001: Airframe\nReferences SR-001 for load bearing."
}

/// Insert an artifact and return its assigned ID, panicking on a skip.
pub fn add(conversation: &mut Conversation, kind: ArtifactKind, text: &str) -> String {
    conversation
        .add_artifact(kind, text)
        .expect("artifact text is non-empty")
}
