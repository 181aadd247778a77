//! Core artifact type definitions.
//!
//! Defines [`ArtifactKind`] (the four artifact categories), [`Artifact`] (a
//! stored record), [`Component`] (a named sub-element parsed from artifact
//! text), and [`Trace`] (a directed traceability edge between two artifacts).

use serde::{Deserialize, Serialize};

/// The four artifact kinds of a systems-engineering conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    /// System Requirement — what the system must do.
    #[serde(rename = "SR")]
    Requirement,
    /// System Design — how the system realizes its requirements.
    #[serde(rename = "SD")]
    Design,
    /// Verification Requirement — what must be shown about a requirement or design.
    #[serde(rename = "VR")]
    VerificationRequirement,
    /// Verification Method — how a verification requirement is demonstrated.
    #[serde(rename = "VM")]
    VerificationMethod,
}

impl ArtifactKind {
    /// Two-letter tag used in artifact IDs and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requirement => "SR",
            Self::Design => "SD",
            Self::VerificationRequirement => "VR",
            Self::VerificationMethod => "VM",
        }
    }

    /// Position in the requirement → design → verification hierarchy.
    ///
    /// Trace edges always run from a lower tier to a higher tier; two
    /// artifacts on the same tier are never linked.
    pub(crate) fn tier(&self) -> u8 {
        match self {
            Self::Requirement => 0,
            Self::Design => 1,
            Self::VerificationRequirement | Self::VerificationMethod => 2,
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SR" => Ok(Self::Requirement),
            "SD" => Ok(Self::Design),
            "VR" => Ok(Self::VerificationRequirement),
            "VM" => Ok(Self::VerificationMethod),
            _ => Err(format!("unknown artifact kind: {s}")),
        }
    }
}

/// A named sub-element extracted from an artifact's body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Bold label that opened the component (e.g. `"Payload Capacity"`).
    pub name: String,
    /// Detail lines belonging to this component, in source order.
    pub details: Vec<String>,
}

/// A stored artifact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Identifier matching `[A-Z]{2}-[0-9]+`, unique within a conversation.
    pub id: String,
    /// Artifact category.
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
    /// Cleaned body text (duplicated header stripped, whitespace trimmed).
    pub text: String,
    /// Ordered components parsed from `text`.
    pub components: Vec<Component>,
}

/// A directed traceability edge.
///
/// Serialized as a two-element array `["SR-001", "SD-001"]` — the shape the
/// session transport persists across turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Trace {
    /// Lower-tier endpoint (the requirement or design being traced).
    pub from: String,
    /// Higher-tier endpoint (the design or verification tracing it).
    pub to: String,
}

impl Trace {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl From<(String, String)> for Trace {
    fn from((from, to): (String, String)) -> Self {
        Self { from, to }
    }
}

impl From<Trace> for (String, String) {
    fn from(trace: Trace) -> Self {
        (trace.from, trace.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [
            ArtifactKind::Requirement,
            ArtifactKind::Design,
            ArtifactKind::VerificationRequirement,
            ArtifactKind::VerificationMethod,
        ] {
            assert_eq!(kind.as_str().parse::<ArtifactKind>().unwrap(), kind);
        }
    }

    #[test]
    fn kind_parse_is_case_insensitive() {
        assert_eq!("sr".parse::<ArtifactKind>().unwrap(), ArtifactKind::Requirement);
        assert!("XX".parse::<ArtifactKind>().is_err());
    }

    #[test]
    fn trace_serializes_as_pair() {
        let trace = Trace::new("SR-001", "SD-001");
        let json = serde_json::to_string(&trace).unwrap();
        assert_eq!(json, r#"["SR-001","SD-001"]"#);
        let back: Trace = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trace);
    }

    #[test]
    fn artifact_kind_field_serializes_as_type() {
        let artifact = Artifact {
            id: "SR-001".into(),
            kind: ArtifactKind::Requirement,
            text: "body".into(),
            components: vec![],
        };
        let json = serde_json::to_value(&artifact).unwrap();
        assert_eq!(json["type"], "SR");
        assert_eq!(json["id"], "SR-001");
    }
}
