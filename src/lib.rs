//! Conversation memory and traceability for systems-engineering chat agents.
//!
//! Tracewright keeps the working memory of a multi-turn engineering
//! conversation: a topic, a growing set of generated text artifacts, and a
//! derived graph of directional traceability edges between them. Artifacts
//! come in four kinds:
//!
//! | Kind | Meaning | Tier |
//! |------|---------|------|
//! | **SR** | System Requirement | 0 |
//! | **SD** | System Design | 1 |
//! | **VR** | Verification Requirement | 2 |
//! | **VM** | Verification Method | 2 |
//!
//! Traces are inferred purely from `XX-DDD` ID tokens appearing in artifact
//! text, and their direction is fixed by the tier hierarchy — requirements
//! trace to designs, and both trace to verifications, no matter which
//! artifact's text contains the mention.
//!
//! The crate is purely computational: text generation, persistence transport,
//! and rendering are external collaborators that feed raw text in and consume
//! snapshots, context objects, and trace lists back out.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`conversation`] — Core engine: the `Conversation` aggregate, artifact
//!   types, insertion pipeline, and trace rebuilding

pub mod config;
pub mod conversation;

pub use conversation::{
    Artifact, ArtifactKind, Component, Conversation, ConversationError, Snapshot, Trace,
};
