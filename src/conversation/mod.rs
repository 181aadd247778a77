//! Core conversation engine: artifact storage, ID assignment, text
//! normalization, component extraction, and trace construction.

mod components;
mod id;
mod normalize;
mod traces;

pub mod store;
pub mod types;

pub use store::{Conversation, ConversationError, Snapshot};
pub use types::{Artifact, ArtifactKind, Component, Trace};
