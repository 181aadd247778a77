//! Traceability graph construction.
//!
//! Traces are derived purely from ID mentions in artifact text. Every rebuild
//! starts from scratch: for each artifact, every distinct `XX-DDD` token in
//! its text that names another stored artifact proposes an edge, and the
//! requirement → design → verification hierarchy fixes the edge's direction
//! no matter which artifact contains the mention. Mentions of unknown IDs,
//! self-mentions, and same-tier pairs produce no edge; rebuilding never fails.

use indexmap::IndexMap;
use tracing::debug;

use crate::conversation::id;
use crate::conversation::types::{Artifact, ArtifactKind, Trace};

/// Recompute the full trace list for `artifacts`.
///
/// Deterministic: artifacts are visited in insertion order and mentions in
/// first-occurrence order, and duplicate ordered pairs are dropped, so two
/// consecutive rebuilds over an unchanged store yield identical lists.
pub(crate) fn rebuild(artifacts: &IndexMap<String, Artifact>) -> Vec<Trace> {
    let mut traces: Vec<Trace> = Vec::new();

    for (source_id, artifact) in artifacts {
        for target_id in id::mentioned_ids(&artifact.text) {
            if target_id == *source_id {
                continue;
            }
            let Some(target) = artifacts.get(&target_id) else {
                debug!(source = %source_id, target = %target_id, "mention of unknown artifact, no edge");
                continue;
            };

            let Some(trace) =
                canonical_edge(source_id, artifact.kind, &target_id, target.kind)
            else {
                debug!(source = %source_id, target = %target_id, "no directionality rule for pair, no edge");
                continue;
            };

            if !traces.contains(&trace) {
                debug!(from = %trace.from, to = %trace.to, "trace added");
                traces.push(trace);
            }
        }
    }

    traces
}

/// Canonical edge for a mention between two artifacts, or `None` when the
/// pair has no defined direction.
///
/// The direction depends only on the kind pair: edges always run from the
/// lower tier to the higher tier (SR → SD, SR → VR/VM, SD → VR/VM). Pairs on
/// the same tier — {VR, VM}, {SD, SD}, {SR, SR} — are never linked.
fn canonical_edge(
    source_id: &str,
    source_kind: ArtifactKind,
    target_id: &str,
    target_kind: ArtifactKind,
) -> Option<Trace> {
    use std::cmp::Ordering;

    match source_kind.tier().cmp(&target_kind.tier()) {
        Ordering::Less => Some(Trace::new(source_id, target_id)),
        Ordering::Greater => Some(Trace::new(target_id, source_id)),
        Ordering::Equal => None,
    }
}
