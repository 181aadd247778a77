//! Structured component extraction from artifact text.
//!
//! The generator emits components as bold-label bullets:
//!
//! ```text
//! - **Payload Capacity:** Must carry 5kg.
//!   Sustained for 30 minutes.
//! - **Range:** 10km minimum.
//! ```
//!
//! The primary strategy treats every line of the form `- **Name:** rest` as
//! opening a component and collects the following lines as its detail block.
//! If that finds nothing, a looser single-pass fallback runs, which also
//! accepts plain `- detail` bullets and bold labels without the `:**` marker.
//! The two strategies intentionally differ on edge cases; the fallback only
//! ever runs when the primary found zero components.

use tracing::debug;

use crate::conversation::types::Component;

/// Parse `text` into ordered components. Never fails — text with no
/// recognizable structure yields an empty list.
pub(crate) fn parse_components(text: &str) -> Vec<Component> {
    let components = parse_primary(text);
    if !components.is_empty() {
        return components;
    }
    debug!("primary component parse found nothing, trying fallback");
    parse_fallback(text)
}

/// Strict strategy: only `- **Name:** rest` lines (at column zero) open a
/// component. Detail lines are trimmed; blank lines and nested bold bullets
/// are dropped from the detail block.
fn parse_primary(text: &str) -> Vec<Component> {
    let mut components: Vec<Component> = Vec::new();
    let mut current: Option<Component> = None;

    for line in text.lines() {
        if let Some((name, rest)) = split_opener(line) {
            if let Some(done) = current.take() {
                components.push(done);
            }
            let mut details = Vec::new();
            let rest = rest.trim();
            if !rest.is_empty() && !rest.starts_with("- **") {
                details.push(rest.to_string());
            }
            current = Some(Component { name, details });
        } else if let Some(open) = current.as_mut() {
            let detail = line.trim();
            if !detail.is_empty() && !detail.starts_with("- **") {
                open.details.push(detail.to_string());
            }
        }
    }

    if let Some(done) = current {
        components.push(done);
    }
    components
}

/// An opener is a line starting (unindented) with `- **` and carrying a
/// `:**` close marker. Returns the trimmed name and the rest of the line.
fn split_opener(line: &str) -> Option<(String, &str)> {
    let body = line.strip_prefix("- **")?;
    let (name, rest) = body.split_once(":**")?;
    Some((name.trim().to_string(), rest))
}

/// Loose strategy: any trimmed line starting with `- **` opens a component
/// (name = text between the first pair of `**` markers, surrounding colons
/// stripped); `- ` lines become dash-stripped details; other non-blank lines
/// are continuation details. Lines before the first opener are ignored.
fn parse_fallback(text: &str) -> Vec<Component> {
    let mut components: Vec<Component> = Vec::new();
    let mut current: Option<Component> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.starts_with("- **") {
            if let Some(done) = current.take() {
                components.push(done);
            }
            let name = line
                .split("**")
                .nth(1)
                .unwrap_or_default()
                .trim_matches(':')
                .to_string();
            current = Some(Component {
                name,
                details: Vec::new(),
            });
        } else if line.starts_with('-') {
            if let Some(open) = current.as_mut() {
                open.details
                    .push(line.trim_start_matches(['-', ' ']).to_string());
            }
        } else if !line.is_empty() {
            if let Some(open) = current.as_mut() {
                open.details.push(line.to_string());
            }
        }
    }

    if let Some(done) = current {
        components.push(done);
    }
    components
}
