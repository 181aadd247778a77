mod helpers;

use helpers::{add, drone_conversation, sr_payload};
use tracewright::{ArtifactKind, Conversation};

#[test]
fn insertion_pipeline_cleans_and_parses() {
    let mut conversation = drone_conversation();
    let id = add(
        &mut conversation,
        ArtifactKind::Requirement,
        "SR-001: ### SR-001: Payload\n- **Payload Capacity:** Must carry 5kg.",
    );
    assert_eq!(id, "SR-001");

    let artifact = conversation.get(&id).unwrap();
    // The duplicated header is gone and never re-stripped from the body.
    assert!(!artifact.text.starts_with("SR-001: ### SR-001:"));
    assert_eq!(artifact.components.len(), 1);
    assert_eq!(artifact.components[0].name, "Payload Capacity");
    assert_eq!(artifact.components[0].details, vec!["Must carry 5kg."]);
}

#[test]
fn synthesized_ids_increase_without_embedded_headers() {
    let mut conversation = drone_conversation();
    let mut suffixes = Vec::new();
    for n in 0..5 {
        let id = add(
            &mut conversation,
            ArtifactKind::VerificationRequirement,
            &format!("verify behaviour {n}"),
        );
        assert!(id.starts_with("VR-"));
        suffixes.push(id[3..].parse::<u64>().unwrap());
    }
    // Distinct and strictly increasing.
    for pair in suffixes.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert_eq!(conversation.len(), 5);
}

#[test]
fn embedded_header_wins_regardless_of_counter_state() {
    let mut conversation = drone_conversation();
    for n in 0..10 {
        add(&mut conversation, ArtifactKind::Requirement, &format!("req {n}"));
    }
    let id = add(&mut conversation, ArtifactKind::Requirement, "### SR-007: Payload\nbody");
    assert_eq!(id, "SR-007");
}

#[test]
fn empty_text_never_stores() {
    let mut conversation = drone_conversation();
    assert!(conversation.add_artifact(ArtifactKind::Design, "").is_none());
    assert!(conversation.add_artifact(ArtifactKind::Design, "   ").is_none());
    assert!(conversation.is_empty());
}

#[test]
fn reimport_overwrites_in_place() {
    let mut conversation = drone_conversation();
    add(&mut conversation, ArtifactKind::Requirement, sr_payload());
    add(
        &mut conversation,
        ArtifactKind::Requirement,
        "### SR-001: Payload\n- **Payload Capacity:** Must carry 8kg.",
    );
    assert_eq!(conversation.len(), 1);
    let artifact = conversation.get("SR-001").unwrap();
    assert_eq!(artifact.components[0].details, vec!["Must carry 8kg."]);
}

#[test]
fn context_holds_topic_and_every_artifact() {
    let mut conversation = drone_conversation();
    let a = add(&mut conversation, ArtifactKind::Requirement, sr_payload());
    let b = add(&mut conversation, ArtifactKind::Design, "airframe notes");

    let context = conversation.context();
    assert_eq!(context["system_topic"], "drone delivery system");
    assert!(context.get(&a).is_some());
    assert!(context.get(&b).is_some());
}

#[test]
fn structured_artifacts_preserve_insertion_order() {
    let mut conversation = drone_conversation();
    let first = add(&mut conversation, ArtifactKind::Design, "zeta design");
    let second = add(&mut conversation, ArtifactKind::Requirement, "alpha requirement");

    let flat: Vec<&str> = conversation
        .structured_artifacts()
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(flat, vec![first.as_str(), second.as_str()]);
}

#[test]
fn fallback_component_parse_applies_through_the_store() {
    let mut conversation = drone_conversation();
    let id = add(
        &mut conversation,
        ArtifactKind::Design,
        "### SD-010: Hull\n- **Hull**\n- welded steel plate",
    );
    let artifact = conversation.get(&id).unwrap();
    assert_eq!(artifact.components.len(), 1);
    assert_eq!(artifact.components[0].name, "Hull");
    assert_eq!(artifact.components[0].details, vec!["welded steel plate"]);
}

#[test]
fn topics_must_be_non_empty() {
    assert!(Conversation::new("").is_err());
    assert!(Conversation::new("\t  ").is_err());
    assert!(Conversation::new("drone delivery system").is_ok());
}
