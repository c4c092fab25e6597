// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the concept lifecycle state machine.

use super::helpers::{
    create_draft_concept, create_well_defined_evaluation, test_clock, test_instant, TEST_PROBLEM,
};
use crate::{ConceptState, DomainError, Identity, Problem, Region};
use chrono::Duration;

fn evaluated_concept() -> crate::Concept {
    let mut concept = create_draft_concept();
    concept.evaluate(create_well_defined_evaluation()).unwrap();
    concept
}

fn accepted_concept() -> crate::Concept {
    let mut concept = evaluated_concept();
    concept.accept(Identity::generate()).unwrap();
    concept
}

#[test]
fn test_new_concept_starts_in_draft() {
    let concept = create_draft_concept();

    assert_eq!(concept.state(), ConceptState::Draft);
    assert!(!concept.was_evaluated());
    assert!(!concept.was_accepted());
    assert!(!concept.was_archived());
    assert!(!concept.was_anonymized());
}

#[test]
fn test_new_concept_rejects_zero_expiry() {
    let result = crate::Concept::new(
        Identity::generate(),
        Problem::new(TEST_PROBLEM).unwrap(),
        None,
        Region::Europe,
        None,
        None,
        0,
        &test_clock(),
        None,
    );

    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidExpiryPeriod { days: 0 }
    ));
}

#[test]
fn test_new_concept_rejects_negative_expiry() {
    let result = crate::Concept::new(
        Identity::generate(),
        Problem::new(TEST_PROBLEM).unwrap(),
        None,
        Region::Europe,
        None,
        None,
        -1,
        &test_clock(),
        None,
    );

    assert!(result.is_err());
}

#[test]
fn test_new_concept_rejects_future_created_at() {
    let result = crate::Concept::new(
        Identity::generate(),
        Problem::new(TEST_PROBLEM).unwrap(),
        None,
        Region::Europe,
        None,
        None,
        3,
        &test_clock(),
        Some(test_instant() + Duration::seconds(1)),
    );

    assert!(matches!(
        result.unwrap_err(),
        DomainError::CreatedAtInFuture
    ));
}

#[test]
fn test_new_concept_accepts_past_created_at() {
    let created_at = test_instant() - Duration::days(1);
    let concept = crate::Concept::new(
        Identity::generate(),
        Problem::new(TEST_PROBLEM).unwrap(),
        None,
        Region::Europe,
        None,
        None,
        3,
        &test_clock(),
        Some(created_at),
    )
    .unwrap();

    assert_eq!(concept.created_at(), created_at);
}

#[test]
fn test_new_concept_defaults_created_at_to_clock() {
    let concept = create_draft_concept();
    assert_eq!(concept.created_at(), test_instant());
}

#[test]
fn test_evaluate_moves_draft_to_evaluated() {
    let concept = evaluated_concept();

    assert_eq!(concept.state(), ConceptState::Evaluated);
    assert!(concept.was_evaluated());
    assert!(concept.evaluation().is_ok());
}

#[test]
fn test_evaluate_rejects_second_evaluation() {
    let mut concept = evaluated_concept();
    let result = concept.evaluate(create_well_defined_evaluation());

    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidStateTransition {
            from: ConceptState::Evaluated,
            to: ConceptState::Evaluated,
        }
    ));
}

#[test]
fn test_accept_moves_evaluated_to_accepted() {
    let mut concept = evaluated_concept();
    let idea_id = Identity::generate();
    concept.accept(idea_id).unwrap();

    assert_eq!(concept.state(), ConceptState::Accepted);
    assert!(concept.was_accepted());
    assert_eq!(concept.idea_id().unwrap(), idea_id);
}

#[test]
fn test_accept_rejected_in_draft() {
    let mut concept = create_draft_concept();
    let result = concept.accept(Identity::generate());

    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidStateTransition {
            from: ConceptState::Draft,
            to: ConceptState::Accepted,
        }
    ));
}

#[test]
fn test_archive_moves_accepted_to_archived() {
    let mut concept = accepted_concept();
    concept.archive().unwrap();

    assert_eq!(concept.state(), ConceptState::Archived);
    assert!(concept.was_archived());
}

#[test]
fn test_archive_rejected_in_draft_and_evaluated() {
    let mut draft = create_draft_concept();
    assert!(draft.archive().is_err());

    let mut evaluated = evaluated_concept();
    assert!(evaluated.archive().is_err());
}

#[test]
fn test_anonymize_allowed_from_every_live_state() {
    let mut draft = create_draft_concept();
    assert!(draft.anonymize().is_ok());

    let mut evaluated = evaluated_concept();
    assert!(evaluated.anonymize().is_ok());

    let mut accepted = accepted_concept();
    assert!(accepted.anonymize().is_ok());

    let mut archived = accepted_concept();
    archived.archive().unwrap();
    assert!(archived.anonymize().is_ok());
    assert_eq!(archived.state(), ConceptState::Anonymized);
    assert!(archived.was_anonymized());
}

#[test]
fn test_anonymize_is_terminal() {
    let mut concept = create_draft_concept();
    concept.anonymize().unwrap();

    assert!(concept.anonymize().is_err());
    assert!(concept.evaluate(create_well_defined_evaluation()).is_err());
    assert!(concept.accept(Identity::generate()).is_err());
    assert!(concept.archive().is_err());
}

#[test]
fn test_archived_flags_survive_anonymization() {
    let mut concept = accepted_concept();
    concept.archive().unwrap();
    concept.anonymize().unwrap();

    assert!(concept.was_evaluated());
    assert!(concept.was_accepted());
    assert!(concept.was_archived());
    assert!(concept.was_anonymized());
}

#[test]
fn test_is_available_within_expiry_window() {
    let concept = create_draft_concept();
    assert!(concept.is_available(test_instant() + Duration::days(2)));
}

#[test]
fn test_is_available_false_once_expired() {
    let concept = create_draft_concept();
    assert!(!concept.is_available(test_instant() + Duration::days(3)));
}

#[test]
fn test_is_available_false_when_archived() {
    let mut concept = accepted_concept();
    concept.archive().unwrap();
    assert!(!concept.is_available(test_instant()));
}

#[test]
fn test_is_available_false_when_anonymized() {
    let mut concept = create_draft_concept();
    concept.anonymize().unwrap();
    assert!(!concept.is_available(test_instant()));
}

#[test]
fn test_evaluation_getter_errors_before_evaluation() {
    let concept = create_draft_concept();
    let result = concept.evaluation();

    assert!(matches!(
        result.unwrap_err(),
        DomainError::ConceptNotEvaluated(_)
    ));
}

#[test]
fn test_idea_id_getter_errors_before_acceptance() {
    let concept = evaluated_concept();
    let result = concept.idea_id();

    assert!(matches!(
        result.unwrap_err(),
        DomainError::ConceptNotAccepted(_)
    ));
}

#[test]
fn test_state_wire_codes_round_trip() {
    for state in [
        ConceptState::Draft,
        ConceptState::Evaluated,
        ConceptState::Accepted,
        ConceptState::Archived,
        ConceptState::Anonymized,
    ] {
        let reparsed: ConceptState = state.as_str().parse().unwrap();
        assert_eq!(reparsed, state);
    }
}

#[test]
fn test_state_rejects_unknown_code() {
    let result: Result<ConceptState, DomainError> = "pending".parse();
    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidLifecycleState(_)
    ));
}
