// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_draft_concept, create_well_defined_evaluation, test_clock};
use crate::anonymization::anonymize_concept;
use checkmvp_domain::{ConceptState, Identity, REDACTED};

#[test]
fn test_anonymize_draft_concept_redacts_problem() {
    let concept = create_draft_concept();
    let anonymized = anonymize_concept(&concept, &test_clock()).unwrap();

    assert_eq!(anonymized.id(), concept.id());
    assert_eq!(anonymized.problem().value(), REDACTED);
    assert_eq!(anonymized.state(), ConceptState::Anonymized);
    assert!(anonymized.was_anonymized());
    assert_eq!(anonymized.created_at(), concept.created_at());
}

#[test]
fn test_anonymize_preserves_lifecycle_flags() {
    let mut concept = create_draft_concept();
    concept.evaluate(create_well_defined_evaluation()).unwrap();
    let idea_id = Identity::generate();
    concept.accept(idea_id).unwrap();
    concept.archive().unwrap();

    let anonymized = anonymize_concept(&concept, &test_clock()).unwrap();

    assert!(anonymized.was_evaluated());
    assert!(anonymized.was_accepted());
    assert!(anonymized.was_archived());
    assert!(anonymized.was_anonymized());
    assert_eq!(anonymized.idea_id().unwrap(), idea_id);
}

#[test]
fn test_anonymize_redacts_evaluation_preserving_shape() {
    let mut concept = create_draft_concept();
    concept.evaluate(create_well_defined_evaluation()).unwrap();
    let source_evaluation = concept.evaluation().unwrap().clone();

    let anonymized = anonymize_concept(&concept, &test_clock()).unwrap();
    let evaluation = anonymized.evaluation().unwrap();

    assert_eq!(evaluation.status(), source_evaluation.status());
    assert_eq!(
        evaluation.pain_points().len(),
        source_evaluation.pain_points().len()
    );
    assert!(evaluation.pain_points().iter().all(|p| p == REDACTED));
    assert_eq!(evaluation.market_existence(), Some(REDACTED));
    assert_eq!(
        evaluation.target_audiences().len(),
        source_evaluation.target_audiences().len()
    );

    let audience = &evaluation.target_audiences()[0];
    assert_eq!(audience.segment(), REDACTED);
    assert_eq!(audience.description(), REDACTED);
    assert!(audience.challenges().iter().all(|c| c == REDACTED));
    assert_eq!(audience.validation_metrics().accessibility(), 1);
    assert_eq!(evaluation.clarity_score().overall_score(), 1);
}

#[test]
fn test_anonymize_is_idempotent() {
    let mut concept = create_draft_concept();
    concept.evaluate(create_well_defined_evaluation()).unwrap();

    let once = anonymize_concept(&concept, &test_clock()).unwrap();
    let twice = anonymize_concept(&once, &test_clock()).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_anonymized_concept_is_unavailable() {
    let concept = create_draft_concept();
    let anonymized = anonymize_concept(&concept, &test_clock()).unwrap();

    assert!(!anonymized.is_available(concept.created_at()));
}
