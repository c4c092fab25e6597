// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use checkmvp::CoreError;
use checkmvp_domain::{ConceptState, DomainError, Identity};
use checkmvp_persistence::PersistenceError;

#[test]
fn test_field_too_short_becomes_invalid_input() {
    let err = translate_domain_error(DomainError::FieldTooShort {
        field: "problem",
        min: 20,
        len: 9,
    });

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("problem"),
            message: String::from("Must be at least 20 characters, got 9"),
        }
    );
}

#[test]
fn test_invalid_region_names_the_region_field() {
    let err = translate_domain_error(DomainError::InvalidRegion(String::from("atlantis")));

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("region"),
            message: String::from("Unknown region: atlantis"),
        }
    );
}

#[test]
fn test_concept_not_evaluated_message() {
    let id = Identity::generate();

    let err = translate_domain_error(DomainError::ConceptNotEvaluated(id));

    assert_eq!(
        err,
        ApiError::DomainRuleViolation {
            rule: String::from("concept_evaluated"),
            message: format!("Concept {id} was not evaluated"),
        }
    );
}

#[test]
fn test_concept_archived_message() {
    let id = Identity::generate();

    let err = translate_domain_error(DomainError::ConceptArchived(id));

    assert_eq!(
        err,
        ApiError::DomainRuleViolation {
            rule: String::from("concept_not_archived"),
            message: format!("Concept {id} was archived"),
        }
    );
}

#[test]
fn test_state_transition_becomes_rule_violation() {
    let err = translate_domain_error(DomainError::InvalidStateTransition {
        from: ConceptState::Accepted,
        to: ConceptState::Evaluated,
    });

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "lifecycle_transition"
    ));
}

#[test]
fn test_section_already_set_becomes_rule_violation() {
    let err = translate_domain_error(DomainError::SectionAlreadySet {
        section: "value_proposition",
    });

    assert_eq!(
        err,
        ApiError::DomainRuleViolation {
            rule: String::from("section_write_once"),
            message: String::from("Section 'value_proposition' was already set"),
        }
    );
}

#[test]
fn test_core_domain_violation_delegates_to_domain_translation() {
    let err = translate_core_error(CoreError::DomainViolation(DomainError::EmptyField {
        field: "statement",
    }));

    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, .. } if field == "statement"
    ));
}

#[test]
fn test_core_not_found_variants_carry_resource_types() {
    let id = Identity::generate();

    let concept = translate_core_error(CoreError::ConceptNotFound(id));
    let idea = translate_core_error(CoreError::IdeaNotFound(id));
    let job = translate_core_error(CoreError::HypothesisJobNotFound(id));

    assert!(matches!(
        concept,
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Concept"
    ));
    assert!(matches!(
        idea,
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Idea"
    ));
    assert!(matches!(
        job,
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Hypothesis job"
    ));
}

#[test]
fn test_target_audience_not_found_becomes_invalid_input() {
    let concept_id = Identity::generate();

    let err = translate_core_error(CoreError::TargetAudienceNotFound { concept_id, index: 4 });

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("target_audience_id"),
            message: format!("Concept {concept_id} has no target audience with id 4"),
        }
    );
}

#[test]
fn test_reservation_rejected_keeps_gateway_message() {
    let err = translate_core_error(CoreError::ReservationRejected(String::from(
        "Concept already reserved",
    )));

    assert_eq!(
        err,
        ApiError::DomainRuleViolation {
            rule: String::from("reservation_accepted"),
            message: String::from("Concept already reserved"),
        }
    );
}

#[test]
fn test_repository_failure_becomes_internal() {
    let err = translate_core_error(CoreError::Repository(String::from("disk full")));

    assert_eq!(
        err,
        ApiError::Internal {
            message: String::from("Storage failure: disk full"),
        }
    );
}

#[test]
fn test_ai_service_failure_becomes_internal() {
    let err = translate_core_error(CoreError::AiService(String::from("timeout")));

    assert_eq!(
        err,
        ApiError::Internal {
            message: String::from("AI service failure: timeout"),
        }
    );
}

#[test]
fn test_persistence_not_found_becomes_resource_not_found() {
    let err = translate_persistence_error(PersistenceError::NotFound(String::from(
        "Record not found",
    )));

    assert_eq!(
        err,
        ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message: String::from("Record not found"),
        }
    );
}

#[test]
fn test_persistence_domain_error_delegates_to_domain_translation() {
    let err = translate_persistence_error(PersistenceError::Domain(DomainError::EmptyField {
        field: "problem",
    }));

    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, .. } if field == "problem"
    ));
}

#[test]
fn test_other_persistence_errors_become_internal() {
    let err = translate_persistence_error(PersistenceError::ReconstructionError(String::from(
        "Unknown idea section: bogus",
    )));

    assert!(matches!(err, ApiError::Internal { .. }));
}

#[test]
fn test_display_formats() {
    let invalid = ApiError::InvalidInput {
        field: String::from("region"),
        message: String::from("Unknown region: atlantis"),
    };
    let violation = ApiError::DomainRuleViolation {
        rule: String::from("concept_evaluated"),
        message: String::from("Concept x was not evaluated"),
    };
    let not_found = ApiError::ResourceNotFound {
        resource_type: String::from("Concept"),
        message: String::from("Concept x was not found"),
    };
    let internal = ApiError::Internal {
        message: String::from("Storage failure: disk full"),
    };

    assert_eq!(
        invalid.to_string(),
        "Invalid input for field 'region': Unknown region: atlantis"
    );
    assert_eq!(
        violation.to_string(),
        "Domain rule violation (concept_evaluated): Concept x was not evaluated"
    );
    assert_eq!(
        not_found.to_string(),
        "Concept not found: Concept x was not found"
    );
    assert_eq!(internal.to_string(), "Internal error: Storage failure: disk full");
}
