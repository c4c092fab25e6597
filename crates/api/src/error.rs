// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use checkmvp::CoreError;
use checkmvp_domain::DomainError;
use checkmvp_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidIdentity(value) => ApiError::InvalidInput {
            field: String::from("id"),
            message: format!("'{value}' is not a valid UUID"),
        },
        DomainError::EmptyField { field } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Field '{field}' must not be empty"),
        },
        DomainError::FieldTooShort { field, min, len } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Must be at least {min} characters, got {len}"),
        },
        DomainError::FieldTooLong { field, max, len } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Must be at most {max} characters, got {len}"),
        },
        DomainError::InvalidRegion(value) => ApiError::InvalidInput {
            field: String::from("region"),
            message: format!("Unknown region: {value}"),
        },
        DomainError::InvalidProductType(value) => ApiError::InvalidInput {
            field: String::from("product_type"),
            message: format!("Unknown product type: {value}"),
        },
        DomainError::InvalidStage(value) => ApiError::InvalidInput {
            field: String::from("stage"),
            message: format!("Unknown stage: {value}"),
        },
        DomainError::InvalidEvaluationStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown evaluation status: {value}"),
        },
        DomainError::InvalidLifecycleState(value) => ApiError::InvalidInput {
            field: String::from("state"),
            message: format!("Unknown lifecycle state: {value}"),
        },
        DomainError::ScoreOutOfRange { field, value } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Score must be between 0 and 10, got {value}"),
        },
        DomainError::InvalidExpiryPeriod { days } => ApiError::InvalidInput {
            field: String::from("expiry_period_in_days"),
            message: format!("Expiry period must be positive, got {days}"),
        },
        DomainError::CreatedAtInFuture => ApiError::InvalidInput {
            field: String::from("created_at"),
            message: String::from("Creation timestamp must not be in the future"),
        },
        DomainError::InvalidStateTransition { from, to } => ApiError::DomainRuleViolation {
            rule: String::from("lifecycle_transition"),
            message: format!("Cannot transition a concept from {from} to {to}"),
        },
        DomainError::ConceptNotEvaluated(id) => ApiError::DomainRuleViolation {
            rule: String::from("concept_evaluated"),
            message: format!("Concept {id} was not evaluated"),
        },
        DomainError::ConceptNotAccepted(id) => ApiError::DomainRuleViolation {
            rule: String::from("concept_accepted"),
            message: format!("Concept {id} was not accepted"),
        },
        DomainError::ConceptArchived(id) => ApiError::DomainRuleViolation {
            rule: String::from("concept_not_archived"),
            message: format!("Concept {id} was archived"),
        },
        DomainError::EvaluationFieldViolation {
            status,
            field,
            must_be_empty,
        } => ApiError::DomainRuleViolation {
            rule: String::from("evaluation_invariants"),
            message: if must_be_empty {
                format!("Evaluation field '{field}' must be empty when status is {status}")
            } else {
                format!("Evaluation field '{field}' must not be empty when status is {status}")
            },
        },
        DomainError::SectionAlreadySet { section } => ApiError::DomainRuleViolation {
            rule: String::from("section_write_once"),
            message: format!("Section '{section}' was already set"),
        },
        DomainError::DuplicateSectionEntry { section, key } => ApiError::DomainRuleViolation {
            rule: String::from("section_unique_entries"),
            message: format!("Section '{section}' already contains an entry for '{key}'"),
        },
        DomainError::AudienceFieldAlreadySet { field } => ApiError::DomainRuleViolation {
            rule: String::from("audience_write_once"),
            message: format!("Target audience field '{field}' was already set"),
        },
        DomainError::IdeaAlreadyMigrated(id) => ApiError::DomainRuleViolation {
            rule: String::from("idea_migrate_once"),
            message: format!("Idea {id} was already migrated"),
        },
        DomainError::IdeaAlreadyArchived(id) => ApiError::DomainRuleViolation {
            rule: String::from("idea_archive_once"),
            message: format!("Idea {id} was already archived"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::ConceptNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Concept"),
            message: format!("Concept {id} was not found"),
        },
        CoreError::IdeaNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Idea"),
            message: format!("Idea {id} was not found"),
        },
        CoreError::HypothesisJobNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Hypothesis job"),
            message: format!("Hypothesis job {id} was not found"),
        },
        CoreError::TargetAudienceNotFound { concept_id, index } => ApiError::InvalidInput {
            field: String::from("target_audience_id"),
            message: format!("Concept {concept_id} has no target audience with id {index}"),
        },
        CoreError::ConceptUnavailable(id) => ApiError::DomainRuleViolation {
            rule: String::from("concept_available"),
            message: format!("Concept {id} is no longer available for reservation"),
        },
        CoreError::ReservationRejected(message) => ApiError::DomainRuleViolation {
            rule: String::from("reservation_accepted"),
            message,
        },
        CoreError::Repository(message) => ApiError::Internal {
            message: format!("Storage failure: {message}"),
        },
        CoreError::AiService(message) => ApiError::Internal {
            message: format!("AI service failure: {message}"),
        },
        CoreError::Gateway(message) => ApiError::Internal {
            message: format!("Reservation gateway failure: {message}"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Adapter failures surface as internal errors; only not-found and domain
/// violations keep their shape.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message,
        },
        PersistenceError::Domain(domain_err) => translate_domain_error(domain_err),
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
