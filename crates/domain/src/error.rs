// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::concept::ConceptState;
use crate::evaluation::EvaluationStatus;
use crate::identity::Identity;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A string is not a well-formed UUID.
    InvalidIdentity(String),
    /// A required text field is empty or whitespace-only.
    EmptyField {
        /// The name of the offending field.
        field: &'static str,
    },
    /// A text field is shorter than its minimum length.
    FieldTooShort {
        /// The name of the offending field.
        field: &'static str,
        /// The minimum length in characters.
        min: usize,
        /// The actual length after trimming.
        len: usize,
    },
    /// A text field exceeds its maximum length.
    FieldTooLong {
        /// The name of the offending field.
        field: &'static str,
        /// The maximum length in characters.
        max: usize,
        /// The actual length after trimming.
        len: usize,
    },
    /// Region code is not recognized.
    InvalidRegion(String),
    /// Product type code is not recognized.
    InvalidProductType(String),
    /// Stage code is not recognized.
    InvalidStage(String),
    /// Evaluation status code is not recognized.
    InvalidEvaluationStatus(String),
    /// Concept lifecycle state code is not recognized.
    InvalidLifecycleState(String),
    /// A numeric score is outside the 0-10 range.
    ScoreOutOfRange {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// A concept lifecycle transition is not permitted by the state graph.
    InvalidStateTransition {
        /// The state the concept is currently in.
        from: ConceptState,
        /// The state the transition targeted.
        to: ConceptState,
    },
    /// The concept has no evaluation attached.
    ConceptNotEvaluated(Identity),
    /// The concept has not been accepted, so no idea is attached.
    ConceptNotAccepted(Identity),
    /// The concept was archived and can no longer be reserved.
    ConceptArchived(Identity),
    /// The expiry period must be a positive number of days.
    InvalidExpiryPeriod {
        /// The rejected value.
        days: i64,
    },
    /// A creation timestamp lies in the future relative to the clock.
    CreatedAtInFuture,
    /// An evaluation field violates the invariant table for its status.
    EvaluationFieldViolation {
        /// The status under which the invariant was checked.
        status: EvaluationStatus,
        /// The name of the offending field.
        field: &'static str,
        /// Whether the invariant requires the field to be empty.
        must_be_empty: bool,
    },
    /// An idea analysis section was already set.
    SectionAlreadySet {
        /// The name of the section.
        section: &'static str,
    },
    /// A list-valued section already contains an entry with this natural key.
    DuplicateSectionEntry {
        /// The name of the section.
        section: &'static str,
        /// The natural key of the duplicate entry.
        key: String,
    },
    /// A write-once target audience field was already set.
    AudienceFieldAlreadySet {
        /// The name of the field.
        field: &'static str,
    },
    /// The idea was already marked as migrated.
    IdeaAlreadyMigrated(Identity),
    /// The idea was already marked as archived.
    IdeaAlreadyArchived(Identity),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentity(value) => {
                write!(f, "Invalid identity: '{value}' is not a valid UUID")
            }
            Self::EmptyField { field } => {
                write!(f, "Field '{field}' must not be empty")
            }
            Self::FieldTooShort { field, min, len } => {
                write!(
                    f,
                    "Field '{field}' must be at least {min} characters, got {len}"
                )
            }
            Self::FieldTooLong { field, max, len } => {
                write!(
                    f,
                    "Field '{field}' must be at most {max} characters, got {len}"
                )
            }
            Self::InvalidRegion(value) => write!(f, "Invalid region: {value}"),
            Self::InvalidProductType(value) => write!(f, "Invalid product type: {value}"),
            Self::InvalidStage(value) => write!(f, "Invalid stage: {value}"),
            Self::InvalidEvaluationStatus(value) => {
                write!(f, "Invalid evaluation status: {value}")
            }
            Self::InvalidLifecycleState(value) => {
                write!(f, "Invalid lifecycle state: {value}")
            }
            Self::ScoreOutOfRange { field, value } => {
                write!(f, "Score '{field}' must be between 0 and 10, got {value}")
            }
            Self::InvalidStateTransition { from, to } => {
                write!(f, "Invalid state transition from {from} to {to}")
            }
            Self::ConceptNotEvaluated(id) => write!(f, "Concept {id} was not evaluated"),
            Self::ConceptNotAccepted(id) => write!(f, "Concept {id} was not accepted"),
            Self::ConceptArchived(id) => write!(f, "Concept {id} was archived"),
            Self::InvalidExpiryPeriod { days } => {
                write!(f, "Expiry period must be positive, got {days} days")
            }
            Self::CreatedAtInFuture => {
                write!(f, "Creation timestamp must not be in the future")
            }
            Self::EvaluationFieldViolation {
                status,
                field,
                must_be_empty,
            } => {
                if *must_be_empty {
                    write!(
                        f,
                        "Evaluation field '{field}' must be empty when status is {status}"
                    )
                } else {
                    write!(
                        f,
                        "Evaluation field '{field}' must not be empty when status is {status}"
                    )
                }
            }
            Self::SectionAlreadySet { section } => {
                write!(f, "Section '{section}' was already set")
            }
            Self::DuplicateSectionEntry { section, key } => {
                write!(f, "Section '{section}' already contains an entry for '{key}'")
            }
            Self::AudienceFieldAlreadySet { field } => {
                write!(f, "Target audience field '{field}' was already set")
            }
            Self::IdeaAlreadyMigrated(id) => write!(f, "Idea {id} was already migrated"),
            Self::IdeaAlreadyArchived(id) => write!(f, "Idea {id} was already archived"),
        }
    }
}

impl std::error::Error for DomainError {}
