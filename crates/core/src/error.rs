// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use checkmvp_domain::{DomainError, Identity};

/// Errors that can occur while handling commands, queries or events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// No concept exists with the given identity.
    ConceptNotFound(Identity),
    /// No idea exists with the given identity.
    IdeaNotFound(Identity),
    /// No hypothesis job exists with the given identity.
    HypothesisJobNotFound(Identity),
    /// The evaluation has no target audience at the requested index.
    TargetAudienceNotFound {
        /// The concept whose evaluation was inspected.
        concept_id: Identity,
        /// The zero-based index that was requested.
        index: usize,
    },
    /// The concept's reservation window has closed.
    ConceptUnavailable(Identity),
    /// The idea service declined the reservation.
    ReservationRejected(String),
    /// The storage adapter reported a failure.
    Repository(String),
    /// The AI service reported a failure.
    AiService(String),
    /// The reservation gateway could not be reached.
    Gateway(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::ConceptNotFound(id) => write!(f, "Concept {id} was not found"),
            Self::IdeaNotFound(id) => write!(f, "Idea {id} was not found"),
            Self::HypothesisJobNotFound(id) => {
                write!(f, "Hypothesis job {id} was not found")
            }
            Self::TargetAudienceNotFound { concept_id, index } => {
                write!(
                    f,
                    "Concept {concept_id} has no target audience at index {index}"
                )
            }
            Self::ConceptUnavailable(id) => {
                write!(f, "Concept {id} is no longer available for reservation")
            }
            Self::ReservationRejected(message) => {
                write!(f, "Reservation was rejected: {message}")
            }
            Self::Repository(message) => write!(f, "Repository failure: {message}"),
            Self::AiService(message) => write!(f, "AI service failure: {message}"),
            Self::Gateway(message) => write!(f, "Reservation gateway failure: {message}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
