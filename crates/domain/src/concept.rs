// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::TimeProvider;
use crate::error::DomainError;
use crate::evaluation::Evaluation;
use crate::identity::Identity;
use crate::types::{Persona, Problem, ProductType, Region, Stage};
use chrono::{DateTime, Duration, Utc};
use std::str::FromStr;

/// The lifecycle state of a concept.
///
/// Explicit lifecycle states govern which operations are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConceptState {
    /// Initial state after submission.
    #[default]
    Draft,
    /// The AI evaluation has been attached.
    Evaluated,
    /// The founder reserved the concept into an idea.
    Accepted,
    /// The concept is no longer available for reservation.
    Archived,
    /// Sensitive content has been redacted. Terminal.
    Anonymized,
}

impl ConceptState {
    /// Returns the wire representation of this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Evaluated => "evaluated",
            Self::Accepted => "accepted",
            Self::Archived => "archived",
            Self::Anonymized => "anonymized",
        }
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// Valid transitions are:
    /// - Draft → Evaluated | Anonymized
    /// - Evaluated → Accepted | Anonymized
    /// - Accepted → Archived | Anonymized
    /// - Archived → Anonymized
    ///
    /// Anonymized is terminal.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Draft, Self::Evaluated)
                | (Self::Evaluated, Self::Accepted)
                | (Self::Accepted, Self::Archived)
                | (
                    Self::Draft | Self::Evaluated | Self::Accepted | Self::Archived,
                    Self::Anonymized
                )
        )
    }
}

impl FromStr for ConceptState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "evaluated" => Ok(Self::Evaluated),
            "accepted" => Ok(Self::Accepted),
            "archived" => Ok(Self::Archived),
            "anonymized" => Ok(Self::Anonymized),
            other => Err(DomainError::InvalidLifecycleState(other.to_string())),
        }
    }
}

impl std::fmt::Display for ConceptState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The concept aggregate root.
///
/// A concept is a founder's raw problem statement moving through the
/// lifecycle `draft → evaluated → accepted → archived → anonymized`. Every
/// mutation validates the transition first; the `was_*` flags are monotonic
/// and drive persistence deltas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    id: Identity,
    problem: Problem,
    persona: Option<Persona>,
    region: Region,
    product_type: Option<ProductType>,
    stage: Option<Stage>,
    created_at: DateTime<Utc>,
    expiry_period_in_days: i64,
    evaluation: Option<Evaluation>,
    idea_id: Option<Identity>,
    state: ConceptState,
    was_evaluated: bool,
    was_accepted: bool,
    was_archived: bool,
    was_anonymized: bool,
}

impl Concept {
    /// Creates a new concept in the `draft` state.
    ///
    /// When `created_at` is `None`, the injected time provider supplies it.
    ///
    /// # Errors
    ///
    /// Returns an error if `expiry_period_in_days` is not positive or if
    /// `created_at` lies in the future according to `time_provider`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Identity,
        problem: Problem,
        persona: Option<Persona>,
        region: Region,
        product_type: Option<ProductType>,
        stage: Option<Stage>,
        expiry_period_in_days: i64,
        time_provider: &dyn TimeProvider,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Self, DomainError> {
        if expiry_period_in_days <= 0 {
            return Err(DomainError::InvalidExpiryPeriod {
                days: expiry_period_in_days,
            });
        }
        let now: DateTime<Utc> = time_provider.now();
        let created_at: DateTime<Utc> = created_at.unwrap_or(now);
        if created_at > now {
            return Err(DomainError::CreatedAtInFuture);
        }
        Ok(Self {
            id,
            problem,
            persona,
            region,
            product_type,
            stage,
            created_at,
            expiry_period_in_days,
            evaluation: None,
            idea_id: None,
            state: ConceptState::Draft,
            was_evaluated: false,
            was_accepted: false,
            was_archived: false,
            was_anonymized: false,
        })
    }

    /// Attaches an evaluation and moves the concept to `evaluated`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` unless the concept is in `draft`.
    pub fn evaluate(&mut self, evaluation: Evaluation) -> Result<(), DomainError> {
        self.transition_to(ConceptState::Evaluated)?;
        self.evaluation = Some(evaluation);
        self.was_evaluated = true;
        Ok(())
    }

    /// Records the reserved idea and moves the concept to `accepted`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` unless the concept is in `evaluated`.
    pub fn accept(&mut self, idea_id: Identity) -> Result<(), DomainError> {
        self.transition_to(ConceptState::Accepted)?;
        self.idea_id = Some(idea_id);
        self.was_accepted = true;
        Ok(())
    }

    /// Moves the concept to `archived`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` unless the concept is in `accepted`.
    pub fn archive(&mut self) -> Result<(), DomainError> {
        self.transition_to(ConceptState::Archived)?;
        self.was_archived = true;
        Ok(())
    }

    /// Moves the concept to the terminal `anonymized` state.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` if the concept is already anonymized.
    pub fn anonymize(&mut self) -> Result<(), DomainError> {
        self.transition_to(ConceptState::Anonymized)?;
        self.was_anonymized = true;
        Ok(())
    }

    fn transition_to(&mut self, target: ConceptState) -> Result<(), DomainError> {
        if !self.state.can_transition_to(target) {
            return Err(DomainError::InvalidStateTransition {
                from: self.state,
                to: target,
            });
        }
        self.state = target;
        Ok(())
    }

    /// Whether the concept can still be reserved at the given instant.
    ///
    /// Archived and anonymized concepts are never available; otherwise the
    /// concept is available until the expiry period elapses.
    #[must_use]
    pub fn is_available(&self, now: DateTime<Utc>) -> bool {
        if self.was_archived || self.was_anonymized {
            return false;
        }
        now - self.created_at < Duration::days(self.expiry_period_in_days)
    }

    /// Returns the concept identity.
    #[must_use]
    pub const fn id(&self) -> Identity {
        self.id
    }

    /// Returns the problem statement.
    #[must_use]
    pub const fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Returns the persona, if provided.
    #[must_use]
    pub const fn persona(&self) -> Option<&Persona> {
        self.persona.as_ref()
    }

    /// Returns the target region.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Returns the product type, if provided.
    #[must_use]
    pub const fn product_type(&self) -> Option<ProductType> {
        self.product_type
    }

    /// Returns the product stage, if provided.
    #[must_use]
    pub const fn stage(&self) -> Option<Stage> {
        self.stage
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the expiry period in days.
    #[must_use]
    pub const fn expiry_period_in_days(&self) -> i64 {
        self.expiry_period_in_days
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ConceptState {
        self.state
    }

    /// Returns the attached evaluation.
    ///
    /// Callers are expected to check `was_evaluated()` first.
    ///
    /// # Errors
    ///
    /// Returns `ConceptNotEvaluated` if no evaluation is attached.
    pub fn evaluation(&self) -> Result<&Evaluation, DomainError> {
        self.evaluation
            .as_ref()
            .ok_or(DomainError::ConceptNotEvaluated(self.id))
    }

    /// Returns the reserved idea identity.
    ///
    /// Callers are expected to check `was_accepted()` first.
    ///
    /// # Errors
    ///
    /// Returns `ConceptNotAccepted` if the concept was never accepted.
    pub fn idea_id(&self) -> Result<Identity, DomainError> {
        self.idea_id.ok_or(DomainError::ConceptNotAccepted(self.id))
    }

    /// Whether an evaluation was ever attached. Monotonic.
    #[must_use]
    pub const fn was_evaluated(&self) -> bool {
        self.was_evaluated
    }

    /// Whether the concept was ever accepted. Monotonic.
    #[must_use]
    pub const fn was_accepted(&self) -> bool {
        self.was_accepted
    }

    /// Whether the concept was ever archived. Monotonic.
    #[must_use]
    pub const fn was_archived(&self) -> bool {
        self.was_archived
    }

    /// Whether the concept was anonymized. Monotonic.
    #[must_use]
    pub const fn was_anonymized(&self) -> bool {
        self.was_anonymized
    }
}
