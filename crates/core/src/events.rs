// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use checkmvp_domain::Identity;

/// Events raised by command handlers and subscribers.
///
/// Events are in-process only. Publishing one runs its subscribers inside
/// the publisher's call stack; nothing is stored or retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainEvent {
    /// A founder submitted a new concept.
    ConceptCreated {
        /// The submitted concept.
        concept_id: Identity,
    },
    /// The AI evaluation was attached to a concept.
    ConceptEvaluated {
        /// The evaluated concept.
        concept_id: Identity,
    },
    /// A concept was reserved into an idea.
    ConceptAccepted {
        /// The accepted concept.
        concept_id: Identity,
        /// The idea created by the reservation.
        idea_id: Identity,
    },
    /// An idea was created and is ready for enrichment.
    IdeaCreated {
        /// The new idea.
        idea_id: Identity,
    },
    /// The idea's target audience details were filled in.
    TargetAudienceEvaluated {
        /// The enriched idea.
        idea_id: Identity,
    },
}

impl DomainEvent {
    /// Returns the kind used as the subscription key.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::ConceptCreated { .. } => EventKind::ConceptCreated,
            Self::ConceptEvaluated { .. } => EventKind::ConceptEvaluated,
            Self::ConceptAccepted { .. } => EventKind::ConceptAccepted,
            Self::IdeaCreated { .. } => EventKind::IdeaCreated,
            Self::TargetAudienceEvaluated { .. } => EventKind::TargetAudienceEvaluated,
        }
    }
}

/// Discriminant of [`DomainEvent`], used to key subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// See [`DomainEvent::ConceptCreated`].
    ConceptCreated,
    /// See [`DomainEvent::ConceptEvaluated`].
    ConceptEvaluated,
    /// See [`DomainEvent::ConceptAccepted`].
    ConceptAccepted,
    /// See [`DomainEvent::IdeaCreated`].
    IdeaCreated,
    /// See [`DomainEvent::TargetAudienceEvaluated`].
    TargetAudienceEvaluated,
}

impl EventKind {
    /// Returns the event kind name for logging.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ConceptCreated => "concept_created",
            Self::ConceptEvaluated => "concept_evaluated",
            Self::ConceptAccepted => "concept_accepted",
            Self::IdeaCreated => "idea_created",
            Self::TargetAudienceEvaluated => "target_audience_evaluated",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
