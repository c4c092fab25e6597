// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::anonymization::anonymize_concept;
use crate::error::CoreError;
use crate::event_bus::EventBus;
use crate::events::DomainEvent;
use crate::ports::{ConceptRepository, IdeaRepository, ReservationGateway, ReservationRequest};
use checkmvp_domain::{
    Concept, ConceptState, DomainError, Idea, IdeaTargetAudience, Identity, MarketExistence,
    Persona, Problem, ProductType, Region, Stage, TimeProvider,
};
use tracing::info;

/// Command: submit a new problem statement.
#[derive(Debug, Clone)]
pub struct SubmitConcept {
    /// The founder's problem statement.
    pub problem: Problem,
    /// The target persona, if provided.
    pub persona: Option<Persona>,
    /// The target region.
    pub region: Region,
    /// The product type, if provided.
    pub product_type: Option<ProductType>,
    /// The product stage, if provided.
    pub stage: Option<Stage>,
    /// How many days the concept stays reservable.
    pub expiry_period_in_days: i64,
}

/// Creates a draft concept, persists it and publishes `ConceptCreated`.
///
/// With the evaluation subscriber registered, the AI evaluation runs
/// synchronously inside this call.
///
/// # Errors
///
/// Returns a domain violation for invalid input, or whatever the
/// repository or a subscriber fails with.
pub async fn submit_concept(
    concepts: &dyn ConceptRepository,
    bus: &EventBus,
    time_provider: &dyn TimeProvider,
    command: SubmitConcept,
) -> Result<Identity, CoreError> {
    let concept_id = Identity::generate();
    let concept = Concept::new(
        concept_id,
        command.problem,
        command.persona,
        command.region,
        command.product_type,
        command.stage,
        command.expiry_period_in_days,
        time_provider,
        None,
    )?;
    concepts.add(&concept).await?;
    info!(concept_id = %concept_id, "concept submitted");
    bus.publish(&DomainEvent::ConceptCreated { concept_id })
        .await?;
    Ok(concept_id)
}

/// Command: reserve an evaluated concept into an idea.
#[derive(Debug, Clone)]
pub struct AcceptConcept {
    /// The concept to reserve.
    pub concept_id: Identity,
    /// Zero-based index into the evaluation's target audiences.
    pub target_audience_index: usize,
    /// The founder's reservation statement.
    pub statement: String,
    /// The founder's hypotheses.
    pub hypotheses: Vec<String>,
}

/// Runs the reservation flow and returns the new idea's identity.
///
/// The concept must be evaluated and still within its availability
/// window. The chosen target audience seeds the idea, the idea service is
/// notified, the idea is persisted, the concept transitions to `accepted`,
/// and `ConceptAccepted` then `IdeaCreated` are published. With the
/// enrichment subscribers registered, all analysis sections are computed
/// inside this call.
///
/// # Errors
///
/// Returns `ConceptNotFound`, `ConceptNotEvaluated` (as a domain
/// violation), `ConceptUnavailable`, `TargetAudienceNotFound`,
/// `ReservationRejected`, or whatever the gateway, repositories or a
/// subscriber fails with.
pub async fn accept_concept(
    concepts: &dyn ConceptRepository,
    ideas: &dyn IdeaRepository,
    gateway: &dyn ReservationGateway,
    bus: &EventBus,
    time_provider: &dyn TimeProvider,
    command: AcceptConcept,
) -> Result<Identity, CoreError> {
    let concept = concepts.get_by_id(command.concept_id).await?;
    if !concept.is_available(time_provider.now()) {
        return Err(CoreError::ConceptUnavailable(command.concept_id));
    }
    let evaluation = concept.evaluation()?;
    // The transition is re-checked inside the update below, but it must
    // also hold before the gateway reservation and the idea insert, or a
    // doomed accept (an already-accepted concept is still available)
    // would leave those side effects behind.
    if !concept.state().can_transition_to(ConceptState::Accepted) {
        return Err(DomainError::InvalidStateTransition {
            from: concept.state(),
            to: ConceptState::Accepted,
        }
        .into());
    }
    let audience = evaluation
        .target_audiences()
        .get(command.target_audience_index)
        .ok_or(CoreError::TargetAudienceNotFound {
            concept_id: command.concept_id,
            index: command.target_audience_index,
        })?;
    let market_existence = MarketExistence::new(evaluation.market_existence().unwrap_or_default())?;

    let idea_id = Identity::generate();
    let idea_audience = IdeaTargetAudience::new(
        Identity::generate(),
        idea_id,
        audience.segment(),
        audience.description(),
        audience.challenges().to_vec(),
    )?;
    let target_audience_id = idea_audience.id();
    let idea = Idea::new(
        idea_id,
        concept.id(),
        concept.problem().clone(),
        market_existence,
        concept.region(),
        concept.product_type(),
        concept.stage(),
        &command.statement,
        command.hypotheses,
        idea_audience,
    )?;

    let outcome = gateway
        .reserve(&ReservationRequest {
            idea_id,
            concept_id: concept.id(),
            target_audience_id,
            statement: idea.statement().to_string(),
            hypotheses: idea.hypotheses().to_vec(),
        })
        .await?;
    if !outcome.success {
        return Err(CoreError::ReservationRejected(outcome.message));
    }

    ideas.add(&idea).await?;
    concepts
        .update(command.concept_id, &move |concept: &mut Concept| {
            concept.accept(idea_id)
        })
        .await?;
    info!(concept_id = %command.concept_id, idea_id = %idea_id, "concept reserved");

    bus.publish(&DomainEvent::ConceptAccepted {
        concept_id: command.concept_id,
        idea_id,
    })
    .await?;
    bus.publish(&DomainEvent::IdeaCreated { idea_id }).await?;
    Ok(idea_id)
}

/// Moves an accepted concept to `archived`.
///
/// # Errors
///
/// Returns `ConceptNotFound` or an invalid-transition domain violation.
pub async fn archive_concept(
    concepts: &dyn ConceptRepository,
    concept_id: Identity,
) -> Result<(), CoreError> {
    concepts
        .update(concept_id, &|concept: &mut Concept| concept.archive())
        .await?;
    info!(concept_id = %concept_id, "concept archived");
    Ok(())
}

/// Redacts a concept's sensitive content in place.
///
/// Idempotent at the service level: anonymizing an already-anonymized
/// concept succeeds without changing it.
///
/// # Errors
///
/// Returns `ConceptNotFound` or a domain violation from the rebuild.
pub async fn anonymize_concept_by_id(
    concepts: &dyn ConceptRepository,
    time_provider: &dyn TimeProvider,
    concept_id: Identity,
) -> Result<(), CoreError> {
    concepts
        .update(concept_id, &|concept: &mut Concept| {
            *concept = anonymize_concept(concept, time_provider)?;
            Ok(())
        })
        .await?;
    info!(concept_id = %concept_id, "concept anonymized");
    Ok(())
}
