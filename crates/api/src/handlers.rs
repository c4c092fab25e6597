// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Use-case functions bridging HTTP payloads and the core handlers.
//!
//! Each function translates a request DTO into domain types, runs the core
//! command or query, and translates both the result and any error back into
//! the API contract.

use std::str::FromStr;

use checkmvp::{
    AcceptConcept, ConceptRepository, EventBus, HypothesisJob, HypothesisJobStore, IdeaRepository,
    ReservationGateway, SubmitConcept,
};
use checkmvp_domain::{
    DomainError, Identity, Persona, Problem, ProductType, Region, Stage, TargetAudience,
    TimeProvider,
};
use tracing::debug;

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AcceptConceptRequest, AcceptConceptResponse, ConceptView, HypothesisJobCreated,
    HypothesisJobRequest, HypothesisJobView, IdeaView, ReservationAudienceView,
    ReservationContent, ReservationView, SimpleResponse, SubmitConceptRequest,
    SubmitConceptResponse, ValidationMetricsView,
};

fn parse_identity(value: &str) -> Result<Identity, ApiError> {
    Identity::new(value).map_err(translate_domain_error)
}

/// Submits a problem statement and runs the evaluation pipeline.
///
/// With the evaluation subscriber registered on the bus, the returned
/// concept is already evaluated.
///
/// # Errors
///
/// Returns `InvalidInput` for malformed fields, or the translated failure
/// of the repository, AI service or a subscriber.
pub async fn submit_concept(
    concepts: &dyn ConceptRepository,
    bus: &EventBus,
    time_provider: &dyn TimeProvider,
    expiry_period_in_days: i64,
    request: SubmitConceptRequest,
) -> Result<SubmitConceptResponse, ApiError> {
    let problem = Problem::new(&request.problem).map_err(translate_domain_error)?;
    let persona = request
        .persona
        .as_deref()
        .map(Persona::new)
        .transpose()
        .map_err(translate_domain_error)?;
    let region = Region::from_str(&request.region).map_err(translate_domain_error)?;
    let product_type = request
        .product_type
        .as_deref()
        .map(ProductType::from_str)
        .transpose()
        .map_err(translate_domain_error)?;
    let stage = request
        .stage
        .as_deref()
        .map(Stage::from_str)
        .transpose()
        .map_err(translate_domain_error)?;

    let concept_id = checkmvp::submit_concept(
        concepts,
        bus,
        time_provider,
        SubmitConcept {
            problem,
            persona,
            region,
            product_type,
            stage,
            expiry_period_in_days,
        },
    )
    .await
    .map_err(translate_core_error)?;

    Ok(SubmitConceptResponse {
        id: concept_id.to_string(),
        message: String::from("Concept submitted and evaluated"),
    })
}

/// Loads a concept with its evaluation, if present.
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed id or `ResourceNotFound` for an
/// unknown one.
pub async fn get_concept(
    concepts: &dyn ConceptRepository,
    concept_id: &str,
) -> Result<ConceptView, ApiError> {
    let id = parse_identity(concept_id)?;
    let concept = checkmvp::get_concept(concepts, id)
        .await
        .map_err(translate_core_error)?;
    Ok(ConceptView::from_concept(&concept))
}

/// Builds the reservation payload for an evaluated, available concept.
///
/// Each target audience carries an ordinal id the client passes back as
/// `target_audience_id` on accept.
///
/// # Errors
///
/// Returns a domain rule violation when the concept was archived or was
/// never evaluated.
pub async fn get_reservation(
    concepts: &dyn ConceptRepository,
    time_provider: &dyn TimeProvider,
    concept_id: &str,
) -> Result<ReservationView, ApiError> {
    let id = parse_identity(concept_id)?;
    let concept = checkmvp::get_concept(concepts, id)
        .await
        .map_err(translate_core_error)?;

    if concept.was_archived() {
        return Err(translate_domain_error(DomainError::ConceptArchived(id)));
    }
    if !concept.was_evaluated() {
        return Err(translate_domain_error(DomainError::ConceptNotEvaluated(id)));
    }
    if !concept.is_available(time_provider.now()) {
        return Ok(ReservationView {
            success: false,
            message: format!("Concept {id} is no longer available for reservation"),
            content: None,
        });
    }

    let evaluation = concept.evaluation().map_err(translate_domain_error)?;
    let target_audiences: Vec<ReservationAudienceView> = evaluation
        .target_audiences()
        .iter()
        .enumerate()
        .map(|(ordinal, audience)| audience_view(ordinal, audience))
        .collect();

    Ok(ReservationView {
        success: true,
        message: format!("Concept {id} is available for reservation"),
        content: Some(ReservationContent {
            problem: concept.problem().value().to_string(),
            persona: concept.persona().map(|persona| persona.value().to_string()),
            region: concept.region().as_str().to_string(),
            product_type: concept
                .product_type()
                .map(|kind| kind.as_str().to_string()),
            stage: concept.stage().map(|stage| stage.as_str().to_string()),
            market_existence: evaluation.market_existence().map(ToString::to_string),
            target_audiences,
        }),
    })
}

fn audience_view(ordinal: usize, audience: &TargetAudience) -> ReservationAudienceView {
    ReservationAudienceView {
        id: ordinal,
        segment: audience.segment().to_string(),
        description: audience.description().to_string(),
        challenges: audience.challenges().to_vec(),
        why: None,
        pain_points: None,
        targeting_strategy: None,
        validation_metrics: ValidationMetricsView {
            market_size: audience.validation_metrics().market_size().to_string(),
            accessibility: audience.validation_metrics().accessibility(),
            pain_point_intensity: audience.validation_metrics().pain_point_intensity(),
            willingness_to_pay: audience.validation_metrics().willingness_to_pay(),
        },
    }
}

/// Runs the reservation flow for an evaluated concept.
///
/// With the enrichment subscribers registered on the bus, all analysis
/// sections are computed before this returns.
///
/// # Errors
///
/// Returns the translated core failure: not found, not evaluated,
/// unavailable, unknown audience id, or a rejected reservation.
pub async fn accept_concept(
    concepts: &dyn ConceptRepository,
    ideas: &dyn IdeaRepository,
    gateway: &dyn ReservationGateway,
    bus: &EventBus,
    time_provider: &dyn TimeProvider,
    concept_id: &str,
    request: AcceptConceptRequest,
) -> Result<AcceptConceptResponse, ApiError> {
    let id = parse_identity(concept_id)?;
    let idea_id = checkmvp::accept_concept(
        concepts,
        ideas,
        gateway,
        bus,
        time_provider,
        AcceptConcept {
            concept_id: id,
            target_audience_index: request.target_audience_id,
            statement: request.statement,
            hypotheses: request.hypotheses,
        },
    )
    .await
    .map_err(translate_core_error)?;
    debug!(concept_id = %id, idea_id = %idea_id, "reservation accepted");

    Ok(AcceptConceptResponse {
        idea_id: idea_id.to_string(),
        message: String::from("Concept reserved"),
    })
}

/// Moves an accepted concept to `archived`.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown id or a domain rule violation
/// for an invalid transition.
pub async fn archive_concept(
    concepts: &dyn ConceptRepository,
    concept_id: &str,
) -> Result<SimpleResponse, ApiError> {
    let id = parse_identity(concept_id)?;
    checkmvp::archive_concept(concepts, id)
        .await
        .map_err(translate_core_error)?;
    Ok(SimpleResponse {
        success: true,
        message: format!("Concept {id} archived"),
    })
}

/// Redacts a concept's sensitive content.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown id.
pub async fn anonymize_concept(
    concepts: &dyn ConceptRepository,
    time_provider: &dyn TimeProvider,
    concept_id: &str,
) -> Result<SimpleResponse, ApiError> {
    let id = parse_identity(concept_id)?;
    checkmvp::anonymize_concept_by_id(concepts, time_provider, id)
        .await
        .map_err(translate_core_error)?;
    Ok(SimpleResponse {
        success: true,
        message: format!("Concept {id} anonymized"),
    })
}

/// Loads an idea with every enrichment section present so far.
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed id or `ResourceNotFound` for an
/// unknown one.
pub async fn get_idea(ideas: &dyn IdeaRepository, idea_id: &str) -> Result<IdeaView, ApiError> {
    let id = parse_identity(idea_id)?;
    let idea = checkmvp::get_idea(ideas, id)
        .await
        .map_err(translate_core_error)?;
    Ok(IdeaView::from_idea(&idea))
}

/// Queues a hypothesis generation job for the background worker.
///
/// # Errors
///
/// Returns `InvalidInput` when the content is outside the 20-1000 character
/// window.
pub async fn submit_hypothesis_job(
    jobs: &dyn HypothesisJobStore,
    time_provider: &dyn TimeProvider,
    request: HypothesisJobRequest,
) -> Result<HypothesisJobCreated, ApiError> {
    let job = HypothesisJob::new(Identity::generate(), &request.content, time_provider.now())
        .map_err(translate_core_error)?;
    jobs.add(&job).await.map_err(translate_core_error)?;
    Ok(HypothesisJobCreated {
        id: job.id().to_string(),
    })
}

/// Polls a hypothesis job's status and result.
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed id or `ResourceNotFound` for an
/// unknown one.
pub async fn get_hypothesis_job(
    jobs: &dyn HypothesisJobStore,
    job_id: &str,
) -> Result<HypothesisJobView, ApiError> {
    let id = parse_identity(job_id)?;
    let job = jobs.get_by_id(id).await.map_err(translate_core_error)?;
    Ok(HypothesisJobView::from_job(&job))
}
