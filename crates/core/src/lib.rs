// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod anonymization;
mod commands;
mod error;
mod event_bus;
mod events;
mod jobs;
mod ports;
mod queries;
mod subscribers;

#[cfg(test)]
mod tests;

pub use anonymization::anonymize_concept;
pub use commands::{
    AcceptConcept, SubmitConcept, accept_concept, anonymize_concept_by_id, archive_concept,
    submit_concept,
};
pub use error::CoreError;
pub use event_bus::{EventBus, EventSubscriber};
pub use events::{DomainEvent, EventKind};
pub use jobs::{
    HypothesisJob, HypothesisJobStatus, HypothesisJobStore, JOB_CONTENT_MAX_LENGTH,
    JOB_CONTENT_MIN_LENGTH,
};
pub use ports::{
    AudienceDetails, ConceptEvaluator, ConceptMutation, ConceptRepository, IdeaAnalyzer,
    IdeaMutation, IdeaRepository, ReservationGateway, ReservationOutcome, ReservationRequest,
};
pub use queries::{get_concept, get_idea, total_concepts};
pub use subscribers::{
    CompetitorAnalysisSubscriber, ConceptEvaluationSubscriber, ContentIdeasSubscriber,
    ContextAnalysisSubscriber, ElevatorPitchesSubscriber, GoogleTrendsKeywordsSubscriber,
    MarketAnalysisSubscriber, ProductNamesSubscriber, SocialMediaCampaignsSubscriber,
    SwotAnalysisSubscriber, TargetAudienceSubscriber, TestingPlanSubscriber,
    ValuePropositionSubscriber,
};
