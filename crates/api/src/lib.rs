// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer.
//!
//! Translates request DTOs into core commands and queries, and translates
//! domain, core and persistence errors into the API contract so internal
//! details never leak to HTTP clients.

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

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    accept_concept, anonymize_concept, archive_concept, get_concept, get_hypothesis_job, get_idea,
    get_reservation, submit_concept, submit_hypothesis_job,
};
pub use request_response::{
    AcceptConceptRequest, AcceptConceptResponse, ClarityScoreView, CompetitorAnalysisView,
    CompetitorView, ConceptView, ContentIdeaView, ContextAnalysisView, ElevatorPitchView,
    EvaluationView, HypothesisJobCreated, HypothesisJobRequest, HypothesisJobView,
    IdeaAudienceView, IdeaView, LanguageAnalysisView, MarketAnalysisView, ProductNameView,
    ReservationAudienceView, ReservationContent, ReservationView, SimpleResponse,
    SocialMediaCampaignView, SubmitConceptRequest, SubmitConceptResponse, SwotAnalysisView,
    TargetAudienceView, TestingPlanView, ValidationMetricsView, ValuePropositionView,
};
