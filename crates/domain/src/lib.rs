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

mod clock;
mod concept;
mod error;
mod evaluation;
mod idea;
mod idea_sections;
mod idea_target_audience;
mod identity;
mod metrics;
mod target_audience;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use clock::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
pub use concept::{Concept, ConceptState};
pub use error::DomainError;
pub use evaluation::{Evaluation, EvaluationStatus};
pub use idea::Idea;
pub use idea_sections::{
    Competitor, CompetitorAnalysis, ContentIdea, ContentIdeasForMarketing, ContextAnalysis,
    ElevatorPitch, GoogleTrendsKeyword, MarketAnalysis, ProductName, SocialMediaCampaign,
    SocialMediaCampaigns, SwotAnalysis, TestingPlan, ValueProposition,
};
pub use idea_target_audience::IdeaTargetAudience;
pub use identity::Identity;
pub use metrics::{ClarityScore, LanguageAnalysis, ValidationMetrics};
pub use target_audience::TargetAudience;
pub use types::{MarketExistence, Persona, Problem, ProductType, Region, Stage};
pub use validation::{validate_score, validate_string_list, validate_text};

/// Sentinel value substituted for redacted text during anonymization.
pub const REDACTED: &str = "[REDACTED]";
