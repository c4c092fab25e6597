// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use async_trait::async_trait;
use checkmvp_domain::{
    CompetitorAnalysis, Concept, ContentIdeasForMarketing, ContextAnalysis, DomainError,
    ElevatorPitch, Evaluation, GoogleTrendsKeyword, Idea, Identity, MarketAnalysis, ProductName,
    SocialMediaCampaigns, SwotAnalysis, TestingPlan, ValueProposition,
};

/// Mutation applied to a concept inside a repository transaction.
pub type ConceptMutation<'a> = &'a (dyn Fn(&mut Concept) -> Result<(), DomainError> + Send + Sync);

/// Mutation applied to an idea inside a repository transaction.
pub type IdeaMutation<'a> = &'a (dyn Fn(&mut Idea) -> Result<(), DomainError> + Send + Sync);

/// Storage port for concept aggregates.
#[async_trait]
pub trait ConceptRepository: Send + Sync {
    /// Persists a new concept.
    ///
    /// # Errors
    ///
    /// Returns `Repository` on storage failure.
    async fn add(&self, concept: &Concept) -> Result<(), CoreError>;

    /// Loads the concept, applies the mutation and persists the result in
    /// one transaction. Returns the updated aggregate.
    ///
    /// # Errors
    ///
    /// Returns `ConceptNotFound` for an unknown id, a domain violation
    /// from the mutation, or `Repository` on storage failure.
    async fn update(&self, id: Identity, apply: ConceptMutation<'_>)
    -> Result<Concept, CoreError>;

    /// Loads a concept by id.
    ///
    /// # Errors
    ///
    /// Returns `ConceptNotFound` for an unknown id.
    async fn get_by_id(&self, id: Identity) -> Result<Concept, CoreError>;

    /// Counts all stored concepts.
    ///
    /// # Errors
    ///
    /// Returns `Repository` on storage failure.
    async fn total(&self) -> Result<u64, CoreError>;
}

/// Storage port for idea aggregates.
#[async_trait]
pub trait IdeaRepository: Send + Sync {
    /// Persists a new idea.
    ///
    /// # Errors
    ///
    /// Returns `Repository` on storage failure.
    async fn add(&self, idea: &Idea) -> Result<(), CoreError>;

    /// Loads the idea, applies the mutation and persists the result in one
    /// transaction. Returns the updated aggregate.
    ///
    /// # Errors
    ///
    /// Returns `IdeaNotFound` for an unknown id, a domain violation from
    /// the mutation, or `Repository` on storage failure.
    async fn update(&self, id: Identity, apply: IdeaMutation<'_>) -> Result<Idea, CoreError>;

    /// Loads an idea by id.
    ///
    /// # Errors
    ///
    /// Returns `IdeaNotFound` for an unknown id.
    async fn get_by_id(&self, id: Identity) -> Result<Idea, CoreError>;
}

/// AI port that turns a draft concept into an evaluation.
#[async_trait]
pub trait ConceptEvaluator: Send + Sync {
    /// Evaluates the concept's problem statement.
    ///
    /// # Errors
    ///
    /// Returns `AiService` on transport or parse failure, or a domain
    /// violation if the AI payload fails domain validation.
    async fn evaluate(&self, concept: &Concept) -> Result<Evaluation, CoreError>;
}

/// Write-once detail fields for an idea's target audience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudienceDetails {
    /// Why this audience is worth targeting.
    pub why: String,
    /// Audience-specific pain points.
    pub pain_points: Vec<String>,
    /// How to reach the audience.
    pub targeting_strategy: String,
}

/// AI port that computes idea enrichment sections.
///
/// One method per section so each subscriber depends on exactly the
/// capability it uses.
#[async_trait]
pub trait IdeaAnalyzer: Send + Sync {
    /// Derives the value proposition section.
    ///
    /// # Errors
    ///
    /// Returns `AiService` on transport or parse failure.
    async fn value_proposition(&self, idea: &Idea) -> Result<ValueProposition, CoreError>;

    /// Derives the market analysis section.
    ///
    /// # Errors
    ///
    /// Returns `AiService` on transport or parse failure.
    async fn market_analysis(&self, idea: &Idea) -> Result<MarketAnalysis, CoreError>;

    /// Derives the competitor analysis section.
    ///
    /// # Errors
    ///
    /// Returns `AiService` on transport or parse failure.
    async fn competitor_analysis(&self, idea: &Idea) -> Result<CompetitorAnalysis, CoreError>;

    /// Suggests product names.
    ///
    /// # Errors
    ///
    /// Returns `AiService` on transport or parse failure.
    async fn product_names(&self, idea: &Idea) -> Result<Vec<ProductName>, CoreError>;

    /// Derives the SWOT analysis section.
    ///
    /// # Errors
    ///
    /// Returns `AiService` on transport or parse failure.
    async fn swot_analysis(&self, idea: &Idea) -> Result<SwotAnalysis, CoreError>;

    /// Suggests elevator pitches.
    ///
    /// # Errors
    ///
    /// Returns `AiService` on transport or parse failure.
    async fn elevator_pitches(&self, idea: &Idea) -> Result<Vec<ElevatorPitch>, CoreError>;

    /// Suggests Google Trends keywords.
    ///
    /// # Errors
    ///
    /// Returns `AiService` on transport or parse failure.
    async fn google_trends_keywords(
        &self,
        idea: &Idea,
    ) -> Result<Vec<GoogleTrendsKeyword>, CoreError>;

    /// Derives the content marketing section.
    ///
    /// # Errors
    ///
    /// Returns `AiService` on transport or parse failure.
    async fn content_ideas(&self, idea: &Idea) -> Result<ContentIdeasForMarketing, CoreError>;

    /// Derives the social media campaigns section.
    ///
    /// # Errors
    ///
    /// Returns `AiService` on transport or parse failure.
    async fn social_media_campaigns(&self, idea: &Idea)
    -> Result<SocialMediaCampaigns, CoreError>;

    /// Derives the testing plan section.
    ///
    /// # Errors
    ///
    /// Returns `AiService` on transport or parse failure.
    async fn testing_plan(&self, idea: &Idea) -> Result<TestingPlan, CoreError>;

    /// Derives the context analysis section.
    ///
    /// # Errors
    ///
    /// Returns `AiService` on transport or parse failure.
    async fn context_analysis(&self, idea: &Idea) -> Result<ContextAnalysis, CoreError>;

    /// Fills in the target audience detail fields.
    ///
    /// # Errors
    ///
    /// Returns `AiService` on transport or parse failure.
    async fn audience_details(&self, idea: &Idea) -> Result<AudienceDetails, CoreError>;

    /// Generates testable hypotheses for free-form content.
    ///
    /// # Errors
    ///
    /// Returns `AiService` on transport or parse failure.
    async fn generate_hypotheses(&self, content: &str) -> Result<String, CoreError>;
}

/// The reservation contract sent to the idea service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    /// The idea being created.
    pub idea_id: Identity,
    /// The concept being reserved.
    pub concept_id: Identity,
    /// The idea-scoped target audience.
    pub target_audience_id: Identity,
    /// The founder's reservation statement.
    pub statement: String,
    /// The founder's hypotheses.
    pub hypotheses: Vec<String>,
}

/// The idea service's answer to a reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationOutcome {
    /// Whether the reservation was accepted.
    pub success: bool,
    /// A human-readable explanation.
    pub message: String,
}

/// Outbound port notifying the idea service of a reservation.
#[async_trait]
pub trait ReservationGateway: Send + Sync {
    /// Posts the reservation.
    ///
    /// # Errors
    ///
    /// Returns `Gateway` when the service cannot be reached or answers
    /// with a malformed payload.
    async fn reserve(&self, request: &ReservationRequest) -> Result<ReservationOutcome, CoreError>;
}
