// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::ports::{
    AudienceDetails, ConceptEvaluator, ConceptMutation, ConceptRepository, IdeaAnalyzer,
    IdeaMutation, IdeaRepository, ReservationGateway, ReservationOutcome, ReservationRequest,
};
use async_trait::async_trait;
use checkmvp_domain::{
    ClarityScore, Competitor, CompetitorAnalysis, Concept, ContentIdea, ContentIdeasForMarketing,
    ContextAnalysis, ElevatorPitch, Evaluation, EvaluationStatus, FixedTimeProvider,
    GoogleTrendsKeyword, Idea, Identity, LanguageAnalysis, MarketAnalysis, ProductName, Problem,
    Region, SocialMediaCampaign, SocialMediaCampaigns, SwotAnalysis, TargetAudience, TestingPlan,
    ValidationMetrics, ValueProposition,
};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

pub const TEST_PROBLEM: &str =
    "Freelance designers struggle to collect overdue invoices from international clients";

pub fn test_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().unwrap()
}

pub fn test_clock() -> FixedTimeProvider {
    FixedTimeProvider::new(test_instant())
}

pub fn create_well_defined_evaluation() -> Evaluation {
    let metrics = ValidationMetrics::new("10M-50M users", 7, 8, 6).unwrap();
    let audience = TargetAudience::new(
        "Freelance designers",
        "Independent designers billing overseas clients",
        vec![String::from("Chasing late payments")],
        metrics,
    )
    .unwrap();
    Evaluation::new(
        EvaluationStatus::WellDefined,
        Vec::new(),
        Vec::new(),
        vec![String::from("Late payments hurt cash flow")],
        Some(String::from("Invoice factoring services exist")),
        vec![audience],
        ClarityScore::new(8, 8, 7, 6, 7).unwrap(),
        LanguageAnalysis::new(vec![String::from("struggle")], Vec::new(), Vec::new()).unwrap(),
    )
    .unwrap()
}

pub fn create_draft_concept() -> Concept {
    Concept::new(
        Identity::generate(),
        Problem::new(TEST_PROBLEM).unwrap(),
        None,
        Region::Europe,
        None,
        None,
        3,
        &test_clock(),
        None,
    )
    .unwrap()
}

/// In-memory concept repository for handler and pipeline tests.
#[derive(Default)]
pub struct InMemoryConceptRepository {
    concepts: Mutex<HashMap<Identity, Concept>>,
}

impl InMemoryConceptRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConceptRepository for InMemoryConceptRepository {
    async fn add(&self, concept: &Concept) -> Result<(), CoreError> {
        self.concepts
            .lock()
            .unwrap()
            .insert(concept.id(), concept.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: Identity,
        apply: ConceptMutation<'_>,
    ) -> Result<Concept, CoreError> {
        let mut concepts = self.concepts.lock().unwrap();
        let concept = concepts
            .get_mut(&id)
            .ok_or(CoreError::ConceptNotFound(id))?;
        apply(concept)?;
        Ok(concept.clone())
    }

    async fn get_by_id(&self, id: Identity) -> Result<Concept, CoreError> {
        self.concepts
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(CoreError::ConceptNotFound(id))
    }

    async fn total(&self) -> Result<u64, CoreError> {
        Ok(self.concepts.lock().unwrap().len() as u64)
    }
}

/// In-memory idea repository for handler and pipeline tests.
#[derive(Default)]
pub struct InMemoryIdeaRepository {
    ideas: Mutex<HashMap<Identity, Idea>>,
}

impl InMemoryIdeaRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(&self) -> usize {
        self.ideas.lock().unwrap().len()
    }
}

#[async_trait]
impl IdeaRepository for InMemoryIdeaRepository {
    async fn add(&self, idea: &Idea) -> Result<(), CoreError> {
        self.ideas.lock().unwrap().insert(idea.id(), idea.clone());
        Ok(())
    }

    async fn update(&self, id: Identity, apply: IdeaMutation<'_>) -> Result<Idea, CoreError> {
        let mut ideas = self.ideas.lock().unwrap();
        let idea = ideas.get_mut(&id).ok_or(CoreError::IdeaNotFound(id))?;
        apply(idea)?;
        Ok(idea.clone())
    }

    async fn get_by_id(&self, id: Identity) -> Result<Idea, CoreError> {
        self.ideas
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(CoreError::IdeaNotFound(id))
    }
}

/// Evaluator stub returning a fixed evaluation.
pub struct StubEvaluator {
    evaluation: Evaluation,
}

impl StubEvaluator {
    pub fn well_defined() -> Self {
        Self {
            evaluation: create_well_defined_evaluation(),
        }
    }
}

#[async_trait]
impl ConceptEvaluator for StubEvaluator {
    async fn evaluate(&self, _concept: &Concept) -> Result<Evaluation, CoreError> {
        Ok(self.evaluation.clone())
    }
}

/// Analyzer stub returning small canned sections.
pub struct StubAnalyzer;

#[async_trait]
impl IdeaAnalyzer for StubAnalyzer {
    async fn value_proposition(&self, _idea: &Idea) -> Result<ValueProposition, CoreError> {
        Ok(ValueProposition::new(
            "Guaranteed payout within 48 hours",
            "Removes the collections burden",
            "Only tool combining invoicing with escrow",
        )?)
    }

    async fn market_analysis(&self, _idea: &Idea) -> Result<MarketAnalysis, CoreError> {
        Ok(MarketAnalysis::new(
            "Freelance market keeps growing",
            "Freelancers invoice manually",
            "No escrow-backed invoicing exists",
            "Bundle escrow with invoicing",
        )?)
    }

    async fn competitor_analysis(&self, _idea: &Idea) -> Result<CompetitorAnalysis, CoreError> {
        let competitor = Competitor::new(
            "InvoiceCo",
            "InvoiceCo Pro",
            "https://invoiceco.example",
            vec![String::from("Large user base")],
            vec![String::from("No escrow")],
        )?;
        Ok(CompetitorAnalysis::new(
            vec![competitor],
            "Incumbents focus on invoicing only",
            vec![String::from("Lead with the escrow guarantee")],
        )?)
    }

    async fn product_names(&self, _idea: &Idea) -> Result<Vec<ProductName>, CoreError> {
        Ok(vec![ProductName::new(
            "PaySure",
            vec![String::from("paysure.io")],
            "Conveys payment certainty",
            "Invoices that always land",
        )?])
    }

    async fn swot_analysis(&self, _idea: &Idea) -> Result<SwotAnalysis, CoreError> {
        Ok(SwotAnalysis::new(
            vec![String::from("First mover")],
            vec![String::from("No payments license")],
            vec![String::from("Growing market")],
            vec![String::from("Incumbent suites")],
        )?)
    }

    async fn elevator_pitches(&self, _idea: &Idea) -> Result<Vec<ElevatorPitch>, CoreError> {
        Ok(vec![ElevatorPitch::new(
            "Never chase an invoice again",
            "Freelancers wait months to get paid",
            "Escrow-backed invoicing",
            "Cash flow certainty",
            "Sign up for the beta",
        )?])
    }

    async fn google_trends_keywords(
        &self,
        _idea: &Idea,
    ) -> Result<Vec<GoogleTrendsKeyword>, CoreError> {
        Ok(vec![
            GoogleTrendsKeyword::new("freelance invoicing")?,
            GoogleTrendsKeyword::new("invoice escrow")?,
        ])
    }

    async fn content_ideas(&self, _idea: &Idea) -> Result<ContentIdeasForMarketing, CoreError> {
        Ok(ContentIdeasForMarketing::new(vec![ContentIdea::new(
            "blog",
            vec![String::from("How escrow fixes freelance cash flow")],
            vec![String::from("Organic search traffic")],
        )?])?)
    }

    async fn social_media_campaigns(
        &self,
        _idea: &Idea,
    ) -> Result<SocialMediaCampaigns, CoreError> {
        Ok(SocialMediaCampaigns::new(vec![SocialMediaCampaign::new(
            "linkedin",
            "Invoice horror stories thread",
            vec![String::from("#freelance")],
        )?])?)
    }

    async fn testing_plan(&self, _idea: &Idea) -> Result<TestingPlan, CoreError> {
        Ok(TestingPlan::new(
            vec![String::from("Designers will pre-pay for escrow")],
            vec![String::from("Run a landing page test")],
            vec![String::from("20 signups in two weeks")],
        )?)
    }

    async fn context_analysis(&self, _idea: &Idea) -> Result<ContextAnalysis, CoreError> {
        Ok(ContextAnalysis::new(
            "Cross-border invoice collection is slow and opaque",
            vec![String::from("EU late payment directive applies")],
            vec![String::from("Factoring services take 3-5%")],
            "High: cash flow gaps end freelance careers",
        )?)
    }

    async fn audience_details(&self, _idea: &Idea) -> Result<AudienceDetails, CoreError> {
        Ok(AudienceDetails {
            why: String::from("They feel the pain most acutely"),
            pain_points: vec![String::from("Unpredictable cash flow")],
            targeting_strategy: String::from("Partner with design communities"),
        })
    }

    async fn generate_hypotheses(&self, _content: &str) -> Result<String, CoreError> {
        Ok(String::from(
            "Hypothesis: designers will pay 2% for a guaranteed payout",
        ))
    }
}

/// Gateway stub with a configurable answer; records every request.
pub struct StubGateway {
    success: bool,
    message: String,
    pub requests: Mutex<Vec<ReservationRequest>>,
}

impl StubGateway {
    pub fn accepting() -> Self {
        Self {
            success: true,
            message: String::from("Reservation confirmed"),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ReservationGateway for StubGateway {
    async fn reserve(&self, request: &ReservationRequest) -> Result<ReservationOutcome, CoreError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(ReservationOutcome {
            success: self.success,
            message: self.message.clone(),
        })
    }
}
