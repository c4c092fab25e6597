// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use checkmvp::{
    ConceptMutation, ConceptRepository, CoreError, HypothesisJob, HypothesisJobStore,
    IdeaMutation, IdeaRepository, ReservationGateway, ReservationOutcome, ReservationRequest,
};
use checkmvp_domain::{
    ClarityScore, Concept, Evaluation, EvaluationStatus, FixedTimeProvider, Idea, Identity,
    LanguageAnalysis, TargetAudience, ValidationMetrics,
};
use chrono::{DateTime, TimeZone, Utc};

use crate::request_response::SubmitConceptRequest;

pub const TEST_PROBLEM: &str =
    "Freelance designers struggle to collect overdue invoices from international clients";

pub fn test_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().unwrap()
}

pub fn test_clock() -> FixedTimeProvider {
    FixedTimeProvider::new(test_instant())
}

pub fn submit_request() -> SubmitConceptRequest {
    SubmitConceptRequest {
        problem: TEST_PROBLEM.to_string(),
        persona: None,
        region: String::from("europe"),
        product_type: Some(String::from("saas")),
        stage: None,
    }
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

/// In-memory concept repository for handler tests.
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

/// In-memory idea repository for handler tests.
#[derive(Default)]
pub struct InMemoryIdeaRepository {
    ideas: Mutex<HashMap<Identity, Idea>>,
}

impl InMemoryIdeaRepository {
    pub fn new() -> Self {
        Self::default()
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

/// In-memory hypothesis job store for handler tests.
#[derive(Default)]
pub struct InMemoryJobStore {
    jobs: Mutex<HashMap<Identity, HypothesisJob>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HypothesisJobStore for InMemoryJobStore {
    async fn add(&self, job: &HypothesisJob) -> Result<(), CoreError> {
        self.jobs.lock().unwrap().insert(job.id(), job.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Identity) -> Result<HypothesisJob, CoreError> {
        self.jobs
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(CoreError::HypothesisJobNotFound(id))
    }

    async fn next_pending(&self) -> Result<Option<HypothesisJob>, CoreError> {
        Ok(None)
    }

    async fn complete(&self, id: Identity, _result: &str) -> Result<(), CoreError> {
        self.jobs
            .lock()
            .unwrap()
            .contains_key(&id)
            .then_some(())
            .ok_or(CoreError::HypothesisJobNotFound(id))
    }

    async fn fail(&self, id: Identity, _message: &str) -> Result<(), CoreError> {
        self.jobs
            .lock()
            .unwrap()
            .contains_key(&id)
            .then_some(())
            .ok_or(CoreError::HypothesisJobNotFound(id))
    }
}

/// Gateway stub with a configurable answer.
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
