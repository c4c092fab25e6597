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
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use checkmvp::{
    CompetitorAnalysisSubscriber, ConceptEvaluationSubscriber, ConceptEvaluator,
    ConceptRepository, ContentIdeasSubscriber, ContextAnalysisSubscriber, CoreError,
    ElevatorPitchesSubscriber, EventBus, EventKind, GoogleTrendsKeywordsSubscriber,
    HypothesisJobStore, IdeaAnalyzer, IdeaRepository, MarketAnalysisSubscriber,
    ProductNamesSubscriber, ReservationGateway, SocialMediaCampaignsSubscriber,
    SwotAnalysisSubscriber, TargetAudienceSubscriber, TestingPlanSubscriber,
    ValuePropositionSubscriber,
};
use checkmvp_api::{
    AcceptConceptRequest, ApiError, HypothesisJobRequest, SubmitConceptRequest, accept_concept,
    anonymize_concept, archive_concept, get_concept, get_hypothesis_job, get_idea,
    get_reservation, submit_concept, submit_hypothesis_job,
};
use checkmvp_domain::{SystemTimeProvider, TimeProvider};
use checkmvp_persistence::Persistence;
use checkmvp_services::{HttpReservationGateway, OpenAiConfig, OpenAiService};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// How long the background worker sleeps when no job is pending.
const WORKER_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// CheckMVP Server - HTTP server for the concept validation service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Base URL of the OpenAI-compatible chat completions endpoint
    #[arg(long, default_value = "https://api.openai.com")]
    ai_base_url: String,

    /// API key for the AI endpoint. Falls back to the `OPENAI_API_KEY`
    /// environment variable when omitted.
    #[arg(long)]
    ai_api_key: Option<String>,

    /// Model identifier sent with every AI request
    #[arg(long, default_value = "gpt-4o-mini")]
    ai_model: String,

    /// Base URL of the idea service receiving reservations
    #[arg(long, default_value = "http://localhost:4000")]
    idea_service_url: String,

    /// Days a concept stays reservable after creation
    #[arg(long, default_value_t = 3)]
    expiry_days: i64,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// Concept aggregate storage.
    concepts: Arc<dyn ConceptRepository>,
    /// Idea aggregate storage.
    ideas: Arc<dyn IdeaRepository>,
    /// Hypothesis job queue storage.
    jobs: Arc<dyn HypothesisJobStore>,
    /// Outbound reservation gateway.
    gateway: Arc<dyn ReservationGateway>,
    /// The event bus carrying the enrichment pipeline.
    bus: Arc<EventBus>,
    /// Clock injected into all time-dependent operations.
    time_provider: Arc<dyn TimeProvider>,
    /// Days a concept stays reservable after creation.
    expiry_period_in_days: i64,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error message.
    error: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            // Clients see the bare message; the field/rule context stays
            // in the error's Display form for logs.
            ApiError::InvalidInput { ref message, .. }
            | ApiError::DomainRuleViolation { ref message, .. } => {
                debug!(error = %err, "Request rejected");
                Self {
                    status: StatusCode::BAD_REQUEST,
                    message: message.clone(),
                }
            }
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { message } => {
                error!(error = %message, "Internal error while handling request");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: String::from("Internal server error"),
                }
            }
        }
    }
}

/// Handler for POST `/api/concepts` endpoint.
///
/// Submits a problem statement and runs the synchronous evaluation
/// pipeline before responding.
async fn handle_submit_concept(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<SubmitConceptRequest>,
) -> Result<impl IntoResponse, HttpError> {
    info!(region = %req.region, "Handling submit_concept request");

    let response = submit_concept(
        state.concepts.as_ref(),
        &state.bus,
        state.time_provider.as_ref(),
        state.expiry_period_in_days,
        req,
    )
    .await?;

    info!(concept_id = %response.id, "Concept submitted");
    Ok(Json(response))
}

/// Handler for GET `/api/concepts/{id}` endpoint.
async fn handle_get_concept(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let view = get_concept(state.concepts.as_ref(), &id).await?;
    Ok(Json(view))
}

/// Handler for GET `/api/concepts/{id}/reservation` endpoint.
///
/// Returns the reservation payload for an evaluated, still-available
/// concept.
async fn handle_get_reservation(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    info!(concept_id = %id, "Handling get_reservation request");

    let view = get_reservation(state.concepts.as_ref(), state.time_provider.as_ref(), &id).await?;
    Ok(Json(view))
}

/// Handler for POST `/api/concepts/{id}/accept` endpoint.
///
/// Runs the reservation flow and returns the created idea id.
async fn handle_accept_concept(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AcceptConceptRequest>,
) -> Result<impl IntoResponse, HttpError> {
    info!(
        concept_id = %id,
        target_audience_id = req.target_audience_id,
        "Handling accept_concept request"
    );

    let response = accept_concept(
        state.concepts.as_ref(),
        state.ideas.as_ref(),
        state.gateway.as_ref(),
        &state.bus,
        state.time_provider.as_ref(),
        &id,
        req,
    )
    .await?;

    info!(idea_id = %response.idea_id, "Concept accepted");
    Ok(Json(response))
}

/// Handler for POST `/api/concepts/{id}/archive` endpoint.
async fn handle_archive_concept(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    info!(concept_id = %id, "Handling archive_concept request");

    let response = archive_concept(state.concepts.as_ref(), &id).await?;
    Ok(Json(response))
}

/// Handler for POST `/api/concepts/{id}/anonymize` endpoint.
async fn handle_anonymize_concept(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    info!(concept_id = %id, "Handling anonymize_concept request");

    let response =
        anonymize_concept(state.concepts.as_ref(), state.time_provider.as_ref(), &id).await?;
    Ok(Json(response))
}

/// Handler for GET `/api/ideas/{id}` endpoint.
async fn handle_get_idea(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let view = get_idea(state.ideas.as_ref(), &id).await?;
    Ok(Json(view))
}

/// Handler for POST `/api/apps/hypothesis_generator` endpoint.
///
/// Persists a pending job row for the background worker and answers
/// 201 with the job id.
async fn handle_submit_hypothesis_job(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<HypothesisJobRequest>,
) -> Result<impl IntoResponse, HttpError> {
    info!("Handling submit_hypothesis_job request");

    let created =
        submit_hypothesis_job(state.jobs.as_ref(), state.time_provider.as_ref(), req).await?;

    info!(job_id = %created.id, "Hypothesis job queued");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for GET `/api/apps/hypothesis_generator/{id}` endpoint.
///
/// Polling contract: `{status: pending|completed|error, result?}`.
async fn handle_get_hypothesis_job(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let view = get_hypothesis_job(state.jobs.as_ref(), &id).await?;
    Ok(Json(view))
}

/// Wires the enrichment pipeline onto a fresh event bus.
///
/// `ConceptCreated` triggers the AI evaluation. `IdeaCreated` fans out to
/// the ten section subscribers plus the target audience subscriber, whose
/// follow-up event triggers the context analysis.
fn build_event_bus(
    concepts: Arc<dyn ConceptRepository>,
    ideas: Arc<dyn IdeaRepository>,
    evaluator: Arc<dyn ConceptEvaluator>,
    analyzer: Arc<dyn IdeaAnalyzer>,
) -> EventBus {
    let mut bus = EventBus::new();
    bus.subscribe(
        EventKind::ConceptCreated,
        Arc::new(ConceptEvaluationSubscriber::new(concepts, evaluator)),
    );
    bus.subscribe(
        EventKind::IdeaCreated,
        Arc::new(ValuePropositionSubscriber::new(
            Arc::clone(&ideas),
            Arc::clone(&analyzer),
        )),
    );
    bus.subscribe(
        EventKind::IdeaCreated,
        Arc::new(MarketAnalysisSubscriber::new(
            Arc::clone(&ideas),
            Arc::clone(&analyzer),
        )),
    );
    bus.subscribe(
        EventKind::IdeaCreated,
        Arc::new(CompetitorAnalysisSubscriber::new(
            Arc::clone(&ideas),
            Arc::clone(&analyzer),
        )),
    );
    bus.subscribe(
        EventKind::IdeaCreated,
        Arc::new(ProductNamesSubscriber::new(
            Arc::clone(&ideas),
            Arc::clone(&analyzer),
        )),
    );
    bus.subscribe(
        EventKind::IdeaCreated,
        Arc::new(SwotAnalysisSubscriber::new(
            Arc::clone(&ideas),
            Arc::clone(&analyzer),
        )),
    );
    bus.subscribe(
        EventKind::IdeaCreated,
        Arc::new(ElevatorPitchesSubscriber::new(
            Arc::clone(&ideas),
            Arc::clone(&analyzer),
        )),
    );
    bus.subscribe(
        EventKind::IdeaCreated,
        Arc::new(GoogleTrendsKeywordsSubscriber::new(
            Arc::clone(&ideas),
            Arc::clone(&analyzer),
        )),
    );
    bus.subscribe(
        EventKind::IdeaCreated,
        Arc::new(ContentIdeasSubscriber::new(
            Arc::clone(&ideas),
            Arc::clone(&analyzer),
        )),
    );
    bus.subscribe(
        EventKind::IdeaCreated,
        Arc::new(SocialMediaCampaignsSubscriber::new(
            Arc::clone(&ideas),
            Arc::clone(&analyzer),
        )),
    );
    bus.subscribe(
        EventKind::IdeaCreated,
        Arc::new(TestingPlanSubscriber::new(
            Arc::clone(&ideas),
            Arc::clone(&analyzer),
        )),
    );
    bus.subscribe(
        EventKind::IdeaCreated,
        Arc::new(TargetAudienceSubscriber::new(
            Arc::clone(&ideas),
            Arc::clone(&analyzer),
        )),
    );
    bus.subscribe(
        EventKind::TargetAudienceEvaluated,
        Arc::new(ContextAnalysisSubscriber::new(ideas, analyzer)),
    );
    bus
}

/// Claims at most one pending hypothesis job and resolves it.
///
/// Returns `Ok(true)` when a job was processed, `Ok(false)` when the
/// queue was empty.
async fn process_next_job(
    jobs: &dyn HypothesisJobStore,
    analyzer: &dyn IdeaAnalyzer,
) -> Result<bool, CoreError> {
    let Some(job) = jobs.next_pending().await? else {
        return Ok(false);
    };

    info!(job_id = %job.id(), "Processing hypothesis job");
    match analyzer.generate_hypotheses(job.content()).await {
        Ok(result) => jobs.complete(job.id(), &result).await?,
        Err(err) => {
            error!(job_id = %job.id(), error = %err, "Hypothesis generation failed");
            jobs.fail(job.id(), &err.to_string()).await?;
        }
    }
    Ok(true)
}

/// Spawns the background worker loop for hypothesis jobs.
fn spawn_hypothesis_worker(
    jobs: Arc<dyn HypothesisJobStore>,
    analyzer: Arc<dyn IdeaAnalyzer>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match process_next_job(jobs.as_ref(), analyzer.as_ref()).await {
                Ok(true) => {}
                Ok(false) => tokio::time::sleep(WORKER_POLL_INTERVAL).await,
                Err(err) => {
                    error!(error = %err, "Hypothesis worker could not claim a job");
                    tokio::time::sleep(WORKER_POLL_INTERVAL).await;
                }
            }
        }
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/concepts", post(handle_submit_concept))
        .route("/api/concepts/{id}", get(handle_get_concept))
        .route(
            "/api/concepts/{id}/reservation",
            get(handle_get_reservation),
        )
        .route("/api/concepts/{id}/accept", post(handle_accept_concept))
        .route("/api/concepts/{id}/archive", post(handle_archive_concept))
        .route(
            "/api/concepts/{id}/anonymize",
            post(handle_anonymize_concept),
        )
        .route("/api/ideas/{id}", get(handle_get_idea))
        .route(
            "/api/apps/hypothesis_generator",
            post(handle_submit_hypothesis_job),
        )
        .route(
            "/api/apps/hypothesis_generator/{id}",
            get(handle_get_hypothesis_job),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing CheckMVP Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Arc<Persistence> = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Arc::new(Persistence::new_with_file(db_path)?)
    } else {
        info!("Using in-memory database");
        Arc::new(Persistence::new_in_memory()?)
    };

    let concepts: Arc<dyn ConceptRepository> = Arc::clone(&persistence) as _;
    let ideas: Arc<dyn IdeaRepository> = Arc::clone(&persistence) as _;
    let jobs: Arc<dyn HypothesisJobStore> = persistence as _;

    let api_key: String = match args.ai_api_key {
        Some(key) => key,
        None => std::env::var("OPENAI_API_KEY")
            .map_err(|_| "AI API key missing: pass --ai-api-key or set OPENAI_API_KEY")?,
    };
    let ai: Arc<OpenAiService> = Arc::new(OpenAiService::new(OpenAiConfig {
        base_url: args.ai_base_url,
        api_key,
        model: args.ai_model,
    })?);
    let gateway: Arc<dyn ReservationGateway> =
        Arc::new(HttpReservationGateway::new(args.idea_service_url)?);

    let bus: Arc<EventBus> = Arc::new(build_event_bus(
        Arc::clone(&concepts),
        Arc::clone(&ideas),
        Arc::clone(&ai) as _,
        Arc::clone(&ai) as _,
    ));

    let _worker = spawn_hypothesis_worker(Arc::clone(&jobs), ai as _);

    let app_state: AppState = AppState {
        concepts,
        ideas,
        jobs,
        gateway,
        bus,
        time_provider: Arc::new(SystemTimeProvider),
        expiry_period_in_days: args.expiry_days,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use checkmvp::{AudienceDetails, ReservationOutcome, ReservationRequest};
    use checkmvp_api::{
        HypothesisJobCreated, HypothesisJobView, ReservationView, SubmitConceptResponse,
    };
    use checkmvp_domain::{
        ClarityScore, CompetitorAnalysis, Concept, ContentIdeasForMarketing, ContextAnalysis,
        ElevatorPitch, Evaluation, EvaluationStatus, GoogleTrendsKeyword, Idea, Identity,
        LanguageAnalysis, MarketAnalysis, Problem, ProductName, Region, SocialMediaCampaigns,
        SwotAnalysis, TargetAudience, TestingPlan, ValidationMetrics, ValueProposition,
    };
    use tower::ServiceExt;

    const TEST_PROBLEM: &str =
        "Freelance designers struggle to collect overdue invoices from international clients";

    /// Evaluator stub answering every concept with a well-defined evaluation.
    struct StubEvaluator;

    #[async_trait]
    impl ConceptEvaluator for StubEvaluator {
        async fn evaluate(&self, _concept: &Concept) -> Result<Evaluation, CoreError> {
            let metrics = ValidationMetrics::new("10M-50M users", 7, 8, 6)?;
            let audience = TargetAudience::new(
                "Freelance designers",
                "Independent designers billing overseas clients",
                vec![String::from("Chasing late payments")],
                metrics,
            )?;
            Ok(Evaluation::new(
                EvaluationStatus::WellDefined,
                Vec::new(),
                Vec::new(),
                vec![String::from("Late payments hurt cash flow")],
                Some(String::from("Invoice factoring services exist")),
                vec![audience],
                ClarityScore::new(8, 8, 7, 6, 7)?,
                LanguageAnalysis::new(vec![String::from("struggle")], Vec::new(), Vec::new())?,
            )?)
        }
    }

    /// Analyzer stub. Only hypothesis generation is exercised by these
    /// tests; the section methods answer with an error.
    struct StubAnalyzer {
        fail: bool,
    }

    fn unused() -> CoreError {
        CoreError::AiService(String::from("not exercised by server tests"))
    }

    #[async_trait]
    impl IdeaAnalyzer for StubAnalyzer {
        async fn value_proposition(&self, _idea: &Idea) -> Result<ValueProposition, CoreError> {
            Err(unused())
        }

        async fn market_analysis(&self, _idea: &Idea) -> Result<MarketAnalysis, CoreError> {
            Err(unused())
        }

        async fn competitor_analysis(
            &self,
            _idea: &Idea,
        ) -> Result<CompetitorAnalysis, CoreError> {
            Err(unused())
        }

        async fn product_names(&self, _idea: &Idea) -> Result<Vec<ProductName>, CoreError> {
            Err(unused())
        }

        async fn swot_analysis(&self, _idea: &Idea) -> Result<SwotAnalysis, CoreError> {
            Err(unused())
        }

        async fn elevator_pitches(&self, _idea: &Idea) -> Result<Vec<ElevatorPitch>, CoreError> {
            Err(unused())
        }

        async fn google_trends_keywords(
            &self,
            _idea: &Idea,
        ) -> Result<Vec<GoogleTrendsKeyword>, CoreError> {
            Err(unused())
        }

        async fn content_ideas(
            &self,
            _idea: &Idea,
        ) -> Result<ContentIdeasForMarketing, CoreError> {
            Err(unused())
        }

        async fn social_media_campaigns(
            &self,
            _idea: &Idea,
        ) -> Result<SocialMediaCampaigns, CoreError> {
            Err(unused())
        }

        async fn testing_plan(&self, _idea: &Idea) -> Result<TestingPlan, CoreError> {
            Err(unused())
        }

        async fn context_analysis(&self, _idea: &Idea) -> Result<ContextAnalysis, CoreError> {
            Err(unused())
        }

        async fn audience_details(&self, _idea: &Idea) -> Result<AudienceDetails, CoreError> {
            Err(unused())
        }

        async fn generate_hypotheses(&self, content: &str) -> Result<String, CoreError> {
            if self.fail {
                return Err(CoreError::AiService(String::from("model unavailable")));
            }
            Ok(format!("1. A testable hypothesis about: {content}"))
        }
    }

    /// Gateway stub accepting every reservation.
    struct AcceptingGateway;

    #[async_trait]
    impl ReservationGateway for AcceptingGateway {
        async fn reserve(
            &self,
            _request: &ReservationRequest,
        ) -> Result<ReservationOutcome, CoreError> {
            Ok(ReservationOutcome {
                success: true,
                message: String::from("Reservation confirmed"),
            })
        }
    }

    /// Helper to create test app state over in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: Arc<Persistence> = Arc::new(
            Persistence::new_in_memory().expect("Failed to create in-memory persistence"),
        );
        let concepts: Arc<dyn ConceptRepository> = Arc::clone(&persistence) as _;
        let ideas: Arc<dyn IdeaRepository> = Arc::clone(&persistence) as _;
        let jobs: Arc<dyn HypothesisJobStore> = persistence as _;

        let bus: Arc<EventBus> = Arc::new(build_event_bus(
            Arc::clone(&concepts),
            Arc::clone(&ideas),
            Arc::new(StubEvaluator),
            Arc::new(StubAnalyzer { fail: false }),
        ));

        AppState {
            concepts,
            ideas,
            jobs,
            gateway: Arc::new(AcceptingGateway),
            bus,
            time_provider: Arc::new(SystemTimeProvider),
            expiry_period_in_days: 3,
        }
    }

    fn submit_body() -> Body {
        let request = SubmitConceptRequest {
            problem: TEST_PROBLEM.to_string(),
            persona: None,
            region: String::from("europe"),
            product_type: Some(String::from("saas")),
            stage: None,
        };
        Body::from(serde_json::to_string(&request).unwrap())
    }

    async fn post_concept(app: &Router) -> SubmitConceptResponse {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/concepts")
                    .header("content-type", "application/json")
                    .body(submit_body())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    async fn post_hypothesis_job(app: &Router, content: &str) -> HypothesisJobCreated {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/apps/hypothesis_generator")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::to_string(&HypothesisJobRequest {
                            content: content.to_string(),
                        })
                        .unwrap(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::CREATED);
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    async fn poll_hypothesis_job(app: &Router, job_id: &str) -> HypothesisJobView {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/apps/hypothesis_generator/{job_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    #[tokio::test]
    async fn test_submit_concept_then_reservation_succeeds() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let submitted = post_concept(&app).await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/concepts/{}/reservation", submitted.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let view: ReservationView = serde_json::from_slice(&body_bytes).unwrap();

        assert!(view.success);
        let content = view.content.unwrap();
        assert_eq!(content.problem, TEST_PROBLEM);
        assert_eq!(content.target_audiences.len(), 1);
        assert_eq!(content.target_audiences[0].id, 0);
        assert_eq!(content.target_audiences[0].segment, "Freelance designers");
    }

    #[tokio::test]
    async fn test_reservation_of_draft_concept_is_bad_request() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        // Insert a draft directly so the evaluation subscriber never runs.
        let concept = Concept::new(
            Identity::generate(),
            Problem::new(TEST_PROBLEM).unwrap(),
            None,
            Region::Europe,
            None,
            None,
            3,
            &SystemTimeProvider,
            None,
        )
        .unwrap();
        app_state.concepts.add(&concept).await.unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/concepts/{}/reservation", concept.id()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body_bytes).unwrap();

        // The body carries the bare message, without the rule prefix.
        assert_eq!(
            error_response.error,
            format!("Concept {} was not evaluated", concept.id())
        );
    }

    #[tokio::test]
    async fn test_reservation_of_unknown_concept_is_not_found() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!(
                        "/api/concepts/{}/reservation",
                        Identity::generate()
                    ))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_submit_concept_with_unknown_region_is_bad_request() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let request = SubmitConceptRequest {
            problem: TEST_PROBLEM.to_string(),
            persona: None,
            region: String::from("atlantis"),
            product_type: None,
            stage: None,
        };

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/concepts")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&request).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_hypothesis_job_created_and_completed() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        let created =
            post_hypothesis_job(&app, "An app that matches freelance designers with clients")
                .await;

        let pending = poll_hypothesis_job(&app, &created.id).await;
        assert_eq!(pending.status, "pending");
        assert!(pending.result.is_none());

        let processed = process_next_job(app_state.jobs.as_ref(), &StubAnalyzer { fail: false })
            .await
            .unwrap();
        assert!(processed);

        let completed = poll_hypothesis_job(&app, &created.id).await;
        assert_eq!(completed.status, "completed");
        assert!(completed.result.unwrap().contains("testable hypothesis"));
    }

    #[tokio::test]
    async fn test_hypothesis_worker_records_failures() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        let created =
            post_hypothesis_job(&app, "An app that matches freelance designers with clients")
                .await;

        let processed = process_next_job(app_state.jobs.as_ref(), &StubAnalyzer { fail: true })
            .await
            .unwrap();
        assert!(processed);

        let failed = poll_hypothesis_job(&app, &created.id).await;
        assert_eq!(failed.status, "error");
        assert_eq!(failed.result.as_deref(), Some("model unavailable"));
    }

    #[tokio::test]
    async fn test_hypothesis_job_with_short_content_is_bad_request() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let request = HypothesisJobRequest {
            content: String::from("Too short"),
        };

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/apps/hypothesis_generator")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&request).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_process_next_job_with_empty_queue_is_idle() {
        let app_state: AppState = create_test_app_state();

        let processed = process_next_job(app_state.jobs.as_ref(), &StubAnalyzer { fail: false })
            .await
            .unwrap();

        assert!(!processed);
    }
}
