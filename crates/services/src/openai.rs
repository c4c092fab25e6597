// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ServiceError;
use crate::prompts;
use async_trait::async_trait;
use checkmvp::{AudienceDetails, ConceptEvaluator, CoreError, IdeaAnalyzer};
use checkmvp_domain::{
    ClarityScore, Competitor, CompetitorAnalysis, Concept, ContentIdea, ContentIdeasForMarketing,
    ContextAnalysis, ElevatorPitch, Evaluation, EvaluationStatus, GoogleTrendsKeyword, Idea,
    LanguageAnalysis, MarketAnalysis, ProductName, SocialMediaCampaign, SocialMediaCampaigns,
    SwotAnalysis, TargetAudience, TestingPlan, ValidationMetrics, ValueProposition,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, error};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const TEMPERATURE: f32 = 0.7;

/// Connection settings for the OpenAI-compatible endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Base URL without a trailing slash, e.g. `https://api.openai.com`.
    pub base_url: String,
    /// Bearer token.
    pub api_key: String,
    /// Model identifier sent with every request.
    pub model: String,
}

/// AI client implementing both AI ports against a chat-completions API.
pub struct OpenAiService {
    client: reqwest::Client,
    config: OpenAiConfig,
}

#[derive(serde::Serialize)]
struct ChatRequest {
    model: String,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(serde::Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl OpenAiService {
    /// Creates the client with connect and request timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: OpenAiConfig) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    async fn chat(&self, system: &str, prompt: String) -> Result<String, ServiceError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            temperature: TEMPERATURE,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "AI API request failed");
            return Err(ServiceError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|err| ServiceError::Parse(err.to_string()))?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(ServiceError::EmptyResponse)?
            .message
            .content;
        debug!(chars = content.len(), "received AI completion");
        Ok(content)
    }

    async fn generate_structured<T: DeserializeOwned>(
        &self,
        prompt: String,
    ) -> Result<T, ServiceError> {
        let content = self.chat(prompts::SYSTEM, prompt).await?;
        let json = strip_code_fences(&content);
        serde_json::from_str(json).map_err(|err| {
            error!(error = %err, "AI payload failed to parse");
            ServiceError::Parse(err.to_string())
        })
    }
}

/// Strips a leading/trailing markdown code fence, if present.
///
/// Models occasionally wrap JSON in ` ```json ... ``` ` despite
/// instructions not to.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }
    let start = trimmed.find('\n').map_or(0, |i| i + 1);
    let end = trimmed[start..]
        .rfind("```")
        .map_or(trimmed.len(), |i| i + start);
    trimmed[start..end].trim()
}

fn ai_error(err: ServiceError) -> CoreError {
    CoreError::AiService(err.to_string())
}

#[derive(Deserialize)]
struct ValidationMetricsPayload {
    market_size: String,
    accessibility: i64,
    pain_point_intensity: i64,
    willingness_to_pay: i64,
}

#[derive(Deserialize)]
struct TargetAudiencePayload {
    segment: String,
    description: String,
    challenges: Vec<String>,
    validation_metrics: ValidationMetricsPayload,
}

#[derive(Deserialize)]
struct ClarityScorePayload {
    overall_score: i64,
    problem_clarity: i64,
    target_audience_clarity: i64,
    scope_definition: i64,
    value_proposition_clarity: i64,
}

#[derive(Deserialize)]
struct LanguageAnalysisPayload {
    vague_terms: Vec<String>,
    missing_context: Vec<String>,
    ambiguous_statements: Vec<String>,
}

#[derive(Deserialize)]
struct EvaluationPayload {
    status: String,
    #[serde(default)]
    suggestions: Vec<String>,
    #[serde(default)]
    recommendations: Vec<String>,
    #[serde(default)]
    pain_points: Vec<String>,
    #[serde(default)]
    market_existence: Option<String>,
    #[serde(default)]
    target_audiences: Vec<TargetAudiencePayload>,
    clarity_score: ClarityScorePayload,
    language_analysis: LanguageAnalysisPayload,
}

fn into_evaluation(payload: EvaluationPayload) -> Result<Evaluation, CoreError> {
    let audiences = payload
        .target_audiences
        .into_iter()
        .map(|audience| {
            let metrics = ValidationMetrics::new(
                &audience.validation_metrics.market_size,
                audience.validation_metrics.accessibility,
                audience.validation_metrics.pain_point_intensity,
                audience.validation_metrics.willingness_to_pay,
            )?;
            TargetAudience::new(
                &audience.segment,
                &audience.description,
                audience.challenges,
                metrics,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    let clarity = ClarityScore::new(
        payload.clarity_score.overall_score,
        payload.clarity_score.problem_clarity,
        payload.clarity_score.target_audience_clarity,
        payload.clarity_score.scope_definition,
        payload.clarity_score.value_proposition_clarity,
    )?;
    let language = LanguageAnalysis::new(
        payload.language_analysis.vague_terms,
        payload.language_analysis.missing_context,
        payload.language_analysis.ambiguous_statements,
    )?;

    Ok(Evaluation::new(
        EvaluationStatus::from_str(&payload.status)?,
        payload.suggestions,
        payload.recommendations,
        payload.pain_points,
        payload.market_existence,
        audiences,
        clarity,
        language,
    )?)
}

#[async_trait]
impl ConceptEvaluator for OpenAiService {
    async fn evaluate(&self, concept: &Concept) -> Result<Evaluation, CoreError> {
        let payload: EvaluationPayload = self
            .generate_structured(prompts::evaluation(concept))
            .await
            .map_err(ai_error)?;
        into_evaluation(payload)
    }
}

#[derive(Deserialize)]
struct ValuePropositionPayload {
    main_benefit: String,
    problem_solving: String,
    differentiation: String,
}

#[derive(Deserialize)]
struct MarketAnalysisPayload {
    trends: String,
    user_behaviors: String,
    market_gaps: String,
    innovation_opportunities: String,
}

#[derive(Deserialize)]
struct CompetitorPayload {
    name: String,
    product_name: String,
    url: String,
    strengths: Vec<String>,
    weaknesses: Vec<String>,
}

#[derive(Deserialize)]
struct CompetitorAnalysisPayload {
    competitors: Vec<CompetitorPayload>,
    comparison: String,
    differentiation_suggestions: Vec<String>,
}

#[derive(Deserialize)]
struct ProductNamePayload {
    product_name: String,
    domains: Vec<String>,
    why: String,
    tagline: String,
}

#[derive(Deserialize)]
struct ProductNamesPayload {
    product_names: Vec<ProductNamePayload>,
}

#[derive(Deserialize)]
struct SwotPayload {
    strengths: Vec<String>,
    weaknesses: Vec<String>,
    opportunities: Vec<String>,
    threats: Vec<String>,
}

#[derive(Deserialize)]
struct ElevatorPitchPayload {
    hook: String,
    problem: String,
    solution: String,
    value_proposition: String,
    call_to_action: String,
}

#[derive(Deserialize)]
struct ElevatorPitchesPayload {
    pitches: Vec<ElevatorPitchPayload>,
}

#[derive(Deserialize)]
struct KeywordsPayload {
    keywords: Vec<String>,
}

#[derive(Deserialize)]
struct ContentIdeaPayload {
    platform: String,
    ideas: Vec<String>,
    benefits: Vec<String>,
}

#[derive(Deserialize)]
struct ContentIdeasPayload {
    ideas: Vec<ContentIdeaPayload>,
}

#[derive(Deserialize)]
struct CampaignPayload {
    platform: String,
    content_idea: String,
    hashtags: Vec<String>,
}

#[derive(Deserialize)]
struct CampaignsPayload {
    campaigns: Vec<CampaignPayload>,
}

#[derive(Deserialize)]
struct TestingPlanPayload {
    core_assumptions: Vec<String>,
    two_week_plan: Vec<String>,
    success_metrics: Vec<String>,
}

#[derive(Deserialize)]
struct ContextAnalysisPayload {
    problem_definition: String,
    region_insights: Vec<String>,
    existing_solutions: Vec<String>,
    urgency: String,
}

#[derive(Deserialize)]
struct AudienceDetailsPayload {
    why: String,
    pain_points: Vec<String>,
    targeting_strategy: String,
}

#[async_trait]
impl IdeaAnalyzer for OpenAiService {
    async fn value_proposition(&self, idea: &Idea) -> Result<ValueProposition, CoreError> {
        let payload: ValuePropositionPayload = self
            .generate_structured(prompts::value_proposition(idea))
            .await
            .map_err(ai_error)?;
        Ok(ValueProposition::new(
            &payload.main_benefit,
            &payload.problem_solving,
            &payload.differentiation,
        )?)
    }

    async fn market_analysis(&self, idea: &Idea) -> Result<MarketAnalysis, CoreError> {
        let payload: MarketAnalysisPayload = self
            .generate_structured(prompts::market_analysis(idea))
            .await
            .map_err(ai_error)?;
        Ok(MarketAnalysis::new(
            &payload.trends,
            &payload.user_behaviors,
            &payload.market_gaps,
            &payload.innovation_opportunities,
        )?)
    }

    async fn competitor_analysis(&self, idea: &Idea) -> Result<CompetitorAnalysis, CoreError> {
        let payload: CompetitorAnalysisPayload = self
            .generate_structured(prompts::competitor_analysis(idea))
            .await
            .map_err(ai_error)?;
        let competitors = payload
            .competitors
            .into_iter()
            .map(|competitor| {
                Competitor::new(
                    &competitor.name,
                    &competitor.product_name,
                    &competitor.url,
                    competitor.strengths,
                    competitor.weaknesses,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CompetitorAnalysis::new(
            competitors,
            &payload.comparison,
            payload.differentiation_suggestions,
        )?)
    }

    async fn product_names(&self, idea: &Idea) -> Result<Vec<ProductName>, CoreError> {
        let payload: ProductNamesPayload = self
            .generate_structured(prompts::product_names(idea))
            .await
            .map_err(ai_error)?;
        Ok(payload
            .product_names
            .into_iter()
            .map(|name| {
                ProductName::new(&name.product_name, name.domains, &name.why, &name.tagline)
            })
            .collect::<Result<Vec<_>, _>>()?)
    }

    async fn swot_analysis(&self, idea: &Idea) -> Result<SwotAnalysis, CoreError> {
        let payload: SwotPayload = self
            .generate_structured(prompts::swot_analysis(idea))
            .await
            .map_err(ai_error)?;
        Ok(SwotAnalysis::new(
            payload.strengths,
            payload.weaknesses,
            payload.opportunities,
            payload.threats,
        )?)
    }

    async fn elevator_pitches(&self, idea: &Idea) -> Result<Vec<ElevatorPitch>, CoreError> {
        let payload: ElevatorPitchesPayload = self
            .generate_structured(prompts::elevator_pitches(idea))
            .await
            .map_err(ai_error)?;
        Ok(payload
            .pitches
            .into_iter()
            .map(|pitch| {
                ElevatorPitch::new(
                    &pitch.hook,
                    &pitch.problem,
                    &pitch.solution,
                    &pitch.value_proposition,
                    &pitch.call_to_action,
                )
            })
            .collect::<Result<Vec<_>, _>>()?)
    }

    async fn google_trends_keywords(
        &self,
        idea: &Idea,
    ) -> Result<Vec<GoogleTrendsKeyword>, CoreError> {
        let payload: KeywordsPayload = self
            .generate_structured(prompts::google_trends_keywords(idea))
            .await
            .map_err(ai_error)?;
        Ok(payload
            .keywords
            .iter()
            .map(|keyword| GoogleTrendsKeyword::new(keyword))
            .collect::<Result<Vec<_>, _>>()?)
    }

    async fn content_ideas(&self, idea: &Idea) -> Result<ContentIdeasForMarketing, CoreError> {
        let payload: ContentIdeasPayload = self
            .generate_structured(prompts::content_ideas(idea))
            .await
            .map_err(ai_error)?;
        let ideas = payload
            .ideas
            .into_iter()
            .map(|idea| ContentIdea::new(&idea.platform, idea.ideas, idea.benefits))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ContentIdeasForMarketing::new(ideas)?)
    }

    async fn social_media_campaigns(
        &self,
        idea: &Idea,
    ) -> Result<SocialMediaCampaigns, CoreError> {
        let payload: CampaignsPayload = self
            .generate_structured(prompts::social_media_campaigns(idea))
            .await
            .map_err(ai_error)?;
        let campaigns = payload
            .campaigns
            .into_iter()
            .map(|campaign| {
                SocialMediaCampaign::new(
                    &campaign.platform,
                    &campaign.content_idea,
                    campaign.hashtags,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SocialMediaCampaigns::new(campaigns)?)
    }

    async fn testing_plan(&self, idea: &Idea) -> Result<TestingPlan, CoreError> {
        let payload: TestingPlanPayload = self
            .generate_structured(prompts::testing_plan(idea))
            .await
            .map_err(ai_error)?;
        Ok(TestingPlan::new(
            payload.core_assumptions,
            payload.two_week_plan,
            payload.success_metrics,
        )?)
    }

    async fn context_analysis(&self, idea: &Idea) -> Result<ContextAnalysis, CoreError> {
        let payload: ContextAnalysisPayload = self
            .generate_structured(prompts::context_analysis(idea))
            .await
            .map_err(ai_error)?;
        Ok(ContextAnalysis::new(
            &payload.problem_definition,
            payload.region_insights,
            payload.existing_solutions,
            &payload.urgency,
        )?)
    }

    async fn audience_details(&self, idea: &Idea) -> Result<AudienceDetails, CoreError> {
        let payload: AudienceDetailsPayload = self
            .generate_structured(prompts::audience_details(idea))
            .await
            .map_err(ai_error)?;
        Ok(AudienceDetails {
            why: payload.why,
            pain_points: payload.pain_points,
            targeting_strategy: payload.targeting_strategy,
        })
    }

    async fn generate_hypotheses(&self, content: &str) -> Result<String, CoreError> {
        self.chat(prompts::HYPOTHESES_SYSTEM, prompts::hypotheses(content))
            .await
            .map_err(ai_error)
    }
}
