// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs.
//!
//! These are distinct from the domain types and represent the API contract;
//! views are built from aggregates by the handler functions and never expose
//! domain internals directly.

use checkmvp::HypothesisJob;
use checkmvp_domain::{Concept, Evaluation, Idea, IdeaTargetAudience, TargetAudience};
use serde::{Deserialize, Serialize};

/// Request to submit a new problem statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitConceptRequest {
    /// The founder's problem statement.
    pub problem: String,
    /// The target persona, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    /// The target region code.
    pub region: String,
    /// The product type code, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    /// The product stage code, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
}

/// Response for a successful concept submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitConceptResponse {
    /// The new concept's id.
    pub id: String,
    /// A success message.
    pub message: String,
}

/// Validation metrics for one target audience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMetricsView {
    /// Estimated market size.
    pub market_size: String,
    /// How reachable the audience is (0-10).
    pub accessibility: u8,
    /// How intense the pain point is (0-10).
    pub pain_point_intensity: u8,
    /// Willingness to pay (0-10).
    pub willingness_to_pay: u8,
}

/// One target audience inside an evaluation view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetAudienceView {
    /// The audience segment.
    pub segment: String,
    /// A description of the segment.
    pub description: String,
    /// The segment's challenges.
    pub challenges: Vec<String>,
    /// Validation metrics for the segment.
    pub validation_metrics: ValidationMetricsView,
}

/// Clarity score breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarityScoreView {
    /// Overall clarity (0-10).
    pub overall_score: u8,
    /// How clearly the problem is stated (0-10).
    pub problem_clarity: u8,
    /// How clearly the audience is named (0-10).
    pub target_audience_clarity: u8,
    /// How well the scope is bounded (0-10).
    pub scope_definition: u8,
    /// How clear the value proposition is (0-10).
    pub value_proposition_clarity: u8,
}

/// Language analysis of the problem statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageAnalysisView {
    /// Vague terms found in the statement.
    pub vague_terms: Vec<String>,
    /// Context the statement is missing.
    pub missing_context: Vec<String>,
    /// Ambiguous statements found.
    pub ambiguous_statements: Vec<String>,
}

/// Evaluation attached to a concept view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationView {
    /// The evaluation status code.
    pub status: String,
    /// Suggestions for improving the statement.
    pub suggestions: Vec<String>,
    /// Recommendations for next steps.
    pub recommendations: Vec<String>,
    /// Pain points extracted from the statement.
    pub pain_points: Vec<String>,
    /// Evidence that the market exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_existence: Option<String>,
    /// Candidate target audiences.
    pub target_audiences: Vec<TargetAudienceView>,
    /// Clarity score breakdown.
    pub clarity_score: ClarityScoreView,
    /// Language analysis.
    pub language_analysis: LanguageAnalysisView,
}

impl EvaluationView {
    pub(crate) fn from_evaluation(evaluation: &Evaluation) -> Self {
        Self {
            status: evaluation.status().as_str().to_string(),
            suggestions: evaluation.suggestions().to_vec(),
            recommendations: evaluation.recommendations().to_vec(),
            pain_points: evaluation.pain_points().to_vec(),
            market_existence: evaluation.market_existence().map(ToString::to_string),
            target_audiences: evaluation
                .target_audiences()
                .iter()
                .map(|audience| TargetAudienceView {
                    segment: audience.segment().to_string(),
                    description: audience.description().to_string(),
                    challenges: audience.challenges().to_vec(),
                    validation_metrics: metrics_view(audience),
                })
                .collect(),
            clarity_score: ClarityScoreView {
                overall_score: evaluation.clarity_score().overall_score(),
                problem_clarity: evaluation.clarity_score().problem_clarity(),
                target_audience_clarity: evaluation.clarity_score().target_audience_clarity(),
                scope_definition: evaluation.clarity_score().scope_definition(),
                value_proposition_clarity: evaluation
                    .clarity_score()
                    .value_proposition_clarity(),
            },
            language_analysis: LanguageAnalysisView {
                vague_terms: evaluation.language_analysis().vague_terms().to_vec(),
                missing_context: evaluation.language_analysis().missing_context().to_vec(),
                ambiguous_statements: evaluation
                    .language_analysis()
                    .ambiguous_statements()
                    .to_vec(),
            },
        }
    }
}

fn metrics_view(audience: &TargetAudience) -> ValidationMetricsView {
    ValidationMetricsView {
        market_size: audience.validation_metrics().market_size().to_string(),
        accessibility: audience.validation_metrics().accessibility(),
        pain_point_intensity: audience.validation_metrics().pain_point_intensity(),
        willingness_to_pay: audience.validation_metrics().willingness_to_pay(),
    }
}

/// Concept plus its evaluation, if present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptView {
    /// The concept's id.
    pub id: String,
    /// The problem statement.
    pub problem: String,
    /// The target persona.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    /// The target region code.
    pub region: String,
    /// The product type code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    /// The product stage code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    /// The lifecycle state code.
    pub state: String,
    /// When the concept was submitted (RFC 3339).
    pub created_at: String,
    /// The evaluation, once the concept has been evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<EvaluationView>,
    /// The reserved idea's id, once the concept has been accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idea_id: Option<String>,
}

impl ConceptView {
    pub(crate) fn from_concept(concept: &Concept) -> Self {
        Self {
            id: concept.id().to_string(),
            problem: concept.problem().value().to_string(),
            persona: concept.persona().map(|persona| persona.value().to_string()),
            region: concept.region().as_str().to_string(),
            product_type: concept
                .product_type()
                .map(|kind| kind.as_str().to_string()),
            stage: concept.stage().map(|stage| stage.as_str().to_string()),
            state: concept.state().as_str().to_string(),
            created_at: concept.created_at().to_rfc3339(),
            evaluation: concept
                .evaluation()
                .ok()
                .map(EvaluationView::from_evaluation),
            idea_id: concept.idea_id().ok().map(|id| id.to_string()),
        }
    }
}

/// One reservable target audience, keyed by its ordinal id.
///
/// The detail fields stay absent until the audience enrichment has run on
/// the reserved idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationAudienceView {
    /// Ordinal id, passed back as `target_audience_id` on accept.
    pub id: usize,
    /// The audience segment.
    pub segment: String,
    /// A description of the segment.
    pub description: String,
    /// The segment's challenges.
    pub challenges: Vec<String>,
    /// Why this audience is worth targeting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,
    /// Audience-specific pain points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain_points: Option<Vec<String>>,
    /// How to reach the audience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting_strategy: Option<String>,
    /// Validation metrics for the segment.
    pub validation_metrics: ValidationMetricsView,
}

/// The reservation payload for an evaluated, available concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationContent {
    /// The problem statement.
    pub problem: String,
    /// The target persona.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    /// The target region code.
    pub region: String,
    /// The product type code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    /// The product stage code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    /// Evidence that the market exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_existence: Option<String>,
    /// The reservable target audiences.
    pub target_audiences: Vec<ReservationAudienceView>,
}

/// Response for the reservation view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationView {
    /// Whether the concept can be reserved.
    pub success: bool,
    /// A human-readable explanation.
    pub message: String,
    /// The reservation payload when the concept is reservable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ReservationContent>,
}

/// Request to reserve a concept into an idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptConceptRequest {
    /// Ordinal id of the chosen target audience from the reservation view.
    pub target_audience_id: usize,
    /// The founder's reservation statement.
    pub statement: String,
    /// The founder's hypotheses.
    pub hypotheses: Vec<String>,
}

/// Response for a successful reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptConceptResponse {
    /// The new idea's id.
    pub idea_id: String,
    /// A success message.
    pub message: String,
}

/// Generic `{success, message}` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// A human-readable explanation.
    pub message: String,
}

/// The idea's target audience, including any enrichment details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaAudienceView {
    /// The audience's id.
    pub id: String,
    /// The audience segment.
    pub segment: String,
    /// A description of the segment.
    pub description: String,
    /// The segment's challenges.
    pub challenges: Vec<String>,
    /// Why this audience is worth targeting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,
    /// Audience-specific pain points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain_points: Option<Vec<String>>,
    /// How to reach the audience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting_strategy: Option<String>,
}

impl IdeaAudienceView {
    fn from_audience(audience: &IdeaTargetAudience) -> Self {
        Self {
            id: audience.id().to_string(),
            segment: audience.segment().to_string(),
            description: audience.description().to_string(),
            challenges: audience.challenges().to_vec(),
            why: audience.why().map(ToString::to_string),
            pain_points: audience.pain_points().map(<[String]>::to_vec),
            targeting_strategy: audience.targeting_strategy().map(ToString::to_string),
        }
    }
}

/// Value proposition section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuePropositionView {
    /// The main benefit delivered to users.
    pub main_benefit: String,
    /// How the product solves the problem.
    pub problem_solving: String,
    /// What sets the product apart.
    pub differentiation: String,
}

/// Market analysis section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketAnalysisView {
    /// Relevant market trends.
    pub trends: String,
    /// Observed user behaviors.
    pub user_behaviors: String,
    /// Gaps in the current market.
    pub market_gaps: String,
    /// Opportunities for innovation.
    pub innovation_opportunities: String,
}

/// One competitor entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorView {
    /// The competitor's name.
    pub name: String,
    /// The competitor's product.
    pub product_name: String,
    /// The competitor's URL.
    pub url: String,
    /// The competitor's strengths.
    pub strengths: Vec<String>,
    /// The competitor's weaknesses.
    pub weaknesses: Vec<String>,
}

/// Competitor analysis section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorAnalysisView {
    /// The competitors found.
    pub competitors: Vec<CompetitorView>,
    /// A comparison across competitors.
    pub comparison: String,
    /// How to differentiate against them.
    pub differentiation_suggestions: Vec<String>,
}

/// One product name suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductNameView {
    /// The suggested name.
    pub product_name: String,
    /// Candidate domains for the name.
    pub domains: Vec<String>,
    /// Why the name fits.
    pub why: String,
    /// A tagline for the name.
    pub tagline: String,
}

/// SWOT analysis section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwotAnalysisView {
    /// Strengths.
    pub strengths: Vec<String>,
    /// Weaknesses.
    pub weaknesses: Vec<String>,
    /// Opportunities.
    pub opportunities: Vec<String>,
    /// Threats.
    pub threats: Vec<String>,
}

/// One elevator pitch suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElevatorPitchView {
    /// The opening hook.
    pub hook: String,
    /// The problem framing.
    pub problem: String,
    /// The proposed solution.
    pub solution: String,
    /// The value proposition.
    pub value_proposition: String,
    /// The call to action.
    pub call_to_action: String,
}

/// One per-platform content idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentIdeaView {
    /// The platform the idea targets.
    pub platform: String,
    /// The content ideas for the platform.
    pub ideas: Vec<String>,
    /// Why the platform is worth the effort.
    pub benefits: Vec<String>,
}

/// One social media campaign suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMediaCampaignView {
    /// The platform the campaign targets.
    pub platform: String,
    /// The campaign's content idea.
    pub content_idea: String,
    /// Suggested hashtags.
    pub hashtags: Vec<String>,
}

/// Two-week testing plan section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestingPlanView {
    /// The assumptions the plan tests.
    pub core_assumptions: Vec<String>,
    /// The two-week schedule.
    pub two_week_plan: Vec<String>,
    /// How success is measured.
    pub success_metrics: Vec<String>,
}

/// Context analysis section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextAnalysisView {
    /// A sharpened problem definition.
    pub problem_definition: String,
    /// Region-specific insights.
    pub region_insights: Vec<String>,
    /// Existing solutions in the space.
    pub existing_solutions: Vec<String>,
    /// How urgent the problem is.
    pub urgency: String,
}

/// Idea with all enrichment sections present so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaView {
    /// The idea's id.
    pub id: String,
    /// The originating concept's id.
    pub concept_id: String,
    /// The problem statement the idea was reserved from.
    pub problem: String,
    /// Evidence that the market exists.
    pub market_existence: String,
    /// The target region code.
    pub region: String,
    /// The product type code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    /// The product stage code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    /// The founder's reservation statement.
    pub statement: String,
    /// The founder's hypotheses.
    pub hypotheses: Vec<String>,
    /// The idea's target audience.
    pub target_audience: IdeaAudienceView,
    /// Value proposition section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_proposition: Option<ValuePropositionView>,
    /// Market analysis section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_analysis: Option<MarketAnalysisView>,
    /// Competitor analysis section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitor_analysis: Option<CompetitorAnalysisView>,
    /// Product name suggestions.
    pub product_names: Vec<ProductNameView>,
    /// SWOT analysis section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swot_analysis: Option<SwotAnalysisView>,
    /// Elevator pitch suggestions.
    pub elevator_pitches: Vec<ElevatorPitchView>,
    /// Google Trends keywords.
    pub google_trends_keywords: Vec<String>,
    /// Per-platform content ideas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_ideas: Option<Vec<ContentIdeaView>>,
    /// Social media campaign suggestions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_media_campaigns: Option<Vec<SocialMediaCampaignView>>,
    /// Two-week testing plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testing_plan: Option<TestingPlanView>,
    /// Context analysis section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_analysis: Option<ContextAnalysisView>,
    /// Whether the idea was migrated.
    pub migrated: bool,
    /// Whether the idea was archived.
    pub archived: bool,
}

impl IdeaView {
    pub(crate) fn from_idea(idea: &Idea) -> Self {
        Self {
            id: idea.id().to_string(),
            concept_id: idea.concept_id().to_string(),
            problem: idea.problem().value().to_string(),
            market_existence: idea.market_existence().value().to_string(),
            region: idea.region().as_str().to_string(),
            product_type: idea.product_type().map(|kind| kind.as_str().to_string()),
            stage: idea.stage().map(|stage| stage.as_str().to_string()),
            statement: idea.statement().to_string(),
            hypotheses: idea.hypotheses().to_vec(),
            target_audience: IdeaAudienceView::from_audience(idea.target_audience()),
            value_proposition: idea.value_proposition().map(|section| {
                ValuePropositionView {
                    main_benefit: section.main_benefit().to_string(),
                    problem_solving: section.problem_solving().to_string(),
                    differentiation: section.differentiation().to_string(),
                }
            }),
            market_analysis: idea.market_analysis().map(|section| MarketAnalysisView {
                trends: section.trends().to_string(),
                user_behaviors: section.user_behaviors().to_string(),
                market_gaps: section.market_gaps().to_string(),
                innovation_opportunities: section.innovation_opportunities().to_string(),
            }),
            competitor_analysis: idea.competitor_analysis().map(|section| {
                CompetitorAnalysisView {
                    competitors: section
                        .competitors()
                        .iter()
                        .map(|competitor| CompetitorView {
                            name: competitor.name().to_string(),
                            product_name: competitor.product_name().to_string(),
                            url: competitor.url().to_string(),
                            strengths: competitor.strengths().to_vec(),
                            weaknesses: competitor.weaknesses().to_vec(),
                        })
                        .collect(),
                    comparison: section.comparison().to_string(),
                    differentiation_suggestions: section.differentiation_suggestions().to_vec(),
                }
            }),
            product_names: idea
                .product_names()
                .iter()
                .map(|entry| ProductNameView {
                    product_name: entry.product_name().to_string(),
                    domains: entry.domains().to_vec(),
                    why: entry.why().to_string(),
                    tagline: entry.tagline().to_string(),
                })
                .collect(),
            swot_analysis: idea.swot_analysis().map(|section| SwotAnalysisView {
                strengths: section.strengths().to_vec(),
                weaknesses: section.weaknesses().to_vec(),
                opportunities: section.opportunities().to_vec(),
                threats: section.threats().to_vec(),
            }),
            elevator_pitches: idea
                .elevator_pitches()
                .iter()
                .map(|pitch| ElevatorPitchView {
                    hook: pitch.hook().to_string(),
                    problem: pitch.problem().to_string(),
                    solution: pitch.solution().to_string(),
                    value_proposition: pitch.value_proposition().to_string(),
                    call_to_action: pitch.call_to_action().to_string(),
                })
                .collect(),
            google_trends_keywords: idea
                .google_trends_keywords()
                .iter()
                .map(|entry| entry.keyword().to_string())
                .collect(),
            content_ideas: idea.content_ideas().map(|section| {
                section
                    .ideas()
                    .iter()
                    .map(|entry| ContentIdeaView {
                        platform: entry.platform().to_string(),
                        ideas: entry.ideas().to_vec(),
                        benefits: entry.benefits().to_vec(),
                    })
                    .collect()
            }),
            social_media_campaigns: idea.social_media_campaigns().map(|section| {
                section
                    .campaigns()
                    .iter()
                    .map(|campaign| SocialMediaCampaignView {
                        platform: campaign.platform().to_string(),
                        content_idea: campaign.content_idea().to_string(),
                        hashtags: campaign.hashtags().to_vec(),
                    })
                    .collect()
            }),
            testing_plan: idea.testing_plan().map(|section| TestingPlanView {
                core_assumptions: section.core_assumptions().to_vec(),
                two_week_plan: section.two_week_plan().to_vec(),
                success_metrics: section.success_metrics().to_vec(),
            }),
            context_analysis: idea.context_analysis().map(|section| ContextAnalysisView {
                problem_definition: section.problem_definition().to_string(),
                region_insights: section.region_insights().to_vec(),
                existing_solutions: section.existing_solutions().to_vec(),
                urgency: section.urgency().to_string(),
            }),
            migrated: idea.is_migrated(),
            archived: idea.is_archived(),
        }
    }
}

/// Request to generate hypotheses for free-form content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypothesisJobRequest {
    /// The content to generate hypotheses for (20-1000 characters).
    pub content: String,
}

/// Response for a newly queued hypothesis job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypothesisJobCreated {
    /// The job's id, used for polling.
    pub id: String,
}

/// Polling view of a hypothesis job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypothesisJobView {
    /// The job status: `pending`, `completed` or `error`.
    pub status: String,
    /// The generated hypotheses or error message, once terminal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl HypothesisJobView {
    pub(crate) fn from_job(job: &HypothesisJob) -> Self {
        Self {
            status: job.status().as_str().to_string(),
            result: job.result().map(ToString::to_string),
        }
    }
}
