// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs and serializable mirrors of the domain value objects.
//!
//! The JSON data structs exist so that aggregates stay serde-free: blobs are
//! deserialized into these shapes first and then pushed through the domain's
//! validating constructors by the `mappers` module.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A row of the `concepts` table.
#[derive(Debug, Queryable)]
pub struct ConceptRow {
    pub id: String,
    pub problem: String,
    pub persona: Option<String>,
    pub region: String,
    pub product_type: Option<String>,
    pub stage: Option<String>,
    pub created_at: String,
    pub expiry_period_in_days: i64,
    pub evaluation_json: Option<String>,
    pub idea_id: Option<String>,
    pub evaluated_at: Option<String>,
    pub accepted_at: Option<String>,
    pub archived_at: Option<String>,
    pub anonymized_at: Option<String>,
}

/// A row of the `ideas` table.
#[derive(Debug, Queryable)]
pub struct IdeaRow {
    pub id: String,
    pub concept_id: String,
    pub problem: String,
    pub market_existence: String,
    pub region: String,
    pub product_type: Option<String>,
    pub stage: Option<String>,
    pub statement: String,
    pub hypotheses_json: String,
    pub target_audience_json: String,
    pub migrated: i32,
    pub archived: i32,
    pub created_at: String,
}

/// A row of the `idea_sections` table.
#[derive(Debug, Queryable)]
pub struct SectionRow {
    pub idea_id: String,
    pub section: String,
    pub payload_json: String,
}

/// A row of the `hypothesis_jobs` table.
#[derive(Debug, Queryable)]
pub struct JobRow {
    pub id: String,
    pub content: String,
    pub status: String,
    pub result: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Serializable representation of `ValidationMetrics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationMetricsData {
    pub market_size: String,
    pub accessibility: i64,
    pub pain_point_intensity: i64,
    pub willingness_to_pay: i64,
}

/// Serializable representation of an evaluation-scoped `TargetAudience`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetAudienceData {
    pub segment: String,
    pub description: String,
    pub challenges: Vec<String>,
    pub validation_metrics: ValidationMetricsData,
}

/// Serializable representation of a `ClarityScore`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClarityScoreData {
    pub overall_score: i64,
    pub problem_clarity: i64,
    pub target_audience_clarity: i64,
    pub scope_definition: i64,
    pub value_proposition_clarity: i64,
}

/// Serializable representation of a `LanguageAnalysis`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageAnalysisData {
    pub vague_terms: Vec<String>,
    pub missing_context: Vec<String>,
    pub ambiguous_statements: Vec<String>,
}

/// Serializable representation of an `Evaluation`, stored as one JSON blob
/// on the concept row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationData {
    pub status: String,
    pub suggestions: Vec<String>,
    pub recommendations: Vec<String>,
    pub pain_points: Vec<String>,
    pub market_existence: Option<String>,
    pub target_audiences: Vec<TargetAudienceData>,
    pub clarity_score: ClarityScoreData,
    pub language_analysis: LanguageAnalysisData,
}

/// Serializable representation of an `IdeaTargetAudience`.
///
/// The owning idea's id is implied by the row; the detail fields stay
/// `None` until the audience enrichment has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudienceData {
    pub id: String,
    pub segment: String,
    pub description: String,
    pub challenges: Vec<String>,
    pub why: Option<String>,
    pub pain_points: Option<Vec<String>>,
    pub targeting_strategy: Option<String>,
}

/// Serializable representation of a `ValueProposition` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuePropositionData {
    pub main_benefit: String,
    pub problem_solving: String,
    pub differentiation: String,
}

/// Serializable representation of a `MarketAnalysis` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketAnalysisData {
    pub trends: String,
    pub user_behaviors: String,
    pub market_gaps: String,
    pub innovation_opportunities: String,
}

/// Serializable representation of a single `Competitor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorData {
    pub name: String,
    pub product_name: String,
    pub url: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Serializable representation of a `CompetitorAnalysis` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorAnalysisData {
    pub competitors: Vec<CompetitorData>,
    pub comparison: String,
    pub differentiation_suggestions: Vec<String>,
}

/// Serializable representation of a `ProductName` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductNameData {
    pub product_name: String,
    pub domains: Vec<String>,
    pub why: String,
    pub tagline: String,
}

/// Serializable representation of a `SwotAnalysis` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwotAnalysisData {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

/// Serializable representation of an `ElevatorPitch` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElevatorPitchData {
    pub hook: String,
    pub problem: String,
    pub solution: String,
    pub value_proposition: String,
    pub call_to_action: String,
}

/// Serializable representation of a per-platform `ContentIdea`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentIdeaData {
    pub platform: String,
    pub ideas: Vec<String>,
    pub benefits: Vec<String>,
}

/// Serializable representation of a `SocialMediaCampaign` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignData {
    pub platform: String,
    pub content_idea: String,
    pub hashtags: Vec<String>,
}

/// Serializable representation of a `TestingPlan` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestingPlanData {
    pub core_assumptions: Vec<String>,
    pub two_week_plan: Vec<String>,
    pub success_metrics: Vec<String>,
}

/// Serializable representation of a `ContextAnalysis` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextAnalysisData {
    pub problem_definition: String,
    pub region_insights: Vec<String>,
    pub existing_solutions: Vec<String>,
    pub urgency: String,
}
