// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversions between stored rows/blobs and domain aggregates.
//!
//! Reconstruction never bypasses invariants: every blob is deserialized
//! into a plain data struct and then pushed through the domain's validating
//! constructors, and lifecycle transitions are replayed in the order implied
//! by the non-null timestamp columns.

use std::str::FromStr;

use checkmvp::{HypothesisJob, HypothesisJobStatus};
use checkmvp_domain::{
    ClarityScore, Competitor, CompetitorAnalysis, Concept, ContentIdea, ContentIdeasForMarketing,
    ContextAnalysis, ElevatorPitch, Evaluation, EvaluationStatus, GoogleTrendsKeyword, Idea,
    IdeaTargetAudience, Identity, LanguageAnalysis, MarketAnalysis, MarketExistence, Persona,
    Problem, ProductName, ProductType, REDACTED, Region, SocialMediaCampaign, SocialMediaCampaigns,
    Stage, SwotAnalysis, SystemTimeProvider, TargetAudience, TestingPlan, ValidationMetrics,
    ValueProposition,
};
use chrono::{DateTime, Utc};

use crate::data_models::{
    AudienceData, CampaignData, ClarityScoreData, CompetitorAnalysisData, CompetitorData,
    ConceptRow, ContentIdeaData, ContextAnalysisData, ElevatorPitchData, EvaluationData, IdeaRow,
    JobRow, LanguageAnalysisData, MarketAnalysisData, ProductNameData, SectionRow,
    SwotAnalysisData, TargetAudienceData, TestingPlanData, ValidationMetricsData,
    ValuePropositionData,
};
use crate::error::PersistenceError;

/// Wraps any reconstruction failure into a `ReconstructionError`.
pub fn reconstruction(err: impl std::fmt::Display) -> PersistenceError {
    PersistenceError::ReconstructionError(err.to_string())
}

/// Parses a stored RFC 3339 timestamp.
///
/// # Errors
///
/// Returns a `ReconstructionError` for malformed timestamps.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, PersistenceError> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(reconstruction)
}

fn parse_identity(value: &str) -> Result<Identity, PersistenceError> {
    Identity::new(value).map_err(reconstruction)
}

fn problem_from_stored(value: &str) -> Result<Problem, PersistenceError> {
    if value == REDACTED {
        Ok(Problem::redacted())
    } else {
        Problem::new(value).map_err(reconstruction)
    }
}

fn persona_from_stored(value: &str) -> Result<Persona, PersistenceError> {
    if value == REDACTED {
        Ok(Persona::redacted())
    } else {
        Persona::new(value).map_err(reconstruction)
    }
}

fn parse_product_type(value: Option<&str>) -> Result<Option<ProductType>, PersistenceError> {
    value
        .map(ProductType::from_str)
        .transpose()
        .map_err(reconstruction)
}

fn parse_stage(value: Option<&str>) -> Result<Option<Stage>, PersistenceError> {
    value.map(Stage::from_str).transpose().map_err(reconstruction)
}

// ============================================================================
// Evaluation blob
// ============================================================================

/// Converts an evaluation into its storable form.
#[must_use]
pub fn evaluation_to_data(evaluation: &Evaluation) -> EvaluationData {
    EvaluationData {
        status: evaluation.status().as_str().to_string(),
        suggestions: evaluation.suggestions().to_vec(),
        recommendations: evaluation.recommendations().to_vec(),
        pain_points: evaluation.pain_points().to_vec(),
        market_existence: evaluation.market_existence().map(ToString::to_string),
        target_audiences: evaluation
            .target_audiences()
            .iter()
            .map(|audience| TargetAudienceData {
                segment: audience.segment().to_string(),
                description: audience.description().to_string(),
                challenges: audience.challenges().to_vec(),
                validation_metrics: ValidationMetricsData {
                    market_size: audience.validation_metrics().market_size().to_string(),
                    accessibility: i64::from(audience.validation_metrics().accessibility()),
                    pain_point_intensity: i64::from(
                        audience.validation_metrics().pain_point_intensity(),
                    ),
                    willingness_to_pay: i64::from(
                        audience.validation_metrics().willingness_to_pay(),
                    ),
                },
            })
            .collect(),
        clarity_score: ClarityScoreData {
            overall_score: i64::from(evaluation.clarity_score().overall_score()),
            problem_clarity: i64::from(evaluation.clarity_score().problem_clarity()),
            target_audience_clarity: i64::from(
                evaluation.clarity_score().target_audience_clarity(),
            ),
            scope_definition: i64::from(evaluation.clarity_score().scope_definition()),
            value_proposition_clarity: i64::from(
                evaluation.clarity_score().value_proposition_clarity(),
            ),
        },
        language_analysis: LanguageAnalysisData {
            vague_terms: evaluation.language_analysis().vague_terms().to_vec(),
            missing_context: evaluation.language_analysis().missing_context().to_vec(),
            ambiguous_statements: evaluation
                .language_analysis()
                .ambiguous_statements()
                .to_vec(),
        },
    }
}

/// Rebuilds an evaluation from its stored form through the validating
/// domain constructors.
///
/// # Errors
///
/// Returns a `ReconstructionError` if any stored value violates a domain
/// rule.
pub fn evaluation_from_data(data: EvaluationData) -> Result<Evaluation, PersistenceError> {
    let status: EvaluationStatus =
        EvaluationStatus::from_str(&data.status).map_err(reconstruction)?;
    let target_audiences: Vec<TargetAudience> = data
        .target_audiences
        .into_iter()
        .map(|audience| {
            let metrics: ValidationMetrics = ValidationMetrics::new(
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
        .collect::<Result<_, _>>()
        .map_err(reconstruction)?;
    let clarity_score: ClarityScore = ClarityScore::new(
        data.clarity_score.overall_score,
        data.clarity_score.problem_clarity,
        data.clarity_score.target_audience_clarity,
        data.clarity_score.scope_definition,
        data.clarity_score.value_proposition_clarity,
    )
    .map_err(reconstruction)?;
    let language_analysis: LanguageAnalysis = LanguageAnalysis::new(
        data.language_analysis.vague_terms,
        data.language_analysis.missing_context,
        data.language_analysis.ambiguous_statements,
    )
    .map_err(reconstruction)?;

    Evaluation::new(
        status,
        data.suggestions,
        data.recommendations,
        data.pain_points,
        data.market_existence,
        target_audiences,
        clarity_score,
        language_analysis,
    )
    .map_err(reconstruction)
}

// ============================================================================
// Idea target audience blob
// ============================================================================

/// Converts an idea-scoped target audience into its storable form.
#[must_use]
pub fn audience_to_data(audience: &IdeaTargetAudience) -> AudienceData {
    AudienceData {
        id: audience.id().to_string(),
        segment: audience.segment().to_string(),
        description: audience.description().to_string(),
        challenges: audience.challenges().to_vec(),
        why: audience.why().map(ToString::to_string),
        pain_points: audience.pain_points().map(<[String]>::to_vec),
        targeting_strategy: audience.targeting_strategy().map(ToString::to_string),
    }
}

/// Rebuilds an idea-scoped target audience, replaying the write-once
/// detail setters for any stored detail fields.
///
/// # Errors
///
/// Returns a `ReconstructionError` if any stored value violates a domain
/// rule.
pub fn audience_from_data(
    data: AudienceData,
    idea_id: Identity,
) -> Result<IdeaTargetAudience, PersistenceError> {
    let mut audience: IdeaTargetAudience = IdeaTargetAudience::new(
        parse_identity(&data.id)?,
        idea_id,
        &data.segment,
        &data.description,
        data.challenges,
    )
    .map_err(reconstruction)?;
    if let Some(why) = data.why {
        audience.set_why(&why).map_err(reconstruction)?;
    }
    if let Some(pain_points) = data.pain_points {
        audience.set_pain_points(pain_points).map_err(reconstruction)?;
    }
    if let Some(strategy) = data.targeting_strategy {
        audience
            .set_targeting_strategy(&strategy)
            .map_err(reconstruction)?;
    }
    Ok(audience)
}

// ============================================================================
// Concept reconstruction
// ============================================================================

/// Rebuilds a concept aggregate from its row, replaying lifecycle
/// transitions in the order implied by the non-null timestamp columns.
///
/// # Errors
///
/// Returns a `ReconstructionError` if the row cannot be rebuilt into a
/// valid aggregate.
pub fn reconstitute_concept(row: ConceptRow) -> Result<Concept, PersistenceError> {
    let id: Identity = parse_identity(&row.id)?;
    let problem: Problem = problem_from_stored(&row.problem)?;
    let persona: Option<Persona> = row
        .persona
        .as_deref()
        .map(persona_from_stored)
        .transpose()?;
    let region: Region = Region::from_str(&row.region).map_err(reconstruction)?;
    let product_type: Option<ProductType> = parse_product_type(row.product_type.as_deref())?;
    let stage: Option<Stage> = parse_stage(row.stage.as_deref())?;
    let created_at: DateTime<Utc> = parse_timestamp(&row.created_at)?;

    let mut concept: Concept = Concept::new(
        id,
        problem,
        persona,
        region,
        product_type,
        stage,
        row.expiry_period_in_days,
        &SystemTimeProvider,
        Some(created_at),
    )
    .map_err(reconstruction)?;

    if row.evaluated_at.is_some() {
        let blob: String = row.evaluation_json.ok_or_else(|| {
            PersistenceError::ReconstructionError(format!(
                "Concept {id} was evaluated but has no evaluation blob"
            ))
        })?;
        let data: EvaluationData = serde_json::from_str(&blob)?;
        concept
            .evaluate(evaluation_from_data(data)?)
            .map_err(reconstruction)?;
    }
    if row.accepted_at.is_some() {
        let idea_id: String = row.idea_id.ok_or_else(|| {
            PersistenceError::ReconstructionError(format!(
                "Concept {id} was accepted but has no idea id"
            ))
        })?;
        concept
            .accept(parse_identity(&idea_id)?)
            .map_err(reconstruction)?;
    }
    if row.archived_at.is_some() {
        concept.archive().map_err(reconstruction)?;
    }
    if row.anonymized_at.is_some() {
        concept.anonymize().map_err(reconstruction)?;
    }
    Ok(concept)
}

// ============================================================================
// Idea sections
// ============================================================================

/// Serializes every section currently present on the idea, keyed by its
/// section label.
///
/// # Errors
///
/// Returns a `SerializationError` if a section cannot be serialized.
pub fn section_payloads(idea: &Idea) -> Result<Vec<(&'static str, String)>, PersistenceError> {
    let mut payloads: Vec<(&'static str, String)> = Vec::new();
    if let Some(section) = idea.value_proposition() {
        payloads.push((
            "value_proposition",
            serde_json::to_string(&ValuePropositionData {
                main_benefit: section.main_benefit().to_string(),
                problem_solving: section.problem_solving().to_string(),
                differentiation: section.differentiation().to_string(),
            })?,
        ));
    }
    if let Some(section) = idea.market_analysis() {
        payloads.push((
            "market_analysis",
            serde_json::to_string(&MarketAnalysisData {
                trends: section.trends().to_string(),
                user_behaviors: section.user_behaviors().to_string(),
                market_gaps: section.market_gaps().to_string(),
                innovation_opportunities: section.innovation_opportunities().to_string(),
            })?,
        ));
    }
    if let Some(section) = idea.competitor_analysis() {
        payloads.push((
            "competitor_analysis",
            serde_json::to_string(&CompetitorAnalysisData {
                competitors: section
                    .competitors()
                    .iter()
                    .map(|competitor| CompetitorData {
                        name: competitor.name().to_string(),
                        product_name: competitor.product_name().to_string(),
                        url: competitor.url().to_string(),
                        strengths: competitor.strengths().to_vec(),
                        weaknesses: competitor.weaknesses().to_vec(),
                    })
                    .collect(),
                comparison: section.comparison().to_string(),
                differentiation_suggestions: section.differentiation_suggestions().to_vec(),
            })?,
        ));
    }
    if !idea.product_names().is_empty() {
        let entries: Vec<ProductNameData> = idea
            .product_names()
            .iter()
            .map(|entry| ProductNameData {
                product_name: entry.product_name().to_string(),
                domains: entry.domains().to_vec(),
                why: entry.why().to_string(),
                tagline: entry.tagline().to_string(),
            })
            .collect();
        payloads.push(("product_names", serde_json::to_string(&entries)?));
    }
    if let Some(section) = idea.swot_analysis() {
        payloads.push((
            "swot_analysis",
            serde_json::to_string(&SwotAnalysisData {
                strengths: section.strengths().to_vec(),
                weaknesses: section.weaknesses().to_vec(),
                opportunities: section.opportunities().to_vec(),
                threats: section.threats().to_vec(),
            })?,
        ));
    }
    if !idea.elevator_pitches().is_empty() {
        let entries: Vec<ElevatorPitchData> = idea
            .elevator_pitches()
            .iter()
            .map(|pitch| ElevatorPitchData {
                hook: pitch.hook().to_string(),
                problem: pitch.problem().to_string(),
                solution: pitch.solution().to_string(),
                value_proposition: pitch.value_proposition().to_string(),
                call_to_action: pitch.call_to_action().to_string(),
            })
            .collect();
        payloads.push(("elevator_pitches", serde_json::to_string(&entries)?));
    }
    if !idea.google_trends_keywords().is_empty() {
        let entries: Vec<String> = idea
            .google_trends_keywords()
            .iter()
            .map(|entry| entry.keyword().to_string())
            .collect();
        payloads.push(("google_trends_keywords", serde_json::to_string(&entries)?));
    }
    if let Some(section) = idea.content_ideas() {
        let entries: Vec<ContentIdeaData> = section
            .ideas()
            .iter()
            .map(|entry| ContentIdeaData {
                platform: entry.platform().to_string(),
                ideas: entry.ideas().to_vec(),
                benefits: entry.benefits().to_vec(),
            })
            .collect();
        payloads.push(("content_ideas", serde_json::to_string(&entries)?));
    }
    if let Some(section) = idea.social_media_campaigns() {
        let entries: Vec<CampaignData> = section
            .campaigns()
            .iter()
            .map(|campaign| CampaignData {
                platform: campaign.platform().to_string(),
                content_idea: campaign.content_idea().to_string(),
                hashtags: campaign.hashtags().to_vec(),
            })
            .collect();
        payloads.push(("social_media_campaigns", serde_json::to_string(&entries)?));
    }
    if let Some(section) = idea.testing_plan() {
        payloads.push((
            "testing_plan",
            serde_json::to_string(&TestingPlanData {
                core_assumptions: section.core_assumptions().to_vec(),
                two_week_plan: section.two_week_plan().to_vec(),
                success_metrics: section.success_metrics().to_vec(),
            })?,
        ));
    }
    if let Some(section) = idea.context_analysis() {
        payloads.push((
            "context_analysis",
            serde_json::to_string(&ContextAnalysisData {
                problem_definition: section.problem_definition().to_string(),
                region_insights: section.region_insights().to_vec(),
                existing_solutions: section.existing_solutions().to_vec(),
                urgency: section.urgency().to_string(),
            })?,
        ));
    }
    Ok(payloads)
}

fn apply_section(idea: &mut Idea, section: &str, payload_json: &str) -> Result<(), PersistenceError> {
    match section {
        "value_proposition" => {
            let data: ValuePropositionData = serde_json::from_str(payload_json)?;
            idea.set_value_proposition(
                ValueProposition::new(
                    &data.main_benefit,
                    &data.problem_solving,
                    &data.differentiation,
                )
                .map_err(reconstruction)?,
            )
            .map_err(reconstruction)
        }
        "market_analysis" => {
            let data: MarketAnalysisData = serde_json::from_str(payload_json)?;
            idea.set_market_analysis(
                MarketAnalysis::new(
                    &data.trends,
                    &data.user_behaviors,
                    &data.market_gaps,
                    &data.innovation_opportunities,
                )
                .map_err(reconstruction)?,
            )
            .map_err(reconstruction)
        }
        "competitor_analysis" => {
            let data: CompetitorAnalysisData = serde_json::from_str(payload_json)?;
            let competitors: Vec<Competitor> = data
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
                .collect::<Result<_, _>>()
                .map_err(reconstruction)?;
            idea.set_competitor_analysis(
                CompetitorAnalysis::new(
                    competitors,
                    &data.comparison,
                    data.differentiation_suggestions,
                )
                .map_err(reconstruction)?,
            )
            .map_err(reconstruction)
        }
        "product_names" => {
            let entries: Vec<ProductNameData> = serde_json::from_str(payload_json)?;
            for entry in entries {
                idea.add_product_name(
                    ProductName::new(&entry.product_name, entry.domains, &entry.why, &entry.tagline)
                        .map_err(reconstruction)?,
                )
                .map_err(reconstruction)?;
            }
            Ok(())
        }
        "swot_analysis" => {
            let data: SwotAnalysisData = serde_json::from_str(payload_json)?;
            idea.set_swot_analysis(
                SwotAnalysis::new(
                    data.strengths,
                    data.weaknesses,
                    data.opportunities,
                    data.threats,
                )
                .map_err(reconstruction)?,
            )
            .map_err(reconstruction)
        }
        "elevator_pitches" => {
            let entries: Vec<ElevatorPitchData> = serde_json::from_str(payload_json)?;
            for entry in entries {
                idea.add_elevator_pitch(
                    ElevatorPitch::new(
                        &entry.hook,
                        &entry.problem,
                        &entry.solution,
                        &entry.value_proposition,
                        &entry.call_to_action,
                    )
                    .map_err(reconstruction)?,
                )
                .map_err(reconstruction)?;
            }
            Ok(())
        }
        "google_trends_keywords" => {
            let entries: Vec<String> = serde_json::from_str(payload_json)?;
            for entry in entries {
                idea.add_google_trends_keyword(
                    GoogleTrendsKeyword::new(&entry).map_err(reconstruction)?,
                )
                .map_err(reconstruction)?;
            }
            Ok(())
        }
        "content_ideas" => {
            let entries: Vec<ContentIdeaData> = serde_json::from_str(payload_json)?;
            let ideas: Vec<ContentIdea> = entries
                .into_iter()
                .map(|entry| ContentIdea::new(&entry.platform, entry.ideas, entry.benefits))
                .collect::<Result<_, _>>()
                .map_err(reconstruction)?;
            idea.set_content_ideas(
                ContentIdeasForMarketing::new(ideas).map_err(reconstruction)?,
            )
            .map_err(reconstruction)
        }
        "social_media_campaigns" => {
            let entries: Vec<CampaignData> = serde_json::from_str(payload_json)?;
            let campaigns: Vec<SocialMediaCampaign> = entries
                .into_iter()
                .map(|entry| {
                    SocialMediaCampaign::new(&entry.platform, &entry.content_idea, entry.hashtags)
                })
                .collect::<Result<_, _>>()
                .map_err(reconstruction)?;
            idea.set_social_media_campaigns(
                SocialMediaCampaigns::new(campaigns).map_err(reconstruction)?,
            )
            .map_err(reconstruction)
        }
        "testing_plan" => {
            let data: TestingPlanData = serde_json::from_str(payload_json)?;
            idea.set_testing_plan(
                TestingPlan::new(data.core_assumptions, data.two_week_plan, data.success_metrics)
                    .map_err(reconstruction)?,
            )
            .map_err(reconstruction)
        }
        "context_analysis" => {
            let data: ContextAnalysisData = serde_json::from_str(payload_json)?;
            idea.set_context_analysis(
                ContextAnalysis::new(
                    &data.problem_definition,
                    data.region_insights,
                    data.existing_solutions,
                    &data.urgency,
                )
                .map_err(reconstruction)?,
            )
            .map_err(reconstruction)
        }
        other => Err(PersistenceError::ReconstructionError(format!(
            "Unknown idea section: {other}"
        ))),
    }
}

/// Rebuilds an idea aggregate from its row and section rows.
///
/// # Errors
///
/// Returns a `ReconstructionError` if the rows cannot be rebuilt into a
/// valid aggregate.
pub fn reconstitute_idea(row: IdeaRow, sections: Vec<SectionRow>) -> Result<Idea, PersistenceError> {
    let id: Identity = parse_identity(&row.id)?;
    let audience_data: AudienceData = serde_json::from_str(&row.target_audience_json)?;
    let hypotheses: Vec<String> = serde_json::from_str(&row.hypotheses_json)?;

    let mut idea: Idea = Idea::new(
        id,
        parse_identity(&row.concept_id)?,
        problem_from_stored(&row.problem)?,
        MarketExistence::new(&row.market_existence).map_err(reconstruction)?,
        Region::from_str(&row.region).map_err(reconstruction)?,
        parse_product_type(row.product_type.as_deref())?,
        parse_stage(row.stage.as_deref())?,
        &row.statement,
        hypotheses,
        audience_from_data(audience_data, id)?,
    )
    .map_err(reconstruction)?;

    for section in sections {
        apply_section(&mut idea, &section.section, &section.payload_json)?;
    }
    if row.migrated != 0 {
        idea.migrate().map_err(reconstruction)?;
    }
    if row.archived != 0 {
        idea.archive().map_err(reconstruction)?;
    }
    Ok(idea)
}

// ============================================================================
// Hypothesis jobs
// ============================================================================

/// Rebuilds a hypothesis job from its row.
///
/// # Errors
///
/// Returns a `ReconstructionError` for malformed status or timestamps.
pub fn reconstitute_job(row: JobRow) -> Result<HypothesisJob, PersistenceError> {
    Ok(HypothesisJob::from_parts(
        parse_identity(&row.id)?,
        row.content,
        HypothesisJobStatus::from_str(&row.status).map_err(reconstruction)?,
        row.result,
        parse_timestamp(&row.created_at)?,
        parse_timestamp(&row.updated_at)?,
    ))
}
