// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Prompt builders for the AI client.
//!
//! Every structured prompt instructs the model to answer with a single
//! JSON object matching the payload struct the caller deserializes into.

use checkmvp_domain::{Concept, Idea};
use std::fmt::Write;

pub const SYSTEM: &str = "You are an experienced startup analyst. \
Answer with a single JSON object and nothing else. \
Do not wrap the JSON in markdown fences.";

pub const HYPOTHESES_SYSTEM: &str = "You are an experienced startup analyst. \
Produce a short list of concrete, testable hypotheses as plain text.";

fn describe_concept(concept: &Concept) -> String {
    let mut text = format!("Problem statement: {}\n", concept.problem().value());
    if let Some(persona) = concept.persona() {
        let _ = writeln!(text, "Target persona: {}", persona.value());
    }
    let _ = writeln!(text, "Target region: {}", concept.region());
    if let Some(product_type) = concept.product_type() {
        let _ = writeln!(text, "Product type: {product_type}");
    }
    if let Some(stage) = concept.stage() {
        let _ = writeln!(text, "Product stage: {stage}");
    }
    text
}

fn describe_idea(idea: &Idea) -> String {
    let mut text = format!(
        "Problem statement: {}\nMarket existence: {}\nTarget region: {}\n",
        idea.problem().value(),
        idea.market_existence().value(),
        idea.region(),
    );
    if let Some(product_type) = idea.product_type() {
        let _ = writeln!(text, "Product type: {product_type}");
    }
    if let Some(stage) = idea.stage() {
        let _ = writeln!(text, "Product stage: {stage}");
    }
    let _ = writeln!(text, "Idea statement: {}", idea.statement());
    let _ = writeln!(
        text,
        "Target audience: {} ({})",
        idea.target_audience().segment(),
        idea.target_audience().description(),
    );
    text
}

pub fn evaluation(concept: &Concept) -> String {
    format!(
        "{}\nEvaluate how well-defined this problem is. Respond with JSON: \
{{\"status\": \"well-defined\"|\"requires_changes\"|\"not-well-defined\", \
\"suggestions\": [string], \"recommendations\": [string], \
\"pain_points\": [string], \"market_existence\": string|null, \
\"target_audiences\": [{{\"segment\": string, \"description\": string, \
\"challenges\": [string], \"validation_metrics\": {{\"market_size\": string, \
\"accessibility\": 0-10, \"pain_point_intensity\": 0-10, \
\"willingness_to_pay\": 0-10}}}}], \
\"clarity_score\": {{\"overall_score\": 0-10, \"problem_clarity\": 0-10, \
\"target_audience_clarity\": 0-10, \"scope_definition\": 0-10, \
\"value_proposition_clarity\": 0-10}}, \
\"language_analysis\": {{\"vague_terms\": [string], \
\"missing_context\": [string], \"ambiguous_statements\": [string]}}}}. \
When status is well-defined: fill pain_points, target_audiences and \
market_existence, leave suggestions and recommendations empty. When status \
is requires_changes: fill suggestions and recommendations, leave \
pain_points and target_audiences empty. When status is not-well-defined: \
fill only suggestions.",
        describe_concept(concept)
    )
}

pub fn value_proposition(idea: &Idea) -> String {
    format!(
        "{}\nDerive the value proposition. Respond with JSON: \
{{\"main_benefit\": string, \"problem_solving\": string, \
\"differentiation\": string}}.",
        describe_idea(idea)
    )
}

pub fn market_analysis(idea: &Idea) -> String {
    format!(
        "{}\nAnalyze the market. Respond with JSON: {{\"trends\": string, \
\"user_behaviors\": string, \"market_gaps\": string, \
\"innovation_opportunities\": string}}.",
        describe_idea(idea)
    )
}

pub fn competitor_analysis(idea: &Idea) -> String {
    format!(
        "{}\nAnalyze the competitive landscape. Respond with JSON: \
{{\"competitors\": [{{\"name\": string, \"product_name\": string, \
\"url\": string, \"strengths\": [string], \"weaknesses\": [string]}}], \
\"comparison\": string, \"differentiation_suggestions\": [string]}}.",
        describe_idea(idea)
    )
}

pub fn product_names(idea: &Idea) -> String {
    format!(
        "{}\nSuggest product names. Respond with JSON: \
{{\"product_names\": [{{\"product_name\": string, \"domains\": [string], \
\"why\": string, \"tagline\": string}}]}}.",
        describe_idea(idea)
    )
}

pub fn swot_analysis(idea: &Idea) -> String {
    format!(
        "{}\nProduce a SWOT analysis. Respond with JSON: \
{{\"strengths\": [string], \"weaknesses\": [string], \
\"opportunities\": [string], \"threats\": [string]}}.",
        describe_idea(idea)
    )
}

pub fn elevator_pitches(idea: &Idea) -> String {
    format!(
        "{}\nWrite elevator pitches. Respond with JSON: \
{{\"pitches\": [{{\"hook\": string, \"problem\": string, \
\"solution\": string, \"value_proposition\": string, \
\"call_to_action\": string}}]}}.",
        describe_idea(idea)
    )
}

pub fn google_trends_keywords(idea: &Idea) -> String {
    format!(
        "{}\nSuggest Google Trends keywords. Respond with JSON: \
{{\"keywords\": [string]}}.",
        describe_idea(idea)
    )
}

pub fn content_ideas(idea: &Idea) -> String {
    format!(
        "{}\nSuggest content marketing ideas per platform. Respond with \
JSON: {{\"ideas\": [{{\"platform\": string, \"ideas\": [string], \
\"benefits\": [string]}}]}}.",
        describe_idea(idea)
    )
}

pub fn social_media_campaigns(idea: &Idea) -> String {
    format!(
        "{}\nSuggest social media campaigns. Respond with JSON: \
{{\"campaigns\": [{{\"platform\": string, \"content_idea\": string, \
\"hashtags\": [string]}}]}}.",
        describe_idea(idea)
    )
}

pub fn testing_plan(idea: &Idea) -> String {
    format!(
        "{}\nDraft a two-week validation plan. Respond with JSON: \
{{\"core_assumptions\": [string], \"two_week_plan\": [string], \
\"success_metrics\": [string]}}.",
        describe_idea(idea)
    )
}

pub fn context_analysis(idea: &Idea) -> String {
    format!(
        "{}\nAnalyze the problem's context. Respond with JSON: \
{{\"problem_definition\": string, \"region_insights\": [string], \
\"existing_solutions\": [string], \"urgency\": string}}.",
        describe_idea(idea)
    )
}

pub fn audience_details(idea: &Idea) -> String {
    format!(
        "{}\nDetail the target audience. Respond with JSON: \
{{\"why\": string, \"pain_points\": [string], \
\"targeting_strategy\": string}}.",
        describe_idea(idea)
    )
}

pub fn hypotheses(content: &str) -> String {
    format!(
        "A founder describes their product as follows:\n{content}\n\
List the most important testable hypotheses behind this product, one per \
line.",
    )
}
