// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Analysis section value objects accumulated by the `Idea` aggregate.
//!
//! Each section is computed independently by one enrichment subscriber and
//! attached to the idea exactly once.

use crate::error::DomainError;
use crate::validation::{validate_string_list, validate_text};

/// Why a user would pick this product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueProposition {
    main_benefit: String,
    problem_solving: String,
    differentiation: String,
}

impl ValueProposition {
    /// Creates a validated `ValueProposition`.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is empty or whitespace-only.
    pub fn new(
        main_benefit: &str,
        problem_solving: &str,
        differentiation: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            main_benefit: validate_text("main_benefit", main_benefit, 1, usize::MAX)?,
            problem_solving: validate_text("problem_solving", problem_solving, 1, usize::MAX)?,
            differentiation: validate_text("differentiation", differentiation, 1, usize::MAX)?,
        })
    }

    /// Returns the main benefit statement.
    #[must_use]
    pub fn main_benefit(&self) -> &str {
        &self.main_benefit
    }

    /// Returns how the product solves the problem.
    #[must_use]
    pub fn problem_solving(&self) -> &str {
        &self.problem_solving
    }

    /// Returns what sets the product apart.
    #[must_use]
    pub fn differentiation(&self) -> &str {
        &self.differentiation
    }
}

/// Market landscape around the idea.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketAnalysis {
    trends: String,
    user_behaviors: String,
    market_gaps: String,
    innovation_opportunities: String,
}

impl MarketAnalysis {
    /// Creates a validated `MarketAnalysis`.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is empty or whitespace-only.
    pub fn new(
        trends: &str,
        user_behaviors: &str,
        market_gaps: &str,
        innovation_opportunities: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            trends: validate_text("trends", trends, 1, usize::MAX)?,
            user_behaviors: validate_text("user_behaviors", user_behaviors, 1, usize::MAX)?,
            market_gaps: validate_text("market_gaps", market_gaps, 1, usize::MAX)?,
            innovation_opportunities: validate_text(
                "innovation_opportunities",
                innovation_opportunities,
                1,
                usize::MAX,
            )?,
        })
    }

    /// Returns the market trends summary.
    #[must_use]
    pub fn trends(&self) -> &str {
        &self.trends
    }

    /// Returns the user behaviors summary.
    #[must_use]
    pub fn user_behaviors(&self) -> &str {
        &self.user_behaviors
    }

    /// Returns the identified market gaps.
    #[must_use]
    pub fn market_gaps(&self) -> &str {
        &self.market_gaps
    }

    /// Returns the innovation opportunities.
    #[must_use]
    pub fn innovation_opportunities(&self) -> &str {
        &self.innovation_opportunities
    }
}

/// A single competitor in the competitor analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Competitor {
    name: String,
    product_name: String,
    url: String,
    strengths: Vec<String>,
    weaknesses: Vec<String>,
}

impl Competitor {
    /// Creates a validated `Competitor`.
    ///
    /// # Errors
    ///
    /// Returns an error if any text field or list entry is empty.
    pub fn new(
        name: &str,
        product_name: &str,
        url: &str,
        strengths: Vec<String>,
        weaknesses: Vec<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            name: validate_text("competitor_name", name, 1, usize::MAX)?,
            product_name: validate_text("competitor_product_name", product_name, 1, usize::MAX)?,
            url: validate_text("competitor_url", url, 1, usize::MAX)?,
            strengths: validate_string_list("competitor_strengths", strengths)?,
            weaknesses: validate_string_list("competitor_weaknesses", weaknesses)?,
        })
    }

    /// Returns the competitor company name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the competitor product name.
    #[must_use]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Returns the competitor URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the competitor's strengths.
    #[must_use]
    pub fn strengths(&self) -> &[String] {
        &self.strengths
    }

    /// Returns the competitor's weaknesses.
    #[must_use]
    pub fn weaknesses(&self) -> &[String] {
        &self.weaknesses
    }
}

/// Competitive landscape for the idea.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitorAnalysis {
    competitors: Vec<Competitor>,
    comparison: String,
    differentiation_suggestions: Vec<String>,
}

impl CompetitorAnalysis {
    /// Creates a validated `CompetitorAnalysis`.
    ///
    /// # Errors
    ///
    /// Returns an error if the comparison is empty or any suggestion
    /// entry is empty.
    pub fn new(
        competitors: Vec<Competitor>,
        comparison: &str,
        differentiation_suggestions: Vec<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            competitors,
            comparison: validate_text("comparison", comparison, 1, usize::MAX)?,
            differentiation_suggestions: validate_string_list(
                "differentiation_suggestions",
                differentiation_suggestions,
            )?,
        })
    }

    /// Returns the analyzed competitors.
    #[must_use]
    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    /// Returns the comparison summary.
    #[must_use]
    pub fn comparison(&self) -> &str {
        &self.comparison
    }

    /// Returns suggestions for differentiating from competitors.
    #[must_use]
    pub fn differentiation_suggestions(&self) -> &[String] {
        &self.differentiation_suggestions
    }
}

/// A suggested product name. List section, keyed by the name itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName {
    product_name: String,
    domains: Vec<String>,
    why: String,
    tagline: String,
}

impl ProductName {
    /// Creates a validated `ProductName`.
    ///
    /// # Errors
    ///
    /// Returns an error if any text field or domain entry is empty.
    pub fn new(
        product_name: &str,
        domains: Vec<String>,
        why: &str,
        tagline: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            product_name: validate_text("product_name", product_name, 1, usize::MAX)?,
            domains: validate_string_list("domains", domains)?,
            why: validate_text("why", why, 1, usize::MAX)?,
            tagline: validate_text("tagline", tagline, 1, usize::MAX)?,
        })
    }

    /// Returns the suggested name.
    #[must_use]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Returns candidate domain names.
    #[must_use]
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// Returns the rationale for the name.
    #[must_use]
    pub fn why(&self) -> &str {
        &self.why
    }

    /// Returns the suggested tagline.
    #[must_use]
    pub fn tagline(&self) -> &str {
        &self.tagline
    }
}

/// Strengths, weaknesses, opportunities, and threats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwotAnalysis {
    strengths: Vec<String>,
    weaknesses: Vec<String>,
    opportunities: Vec<String>,
    threats: Vec<String>,
}

impl SwotAnalysis {
    /// Creates a validated `SwotAnalysis`.
    ///
    /// # Errors
    ///
    /// Returns an error if any quadrant is empty or contains an empty entry.
    pub fn new(
        strengths: Vec<String>,
        weaknesses: Vec<String>,
        opportunities: Vec<String>,
        threats: Vec<String>,
    ) -> Result<Self, DomainError> {
        for (field, values) in [
            ("strengths", &strengths),
            ("weaknesses", &weaknesses),
            ("opportunities", &opportunities),
            ("threats", &threats),
        ] {
            if values.is_empty() {
                return Err(DomainError::EmptyField { field });
            }
        }
        Ok(Self {
            strengths: validate_string_list("strengths", strengths)?,
            weaknesses: validate_string_list("weaknesses", weaknesses)?,
            opportunities: validate_string_list("opportunities", opportunities)?,
            threats: validate_string_list("threats", threats)?,
        })
    }

    /// Returns the strengths quadrant.
    #[must_use]
    pub fn strengths(&self) -> &[String] {
        &self.strengths
    }

    /// Returns the weaknesses quadrant.
    #[must_use]
    pub fn weaknesses(&self) -> &[String] {
        &self.weaknesses
    }

    /// Returns the opportunities quadrant.
    #[must_use]
    pub fn opportunities(&self) -> &[String] {
        &self.opportunities
    }

    /// Returns the threats quadrant.
    #[must_use]
    pub fn threats(&self) -> &[String] {
        &self.threats
    }
}

/// A short pitch for the idea. List section, keyed by hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorPitch {
    hook: String,
    problem: String,
    solution: String,
    value_proposition: String,
    call_to_action: String,
}

impl ElevatorPitch {
    /// Creates a validated `ElevatorPitch`.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is empty or whitespace-only.
    pub fn new(
        hook: &str,
        problem: &str,
        solution: &str,
        value_proposition: &str,
        call_to_action: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            hook: validate_text("hook", hook, 1, usize::MAX)?,
            problem: validate_text("pitch_problem", problem, 1, usize::MAX)?,
            solution: validate_text("solution", solution, 1, usize::MAX)?,
            value_proposition: validate_text(
                "pitch_value_proposition",
                value_proposition,
                1,
                usize::MAX,
            )?,
            call_to_action: validate_text("call_to_action", call_to_action, 1, usize::MAX)?,
        })
    }

    /// Returns the opening hook.
    #[must_use]
    pub fn hook(&self) -> &str {
        &self.hook
    }

    /// Returns the problem framing.
    #[must_use]
    pub fn problem(&self) -> &str {
        &self.problem
    }

    /// Returns the solution framing.
    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// Returns the value proposition line.
    #[must_use]
    pub fn value_proposition(&self) -> &str {
        &self.value_proposition
    }

    /// Returns the call to action.
    #[must_use]
    pub fn call_to_action(&self) -> &str {
        &self.call_to_action
    }
}

/// A keyword worth tracking on Google Trends. List section, keyed by keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleTrendsKeyword {
    keyword: String,
}

impl GoogleTrendsKeyword {
    /// Creates a validated `GoogleTrendsKeyword`.
    ///
    /// # Errors
    ///
    /// Returns an error if the keyword is empty or whitespace-only.
    pub fn new(keyword: &str) -> Result<Self, DomainError> {
        Ok(Self {
            keyword: validate_text("keyword", keyword, 1, usize::MAX)?,
        })
    }

    /// Returns the keyword text.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

/// Content marketing ideas grouped per platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIdea {
    platform: String,
    ideas: Vec<String>,
    benefits: Vec<String>,
}

impl ContentIdea {
    /// Creates a validated `ContentIdea`.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform is empty or the ideas list is
    /// empty or contains an empty entry.
    pub fn new(
        platform: &str,
        ideas: Vec<String>,
        benefits: Vec<String>,
    ) -> Result<Self, DomainError> {
        if ideas.is_empty() {
            return Err(DomainError::EmptyField { field: "ideas" });
        }
        Ok(Self {
            platform: validate_text("platform", platform, 1, usize::MAX)?,
            ideas: validate_string_list("ideas", ideas)?,
            benefits: validate_string_list("benefits", benefits)?,
        })
    }

    /// Returns the platform name.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Returns the content ideas for this platform.
    #[must_use]
    pub fn ideas(&self) -> &[String] {
        &self.ideas
    }

    /// Returns why this platform fits.
    #[must_use]
    pub fn benefits(&self) -> &[String] {
        &self.benefits
    }
}

/// The full content-marketing section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIdeasForMarketing {
    ideas: Vec<ContentIdea>,
}

impl ContentIdeasForMarketing {
    /// Creates a validated `ContentIdeasForMarketing`.
    ///
    /// # Errors
    ///
    /// Returns an error if the idea list is empty.
    pub fn new(ideas: Vec<ContentIdea>) -> Result<Self, DomainError> {
        if ideas.is_empty() {
            return Err(DomainError::EmptyField {
                field: "content_ideas",
            });
        }
        Ok(Self { ideas })
    }

    /// Returns the per-platform content ideas.
    #[must_use]
    pub fn ideas(&self) -> &[ContentIdea] {
        &self.ideas
    }
}

/// A single social media campaign suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialMediaCampaign {
    platform: String,
    content_idea: String,
    hashtags: Vec<String>,
}

impl SocialMediaCampaign {
    /// Creates a validated `SocialMediaCampaign`.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform or content idea is empty, or a
    /// hashtag entry is empty.
    pub fn new(
        platform: &str,
        content_idea: &str,
        hashtags: Vec<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            platform: validate_text("campaign_platform", platform, 1, usize::MAX)?,
            content_idea: validate_text("content_idea", content_idea, 1, usize::MAX)?,
            hashtags: validate_string_list("hashtags", hashtags)?,
        })
    }

    /// Returns the platform name.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Returns the content idea.
    #[must_use]
    pub fn content_idea(&self) -> &str {
        &self.content_idea
    }

    /// Returns the suggested hashtags.
    #[must_use]
    pub fn hashtags(&self) -> &[String] {
        &self.hashtags
    }
}

/// The full social-media-campaigns section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialMediaCampaigns {
    campaigns: Vec<SocialMediaCampaign>,
}

impl SocialMediaCampaigns {
    /// Creates a validated `SocialMediaCampaigns`.
    ///
    /// # Errors
    ///
    /// Returns an error if the campaign list is empty.
    pub fn new(campaigns: Vec<SocialMediaCampaign>) -> Result<Self, DomainError> {
        if campaigns.is_empty() {
            return Err(DomainError::EmptyField { field: "campaigns" });
        }
        Ok(Self { campaigns })
    }

    /// Returns the campaign suggestions.
    #[must_use]
    pub fn campaigns(&self) -> &[SocialMediaCampaign] {
        &self.campaigns
    }
}

/// A two-week validation testing plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestingPlan {
    core_assumptions: Vec<String>,
    two_week_plan: Vec<String>,
    success_metrics: Vec<String>,
}

impl TestingPlan {
    /// Creates a validated `TestingPlan`.
    ///
    /// # Errors
    ///
    /// Returns an error if any list is empty or contains an empty entry.
    pub fn new(
        core_assumptions: Vec<String>,
        two_week_plan: Vec<String>,
        success_metrics: Vec<String>,
    ) -> Result<Self, DomainError> {
        for (field, values) in [
            ("core_assumptions", &core_assumptions),
            ("two_week_plan", &two_week_plan),
            ("success_metrics", &success_metrics),
        ] {
            if values.is_empty() {
                return Err(DomainError::EmptyField { field });
            }
        }
        Ok(Self {
            core_assumptions: validate_string_list("core_assumptions", core_assumptions)?,
            two_week_plan: validate_string_list("two_week_plan", two_week_plan)?,
            success_metrics: validate_string_list("success_metrics", success_metrics)?,
        })
    }

    /// Returns the core assumptions to test.
    #[must_use]
    pub fn core_assumptions(&self) -> &[String] {
        &self.core_assumptions
    }

    /// Returns the two-week plan steps.
    #[must_use]
    pub fn two_week_plan(&self) -> &[String] {
        &self.two_week_plan
    }

    /// Returns the success metrics.
    #[must_use]
    pub fn success_metrics(&self) -> &[String] {
        &self.success_metrics
    }
}

/// Broader context around the problem, computed after the target audience
/// details are in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextAnalysis {
    problem_definition: String,
    region_insights: Vec<String>,
    existing_solutions: Vec<String>,
    urgency: String,
}

impl ContextAnalysis {
    /// Creates a validated `ContextAnalysis`.
    ///
    /// # Errors
    ///
    /// Returns an error if a text field or list entry is empty.
    pub fn new(
        problem_definition: &str,
        region_insights: Vec<String>,
        existing_solutions: Vec<String>,
        urgency: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            problem_definition: validate_text(
                "problem_definition",
                problem_definition,
                1,
                usize::MAX,
            )?,
            region_insights: validate_string_list("region_insights", region_insights)?,
            existing_solutions: validate_string_list("existing_solutions", existing_solutions)?,
            urgency: validate_text("urgency", urgency, 1, usize::MAX)?,
        })
    }

    /// Returns the refined problem definition.
    #[must_use]
    pub fn problem_definition(&self) -> &str {
        &self.problem_definition
    }

    /// Returns insights specific to the target region.
    #[must_use]
    pub fn region_insights(&self) -> &[String] {
        &self.region_insights
    }

    /// Returns known existing solutions.
    #[must_use]
    pub fn existing_solutions(&self) -> &[String] {
        &self.existing_solutions
    }

    /// Returns the urgency assessment.
    #[must_use]
    pub fn urgency(&self) -> &str {
        &self.urgency
    }
}
