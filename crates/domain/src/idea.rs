// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::idea_sections::{
    CompetitorAnalysis, ContentIdeasForMarketing, ContextAnalysis, ElevatorPitch,
    GoogleTrendsKeyword, MarketAnalysis, ProductName, SocialMediaCampaigns, SwotAnalysis,
    TestingPlan, ValueProposition,
};
use crate::idea_target_audience::IdeaTargetAudience;
use crate::identity::Identity;
use crate::types::{MarketExistence, Problem, ProductType, Region, Stage};
use crate::validation::{validate_string_list, validate_text};

/// The idea aggregate root.
///
/// An idea is born from an accepted concept and accumulates analysis
/// sections, each computed by an independent enrichment subscriber.
/// Singular sections are write-once; list sections reject duplicates by
/// natural key. This makes duplicate event delivery fail loudly instead of
/// silently double-applying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Idea {
    id: Identity,
    concept_id: Identity,
    problem: Problem,
    market_existence: MarketExistence,
    region: Region,
    product_type: Option<ProductType>,
    stage: Option<Stage>,
    statement: String,
    hypotheses: Vec<String>,
    target_audience: IdeaTargetAudience,
    value_proposition: Option<ValueProposition>,
    market_analysis: Option<MarketAnalysis>,
    competitor_analysis: Option<CompetitorAnalysis>,
    product_names: Vec<ProductName>,
    swot_analysis: Option<SwotAnalysis>,
    elevator_pitches: Vec<ElevatorPitch>,
    google_trends_keywords: Vec<GoogleTrendsKeyword>,
    content_ideas: Option<ContentIdeasForMarketing>,
    social_media_campaigns: Option<SocialMediaCampaigns>,
    testing_plan: Option<TestingPlan>,
    context_analysis: Option<ContextAnalysis>,
    migrated: bool,
    archived: bool,
}

impl Idea {
    /// Creates a new idea with no analysis sections yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement is empty or the hypotheses list
    /// is empty or contains empty entries.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Identity,
        concept_id: Identity,
        problem: Problem,
        market_existence: MarketExistence,
        region: Region,
        product_type: Option<ProductType>,
        stage: Option<Stage>,
        statement: &str,
        hypotheses: Vec<String>,
        target_audience: IdeaTargetAudience,
    ) -> Result<Self, DomainError> {
        if hypotheses.is_empty() {
            return Err(DomainError::EmptyField {
                field: "hypotheses",
            });
        }
        Ok(Self {
            id,
            concept_id,
            problem,
            market_existence,
            region,
            product_type,
            stage,
            statement: validate_text("statement", statement, 1, usize::MAX)?,
            hypotheses: validate_string_list("hypotheses", hypotheses)?,
            target_audience,
            value_proposition: None,
            market_analysis: None,
            competitor_analysis: None,
            product_names: Vec::new(),
            swot_analysis: None,
            elevator_pitches: Vec::new(),
            google_trends_keywords: Vec::new(),
            content_ideas: None,
            social_media_campaigns: None,
            testing_plan: None,
            context_analysis: None,
            migrated: false,
            archived: false,
        })
    }

    /// Sets the value proposition section. Write-once.
    ///
    /// # Errors
    ///
    /// Returns `SectionAlreadySet` on a second invocation.
    pub fn set_value_proposition(&mut self, section: ValueProposition) -> Result<(), DomainError> {
        if self.value_proposition.is_some() {
            return Err(DomainError::SectionAlreadySet {
                section: "value_proposition",
            });
        }
        self.value_proposition = Some(section);
        Ok(())
    }

    /// Sets the market analysis section. Write-once.
    ///
    /// # Errors
    ///
    /// Returns `SectionAlreadySet` on a second invocation.
    pub fn set_market_analysis(&mut self, section: MarketAnalysis) -> Result<(), DomainError> {
        if self.market_analysis.is_some() {
            return Err(DomainError::SectionAlreadySet {
                section: "market_analysis",
            });
        }
        self.market_analysis = Some(section);
        Ok(())
    }

    /// Sets the competitor analysis section. Write-once.
    ///
    /// # Errors
    ///
    /// Returns `SectionAlreadySet` on a second invocation.
    pub fn set_competitor_analysis(
        &mut self,
        section: CompetitorAnalysis,
    ) -> Result<(), DomainError> {
        if self.competitor_analysis.is_some() {
            return Err(DomainError::SectionAlreadySet {
                section: "competitor_analysis",
            });
        }
        self.competitor_analysis = Some(section);
        Ok(())
    }

    /// Adds a product name suggestion. Duplicates by name are rejected.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateSectionEntry` if a suggestion with the same name
    /// already exists.
    pub fn add_product_name(&mut self, entry: ProductName) -> Result<(), DomainError> {
        if self
            .product_names
            .iter()
            .any(|existing| existing.product_name() == entry.product_name())
        {
            return Err(DomainError::DuplicateSectionEntry {
                section: "product_names",
                key: entry.product_name().to_string(),
            });
        }
        self.product_names.push(entry);
        Ok(())
    }

    /// Sets the SWOT analysis section. Write-once.
    ///
    /// # Errors
    ///
    /// Returns `SectionAlreadySet` on a second invocation.
    pub fn set_swot_analysis(&mut self, section: SwotAnalysis) -> Result<(), DomainError> {
        if self.swot_analysis.is_some() {
            return Err(DomainError::SectionAlreadySet {
                section: "swot_analysis",
            });
        }
        self.swot_analysis = Some(section);
        Ok(())
    }

    /// Adds an elevator pitch. Duplicates by hook are rejected.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateSectionEntry` if a pitch with the same hook
    /// already exists.
    pub fn add_elevator_pitch(&mut self, entry: ElevatorPitch) -> Result<(), DomainError> {
        if self
            .elevator_pitches
            .iter()
            .any(|existing| existing.hook() == entry.hook())
        {
            return Err(DomainError::DuplicateSectionEntry {
                section: "elevator_pitches",
                key: entry.hook().to_string(),
            });
        }
        self.elevator_pitches.push(entry);
        Ok(())
    }

    /// Adds a Google Trends keyword. Duplicates by keyword are rejected.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateSectionEntry` if the keyword already exists.
    pub fn add_google_trends_keyword(
        &mut self,
        entry: GoogleTrendsKeyword,
    ) -> Result<(), DomainError> {
        if self
            .google_trends_keywords
            .iter()
            .any(|existing| existing.keyword() == entry.keyword())
        {
            return Err(DomainError::DuplicateSectionEntry {
                section: "google_trends_keywords",
                key: entry.keyword().to_string(),
            });
        }
        self.google_trends_keywords.push(entry);
        Ok(())
    }

    /// Sets the content marketing section. Write-once.
    ///
    /// # Errors
    ///
    /// Returns `SectionAlreadySet` on a second invocation.
    pub fn set_content_ideas(
        &mut self,
        section: ContentIdeasForMarketing,
    ) -> Result<(), DomainError> {
        if self.content_ideas.is_some() {
            return Err(DomainError::SectionAlreadySet {
                section: "content_ideas",
            });
        }
        self.content_ideas = Some(section);
        Ok(())
    }

    /// Sets the social media campaigns section. Write-once.
    ///
    /// # Errors
    ///
    /// Returns `SectionAlreadySet` on a second invocation.
    pub fn set_social_media_campaigns(
        &mut self,
        section: SocialMediaCampaigns,
    ) -> Result<(), DomainError> {
        if self.social_media_campaigns.is_some() {
            return Err(DomainError::SectionAlreadySet {
                section: "social_media_campaigns",
            });
        }
        self.social_media_campaigns = Some(section);
        Ok(())
    }

    /// Sets the testing plan section. Write-once.
    ///
    /// # Errors
    ///
    /// Returns `SectionAlreadySet` on a second invocation.
    pub fn set_testing_plan(&mut self, section: TestingPlan) -> Result<(), DomainError> {
        if self.testing_plan.is_some() {
            return Err(DomainError::SectionAlreadySet {
                section: "testing_plan",
            });
        }
        self.testing_plan = Some(section);
        Ok(())
    }

    /// Sets the context analysis section. Write-once.
    ///
    /// # Errors
    ///
    /// Returns `SectionAlreadySet` on a second invocation.
    pub fn set_context_analysis(&mut self, section: ContextAnalysis) -> Result<(), DomainError> {
        if self.context_analysis.is_some() {
            return Err(DomainError::SectionAlreadySet {
                section: "context_analysis",
            });
        }
        self.context_analysis = Some(section);
        Ok(())
    }

    /// Fills in the target audience detail fields. Each is write-once.
    ///
    /// # Errors
    ///
    /// Returns an error if any field was already set or a value is empty.
    pub fn detail_target_audience(
        &mut self,
        why: &str,
        pain_points: Vec<String>,
        targeting_strategy: &str,
    ) -> Result<(), DomainError> {
        self.target_audience.set_why(why)?;
        self.target_audience.set_pain_points(pain_points)?;
        self.target_audience.set_targeting_strategy(targeting_strategy)?;
        Ok(())
    }

    /// Marks the idea as migrated. Write-once.
    ///
    /// # Errors
    ///
    /// Returns `IdeaAlreadyMigrated` on a second invocation.
    pub fn migrate(&mut self) -> Result<(), DomainError> {
        if self.migrated {
            return Err(DomainError::IdeaAlreadyMigrated(self.id));
        }
        self.migrated = true;
        Ok(())
    }

    /// Marks the idea as archived. Write-once.
    ///
    /// # Errors
    ///
    /// Returns `IdeaAlreadyArchived` on a second invocation.
    pub fn archive(&mut self) -> Result<(), DomainError> {
        if self.archived {
            return Err(DomainError::IdeaAlreadyArchived(self.id));
        }
        self.archived = true;
        Ok(())
    }

    /// Returns the idea identity.
    #[must_use]
    pub const fn id(&self) -> Identity {
        self.id
    }

    /// Returns the originating concept's identity.
    #[must_use]
    pub const fn concept_id(&self) -> Identity {
        self.concept_id
    }

    /// Returns the problem statement.
    #[must_use]
    pub const fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Returns the market existence assessment.
    #[must_use]
    pub const fn market_existence(&self) -> &MarketExistence {
        &self.market_existence
    }

    /// Returns the target region.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Returns the product type, if known.
    #[must_use]
    pub const fn product_type(&self) -> Option<ProductType> {
        self.product_type
    }

    /// Returns the product stage, if known.
    #[must_use]
    pub const fn stage(&self) -> Option<Stage> {
        self.stage
    }

    /// Returns the reservation statement.
    #[must_use]
    pub fn statement(&self) -> &str {
        &self.statement
    }

    /// Returns the reservation hypotheses.
    #[must_use]
    pub fn hypotheses(&self) -> &[String] {
        &self.hypotheses
    }

    /// Returns the target audience.
    #[must_use]
    pub const fn target_audience(&self) -> &IdeaTargetAudience {
        &self.target_audience
    }

    /// Returns the value proposition section, if set.
    #[must_use]
    pub const fn value_proposition(&self) -> Option<&ValueProposition> {
        self.value_proposition.as_ref()
    }

    /// Returns the market analysis section, if set.
    #[must_use]
    pub const fn market_analysis(&self) -> Option<&MarketAnalysis> {
        self.market_analysis.as_ref()
    }

    /// Returns the competitor analysis section, if set.
    #[must_use]
    pub const fn competitor_analysis(&self) -> Option<&CompetitorAnalysis> {
        self.competitor_analysis.as_ref()
    }

    /// Returns the product name suggestions.
    #[must_use]
    pub fn product_names(&self) -> &[ProductName] {
        &self.product_names
    }

    /// Returns the SWOT analysis section, if set.
    #[must_use]
    pub const fn swot_analysis(&self) -> Option<&SwotAnalysis> {
        self.swot_analysis.as_ref()
    }

    /// Returns the elevator pitches.
    #[must_use]
    pub fn elevator_pitches(&self) -> &[ElevatorPitch] {
        &self.elevator_pitches
    }

    /// Returns the Google Trends keywords.
    #[must_use]
    pub fn google_trends_keywords(&self) -> &[GoogleTrendsKeyword] {
        &self.google_trends_keywords
    }

    /// Returns the content marketing section, if set.
    #[must_use]
    pub const fn content_ideas(&self) -> Option<&ContentIdeasForMarketing> {
        self.content_ideas.as_ref()
    }

    /// Returns the social media campaigns section, if set.
    #[must_use]
    pub const fn social_media_campaigns(&self) -> Option<&SocialMediaCampaigns> {
        self.social_media_campaigns.as_ref()
    }

    /// Returns the testing plan section, if set.
    #[must_use]
    pub const fn testing_plan(&self) -> Option<&TestingPlan> {
        self.testing_plan.as_ref()
    }

    /// Returns the context analysis section, if set.
    #[must_use]
    pub const fn context_analysis(&self) -> Option<&ContextAnalysis> {
        self.context_analysis.as_ref()
    }

    /// Whether the idea was migrated from the legacy pipeline.
    #[must_use]
    pub const fn is_migrated(&self) -> bool {
        self.migrated
    }

    /// Whether the idea was archived.
    #[must_use]
    pub const fn is_archived(&self) -> bool {
        self.archived
    }
}
