// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Idea section subscribers, one per analysis section.
//!
//! They all share the load → call AI port → mutate → persist shape, so
//! the macro below generates them. Singular sections apply one value with
//! the write-once setter; list sections add every entry with the
//! duplicate-rejecting adder.

use crate::error::CoreError;
use crate::event_bus::EventSubscriber;
use crate::events::DomainEvent;
use crate::ports::{IdeaAnalyzer, IdeaRepository};
use async_trait::async_trait;
use checkmvp_domain::Idea;
use std::sync::Arc;
use tracing::info;

macro_rules! section_subscriber {
    ($(#[$doc:meta])* $name:ident, $label:literal, $method:ident, set $apply:ident) => {
        section_subscriber!(@struct $(#[$doc])* $name);
        #[async_trait]
        impl EventSubscriber for $name {
            fn name(&self) -> &'static str {
                $label
            }

            async fn handle(
                &self,
                event: &DomainEvent,
            ) -> Result<Option<DomainEvent>, CoreError> {
                let DomainEvent::IdeaCreated { idea_id } = *event else {
                    return Ok(None);
                };
                let idea = self.ideas.get_by_id(idea_id).await?;
                let section = self.analyzer.$method(&idea).await?;
                self.ideas
                    .update(idea_id, &move |idea: &mut Idea| {
                        idea.$apply(section.clone())
                    })
                    .await?;
                info!(idea_id = %idea_id, section = $label, "idea section stored");
                Ok(None)
            }
        }
    };
    ($(#[$doc:meta])* $name:ident, $label:literal, $method:ident, add $apply:ident) => {
        section_subscriber!(@struct $(#[$doc])* $name);
        #[async_trait]
        impl EventSubscriber for $name {
            fn name(&self) -> &'static str {
                $label
            }

            async fn handle(
                &self,
                event: &DomainEvent,
            ) -> Result<Option<DomainEvent>, CoreError> {
                let DomainEvent::IdeaCreated { idea_id } = *event else {
                    return Ok(None);
                };
                let idea = self.ideas.get_by_id(idea_id).await?;
                let entries = self.analyzer.$method(&idea).await?;
                self.ideas
                    .update(idea_id, &move |idea: &mut Idea| {
                        for entry in entries.clone() {
                            idea.$apply(entry)?;
                        }
                        Ok(())
                    })
                    .await?;
                info!(idea_id = %idea_id, section = $label, "idea section stored");
                Ok(None)
            }
        }
    };
    (@struct $(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        pub struct $name {
            ideas: Arc<dyn IdeaRepository>,
            analyzer: Arc<dyn IdeaAnalyzer>,
        }

        impl $name {
            /// Creates the subscriber.
            #[must_use]
            pub fn new(ideas: Arc<dyn IdeaRepository>, analyzer: Arc<dyn IdeaAnalyzer>) -> Self {
                Self { ideas, analyzer }
            }
        }
    };
}

section_subscriber!(
    /// Stores the value proposition section.
    ValuePropositionSubscriber,
    "value_proposition",
    value_proposition,
    set set_value_proposition
);

section_subscriber!(
    /// Stores the market analysis section.
    MarketAnalysisSubscriber,
    "market_analysis",
    market_analysis,
    set set_market_analysis
);

section_subscriber!(
    /// Stores the competitor analysis section.
    CompetitorAnalysisSubscriber,
    "competitor_analysis",
    competitor_analysis,
    set set_competitor_analysis
);

section_subscriber!(
    /// Stores the product name suggestions.
    ProductNamesSubscriber,
    "product_names",
    product_names,
    add add_product_name
);

section_subscriber!(
    /// Stores the SWOT analysis section.
    SwotAnalysisSubscriber,
    "swot_analysis",
    swot_analysis,
    set set_swot_analysis
);

section_subscriber!(
    /// Stores the elevator pitches.
    ElevatorPitchesSubscriber,
    "elevator_pitches",
    elevator_pitches,
    add add_elevator_pitch
);

section_subscriber!(
    /// Stores the Google Trends keywords.
    GoogleTrendsKeywordsSubscriber,
    "google_trends_keywords",
    google_trends_keywords,
    add add_google_trends_keyword
);

section_subscriber!(
    /// Stores the content marketing section.
    ContentIdeasSubscriber,
    "content_ideas",
    content_ideas,
    set set_content_ideas
);

section_subscriber!(
    /// Stores the social media campaigns section.
    SocialMediaCampaignsSubscriber,
    "social_media_campaigns",
    social_media_campaigns,
    set set_social_media_campaigns
);

section_subscriber!(
    /// Stores the testing plan section.
    TestingPlanSubscriber,
    "testing_plan",
    testing_plan,
    set set_testing_plan
);
