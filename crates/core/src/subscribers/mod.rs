// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event subscribers forming the enrichment pipeline.
//!
//! `ConceptCreated` runs the AI evaluation. `IdeaCreated` fans out to ten
//! independent section subscribers plus the target audience subscriber,
//! which in turn triggers the context analysis. Each subscriber follows
//! the same shape: load the aggregate, call the AI port, apply the
//! mutation, persist.

mod concept_evaluation;
mod context_analysis;
mod sections;
mod target_audience;

pub use concept_evaluation::ConceptEvaluationSubscriber;
pub use context_analysis::ContextAnalysisSubscriber;
pub use sections::{
    CompetitorAnalysisSubscriber, ContentIdeasSubscriber, ElevatorPitchesSubscriber,
    GoogleTrendsKeywordsSubscriber, MarketAnalysisSubscriber, ProductNamesSubscriber,
    SocialMediaCampaignsSubscriber, SwotAnalysisSubscriber, TestingPlanSubscriber,
    ValuePropositionSubscriber,
};
pub use target_audience::TargetAudienceSubscriber;
