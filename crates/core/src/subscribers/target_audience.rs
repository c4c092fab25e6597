// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::event_bus::EventSubscriber;
use crate::events::DomainEvent;
use crate::ports::{IdeaAnalyzer, IdeaRepository};
use async_trait::async_trait;
use checkmvp_domain::Idea;
use std::sync::Arc;
use tracing::info;

/// Fills in the idea's target audience detail fields.
///
/// Publishes `TargetAudienceEvaluated` as a follow-up, which triggers the
/// context analysis.
pub struct TargetAudienceSubscriber {
    ideas: Arc<dyn IdeaRepository>,
    analyzer: Arc<dyn IdeaAnalyzer>,
}

impl TargetAudienceSubscriber {
    /// Creates the subscriber.
    #[must_use]
    pub fn new(ideas: Arc<dyn IdeaRepository>, analyzer: Arc<dyn IdeaAnalyzer>) -> Self {
        Self { ideas, analyzer }
    }
}

#[async_trait]
impl EventSubscriber for TargetAudienceSubscriber {
    fn name(&self) -> &'static str {
        "target_audience"
    }

    async fn handle(&self, event: &DomainEvent) -> Result<Option<DomainEvent>, CoreError> {
        let DomainEvent::IdeaCreated { idea_id } = *event else {
            return Ok(None);
        };
        let idea = self.ideas.get_by_id(idea_id).await?;
        let details = self.analyzer.audience_details(&idea).await?;
        self.ideas
            .update(idea_id, &move |idea: &mut Idea| {
                idea.detail_target_audience(
                    &details.why,
                    details.pain_points.clone(),
                    &details.targeting_strategy,
                )
            })
            .await?;
        info!(idea_id = %idea_id, "target audience detailed");
        Ok(Some(DomainEvent::TargetAudienceEvaluated { idea_id }))
    }
}
