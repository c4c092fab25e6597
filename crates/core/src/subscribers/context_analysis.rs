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

/// Stores the context analysis once the target audience is detailed.
pub struct ContextAnalysisSubscriber {
    ideas: Arc<dyn IdeaRepository>,
    analyzer: Arc<dyn IdeaAnalyzer>,
}

impl ContextAnalysisSubscriber {
    /// Creates the subscriber.
    #[must_use]
    pub fn new(ideas: Arc<dyn IdeaRepository>, analyzer: Arc<dyn IdeaAnalyzer>) -> Self {
        Self { ideas, analyzer }
    }
}

#[async_trait]
impl EventSubscriber for ContextAnalysisSubscriber {
    fn name(&self) -> &'static str {
        "context_analysis"
    }

    async fn handle(&self, event: &DomainEvent) -> Result<Option<DomainEvent>, CoreError> {
        let DomainEvent::TargetAudienceEvaluated { idea_id } = *event else {
            return Ok(None);
        };
        let idea = self.ideas.get_by_id(idea_id).await?;
        let section = self.analyzer.context_analysis(&idea).await?;
        self.ideas
            .update(idea_id, &move |idea: &mut Idea| {
                idea.set_context_analysis(section.clone())
            })
            .await?;
        info!(idea_id = %idea_id, "context analysis stored");
        Ok(None)
    }
}
