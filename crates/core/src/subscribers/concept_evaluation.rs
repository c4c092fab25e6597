// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::event_bus::EventSubscriber;
use crate::events::DomainEvent;
use crate::ports::{ConceptEvaluator, ConceptRepository};
use async_trait::async_trait;
use checkmvp_domain::Concept;
use std::sync::Arc;
use tracing::info;

/// Attaches the AI evaluation to a freshly created concept.
///
/// Publishes `ConceptEvaluated` as a follow-up.
pub struct ConceptEvaluationSubscriber {
    concepts: Arc<dyn ConceptRepository>,
    evaluator: Arc<dyn ConceptEvaluator>,
}

impl ConceptEvaluationSubscriber {
    /// Creates the subscriber.
    #[must_use]
    pub fn new(concepts: Arc<dyn ConceptRepository>, evaluator: Arc<dyn ConceptEvaluator>) -> Self {
        Self {
            concepts,
            evaluator,
        }
    }
}

#[async_trait]
impl EventSubscriber for ConceptEvaluationSubscriber {
    fn name(&self) -> &'static str {
        "concept_evaluation"
    }

    async fn handle(&self, event: &DomainEvent) -> Result<Option<DomainEvent>, CoreError> {
        let DomainEvent::ConceptCreated { concept_id } = *event else {
            return Ok(None);
        };
        let concept = self.concepts.get_by_id(concept_id).await?;
        let evaluation = self.evaluator.evaluate(&concept).await?;
        info!(
            concept_id = %concept_id,
            status = %evaluation.status(),
            "concept evaluated"
        );
        self.concepts
            .update(concept_id, &move |concept: &mut Concept| {
                concept.evaluate(evaluation.clone())
            })
            .await?;
        Ok(Some(DomainEvent::ConceptEvaluated { concept_id }))
    }
}
