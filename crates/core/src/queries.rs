// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::ports::{ConceptRepository, IdeaRepository};
use checkmvp_domain::{Concept, Idea, Identity};

/// Loads a concept by id.
///
/// # Errors
///
/// Returns `ConceptNotFound` for an unknown id.
pub async fn get_concept(
    concepts: &dyn ConceptRepository,
    concept_id: Identity,
) -> Result<Concept, CoreError> {
    concepts.get_by_id(concept_id).await
}

/// Loads an idea by id.
///
/// # Errors
///
/// Returns `IdeaNotFound` for an unknown id.
pub async fn get_idea(ideas: &dyn IdeaRepository, idea_id: Identity) -> Result<Idea, CoreError> {
    ideas.get_by_id(idea_id).await
}

/// Counts all stored concepts.
///
/// # Errors
///
/// Returns `Repository` on storage failure.
pub async fn total_concepts(concepts: &dyn ConceptRepository) -> Result<u64, CoreError> {
    concepts.total().await
}
