// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write-side mutations.
//!
//! Updates load the aggregate, run the caller's mutation closure against it
//! and persist the delta inside a single transaction, so a closure that
//! violates a domain rule leaves the stored rows untouched.

use checkmvp::{ConceptMutation, HypothesisJob, HypothesisJobStatus, IdeaMutation};
use checkmvp_domain::{Concept, Idea, Identity};
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::diesel_schema::{concepts, hypothesis_jobs, idea_sections, ideas};
use crate::error::PersistenceError;
use crate::mappers;
use crate::queries;

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

fn lifecycle_timestamp(reached: bool) -> Option<String> {
    reached.then(now_rfc3339)
}

fn evaluation_blob(concept: &Concept) -> Result<Option<String>, PersistenceError> {
    if !concept.was_evaluated() {
        return Ok(None);
    }
    let evaluation = concept
        .evaluation()
        .map_err(mappers::reconstruction)?;
    Ok(Some(serde_json::to_string(&mappers::evaluation_to_data(
        evaluation,
    ))?))
}

/// Inserts a concept row mirroring the aggregate's current state.
///
/// # Errors
///
/// Returns an error if serialization or the insert fails.
pub fn insert_concept(
    conn: &mut SqliteConnection,
    concept: &Concept,
) -> Result<(), PersistenceError> {
    let idea_id: Option<String> = concept
        .was_accepted()
        .then(|| concept.idea_id().map(|id| id.to_string()))
        .transpose()
        .map_err(mappers::reconstruction)?;

    diesel::insert_into(concepts::table)
        .values((
            concepts::id.eq(concept.id().to_string()),
            concepts::problem.eq(concept.problem().value()),
            concepts::persona.eq(concept.persona().map(|persona| persona.value().to_string())),
            concepts::region.eq(concept.region().as_str()),
            concepts::product_type.eq(concept.product_type().map(|kind| kind.as_str())),
            concepts::stage.eq(concept.stage().map(|stage| stage.as_str())),
            concepts::created_at.eq(concept.created_at().to_rfc3339()),
            concepts::expiry_period_in_days.eq(concept.expiry_period_in_days()),
            concepts::evaluation_json.eq(evaluation_blob(concept)?),
            concepts::idea_id.eq(idea_id),
            concepts::evaluated_at.eq(lifecycle_timestamp(concept.was_evaluated())),
            concepts::accepted_at.eq(lifecycle_timestamp(concept.was_accepted())),
            concepts::archived_at.eq(lifecycle_timestamp(concept.was_archived())),
            concepts::anonymized_at.eq(lifecycle_timestamp(concept.was_anonymized())),
        ))
        .execute(conn)?;
    Ok(())
}

/// Loads a concept, applies the mutation and persists the delta.
///
/// Writes only the columns belonging to lifecycle flags that flipped from
/// false to true, so concurrent updaters of different transitions do not
/// clobber each other's columns.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id, `Domain` if the mutation closure
/// rejects the transition, or a database error.
pub fn update_concept(
    conn: &mut SqliteConnection,
    id: Identity,
    apply: ConceptMutation<'_>,
) -> Result<Concept, PersistenceError> {
    conn.transaction::<Concept, PersistenceError, _>(|conn| {
        let mut concept: Concept = queries::get_concept(conn, id)?;
        let already_evaluated: bool = concept.was_evaluated();
        let already_accepted: bool = concept.was_accepted();
        let already_archived: bool = concept.was_archived();
        let already_anonymized: bool = concept.was_anonymized();

        apply(&mut concept).map_err(PersistenceError::Domain)?;

        if !already_evaluated && concept.was_evaluated() {
            diesel::update(concepts::table.find(id.to_string()))
                .set((
                    concepts::evaluation_json.eq(evaluation_blob(&concept)?),
                    concepts::evaluated_at.eq(Some(now_rfc3339())),
                ))
                .execute(conn)?;
        }
        if !already_accepted && concept.was_accepted() {
            let idea_id: String = concept
                .idea_id()
                .map_err(mappers::reconstruction)?
                .to_string();
            diesel::update(concepts::table.find(id.to_string()))
                .set((
                    concepts::idea_id.eq(Some(idea_id)),
                    concepts::accepted_at.eq(Some(now_rfc3339())),
                ))
                .execute(conn)?;
        }
        if !already_archived && concept.was_archived() {
            diesel::update(concepts::table.find(id.to_string()))
                .set(concepts::archived_at.eq(Some(now_rfc3339())))
                .execute(conn)?;
        }
        if !already_anonymized && concept.was_anonymized() {
            diesel::update(concepts::table.find(id.to_string()))
                .set((
                    concepts::problem.eq(concept.problem().value()),
                    concepts::persona
                        .eq(concept.persona().map(|persona| persona.value().to_string())),
                    concepts::evaluation_json.eq(evaluation_blob(&concept)?),
                    concepts::anonymized_at.eq(Some(now_rfc3339())),
                ))
                .execute(conn)?;
        }
        Ok(concept)
    })
}

/// Inserts an idea row, its target audience blob and any already-present
/// section payloads.
///
/// # Errors
///
/// Returns an error if serialization or the insert fails.
pub fn insert_idea(conn: &mut SqliteConnection, idea: &Idea) -> Result<(), PersistenceError> {
    let audience_json: String =
        serde_json::to_string(&mappers::audience_to_data(idea.target_audience()))?;
    let hypotheses_json: String = serde_json::to_string(idea.hypotheses())?;

    conn.transaction::<(), PersistenceError, _>(|conn| {
        diesel::insert_into(ideas::table)
            .values((
                ideas::id.eq(idea.id().to_string()),
                ideas::concept_id.eq(idea.concept_id().to_string()),
                ideas::problem.eq(idea.problem().value()),
                ideas::market_existence.eq(idea.market_existence().value()),
                ideas::region.eq(idea.region().as_str()),
                ideas::product_type.eq(idea.product_type().map(|kind| kind.as_str())),
                ideas::stage.eq(idea.stage().map(|stage| stage.as_str())),
                ideas::statement.eq(idea.statement()),
                ideas::hypotheses_json.eq(hypotheses_json),
                ideas::target_audience_json.eq(audience_json),
                ideas::migrated.eq(i32::from(idea.is_migrated())),
                ideas::archived.eq(i32::from(idea.is_archived())),
                ideas::created_at.eq(now_rfc3339()),
            ))
            .execute(conn)?;
        write_sections(conn, idea)?;
        Ok(())
    })
}

/// Loads an idea, applies the mutation and persists the delta.
///
/// Section payloads are upserted by their label, so replays of the same
/// enrichment stay idempotent at the storage level.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id, `Domain` if the mutation closure
/// rejects the change, or a database error.
pub fn update_idea(
    conn: &mut SqliteConnection,
    id: Identity,
    apply: IdeaMutation<'_>,
) -> Result<Idea, PersistenceError> {
    conn.transaction::<Idea, PersistenceError, _>(|conn| {
        let mut idea: Idea = queries::get_idea(conn, id)?;
        apply(&mut idea).map_err(PersistenceError::Domain)?;

        let audience_json: String =
            serde_json::to_string(&mappers::audience_to_data(idea.target_audience()))?;
        diesel::update(ideas::table.find(id.to_string()))
            .set((
                ideas::migrated.eq(i32::from(idea.is_migrated())),
                ideas::archived.eq(i32::from(idea.is_archived())),
                ideas::target_audience_json.eq(audience_json),
            ))
            .execute(conn)?;
        write_sections(conn, &idea)?;
        Ok(idea)
    })
}

fn write_sections(conn: &mut SqliteConnection, idea: &Idea) -> Result<(), PersistenceError> {
    for (label, payload) in mappers::section_payloads(idea)? {
        diesel::replace_into(idea_sections::table)
            .values((
                idea_sections::idea_id.eq(idea.id().to_string()),
                idea_sections::section.eq(label),
                idea_sections::payload_json.eq(payload),
            ))
            .execute(conn)?;
    }
    Ok(())
}

/// Inserts a hypothesis job row.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_job(conn: &mut SqliteConnection, job: &HypothesisJob) -> Result<(), PersistenceError> {
    diesel::insert_into(hypothesis_jobs::table)
        .values((
            hypothesis_jobs::id.eq(job.id().to_string()),
            hypothesis_jobs::content.eq(job.content()),
            hypothesis_jobs::status.eq(job.status().as_str()),
            hypothesis_jobs::result.eq(job.result()),
            hypothesis_jobs::created_at.eq(job.created_at().to_rfc3339()),
            hypothesis_jobs::updated_at.eq(job.updated_at().to_rfc3339()),
        ))
        .execute(conn)?;
    Ok(())
}

/// Moves a job to a terminal status and stores its result or error text.
///
/// # Errors
///
/// Returns `NotFound` if no row matches the id.
pub fn set_job_status(
    conn: &mut SqliteConnection,
    id: Identity,
    status: HypothesisJobStatus,
    result: Option<&str>,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(hypothesis_jobs::table.find(id.to_string()))
        .set((
            hypothesis_jobs::status.eq(status.as_str()),
            hypothesis_jobs::result.eq(result),
            hypothesis_jobs::updated_at.eq(now_rfc3339()),
        ))
        .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Hypothesis job {id} not found"
        )));
    }
    Ok(())
}
