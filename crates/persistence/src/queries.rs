// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-side queries. Every loader returns a fully reconstituted aggregate.

use checkmvp::HypothesisJob;
use checkmvp_domain::{Concept, Idea, Identity};
use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::{ConceptRow, IdeaRow, JobRow, SectionRow};
use crate::diesel_schema::{concepts, hypothesis_jobs, idea_sections, ideas};
use crate::error::PersistenceError;
use crate::mappers;

/// Loads a concept by id.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id and `ReconstructionError` if the
/// stored row cannot be rebuilt.
pub fn get_concept(
    conn: &mut SqliteConnection,
    id: Identity,
) -> Result<Concept, PersistenceError> {
    let row: ConceptRow = concepts::table.find(id.to_string()).first(conn)?;
    mappers::reconstitute_concept(row)
}

/// Counts all stored concepts.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_concepts(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(concepts::table.count().get_result(conn)?)
}

/// Loads an idea and its section rows by id.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id and `ReconstructionError` if the
/// stored rows cannot be rebuilt.
pub fn get_idea(conn: &mut SqliteConnection, id: Identity) -> Result<Idea, PersistenceError> {
    let row: IdeaRow = ideas::table.find(id.to_string()).first(conn)?;
    let sections: Vec<SectionRow> = idea_sections::table
        .filter(idea_sections::idea_id.eq(id.to_string()))
        .load(conn)?;
    mappers::reconstitute_idea(row, sections)
}

/// Loads a hypothesis job by id.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id.
pub fn get_job(
    conn: &mut SqliteConnection,
    id: Identity,
) -> Result<HypothesisJob, PersistenceError> {
    let row: JobRow = hypothesis_jobs::table.find(id.to_string()).first(conn)?;
    mappers::reconstitute_job(row)
}

/// Returns the oldest pending hypothesis job, if any.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be rebuilt.
pub fn next_pending_job(
    conn: &mut SqliteConnection,
) -> Result<Option<HypothesisJob>, PersistenceError> {
    let row: Option<JobRow> = hypothesis_jobs::table
        .filter(hypothesis_jobs::status.eq("pending"))
        .order(hypothesis_jobs::created_at.asc())
        .first(conn)
        .optional()?;
    row.map(mappers::reconstitute_job).transpose()
}
