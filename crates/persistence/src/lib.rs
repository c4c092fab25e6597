// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` persistence adapter behind the core storage ports.
//!
//! Aggregates are stored as flat rows plus JSON blobs for the value-object
//! trees; loading always reconstitutes through the domain's validating
//! constructors and replays lifecycle transitions from the timestamp
//! columns. Concurrency is a single connection behind an async mutex, which
//! serializes writers and makes last-write-wins the consistency model.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod data_models;
mod diesel_schema;
mod error;
mod mappers;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use checkmvp::{
    ConceptMutation, ConceptRepository, CoreError, HypothesisJob, HypothesisJobStatus,
    HypothesisJobStore, IdeaMutation, IdeaRepository,
};
use checkmvp_domain::{Concept, Idea, Identity};
use diesel::SqliteConnection;
use tokio::sync::Mutex;
use tracing::info;

pub use crate::error::PersistenceError;

/// Counter for unique in-memory database names, so parallel tests never
/// share state.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

fn repository(err: PersistenceError) -> CoreError {
    CoreError::Repository(err.to_string())
}

fn concept_error(id: Identity, err: PersistenceError) -> CoreError {
    match err {
        PersistenceError::NotFound(_) => CoreError::ConceptNotFound(id),
        PersistenceError::Domain(violation) => CoreError::DomainViolation(violation),
        other => repository(other),
    }
}

fn idea_error(id: Identity, err: PersistenceError) -> CoreError {
    match err {
        PersistenceError::NotFound(_) => CoreError::IdeaNotFound(id),
        PersistenceError::Domain(violation) => CoreError::DomainViolation(violation),
        other => repository(other),
    }
}

fn job_error(id: Identity, err: PersistenceError) -> CoreError {
    match err {
        PersistenceError::NotFound(_) => CoreError::HypothesisJobNotFound(id),
        other => repository(other),
    }
}

/// `SQLite`-backed implementation of the storage ports.
///
/// Diesel connections are blocking, so the connection sits behind a Tokio
/// mutex and each operation holds the lock for the duration of its
/// statements.
pub struct Persistence {
    conn: Mutex<SqliteConnection>,
}

impl Persistence {
    /// Opens a uniquely named shared in-memory database and runs
    /// migrations. Intended for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if connection, migration or PRAGMA verification
    /// fails.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let database_url: String = format!("file:memdb_test_{id}?mode=memory&cache=shared");
        let mut conn: SqliteConnection = sqlite::initialize_database(&database_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Opens (or creates) a file-backed database, runs migrations and
    /// enables WAL mode.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the file cannot be opened, or an
    /// error if migration or PRAGMA verification fails.
    pub fn new_with_file(path: &str) -> Result<Self, PersistenceError> {
        let mut conn: SqliteConnection = sqlite::initialize_database(path)
            .map_err(|err| PersistenceError::InitializationError(err.to_string()))?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;
        info!(path, "SQLite database ready");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

#[async_trait]
impl ConceptRepository for Persistence {
    async fn add(&self, concept: &Concept) -> Result<(), CoreError> {
        let mut conn = self.conn.lock().await;
        mutations::insert_concept(&mut conn, concept).map_err(repository)
    }

    async fn update(
        &self,
        id: Identity,
        apply: ConceptMutation<'_>,
    ) -> Result<Concept, CoreError> {
        let mut conn = self.conn.lock().await;
        mutations::update_concept(&mut conn, id, apply).map_err(|err| concept_error(id, err))
    }

    async fn get_by_id(&self, id: Identity) -> Result<Concept, CoreError> {
        let mut conn = self.conn.lock().await;
        queries::get_concept(&mut conn, id).map_err(|err| concept_error(id, err))
    }

    async fn total(&self) -> Result<u64, CoreError> {
        let mut conn = self.conn.lock().await;
        let count: i64 = queries::count_concepts(&mut conn).map_err(repository)?;
        Ok(count.unsigned_abs())
    }
}

#[async_trait]
impl IdeaRepository for Persistence {
    async fn add(&self, idea: &Idea) -> Result<(), CoreError> {
        let mut conn = self.conn.lock().await;
        mutations::insert_idea(&mut conn, idea).map_err(repository)
    }

    async fn update(&self, id: Identity, apply: IdeaMutation<'_>) -> Result<Idea, CoreError> {
        let mut conn = self.conn.lock().await;
        mutations::update_idea(&mut conn, id, apply).map_err(|err| idea_error(id, err))
    }

    async fn get_by_id(&self, id: Identity) -> Result<Idea, CoreError> {
        let mut conn = self.conn.lock().await;
        queries::get_idea(&mut conn, id).map_err(|err| idea_error(id, err))
    }
}

#[async_trait]
impl HypothesisJobStore for Persistence {
    async fn add(&self, job: &HypothesisJob) -> Result<(), CoreError> {
        let mut conn = self.conn.lock().await;
        mutations::insert_job(&mut conn, job).map_err(repository)
    }

    async fn get_by_id(&self, id: Identity) -> Result<HypothesisJob, CoreError> {
        let mut conn = self.conn.lock().await;
        queries::get_job(&mut conn, id).map_err(|err| job_error(id, err))
    }

    async fn next_pending(&self) -> Result<Option<HypothesisJob>, CoreError> {
        let mut conn = self.conn.lock().await;
        queries::next_pending_job(&mut conn).map_err(repository)
    }

    async fn complete(&self, id: Identity, result: &str) -> Result<(), CoreError> {
        let mut conn = self.conn.lock().await;
        mutations::set_job_status(&mut conn, id, HypothesisJobStatus::Completed, Some(result))
            .map_err(|err| job_error(id, err))
    }

    async fn fail(&self, id: Identity, message: &str) -> Result<(), CoreError> {
        let mut conn = self.conn.lock().await;
        mutations::set_job_status(&mut conn, id, HypothesisJobStatus::Error, Some(message))
            .map_err(|err| job_error(id, err))
    }
}
