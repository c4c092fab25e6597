// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use async_trait::async_trait;
use checkmvp_domain::{DomainError, Identity, validate_text};
use chrono::{DateTime, Utc};
use std::str::FromStr;

/// Minimum length of hypothesis generator input, in characters.
pub const JOB_CONTENT_MIN_LENGTH: usize = 20;
/// Maximum length of hypothesis generator input, in characters.
pub const JOB_CONTENT_MAX_LENGTH: usize = 1000;

/// Lifecycle of a hypothesis generation job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HypothesisJobStatus {
    /// Waiting for the background worker.
    #[default]
    Pending,
    /// The worker stored a result.
    Completed,
    /// The worker failed; the message is in the result column.
    Error,
}

impl HypothesisJobStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Error => "error",
        }
    }
}

impl FromStr for HypothesisJobStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "error" => Ok(Self::Error),
            other => Err(DomainError::InvalidLifecycleState(other.to_string())),
        }
    }
}

impl std::fmt::Display for HypothesisJobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One hypothesis generation request, persisted so the worker can resume
/// pending work across restarts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HypothesisJob {
    id: Identity,
    content: String,
    status: HypothesisJobStatus,
    result: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl HypothesisJob {
    /// Creates a pending job.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is outside the 20-1000 character
    /// bounds.
    pub fn new(id: Identity, content: &str, created_at: DateTime<Utc>) -> Result<Self, CoreError> {
        Ok(Self {
            id,
            content: validate_text(
                "content",
                content,
                JOB_CONTENT_MIN_LENGTH,
                JOB_CONTENT_MAX_LENGTH,
            )?,
            status: HypothesisJobStatus::Pending,
            result: None,
            created_at,
            updated_at: created_at,
        })
    }

    /// Reconstitutes a job from storage without revalidating content.
    #[must_use]
    pub const fn from_parts(
        id: Identity,
        content: String,
        status: HypothesisJobStatus,
        result: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            content,
            status,
            result,
            created_at,
            updated_at,
        }
    }

    /// Returns the job identity.
    #[must_use]
    pub const fn id(&self) -> Identity {
        self.id
    }

    /// Returns the submitted content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> HypothesisJobStatus {
        self.status
    }

    /// Returns the generated result or error message, if any.
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Storage port for hypothesis jobs.
#[async_trait]
pub trait HypothesisJobStore: Send + Sync {
    /// Persists a new pending job.
    ///
    /// # Errors
    ///
    /// Returns `Repository` on storage failure.
    async fn add(&self, job: &HypothesisJob) -> Result<(), CoreError>;

    /// Loads a job by id.
    ///
    /// # Errors
    ///
    /// Returns `HypothesisJobNotFound` for an unknown id.
    async fn get_by_id(&self, id: Identity) -> Result<HypothesisJob, CoreError>;

    /// Returns the oldest pending job, if any.
    ///
    /// # Errors
    ///
    /// Returns `Repository` on storage failure.
    async fn next_pending(&self) -> Result<Option<HypothesisJob>, CoreError>;

    /// Marks a job completed with the generated result.
    ///
    /// # Errors
    ///
    /// Returns `HypothesisJobNotFound` for an unknown id or `Repository`
    /// on storage failure.
    async fn complete(&self, id: Identity, result: &str) -> Result<(), CoreError>;

    /// Marks a job failed with an error message.
    ///
    /// # Errors
    ///
    /// Returns `HypothesisJobNotFound` for an unknown id or `Repository`
    /// on storage failure.
    async fn fail(&self, id: Identity, message: &str) -> Result<(), CoreError>;
}
