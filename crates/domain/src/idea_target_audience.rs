// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::identity::Identity;
use crate::validation::{validate_string_list, validate_text};

/// An idea-scoped target audience.
///
/// Unlike the concept-scoped `TargetAudience`, this variant has its own
/// identity and three detail fields (`why`, `pain_points`,
/// `targeting_strategy`) that are filled in exactly once by the audience
/// enrichment subscriber after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaTargetAudience {
    id: Identity,
    idea_id: Identity,
    segment: String,
    description: String,
    challenges: Vec<String>,
    why: Option<String>,
    pain_points: Option<Vec<String>>,
    targeting_strategy: Option<String>,
}

impl IdeaTargetAudience {
    /// Creates a validated `IdeaTargetAudience` with the detail fields unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `segment` or `description` is empty, or the
    /// challenges list is empty or contains empty entries.
    pub fn new(
        id: Identity,
        idea_id: Identity,
        segment: &str,
        description: &str,
        challenges: Vec<String>,
    ) -> Result<Self, DomainError> {
        if challenges.is_empty() {
            return Err(DomainError::EmptyField {
                field: "challenges",
            });
        }
        Ok(Self {
            id,
            idea_id,
            segment: validate_text("segment", segment, 1, usize::MAX)?,
            description: validate_text("description", description, 1, usize::MAX)?,
            challenges: validate_string_list("challenges", challenges)?,
            why: None,
            pain_points: None,
            targeting_strategy: None,
        })
    }

    /// Sets the "why this audience" detail. Write-once.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty or the field was already set.
    pub fn set_why(&mut self, why: &str) -> Result<(), DomainError> {
        if self.why.is_some() {
            return Err(DomainError::AudienceFieldAlreadySet { field: "why" });
        }
        self.why = Some(validate_text("why", why, 1, usize::MAX)?);
        Ok(())
    }

    /// Sets the audience-specific pain points. Write-once.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, contains empty entries, or
    /// the field was already set.
    pub fn set_pain_points(&mut self, pain_points: Vec<String>) -> Result<(), DomainError> {
        if self.pain_points.is_some() {
            return Err(DomainError::AudienceFieldAlreadySet {
                field: "pain_points",
            });
        }
        if pain_points.is_empty() {
            return Err(DomainError::EmptyField {
                field: "pain_points",
            });
        }
        self.pain_points = Some(validate_string_list("pain_points", pain_points)?);
        Ok(())
    }

    /// Sets the targeting strategy. Write-once.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty or the field was already set.
    pub fn set_targeting_strategy(&mut self, strategy: &str) -> Result<(), DomainError> {
        if self.targeting_strategy.is_some() {
            return Err(DomainError::AudienceFieldAlreadySet {
                field: "targeting_strategy",
            });
        }
        self.targeting_strategy = Some(validate_text("targeting_strategy", strategy, 1, usize::MAX)?);
        Ok(())
    }

    /// Returns the audience identity.
    #[must_use]
    pub const fn id(&self) -> Identity {
        self.id
    }

    /// Returns the owning idea's identity.
    #[must_use]
    pub const fn idea_id(&self) -> Identity {
        self.idea_id
    }

    /// Returns the audience segment name.
    #[must_use]
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Returns the audience description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the challenges this audience faces.
    #[must_use]
    pub fn challenges(&self) -> &[String] {
        &self.challenges
    }

    /// Returns the "why this audience" detail, if set.
    #[must_use]
    pub fn why(&self) -> Option<&str> {
        self.why.as_deref()
    }

    /// Returns the audience-specific pain points, if set.
    #[must_use]
    pub fn pain_points(&self) -> Option<&[String]> {
        self.pain_points.as_deref()
    }

    /// Returns the targeting strategy, if set.
    #[must_use]
    pub fn targeting_strategy(&self) -> Option<&str> {
        self.targeting_strategy.as_deref()
    }
}
