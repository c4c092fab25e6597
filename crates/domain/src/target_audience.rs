// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::metrics::ValidationMetrics;
use crate::validation::{validate_string_list, validate_text};

/// A concept-scoped target audience produced by the evaluation.
///
/// Distinct from the idea-scoped `IdeaTargetAudience`: this variant has no
/// identity of its own and is fully populated at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetAudience {
    segment: String,
    description: String,
    challenges: Vec<String>,
    validation_metrics: ValidationMetrics,
}

impl TargetAudience {
    /// Creates a validated `TargetAudience`.
    ///
    /// # Errors
    ///
    /// Returns an error if `segment` or `description` is empty, if the
    /// challenges list is empty, or if any challenge entry is empty.
    pub fn new(
        segment: &str,
        description: &str,
        challenges: Vec<String>,
        validation_metrics: ValidationMetrics,
    ) -> Result<Self, DomainError> {
        if challenges.is_empty() {
            return Err(DomainError::EmptyField {
                field: "challenges",
            });
        }
        Ok(Self {
            segment: validate_text("segment", segment, 1, usize::MAX)?,
            description: validate_text("description", description, 1, usize::MAX)?,
            challenges: validate_string_list("challenges", challenges)?,
            validation_metrics,
        })
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

    /// Returns the validation metrics for this audience.
    #[must_use]
    pub const fn validation_metrics(&self) -> &ValidationMetrics {
        &self.validation_metrics
    }
}
