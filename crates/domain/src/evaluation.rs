// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::metrics::{ClarityScore, LanguageAnalysis};
use crate::target_audience::TargetAudience;
use crate::validation::validate_string_list;
use std::str::FromStr;

/// The AI's verdict on how well-defined a concept is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvaluationStatus {
    /// The problem is clear enough to proceed with.
    WellDefined,
    /// The problem is workable but needs refinement.
    RequiresChanges,
    /// The problem is too vague to evaluate.
    NotWellDefined,
}

impl EvaluationStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WellDefined => "well-defined",
            Self::RequiresChanges => "requires_changes",
            Self::NotWellDefined => "not-well-defined",
        }
    }
}

impl FromStr for EvaluationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "well-defined" => Ok(Self::WellDefined),
            "requires_changes" => Ok(Self::RequiresChanges),
            "not-well-defined" => Ok(Self::NotWellDefined),
            other => Err(DomainError::InvalidEvaluationStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The AI-derived assessment of a concept.
///
/// Validation is all-or-nothing at construction time: which fields must be
/// populated and which must be empty depends on the status, so no partial
/// evaluation is representable.
///
/// | status            | suggestions | recommendations | pain points | audiences | market existence |
/// |-------------------|-------------|-----------------|-------------|-----------|------------------|
/// | well-defined      | empty       | empty           | non-empty   | non-empty | non-empty        |
/// | requires\_changes | non-empty   | non-empty       | empty       | empty     | any              |
/// | not-well-defined  | non-empty   | empty           | empty       | empty     | absent           |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    status: EvaluationStatus,
    suggestions: Vec<String>,
    recommendations: Vec<String>,
    pain_points: Vec<String>,
    market_existence: Option<String>,
    target_audiences: Vec<TargetAudience>,
    clarity_score: ClarityScore,
    language_analysis: LanguageAnalysis,
}

impl Evaluation {
    /// Creates a validated `Evaluation`.
    ///
    /// # Errors
    ///
    /// Returns `EvaluationFieldViolation` naming the offending field when
    /// the field-emptiness table above is violated for the given status,
    /// or a text validation error for malformed entries.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        status: EvaluationStatus,
        suggestions: Vec<String>,
        recommendations: Vec<String>,
        pain_points: Vec<String>,
        market_existence: Option<String>,
        target_audiences: Vec<TargetAudience>,
        clarity_score: ClarityScore,
        language_analysis: LanguageAnalysis,
    ) -> Result<Self, DomainError> {
        let market_existence: Option<String> = market_existence
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        match status {
            EvaluationStatus::WellDefined => {
                require_non_empty(status, "pain_points", &pain_points)?;
                if target_audiences.is_empty() {
                    return Err(DomainError::EvaluationFieldViolation {
                        status,
                        field: "target_audiences",
                        must_be_empty: false,
                    });
                }
                if market_existence.is_none() {
                    return Err(DomainError::EvaluationFieldViolation {
                        status,
                        field: "market_existence",
                        must_be_empty: false,
                    });
                }
                require_empty(status, "suggestions", &suggestions)?;
                require_empty(status, "recommendations", &recommendations)?;
            }
            EvaluationStatus::RequiresChanges => {
                require_non_empty(status, "suggestions", &suggestions)?;
                require_non_empty(status, "recommendations", &recommendations)?;
                require_empty(status, "pain_points", &pain_points)?;
                if !target_audiences.is_empty() {
                    return Err(DomainError::EvaluationFieldViolation {
                        status,
                        field: "target_audiences",
                        must_be_empty: true,
                    });
                }
            }
            EvaluationStatus::NotWellDefined => {
                require_non_empty(status, "suggestions", &suggestions)?;
                require_empty(status, "recommendations", &recommendations)?;
                require_empty(status, "pain_points", &pain_points)?;
                if !target_audiences.is_empty() {
                    return Err(DomainError::EvaluationFieldViolation {
                        status,
                        field: "target_audiences",
                        must_be_empty: true,
                    });
                }
                if market_existence.is_some() {
                    return Err(DomainError::EvaluationFieldViolation {
                        status,
                        field: "market_existence",
                        must_be_empty: true,
                    });
                }
            }
        }

        Ok(Self {
            status,
            suggestions: validate_string_list("suggestions", suggestions)?,
            recommendations: validate_string_list("recommendations", recommendations)?,
            pain_points: validate_string_list("pain_points", pain_points)?,
            market_existence,
            target_audiences,
            clarity_score,
            language_analysis,
        })
    }

    /// Returns the evaluation status.
    #[must_use]
    pub const fn status(&self) -> EvaluationStatus {
        self.status
    }

    /// Returns the improvement suggestions.
    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Returns the concrete recommendations.
    #[must_use]
    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    /// Returns the identified pain points.
    #[must_use]
    pub fn pain_points(&self) -> &[String] {
        &self.pain_points
    }

    /// Returns the market existence assessment, if any.
    #[must_use]
    pub fn market_existence(&self) -> Option<&str> {
        self.market_existence.as_deref()
    }

    /// Returns the identified target audiences.
    #[must_use]
    pub fn target_audiences(&self) -> &[TargetAudience] {
        &self.target_audiences
    }

    /// Returns the clarity score.
    #[must_use]
    pub const fn clarity_score(&self) -> &ClarityScore {
        &self.clarity_score
    }

    /// Returns the language analysis.
    #[must_use]
    pub const fn language_analysis(&self) -> &LanguageAnalysis {
        &self.language_analysis
    }
}

fn require_non_empty(
    status: EvaluationStatus,
    field: &'static str,
    values: &[String],
) -> Result<(), DomainError> {
    if values.is_empty() {
        return Err(DomainError::EvaluationFieldViolation {
            status,
            field,
            must_be_empty: false,
        });
    }
    Ok(())
}

fn require_empty(
    status: EvaluationStatus,
    field: &'static str,
    values: &[String],
) -> Result<(), DomainError> {
    if !values.is_empty() {
        return Err(DomainError::EvaluationFieldViolation {
            status,
            field,
            must_be_empty: true,
        });
    }
    Ok(())
}
