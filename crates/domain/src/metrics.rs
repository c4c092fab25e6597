// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::{validate_score, validate_string_list, validate_text};

/// Quantified validation scores for a target audience.
///
/// `market_size` is deliberately free text (the AI reports ranges like
/// "10M-50M users"); the three scores are integers on a 0-10 scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMetrics {
    market_size: String,
    accessibility: u8,
    pain_point_intensity: u8,
    willingness_to_pay: u8,
}

impl ValidationMetrics {
    /// Creates validated `ValidationMetrics`.
    ///
    /// # Errors
    ///
    /// Returns an error if `market_size` is empty or any score is
    /// outside 0-10.
    pub fn new(
        market_size: &str,
        accessibility: i64,
        pain_point_intensity: i64,
        willingness_to_pay: i64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            market_size: validate_text("market_size", market_size, 1, usize::MAX)?,
            accessibility: validate_score("accessibility", accessibility)?,
            pain_point_intensity: validate_score("pain_point_intensity", pain_point_intensity)?,
            willingness_to_pay: validate_score("willingness_to_pay", willingness_to_pay)?,
        })
    }

    /// Returns the market size description.
    #[must_use]
    pub fn market_size(&self) -> &str {
        &self.market_size
    }

    /// Returns the accessibility score (0-10).
    #[must_use]
    pub const fn accessibility(&self) -> u8 {
        self.accessibility
    }

    /// Returns the pain point intensity score (0-10).
    #[must_use]
    pub const fn pain_point_intensity(&self) -> u8 {
        self.pain_point_intensity
    }

    /// Returns the willingness-to-pay score (0-10).
    #[must_use]
    pub const fn willingness_to_pay(&self) -> u8 {
        self.willingness_to_pay
    }
}

/// How clearly the problem statement communicates its intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClarityScore {
    overall_score: u8,
    problem_clarity: u8,
    target_audience_clarity: u8,
    scope_definition: u8,
    value_proposition_clarity: u8,
}

impl ClarityScore {
    /// Creates a validated `ClarityScore`.
    ///
    /// # Errors
    ///
    /// Returns an error if any score is outside 0-10.
    pub fn new(
        overall_score: i64,
        problem_clarity: i64,
        target_audience_clarity: i64,
        scope_definition: i64,
        value_proposition_clarity: i64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            overall_score: validate_score("overall_score", overall_score)?,
            problem_clarity: validate_score("problem_clarity", problem_clarity)?,
            target_audience_clarity: validate_score(
                "target_audience_clarity",
                target_audience_clarity,
            )?,
            scope_definition: validate_score("scope_definition", scope_definition)?,
            value_proposition_clarity: validate_score(
                "value_proposition_clarity",
                value_proposition_clarity,
            )?,
        })
    }

    /// Returns the overall clarity score (0-10).
    #[must_use]
    pub const fn overall_score(&self) -> u8 {
        self.overall_score
    }

    /// Returns the problem clarity score (0-10).
    #[must_use]
    pub const fn problem_clarity(&self) -> u8 {
        self.problem_clarity
    }

    /// Returns the target audience clarity score (0-10).
    #[must_use]
    pub const fn target_audience_clarity(&self) -> u8 {
        self.target_audience_clarity
    }

    /// Returns the scope definition score (0-10).
    #[must_use]
    pub const fn scope_definition(&self) -> u8 {
        self.scope_definition
    }

    /// Returns the value proposition clarity score (0-10).
    #[must_use]
    pub const fn value_proposition_clarity(&self) -> u8 {
        self.value_proposition_clarity
    }
}

/// Linguistic weaknesses the AI found in the problem statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageAnalysis {
    vague_terms: Vec<String>,
    missing_context: Vec<String>,
    ambiguous_statements: Vec<String>,
}

impl LanguageAnalysis {
    /// Creates a validated `LanguageAnalysis`.
    ///
    /// All three lists may be empty; individual entries must not be.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry is empty or whitespace-only.
    pub fn new(
        vague_terms: Vec<String>,
        missing_context: Vec<String>,
        ambiguous_statements: Vec<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            vague_terms: validate_string_list("vague_terms", vague_terms)?,
            missing_context: validate_string_list("missing_context", missing_context)?,
            ambiguous_statements: validate_string_list(
                "ambiguous_statements",
                ambiguous_statements,
            )?,
        })
    }

    /// Returns the vague terms found.
    #[must_use]
    pub fn vague_terms(&self) -> &[String] {
        &self.vague_terms
    }

    /// Returns the missing context notes.
    #[must_use]
    pub fn missing_context(&self) -> &[String] {
        &self.missing_context
    }

    /// Returns the ambiguous statements found.
    #[must_use]
    pub fn ambiguous_statements(&self) -> &[String] {
        &self.ambiguous_statements
    }
}
