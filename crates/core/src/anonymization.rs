// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use checkmvp_domain::{
    ClarityScore, Concept, DomainError, Evaluation, LanguageAnalysis, Persona, Problem,
    REDACTED, TargetAudience, TimeProvider, ValidationMetrics,
};

/// Returns an anonymized copy of the concept.
///
/// Idempotent: an already-anonymized concept is returned unchanged.
/// Otherwise a fresh aggregate is rebuilt with every free-text value
/// replaced by the `[REDACTED]` sentinel (list lengths preserved, scores
/// pinned to 1), the lifecycle is replayed from the source's monotonic
/// flags, and the result is moved to the terminal `anonymized` state. The
/// rebuild goes through the validating constructors, so an anonymized
/// concept satisfies the same invariants as a live one.
///
/// # Errors
///
/// Returns a domain error if the source aggregate is internally
/// inconsistent, for example accepted without an idea id.
pub fn anonymize_concept(
    source: &Concept,
    time_provider: &dyn TimeProvider,
) -> Result<Concept, DomainError> {
    if source.was_anonymized() {
        return Ok(source.clone());
    }

    let mut concept = Concept::new(
        source.id(),
        Problem::redacted(),
        source.persona().map(|_| Persona::redacted()),
        source.region(),
        source.product_type(),
        source.stage(),
        source.expiry_period_in_days(),
        time_provider,
        Some(source.created_at()),
    )?;

    if source.was_evaluated() {
        concept.evaluate(redact_evaluation(source.evaluation()?)?)?;
    }
    if source.was_accepted() {
        concept.accept(source.idea_id()?)?;
    }
    if source.was_archived() {
        concept.archive()?;
    }
    concept.anonymize()?;
    Ok(concept)
}

fn redact_evaluation(source: &Evaluation) -> Result<Evaluation, DomainError> {
    let language = source.language_analysis();
    Evaluation::new(
        source.status(),
        redact_list(source.suggestions()),
        redact_list(source.recommendations()),
        redact_list(source.pain_points()),
        source.market_existence().map(|_| REDACTED.to_string()),
        source
            .target_audiences()
            .iter()
            .map(redact_audience)
            .collect::<Result<Vec<_>, _>>()?,
        ClarityScore::new(1, 1, 1, 1, 1)?,
        LanguageAnalysis::new(
            redact_list(language.vague_terms()),
            redact_list(language.missing_context()),
            redact_list(language.ambiguous_statements()),
        )?,
    )
}

fn redact_audience(source: &TargetAudience) -> Result<TargetAudience, DomainError> {
    TargetAudience::new(
        REDACTED,
        REDACTED,
        redact_list(source.challenges()),
        ValidationMetrics::new(REDACTED, 1, 1, 1)?,
    )
}

fn redact_list(values: &[String]) -> Vec<String> {
    values.iter().map(|_| REDACTED.to_string()).collect()
}
