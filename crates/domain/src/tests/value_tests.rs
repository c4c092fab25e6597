// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for value object validation: trimming, emptiness, bounds.

use super::helpers::TEST_PROBLEM;
use crate::{
    ClarityScore, DomainError, MarketExistence, Persona, Problem, ProductType, Region, Stage,
    TargetAudience, ValidationMetrics,
};
use std::str::FromStr;

#[test]
fn test_problem_trims_whitespace() {
    let problem = Problem::new(&format!("   {TEST_PROBLEM}   ")).unwrap();
    assert_eq!(problem.value(), TEST_PROBLEM);
}

#[test]
fn test_problem_rejects_empty_string() {
    let result = Problem::new("   ");

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        DomainError::EmptyField { field: "problem" }
    ));
}

#[test]
fn test_problem_rejects_too_short() {
    let result = Problem::new("too short");

    assert!(matches!(
        result.unwrap_err(),
        DomainError::FieldTooShort {
            field: "problem",
            min: 30,
            ..
        }
    ));
}

#[test]
fn test_problem_rejects_too_long() {
    let result = Problem::new(&"x".repeat(2049));

    assert!(matches!(
        result.unwrap_err(),
        DomainError::FieldTooLong {
            field: "problem",
            max: 2048,
            ..
        }
    ));
}

#[test]
fn test_problem_accepts_boundary_lengths() {
    assert!(Problem::new(&"x".repeat(30)).is_ok());
    assert!(Problem::new(&"x".repeat(2048)).is_ok());
}

#[test]
fn test_persona_rejects_whitespace_only() {
    assert!(Persona::new(" \t\n ").is_err());
}

#[test]
fn test_market_existence_rejects_empty() {
    assert!(MarketExistence::new("").is_err());
}

#[test]
fn test_region_parses_case_insensitively() {
    assert_eq!(Region::from_str("Europe").unwrap(), Region::Europe);
    assert_eq!(
        Region::from_str("NORTH_AMERICA").unwrap(),
        Region::NorthAmerica
    );
}

#[test]
fn test_region_rejects_unknown_code() {
    let result = Region::from_str("atlantis");

    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidRegion(_)
    ));
}

#[test]
fn test_product_type_round_trips() {
    for code in ["b2b", "b2c", "b2b2c", "saas", "marketplace"] {
        let parsed = ProductType::from_str(code).unwrap();
        assert_eq!(parsed.as_str(), code);
    }
}

#[test]
fn test_stage_rejects_unknown_code() {
    assert!(matches!(
        Stage::from_str("launched").unwrap_err(),
        DomainError::InvalidStage(_)
    ));
}

#[test]
fn test_validation_metrics_rejects_score_above_ten() {
    let result = ValidationMetrics::new("10M users", 11, 5, 5);

    assert!(matches!(
        result.unwrap_err(),
        DomainError::ScoreOutOfRange {
            field: "accessibility",
            value: 11
        }
    ));
}

#[test]
fn test_validation_metrics_rejects_negative_score() {
    assert!(ValidationMetrics::new("10M users", 5, -1, 5).is_err());
}

#[test]
fn test_validation_metrics_rejects_empty_market_size() {
    let result = ValidationMetrics::new("  ", 5, 5, 5);

    assert!(matches!(
        result.unwrap_err(),
        DomainError::EmptyField {
            field: "market_size"
        }
    ));
}

#[test]
fn test_validation_metrics_accepts_boundary_scores() {
    assert!(ValidationMetrics::new("niche", 0, 10, 0).is_ok());
}

#[test]
fn test_clarity_score_rejects_out_of_range_overall() {
    assert!(matches!(
        ClarityScore::new(11, 5, 5, 5, 5).unwrap_err(),
        DomainError::ScoreOutOfRange {
            field: "overall_score",
            value: 11
        }
    ));
}

#[test]
fn test_target_audience_requires_challenges() {
    let metrics = ValidationMetrics::new("10M users", 5, 5, 5).unwrap();
    let result = TargetAudience::new("Designers", "Freelancers", Vec::new(), metrics);

    assert!(matches!(
        result.unwrap_err(),
        DomainError::EmptyField {
            field: "challenges"
        }
    ));
}

#[test]
fn test_target_audience_rejects_blank_challenge_entry() {
    let metrics = ValidationMetrics::new("10M users", 5, 5, 5).unwrap();
    let result = TargetAudience::new(
        "Designers",
        "Freelancers",
        vec![String::from("  ")],
        metrics,
    );

    assert!(result.is_err());
}

#[test]
fn test_target_audience_trims_fields() {
    let metrics = ValidationMetrics::new("10M users", 5, 5, 5).unwrap();
    let audience = TargetAudience::new(
        "  Designers  ",
        " Freelancers ",
        vec![String::from(" Late payments ")],
        metrics,
    )
    .unwrap();

    assert_eq!(audience.segment(), "Designers");
    assert_eq!(audience.description(), "Freelancers");
    assert_eq!(audience.challenges(), ["Late payments"]);
}
