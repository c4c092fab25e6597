// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use checkmvp_domain::{
    ClarityScore, Concept, Evaluation, EvaluationStatus, FixedTimeProvider, Idea,
    IdeaTargetAudience, Identity, LanguageAnalysis, MarketExistence, Problem, Region,
    TargetAudience, ValidationMetrics,
};
use chrono::{DateTime, TimeZone, Utc};

pub const TEST_PROBLEM: &str =
    "Freelance designers struggle to collect overdue invoices from international clients";

pub fn test_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().unwrap()
}

pub fn test_clock() -> FixedTimeProvider {
    FixedTimeProvider::new(test_instant())
}

pub fn create_draft_concept() -> Concept {
    Concept::new(
        Identity::generate(),
        Problem::new(TEST_PROBLEM).unwrap(),
        None,
        Region::Europe,
        None,
        None,
        3,
        &test_clock(),
        None,
    )
    .unwrap()
}

pub fn create_well_defined_evaluation() -> Evaluation {
    let metrics = ValidationMetrics::new("10M-50M users", 7, 8, 6).unwrap();
    let audience = TargetAudience::new(
        "Freelance designers",
        "Independent designers billing overseas clients",
        vec![String::from("Chasing late payments")],
        metrics,
    )
    .unwrap();
    Evaluation::new(
        EvaluationStatus::WellDefined,
        Vec::new(),
        Vec::new(),
        vec![String::from("Late payments hurt cash flow")],
        Some(String::from("Invoice factoring services exist")),
        vec![audience],
        ClarityScore::new(8, 8, 7, 6, 7).unwrap(),
        LanguageAnalysis::new(vec![String::from("struggle")], Vec::new(), Vec::new()).unwrap(),
    )
    .unwrap()
}

pub fn create_test_idea(concept_id: Identity) -> Idea {
    let idea_id = Identity::generate();
    let audience = IdeaTargetAudience::new(
        Identity::generate(),
        idea_id,
        "Freelance designers",
        "Independent designers billing overseas clients",
        vec![String::from("Chasing late payments")],
    )
    .unwrap();
    Idea::new(
        idea_id,
        concept_id,
        Problem::new(TEST_PROBLEM).unwrap(),
        MarketExistence::new("Invoice factoring services exist").unwrap(),
        Region::Europe,
        None,
        None,
        "Escrow-backed invoicing for freelance designers",
        vec![String::from(
            "Designers will pay 2% for a guaranteed payout",
        )],
        audience,
    )
    .unwrap()
}
