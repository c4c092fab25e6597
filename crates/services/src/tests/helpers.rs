// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::openai::{OpenAiConfig, OpenAiService};
use checkmvp_domain::{
    Concept, FixedTimeProvider, Idea, IdeaTargetAudience, Identity, MarketExistence, Problem,
    Region,
};
use chrono::{TimeZone, Utc};

pub const TEST_PROBLEM: &str =
    "Freelance designers struggle to collect overdue invoices from international clients";

pub fn test_clock() -> FixedTimeProvider {
    FixedTimeProvider::new(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().unwrap())
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

pub fn create_test_idea() -> Idea {
    let idea_id = Identity::generate();
    Idea::new(
        idea_id,
        Identity::generate(),
        Problem::new(TEST_PROBLEM).unwrap(),
        MarketExistence::new("Invoice factoring services exist").unwrap(),
        Region::Europe,
        None,
        None,
        "An escrow-backed invoicing tool for freelance designers",
        vec![String::from("Designers will pay 2% for guaranteed payout")],
        IdeaTargetAudience::new(
            Identity::generate(),
            idea_id,
            "Freelance designers",
            "Independent designers billing overseas clients",
            vec![String::from("Chasing late payments")],
        )
        .unwrap(),
    )
    .unwrap()
}

pub fn service_against(base_url: String) -> OpenAiService {
    OpenAiService::new(OpenAiConfig {
        base_url,
        api_key: String::from("test-key"),
        model: String::from("gpt-4o-mini"),
    })
    .unwrap()
}

/// Wraps AI text into the chat-completions response envelope.
pub fn chat_completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    })
}
