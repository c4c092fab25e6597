// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ServiceError;
use async_trait::async_trait;
use checkmvp::{CoreError, ReservationGateway, ReservationOutcome, ReservationRequest};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP adapter notifying the idea service of reservations.
pub struct HttpReservationGateway {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct ReservationPayload {
    idea_id: String,
    concept_id: String,
    target_audience_id: String,
    statement: String,
    hypotheses: Vec<String>,
}

#[derive(Deserialize)]
struct ReservationAnswer {
    success: bool,
    message: String,
}

impl HttpReservationGateway {
    /// Creates the gateway against a base URL without a trailing slash.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: String) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl ReservationGateway for HttpReservationGateway {
    async fn reserve(&self, request: &ReservationRequest) -> Result<ReservationOutcome, CoreError> {
        let payload = ReservationPayload {
            idea_id: request.idea_id.to_string(),
            concept_id: request.concept_id.to_string(),
            target_audience_id: request.target_audience_id.to_string(),
            statement: request.statement.clone(),
            hypotheses: request.hypotheses.clone(),
        };

        let response = self
            .client
            .post(format!("{}/api/reservations", self.base_url))
            .json(&payload)
            .send()
            .await
            .map_err(|err| {
                error!(error = %err, "reservation request failed");
                CoreError::Gateway(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "idea service rejected the request");
            return Err(CoreError::Gateway(
                ServiceError::Api {
                    status: status.as_u16(),
                    body,
                }
                .to_string(),
            ));
        }

        let answer: ReservationAnswer = response
            .json()
            .await
            .map_err(|err| CoreError::Gateway(err.to_string()))?;
        info!(
            idea_id = %request.idea_id,
            success = answer.success,
            "reservation answered"
        );
        Ok(ReservationOutcome {
            success: answer.success,
            message: answer.message,
        })
    }
}
