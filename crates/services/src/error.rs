// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors from the outbound HTTP adapters.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The HTTP request could not be sent or timed out.
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The remote service answered with a non-success status.
    #[error("API returned {status}: {body}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The response body, for diagnostics.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The AI answered with no content block.
    #[error("AI response contained no content")]
    EmptyResponse,
}
