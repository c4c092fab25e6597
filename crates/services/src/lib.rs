// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod openai;
mod prompts;
mod reservation;

#[cfg(test)]
mod tests;

pub use error::ServiceError;
pub use openai::{OpenAiConfig, OpenAiService};
pub use reservation::HttpReservationGateway;
