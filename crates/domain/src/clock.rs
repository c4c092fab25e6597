// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, Utc};

/// Abstraction over "now" so aggregates can be tested deterministically.
pub trait TimeProvider: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// A `TimeProvider` backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A `TimeProvider` that always returns a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeProvider {
    instant: DateTime<Utc>,
}

impl FixedTimeProvider {
    /// Creates a provider pinned to the given instant.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl TimeProvider for FixedTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
