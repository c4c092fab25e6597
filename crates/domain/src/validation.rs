// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates a text field: trims whitespace and enforces length bounds.
///
/// Character counts are measured on the trimmed value.
///
/// # Errors
///
/// Returns `EmptyField` for empty or whitespace-only input,
/// `FieldTooShort`/`FieldTooLong` when length bounds are violated.
pub fn validate_text(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<String, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    let len: usize = trimmed.chars().count();
    if len < min {
        return Err(DomainError::FieldTooShort { field, min, len });
    }
    if len > max {
        return Err(DomainError::FieldTooLong { field, max, len });
    }
    Ok(trimmed.to_string())
}

/// Validates a list of text entries, trimming each and rejecting empties.
///
/// The list itself may be empty; emptiness rules are enforced by the
/// owning type (e.g., the evaluation invariant table).
///
/// # Errors
///
/// Returns `EmptyField` if any entry is empty or whitespace-only.
pub fn validate_string_list(
    field: &'static str,
    values: Vec<String>,
) -> Result<Vec<String>, DomainError> {
    values
        .into_iter()
        .map(|value| {
            let trimmed: &str = value.trim();
            if trimmed.is_empty() {
                Err(DomainError::EmptyField { field })
            } else {
                Ok(trimmed.to_string())
            }
        })
        .collect()
}

/// Validates an integer score against the 0-10 inclusive range.
///
/// # Errors
///
/// Returns `ScoreOutOfRange` when the value lies outside 0-10.
pub const fn validate_score(field: &'static str, value: i64) -> Result<u8, DomainError> {
    if value >= 0 && value <= 10 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(value as u8)
    } else {
        Err(DomainError::ScoreOutOfRange { field, value })
    }
}
