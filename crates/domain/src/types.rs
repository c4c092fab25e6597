// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::validate_text;
use std::str::FromStr;

/// Minimum length of a problem statement, in characters.
pub const PROBLEM_MIN_LENGTH: usize = 30;
/// Maximum length of a problem statement, in characters.
pub const PROBLEM_MAX_LENGTH: usize = 2048;
/// Maximum length of a persona description, in characters.
pub const PERSONA_MAX_LENGTH: usize = 2048;

/// The founder's problem statement.
///
/// Bounded free text: long enough to be evaluable, short enough for a
/// single AI prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    value: String,
}

impl Problem {
    /// Creates a validated `Problem`.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed value is empty or outside the
    /// 30-2048 character bounds.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        Ok(Self {
            value: validate_text("problem", value, PROBLEM_MIN_LENGTH, PROBLEM_MAX_LENGTH)?,
        })
    }

    /// Returns the anonymization placeholder, bypassing the length bounds.
    #[must_use]
    pub fn redacted() -> Self {
        Self {
            value: crate::REDACTED.to_string(),
        }
    }

    /// Returns the problem text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The target persona the founder has in mind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    value: String,
}

impl Persona {
    /// Creates a validated `Persona`.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed value is empty or longer than
    /// 2048 characters.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        Ok(Self {
            value: validate_text("persona", value, 1, PERSONA_MAX_LENGTH)?,
        })
    }

    /// Returns the anonymization placeholder.
    #[must_use]
    pub fn redacted() -> Self {
        Self {
            value: crate::REDACTED.to_string(),
        }
    }

    /// Returns the persona text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Free-text description of whether a market already exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketExistence {
    value: String,
}

impl MarketExistence {
    /// Creates a validated `MarketExistence`.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed value is empty.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        Ok(Self {
            value: validate_text("market_existence", value, 1, usize::MAX)?,
        })
    }

    /// Returns the market existence text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The geographic region a concept targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// No specific region.
    Worldwide,
    /// North America.
    NorthAmerica,
    /// South America.
    SouthAmerica,
    /// Europe.
    Europe,
    /// Asia.
    Asia,
    /// Africa.
    Africa,
    /// Oceania.
    Oceania,
}

impl Region {
    /// Returns the wire representation of this region.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Worldwide => "worldwide",
            Self::NorthAmerica => "north_america",
            Self::SouthAmerica => "south_america",
            Self::Europe => "europe",
            Self::Asia => "asia",
            Self::Africa => "africa",
            Self::Oceania => "oceania",
        }
    }
}

impl FromStr for Region {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "worldwide" => Ok(Self::Worldwide),
            "north_america" => Ok(Self::NorthAmerica),
            "south_america" => Ok(Self::SouthAmerica),
            "europe" => Ok(Self::Europe),
            "asia" => Ok(Self::Asia),
            "africa" => Ok(Self::Africa),
            "oceania" => Ok(Self::Oceania),
            other => Err(DomainError::InvalidRegion(other.to_string())),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of product the founder intends to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    /// Business to business.
    B2B,
    /// Business to consumer.
    B2C,
    /// Business to business to consumer.
    B2B2C,
    /// Software as a service.
    SaaS,
    /// Marketplace.
    Marketplace,
}

impl ProductType {
    /// Returns the wire representation of this product type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::B2B => "b2b",
            Self::B2C => "b2c",
            Self::B2B2C => "b2b2c",
            Self::SaaS => "saas",
            Self::Marketplace => "marketplace",
        }
    }
}

impl FromStr for ProductType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "b2b" => Ok(Self::B2B),
            "b2c" => Ok(Self::B2C),
            "b2b2c" => Ok(Self::B2B2C),
            "saas" => Ok(Self::SaaS),
            "marketplace" => Ok(Self::Marketplace),
            other => Err(DomainError::InvalidProductType(other.to_string())),
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How far along the founder is with the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Nothing built yet.
    Idea,
    /// Building towards a first version.
    PreMvp,
    /// A minimum viable product exists.
    Mvp,
    /// Launched to real users.
    PostLaunch,
}

impl Stage {
    /// Returns the wire representation of this stage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::PreMvp => "pre_mvp",
            Self::Mvp => "mvp",
            Self::PostLaunch => "post_launch",
        }
    }
}

impl FromStr for Stage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "idea" => Ok(Self::Idea),
            "pre_mvp" => Ok(Self::PreMvp),
            "mvp" => Ok(Self::Mvp),
            "post_launch" => Ok(Self::PostLaunch),
            other => Err(DomainError::InvalidStage(other.to_string())),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
