//! Range-checked value types shared across the triage crates.
//!
//! Each type can only be constructed through a checked constructor, so a value that exists is
//! always inside its documented range. Out-of-range input is rejected, never clamped.

use std::fmt;
use std::str::FromStr;

/// Errors that can occur when creating validated value types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypesError {
    /// A numeric value fell outside its permitted inclusive range.
    #[error("value {value} is outside the range {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },

    /// A string did not name one of the enumerated values.
    #[error("unrecognised value '{0}'")]
    Unrecognised(String),
}

/// Patient age in whole years, `0..=120`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Age(u8);

impl Age {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 120;

    /// Creates a new `Age`, rejecting values outside `0..=120`.
    pub fn new(years: i64) -> Result<Self, TypesError> {
        check_range(years, Self::MIN, Self::MAX).map(|v| Self(v as u8))
    }

    pub fn years(self) -> u8 {
        self.0
    }
}

/// Self-reported symptom severity on a `1..=10` scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Severity(u8);

impl Severity {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 10;

    /// The mildest severity, used when a report leaves severity unset.
    pub const MILDEST: Severity = Severity(1);

    /// Creates a new `Severity`, rejecting values outside `1..=10`.
    pub fn new(score: i64) -> Result<Self, TypesError> {
        check_range(score, Self::MIN, Self::MAX).map(|v| Self(v as u8))
    }

    pub fn score(self) -> u8 {
        self.0
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::MILDEST
    }
}

fn check_range(value: i64, min: i64, max: i64) -> Result<i64, TypesError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(TypesError::OutOfRange { value, min, max })
    }
}

/// Sex as recorded on a symptom intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
            Sex::PreferNotToSay => "prefer_not_to_say",
        }
    }
}

impl FromStr for Sex {
    type Err = TypesError;

    /// Parses the wire spelling. Surrounding whitespace and letter case are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            "other" => Ok(Sex::Other),
            "prefer_not_to_say" => Ok(Sex::PreferNotToSay),
            _ => Err(TypesError::Unrecognised(s.to_owned())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! bounded_serde {
    ($ty:ident, $getter:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_u8(self.$getter())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = i64::deserialize(deserializer)?;
                $ty::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

bounded_serde!(Age, years);
bounded_serde!(Severity, score);
