//! # Country Codes
//!
//! [`CountryCode`] is the validated ISO 3166-1 alpha-2 newtype used for
//! typed registry lookups. Construction accepts either case and stores the
//! code uppercase, so a `CountryCode` can always be used as a registry key
//! as-is.
//!
//! Case folding is ASCII-only. Country codes are ASCII, and a
//! locale-aware uppercase can map letters outside A-Z (the Turkish dotted
//! `i` being the usual example).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A two-letter ISO 3166-1 alpha-2 country code, stored uppercase.
///
/// # Validation
///
/// - Exactly two characters
/// - Both ASCII letters (`A-Z` or `a-z`)
///
/// Membership in the ISO list is not checked here; an unassigned code such
/// as `ZZ` is a well-formed `CountryCode` that simply has no registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Create a country code, uppercasing ASCII letters.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCountryCode`] if the value is not
    /// exactly two ASCII letters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let s = value.as_ref();
        match s.as_bytes() {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Ok(Self([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            }
            _ => Err(ValidationError::InvalidCountryCode(s.to_string())),
        }
    }

    /// Access the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII uppercase letters by construction.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.as_str().to_string()
    }
}
