//! # Error Types
//!
//! Errors surfaced by the zip code registry. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Precondition failures carry the offending parameter name and render
//!   the exact message callers match on:
//!   `'<param>' must not be null, empty or blank`.
//! - Unknown countries and non-matching zip codes are NOT errors; they are
//!   reported as `None` / `false` by the lookup and validation operations.
//! - Table defects (bad pattern, malformed key) are only raised while a
//!   registry is being built.

use thiserror::Error;

/// Top-level error type for zip code lookups and validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZipCodeError {
    /// A string argument was empty or consisted only of whitespace.
    #[error("'{param}' must not be null, empty or blank")]
    InvalidArgument {
        /// Name of the rejected parameter (`countryCode` or `zipCode`).
        param: &'static str,
    },

    /// A pattern table could not be turned into a registry.
    #[error("pattern registry initialization failed: {0}")]
    Initialization(#[from] InitializationError),
}

impl ZipCodeError {
    /// Precondition failure for the `countryCode` argument.
    pub fn blank_country_code() -> Self {
        Self::InvalidArgument {
            param: "countryCode",
        }
    }

    /// Precondition failure for the `zipCode` argument.
    pub fn blank_zip_code() -> Self {
        Self::InvalidArgument { param: "zipCode" }
    }
}

/// Defect found while building a registry from a pattern table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InitializationError {
    /// A pattern source failed to compile.
    #[error("pattern for {country} does not compile: {reason}")]
    InvalidPattern {
        /// Country whose pattern was rejected.
        country: String,
        /// Compiler diagnostic from the regex engine.
        reason: String,
    },

    /// A pattern source was empty.
    #[error("pattern for {0} is empty")]
    EmptyPattern(String),

    /// A table key was not a two-letter uppercase ASCII code.
    #[error("table key {0:?} is not a two-letter uppercase country code")]
    MalformedKey(String),

    /// The same country appeared twice in a table.
    #[error("duplicate table entry for {0}")]
    DuplicateKey(String),
}

/// Error constructing a [`CountryCode`](crate::CountryCode).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input was not exactly two ASCII letters.
    #[error("invalid ISO 3166-1 alpha-2 country code: {0:?}")]
    InvalidCountryCode(String),
}
