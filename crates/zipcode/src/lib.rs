//! # zipcode — International Zip Code Patterns
//!
//! Validates postal codes against per-country syntactic rules and exposes
//! those rules for inspection. Rules are regular expressions keyed by
//! ISO 3166-1 alpha-2 country code, taken from Google's address metadata.
//!
//! ```
//! assert!(zipcode::is_valid("DE", "10115").unwrap());
//! assert!(!zipcode::is_valid("DE", "1011").unwrap());
//! assert_eq!(zipcode::pattern_for("jp").unwrap(), Some(r"\d{3}-?\d{4}"));
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **One immutable registry.** The built-in table is compiled once into a
//!    [`PatternRegistry`] on first use and never mutated. Every operation is
//!    a read of shared state, safe from any number of threads.
//!
//! 2. **Whole-string matching.** Table sources are not anchored. Matching
//!    always consumes the entire zip code; `"12345 "` is not a German zip
//!    code.
//!
//! 3. **Lookups fold case, validation does not.** [`pattern_for`] and
//!    [`compiled_for`] accept `"de"` as well as `"DE"`. [`is_valid`] only
//!    accepts the uppercase key and returns `false` otherwise.
//!
//! 4. **Unknown is not an error.** An unknown country is `None` from the
//!    lookups and `false` from validation. Only empty or blank arguments
//!    produce [`ZipCodeError::InvalidArgument`].
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests. The single deliberate panic is a
//!   malformed built-in table, which the test suite rules out.

pub mod country;
pub mod error;
pub mod pattern;
pub mod registry;
pub mod table;
pub mod validator;

// Re-export primary types for ergonomic imports.
pub use country::CountryCode;
pub use error::{InitializationError, ValidationError, ZipCodeError};
pub use pattern::ZipPattern;
pub use registry::PatternRegistry;
pub use table::{ZIP_CODE_PATTERNS, ZIP_CODE_PATTERN_COUNT};
pub use validator::{compiled_for, compiled_map, is_valid, pattern_for, patterns_map};
