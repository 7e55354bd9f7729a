//! # Pattern Registry
//!
//! [`PatternRegistry`] holds the two immutable country-keyed maps: pattern
//! sources and their compiled [`ZipPattern`]s. Both maps are built together
//! in [`PatternRegistry::from_entries`] and never change afterwards, so a
//! registry can be shared across threads without locking.
//!
//! The built-in registry is compiled on first use behind a [`OnceLock`] and
//! lives for the rest of the process.
//!
//! ## Case Handling
//!
//! - [`PatternRegistry::pattern_for`] and [`PatternRegistry::compiled_for`]
//!   ASCII-uppercase the country code before lookup, so `"ar"` finds `AR`.
//! - [`PatternRegistry::is_valid`] looks the country code up exactly as
//!   given, so `"de"` does NOT find `DE` and validation returns `false`.
//!   Existing callers depend on this; normalise with
//!   [`CountryCode`] first if case-insensitive validation is wanted.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Serialize, Serializer};

use crate::country::CountryCode;
use crate::error::{InitializationError, ZipCodeError};
use crate::pattern::ZipPattern;
use crate::table::ZIP_CODE_PATTERNS;
use crate::validator::{require_country_code, require_zip_code};

/// Immutable country → zip code pattern registry.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    patterns: BTreeMap<&'static str, &'static str>,
    compiled: BTreeMap<&'static str, ZipPattern>,
}

impl PatternRegistry {
    /// The registry built from the built-in table.
    ///
    /// # Panics
    ///
    /// Panics on first use if the built-in table is malformed or one of its
    /// patterns fails to compile. Both are defects in the table itself and
    /// are covered by this crate's tests.
    pub fn builtin() -> &'static PatternRegistry {
        static BUILTIN: OnceLock<PatternRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| match Self::from_entries(ZIP_CODE_PATTERNS) {
            Ok(registry) => registry,
            Err(e) => panic!("built-in zip code table is invalid: {e}"),
        })
    }

    /// Build a registry from a `(country code, pattern source)` table,
    /// compiling every pattern once.
    ///
    /// # Errors
    ///
    /// Returns [`ZipCodeError::Initialization`] if a key is not a two-letter
    /// uppercase ASCII code, a key appears twice, a pattern is empty, or a
    /// pattern fails to compile.
    pub fn from_entries(
        entries: &'static [(&'static str, &'static str)],
    ) -> Result<Self, ZipCodeError> {
        let mut patterns = BTreeMap::new();
        let mut compiled = BTreeMap::new();

        for &(country, source) in entries {
            if !is_table_key(country) {
                return Err(InitializationError::MalformedKey(country.to_string()).into());
            }
            if source.is_empty() {
                return Err(InitializationError::EmptyPattern(country.to_string()).into());
            }
            let pattern =
                ZipPattern::new(source).map_err(|e| InitializationError::InvalidPattern {
                    country: country.to_string(),
                    reason: e.to_string(),
                })?;
            if patterns.insert(country, source).is_some() {
                return Err(InitializationError::DuplicateKey(country.to_string()).into());
            }
            compiled.insert(country, pattern);
        }

        tracing::debug!(countries = patterns.len(), "compiled zip code pattern registry");
        Ok(Self { patterns, compiled })
    }

    /// All country → pattern source entries.
    pub fn patterns_map(&self) -> &BTreeMap<&'static str, &'static str> {
        &self.patterns
    }

    /// All country → compiled pattern entries. Same key set as
    /// [`patterns_map`](Self::patterns_map).
    pub fn compiled_map(&self) -> &BTreeMap<&'static str, ZipPattern> {
        &self.compiled
    }

    /// Pattern source for a country code, matched case-insensitively.
    ///
    /// Returns `Ok(None)` for unknown codes, including codes that are not
    /// two characters long.
    ///
    /// # Errors
    ///
    /// Returns [`ZipCodeError::InvalidArgument`] if `country_code` is empty
    /// or blank.
    pub fn pattern_for(&self, country_code: &str) -> Result<Option<&'static str>, ZipCodeError> {
        require_country_code(country_code)?;
        let key = country_code.to_ascii_uppercase();
        let found = self.patterns.get(key.as_str()).copied();
        if found.is_none() {
            tracing::trace!(country_code, "no zip code pattern for country");
        }
        Ok(found)
    }

    /// Compiled pattern for a country code, matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ZipCodeError::InvalidArgument`] if `country_code` is empty
    /// or blank.
    pub fn compiled_for(&self, country_code: &str) -> Result<Option<&ZipPattern>, ZipCodeError> {
        require_country_code(country_code)?;
        let key = country_code.to_ascii_uppercase();
        let found = self.compiled.get(key.as_str());
        if found.is_none() {
            tracing::trace!(country_code, "no compiled zip code pattern for country");
        }
        Ok(found)
    }

    /// Check `zip_code` against the pattern for `country_code`.
    ///
    /// The country code is looked up exactly as given (no case folding).
    /// An unknown country yields `Ok(false)`. The zip code must match the
    /// pattern as a whole string.
    ///
    /// # Errors
    ///
    /// Returns [`ZipCodeError::InvalidArgument`] if either argument is empty
    /// or blank. `country_code` is checked first.
    pub fn is_valid(&self, country_code: &str, zip_code: &str) -> Result<bool, ZipCodeError> {
        require_country_code(country_code)?;
        require_zip_code(zip_code)?;
        Ok(self
            .compiled
            .get(country_code)
            .is_some_and(|pattern| pattern.is_match(zip_code)))
    }

    /// Pattern source for a validated country code.
    pub fn pattern(&self, country: CountryCode) -> Option<&'static str> {
        self.patterns.get(country.as_str()).copied()
    }

    /// Compiled pattern for a validated country code.
    pub fn compiled(&self, country: CountryCode) -> Option<&ZipPattern> {
        self.compiled.get(country.as_str())
    }

    /// Whether the registry has an entry for `country`.
    pub fn supports(&self, country: CountryCode) -> bool {
        self.patterns.contains_key(country.as_str())
    }

    /// Supported country codes in ascending order.
    pub fn country_codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.keys().copied()
    }

    /// Every pattern source, ordered by country code.
    pub fn pattern_strings(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.values().copied()
    }

    /// Every compiled pattern, ordered by country code.
    pub fn compiled_patterns(&self) -> impl Iterator<Item = &ZipPattern> + '_ {
        self.compiled.values()
    }

    /// Number of countries in the registry.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Serialize for PatternRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.patterns.serialize(serializer)
    }
}

fn is_table_key(key: &str) -> bool {
    key.len() == 2 && key.bytes().all(|b| b.is_ascii_uppercase())
}
