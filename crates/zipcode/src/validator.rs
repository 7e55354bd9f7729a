//! # Validator API
//!
//! Free functions over [`PatternRegistry::builtin`]. These are the primary
//! entry points of the crate:
//!
//! | Function | Result |
//! |----------|--------|
//! | [`patterns_map`] | every country → pattern source |
//! | [`compiled_map`] | every country → compiled pattern |
//! | [`pattern_for`] | one pattern source, case-insensitive |
//! | [`compiled_for`] | one compiled pattern, case-insensitive |
//! | [`is_valid`] | whole-string match, exact-case country lookup |
//!
//! The returned maps are shared references into the process-wide
//! registry and cannot be mutated through them.

use std::collections::BTreeMap;

use crate::error::ZipCodeError;
use crate::pattern::ZipPattern;
use crate::registry::PatternRegistry;

/// Every built-in country → pattern source entry.
pub fn patterns_map() -> &'static BTreeMap<&'static str, &'static str> {
    PatternRegistry::builtin().patterns_map()
}

/// Every built-in country → compiled pattern entry.
pub fn compiled_map() -> &'static BTreeMap<&'static str, ZipPattern> {
    PatternRegistry::builtin().compiled_map()
}

/// Built-in pattern source for `country_code` (ASCII case-insensitive).
///
/// # Errors
///
/// Returns [`ZipCodeError::InvalidArgument`] if `country_code` is empty or
/// blank.
///
/// # Examples
///
/// ```
/// assert_eq!(zipcode::pattern_for("xk").unwrap(), Some(r"[1-7]\d{4}"));
/// assert_eq!(zipcode::pattern_for("ABC").unwrap(), None);
/// ```
pub fn pattern_for(country_code: &str) -> Result<Option<&'static str>, ZipCodeError> {
    PatternRegistry::builtin().pattern_for(country_code)
}

/// Built-in compiled pattern for `country_code` (ASCII case-insensitive).
///
/// # Errors
///
/// Returns [`ZipCodeError::InvalidArgument`] if `country_code` is empty or
/// blank.
pub fn compiled_for(country_code: &str) -> Result<Option<&'static ZipPattern>, ZipCodeError> {
    PatternRegistry::builtin().compiled_for(country_code)
}

/// Whether `zip_code` is a well-formed zip code for `country_code`.
///
/// `country_code` must be given in uppercase: it is looked up without case
/// folding, so `is_valid("de", "12345")` is `Ok(false)`. Unknown countries
/// are `Ok(false)` as well.
///
/// # Errors
///
/// Returns [`ZipCodeError::InvalidArgument`] if either argument is empty or
/// blank, checking `country_code` first.
///
/// # Examples
///
/// ```
/// assert!(zipcode::is_valid("US", "90210-1234").unwrap());
/// assert!(!zipcode::is_valid("US", "90210-12").unwrap());
/// assert!(!zipcode::is_valid("de", "12345").unwrap());
/// ```
pub fn is_valid(country_code: &str, zip_code: &str) -> Result<bool, ZipCodeError> {
    PatternRegistry::builtin().is_valid(country_code, zip_code)
}

/// Empty, or nothing but whitespace and ASCII characters at or below space.
pub(crate) fn is_blank(s: &str) -> bool {
    s.chars().all(|c| c.is_whitespace() || c <= '\u{20}')
}

pub(crate) fn require_country_code(country_code: &str) -> Result<(), ZipCodeError> {
    if is_blank(country_code) {
        return Err(ZipCodeError::blank_country_code());
    }
    Ok(())
}

pub(crate) fn require_zip_code(zip_code: &str) -> Result<(), ZipCodeError> {
    if is_blank(zip_code) {
        return Err(ZipCodeError::blank_zip_code());
    }
    Ok(())
}
