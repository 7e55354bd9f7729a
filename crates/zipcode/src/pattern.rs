//! # Compiled Zip Code Patterns
//!
//! [`ZipPattern`] pairs a verbatim pattern source with its compiled
//! [`Regex`]. The source is what callers inspect; the regex is what
//! matches.
//!
//! ## Matching Contract
//!
//! Table sources are not self-anchored, and the `regex` crate searches for
//! a match anywhere in the haystack. Compilation therefore wraps every
//! source as `^(?:<source>)$`, so `\d{5}` rejects `"12345 "` and
//! `GIR ?0AA|...|BFPO ?\d{1,4}` anchors every alternative, not just the
//! first and last.
//!
//! Unicode mode is disabled: `\d` is `[0-9]`, not every Unicode decimal
//! digit, and character classes are byte classes over ASCII.

use regex::{Regex, RegexBuilder};
use serde::{Serialize, Serializer};

/// A compiled, whole-string zip code pattern.
#[derive(Debug, Clone)]
pub struct ZipPattern {
    source: &'static str,
    regex: Regex,
}

impl ZipPattern {
    /// Compile a pattern source for whole-string matching.
    ///
    /// # Errors
    ///
    /// Returns the regex engine's error if the source does not compile.
    pub fn new(source: &'static str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&format!("^(?:{source})$"))
            .unicode(false)
            .build()?;
        Ok(Self { source, regex })
    }

    /// The pattern source exactly as it appears in the table.
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Returns `true` if the pattern consumes `zip_code` from its first
    /// character through its last.
    pub fn is_match(&self, zip_code: &str) -> bool {
        self.regex.is_match(zip_code)
    }

    /// Capture groups of a whole-string match, or `None` if `zip_code`
    /// does not match.
    ///
    /// Index 0 is the full zip code. Groups that did not participate in the
    /// match (an absent ZIP+4 extension, say) are `None`.
    pub fn captures<'z>(&self, zip_code: &'z str) -> Option<Vec<Option<&'z str>>> {
        let caps = self.regex.captures(zip_code)?;
        Some(caps.iter().map(|m| m.map(|m| m.as_str())).collect())
    }

    /// The underlying anchored regex.
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

impl PartialEq for ZipPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for ZipPattern {}

impl std::fmt::Display for ZipPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.source)
    }
}

impl Serialize for ZipPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.source)
    }
}
