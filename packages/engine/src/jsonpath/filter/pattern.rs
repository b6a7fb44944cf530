//! Compiled regular expression operands for `regex` criteria
//!
//! A pattern always matches the whole string: the source is anchored at both
//! ends when it is compiled, and flags travel with it.

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::jsonpath::error::{JsonPathResult, invalid_pattern_error};

/// Compile flags for a [`Pattern`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct PatternFlags {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
}

impl PatternFlags {
    #[must_use]
    pub fn case_insensitive() -> Self {
        Self {
            case_insensitive: true,
            ..Self::default()
        }
    }
}

/// Full-match regular expression with its source and flags
#[derive(Clone)]
pub struct Pattern {
    source: String,
    flags: PatternFlags,
    regex: Regex,
}

impl Pattern {
    /// Compile `source` with default flags
    ///
    /// # Errors
    ///
    /// Returns an `InvalidPattern` error when the expression does not compile.
    pub fn new(source: &str) -> JsonPathResult<Self> {
        Self::with_flags(source, PatternFlags::default())
    }

    /// Compile `source` ignoring letter case
    ///
    /// # Errors
    ///
    /// Returns an `InvalidPattern` error when the expression does not compile.
    pub fn case_insensitive(source: &str) -> JsonPathResult<Self> {
        Self::with_flags(source, PatternFlags::case_insensitive())
    }

    /// Compile `source` with explicit flags
    ///
    /// # Errors
    ///
    /// Returns an `InvalidPattern` error when the expression does not compile.
    pub fn with_flags(source: &str, flags: PatternFlags) -> JsonPathResult<Self> {
        let regex = RegexBuilder::new(&format!(r"\A(?:{source})\z"))
            .case_insensitive(flags.case_insensitive)
            .multi_line(flags.multi_line)
            .dot_matches_new_line(flags.dot_matches_new_line)
            .build()
            .map_err(|error| invalid_pattern_error(source, &error))?;
        Ok(Self {
            source: source.to_string(),
            flags,
            regex,
        })
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[inline]
    #[must_use]
    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Whether the whole of `text` matches
    #[inline]
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("flags", &self.flags)
            .finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.source)?;
        if self.flags.case_insensitive {
            f.write_str("i")?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for Pattern {
    type Error = crate::jsonpath::error::JsonPathError;

    fn try_from(source: &str) -> JsonPathResult<Self> {
        Self::new(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_must_cover_whole_string() {
        let pattern = Pattern::new("a|ab").expect("valid pattern");
        assert!(pattern.matches("ab"));
        assert!(pattern.matches("a"));
        assert!(!pattern.matches("abc"));
        assert!(!pattern.matches("xa"));
    }

    #[test]
    fn flags_are_applied() {
        let strict = Pattern::new("KALLE").expect("valid pattern");
        let relaxed = Pattern::case_insensitive("KALLE").expect("valid pattern");
        assert!(!strict.matches("kalle"));
        assert!(relaxed.matches("kalle"));
        assert_ne!(strict, relaxed);
        assert_eq!(strict.flags(), PatternFlags::default());
        assert!(relaxed.flags().case_insensitive);
        assert!(!relaxed.flags().multi_line);
    }

    #[test]
    fn invalid_source_is_reported() {
        let error = Pattern::new("(unclosed").expect_err("pattern should not compile");
        assert_eq!(
            error.kind(),
            crate::jsonpath::error::ErrorKind::InvalidPattern
        );
    }
}
