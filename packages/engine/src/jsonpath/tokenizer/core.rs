//! Core tokenizer state machine
//!
//! Walks the path one character at a time. A `.` run of length one separates
//! fragments, a run of two is recursive descent, and anything longer is
//! rejected. Bracket segments are captured whole (respecting quotes and
//! parentheses) and classified by `brackets`. A closed bracket or quoted name
//! must be followed by `.`, `[` or the end of the path.

use super::brackets;
use super::strings::read_quoted;
use crate::config::PathConfigProvider;
use crate::jsonpath::{
    ast::Fragment,
    error::{JsonPathResult, invalid_path_error},
};

/// Tokenizer over one path string
pub struct PathTokenizer<'a> {
    input: &'a str,
    chars: Vec<char>,
    position: usize,
    fragments: Vec<Fragment>,
}

impl<'a> PathTokenizer<'a> {
    /// Create new tokenizer for `input`
    #[inline]
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.trim().chars().collect(),
            position: 0,
            fragments: Vec::new(),
        }
    }

    /// Tokenize the complete path into fragments
    ///
    /// # Errors
    ///
    /// Returns an `InvalidPathFormat` error for an empty path, three or more
    /// consecutive dots, an unterminated quote or bracket, a stray `]`, a
    /// blank or quote-bearing dot name, trailing text after a closed segment,
    /// or a bracket segment that is not a recognized fragment shape.
    pub fn tokenize(mut self) -> JsonPathResult<Vec<Fragment>> {
        if self.chars.is_empty() {
            return Err(invalid_path_error(self.input, "empty path", Some(0)));
        }

        self.fragments.push(Fragment::Root);
        if self.peek() == Some('$') {
            self.position += 1;
        }

        while let Some(c) = self.peek() {
            match c {
                '.' => self.read_dots()?,
                '[' => self.read_bracket()?,
                ']' => {
                    return Err(invalid_path_error(
                        self.input,
                        "unexpected ']' without matching '['",
                        Some(self.position),
                    ));
                }
                _ => self.read_name()?,
            }
        }

        log::debug!(
            "tokenized path '{}' into {} fragments",
            self.input,
            self.fragments.len()
        );
        Ok(self.fragments)
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Dot run: `.` separates, `..` descends, anything longer is invalid.
    /// A trailing single dot produces nothing.
    fn read_dots(&mut self) -> JsonPathResult<()> {
        let start = self.position;
        while self.peek() == Some('.') {
            self.position += 1;
        }
        match self.position - start {
            1 => Ok(()),
            2 => {
                self.fragments.push(Fragment::RecursiveDescent);
                Ok(())
            }
            count => Err(invalid_path_error(
                self.input,
                format!("{count} consecutive dots, use '.' or '..'"),
                Some(start),
            )),
        }
    }

    /// Capture `[...]` up to the matching `]` outside quotes and parentheses
    fn read_bracket(&mut self) -> JsonPathResult<()> {
        let open = self.position;
        let mut quote: Option<char> = None;
        let mut depth = 0usize;
        let mut cursor = open + 1;

        while let Some(&c) = self.chars.get(cursor) {
            match quote {
                Some(_) if c == '\\' => cursor += 1,
                Some(q) if c == q => quote = None,
                Some(_) => {}
                None => match c {
                    '\'' | '"' => quote = Some(c),
                    '(' => depth += 1,
                    ')' => depth = depth.saturating_sub(1),
                    ']' if depth == 0 => break,
                    _ => {}
                },
            }
            cursor += 1;
        }

        if cursor >= self.chars.len() {
            let reason = if quote.is_some() {
                "unterminated quote"
            } else {
                "unterminated bracket"
            };
            return Err(invalid_path_error(self.input, reason, Some(open)));
        }

        let content: String = self.chars[open + 1..cursor].iter().collect();
        self.position = cursor + 1;
        let fragment = brackets::classify(self.input, &content, open)?;
        self.fragments.push(fragment);
        self.expect_separator("']'")
    }

    /// Dot-notation name up to the next `.` or `[`, trimmed. A name opening
    /// with a quote is read as a quoted literal and may contain delimiters.
    fn read_name(&mut self) -> JsonPathResult<()> {
        let start = self.position;
        if matches!(self.peek(), Some('\'' | '"')) {
            let (name, end) = read_quoted(self.input, &self.chars, start)?;
            self.position = end;
            self.fragments.push(Fragment::Property(name));
            return self.expect_separator("quoted name");
        }

        while let Some(c) = self.peek() {
            if matches!(c, '.' | '[' | ']') {
                break;
            }
            if matches!(c, '\'' | '"') {
                return Err(invalid_path_error(
                    self.input,
                    format!("unexpected quote '{c}' inside name"),
                    Some(self.position),
                ));
            }
            self.position += 1;
        }
        let raw: String = self.chars[start..self.position].iter().collect();
        let name = raw.trim();
        match name {
            "" => Err(invalid_path_error(self.input, "empty property name", Some(start))),
            "*" => {
                self.fragments.push(Fragment::Wildcard);
                Ok(())
            }
            _ => {
                self.fragments.push(Fragment::property(name));
                Ok(())
            }
        }
    }

    /// A closed bracket or quoted name must be followed by `.`, `[` or the end
    fn expect_separator(&self, after: &str) -> JsonPathResult<()> {
        match self.peek() {
            None | Some('.' | '[') => Ok(()),
            Some(c) => Err(invalid_path_error(
                self.input,
                format!("unexpected '{c}' after {after}, expected '.' or '['"),
                Some(self.position),
            )),
        }
    }
}

/// Tokenize `path` into its fragment sequence
///
/// # Errors
///
/// Returns an `InvalidPathFormat` error when the path violates the grammar.
pub fn tokenize(path: &str) -> JsonPathResult<Vec<Fragment>> {
    PathTokenizer::new(path).tokenize()
}

/// Tokenize `path`, first enforcing the configured maximum path length
///
/// # Errors
///
/// Returns an `InvalidPathFormat` error when the path is too long or violates
/// the grammar.
pub fn tokenize_with_config<C: PathConfigProvider + ?Sized>(
    path: &str,
    config: &C,
) -> JsonPathResult<Vec<Fragment>> {
    let length = path.chars().count();
    if length > config.max_path_length() {
        return Err(invalid_path_error(
            path,
            format!(
                "path length {length} exceeds configured maximum {}",
                config.max_path_length()
            ),
            None,
        ));
    }
    tokenize(path)
}
