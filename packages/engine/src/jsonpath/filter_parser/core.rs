//! Core inline predicate parser
//!
//! Grammar, whitespace-insensitive outside literals:
//!
//! ```text
//! expr     := term ( '&&' term )*
//! term     := '!'? '@' accessor ( op literal )?
//! accessor := '.' name | '[' quoted ']'
//! op       := '==' | '!=' | '<' | '<=' | '>' | '>='
//! ```

use super::literals;
use crate::jsonpath::{
    error::{JsonPathResult, invalid_path_error},
    filter::{Criteria, Filter, Operator},
    tokenizer::strings::read_quoted,
};

/// Comparison operators accepted after an accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComparisonOp {
    Equal,
    NotEqual,
    Less,
    LessEq,
    Greater,
    GreaterEq,
}

/// Parser over the text of one inline predicate
pub struct InlinePredicateParser<'a> {
    pub(super) input: &'a str,
    pub(super) chars: Vec<char>,
    pub(super) position: usize,
}

impl<'a> InlinePredicateParser<'a> {
    #[inline]
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().collect(),
            position: 0,
        }
    }

    /// Parse the whole expression into a conjunction filter
    ///
    /// # Errors
    ///
    /// Returns an `InvalidPathFormat` error for malformed terms, `||`, nested
    /// property chains, and bare `@` comparisons.
    pub fn parse(mut self) -> JsonPathResult<Filter> {
        let mut filter = Filter::new();
        loop {
            self.skip_whitespace();
            filter.add_criteria(self.parse_term()?);
            self.skip_whitespace();
            if self.at_end() {
                break;
            }
            if self.consume("&&") {
                continue;
            }
            if self.looking_at("||") {
                return Err(self.error("'||' is not supported, predicates are conjunctions"));
            }
            return Err(self.error(format!("unexpected '{}'", self.chars[self.position])));
        }
        Ok(filter)
    }

    fn parse_term(&mut self) -> JsonPathResult<Criteria> {
        let negated = self.consume("!");
        self.skip_whitespace();
        if !self.consume("@") {
            return Err(self.error("expected '@'"));
        }
        let key = self.parse_accessor()?;
        if matches!(self.peek(), Some('.' | '[')) {
            return Err(self.error("nested property paths are not supported"));
        }
        self.skip_whitespace();

        let Some(op) = self.parse_comparison_operator() else {
            return Ok(Criteria::new(key, Operator::Exists(!negated)));
        };
        if negated {
            return Err(self.error("'!' only applies to existence tests"));
        }
        self.skip_whitespace();
        let operand = literals::parse_literal(self)?;
        let operator = match op {
            ComparisonOp::Equal => Operator::Is(operand),
            ComparisonOp::NotEqual => Operator::Ne(operand),
            ComparisonOp::Less => Operator::Lt(operand),
            ComparisonOp::LessEq => Operator::Lte(operand),
            ComparisonOp::Greater => Operator::Gt(operand),
            ComparisonOp::GreaterEq => Operator::Gte(operand),
        };
        Ok(Criteria::new(key, operator))
    }

    /// `.name` or `['quoted name']` following `@`
    fn parse_accessor(&mut self) -> JsonPathResult<String> {
        if self.consume(".") {
            let start = self.position;
            while let Some(c) = self.peek() {
                if c.is_whitespace() || "=!<>&|.[]()".contains(c) {
                    break;
                }
                self.position += 1;
            }
            if start == self.position {
                return Err(self.error("expected property name after '@.'"));
            }
            return Ok(self.chars[start..self.position].iter().collect());
        }
        if self.consume("[") {
            self.skip_whitespace();
            if !matches!(self.peek(), Some('\'' | '"')) {
                return Err(self.error("expected quoted property name after '@['"));
            }
            let (key, end) = read_quoted(self.input, &self.chars, self.position)?;
            self.position = end;
            self.skip_whitespace();
            if !self.consume("]") {
                return Err(self.error("expected ']' after quoted property name"));
            }
            return Ok(key);
        }
        Err(self.error("'@' must be followed by a property accessor"))
    }

    fn parse_comparison_operator(&mut self) -> Option<ComparisonOp> {
        const OPERATORS: [(&str, ComparisonOp); 6] = [
            ("==", ComparisonOp::Equal),
            ("!=", ComparisonOp::NotEqual),
            ("<=", ComparisonOp::LessEq),
            (">=", ComparisonOp::GreaterEq),
            ("<", ComparisonOp::Less),
            (">", ComparisonOp::Greater),
        ];
        OPERATORS
            .iter()
            .find(|(symbol, _)| self.consume(symbol))
            .map(|(_, op)| *op)
    }

    #[inline]
    pub(super) fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    #[inline]
    pub(super) fn at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    pub(super) fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.position += 1;
        }
    }

    fn looking_at(&self, symbol: &str) -> bool {
        let mut cursor = self.position;
        for expected in symbol.chars() {
            if self.chars.get(cursor) != Some(&expected) {
                return false;
            }
            cursor += 1;
        }
        true
    }

    pub(super) fn consume(&mut self, symbol: &str) -> bool {
        if self.looking_at(symbol) {
            self.position += symbol.chars().count();
            true
        } else {
            false
        }
    }

    pub(super) fn error(&self, reason: impl Into<String>) -> crate::jsonpath::error::JsonPathError {
        invalid_path_error(
            format!("[?({})]", self.input),
            reason,
            Some(self.position),
        )
    }
}

/// Parse inline predicate text (without the `?( )` wrapper) into a filter
///
/// # Errors
///
/// Returns an `InvalidPathFormat` error when the expression is malformed.
pub fn parse_inline_predicate(expression: &str) -> JsonPathResult<Filter> {
    InlinePredicateParser::new(expression).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn operators(expression: &str) -> Vec<(String, Operator)> {
        parse_inline_predicate(expression)
            .expect("expression should parse")
            .criteria()
            .iter()
            .map(|c| (c.key().to_string(), c.operator().clone()))
            .collect()
    }

    #[test]
    fn bare_accessor_is_existence_test() {
        assert_eq!(
            operators("@.isbn"),
            vec![("isbn".to_string(), Operator::Exists(true))]
        );
        assert_eq!(
            operators("!@.isbn"),
            vec![("isbn".to_string(), Operator::Exists(false))]
        );
    }

    #[test]
    fn comparison_operators_map_to_criteria() {
        assert_eq!(
            operators("@.price<10"),
            vec![("price".to_string(), Operator::Lt(Value::Int(10)))]
        );
        assert_eq!(
            operators("@.price >= 8.95"),
            vec![("price".to_string(), Operator::Gte(Value::Double(8.95)))]
        );
        assert_eq!(
            operators("@.category != 'fiction'"),
            vec![(
                "category".to_string(),
                Operator::Ne(Value::String("fiction".to_string()))
            )]
        );
    }

    #[test]
    fn conjunction_keeps_order() {
        let parsed = operators("@.a == true && @['b c'] == null && @.d > 3000000000");
        assert_eq!(
            parsed,
            vec![
                ("a".to_string(), Operator::Is(Value::Bool(true))),
                ("b c".to_string(), Operator::Is(Value::Null)),
                ("d".to_string(), Operator::Gt(Value::Long(3_000_000_000))),
            ]
        );
    }

    #[test]
    fn unsupported_forms_are_rejected() {
        for expression in [
            "@.a || @.b",
            "@.a.b == 1",
            "@ == 1",
            "@.a = 1",
            "!@.a == 1",
            "@.a == ",
            "price < 10",
            "@['unterminated",
        ] {
            assert!(
                parse_inline_predicate(expression).is_err(),
                "'{expression}' should be rejected"
            );
        }
    }
}
