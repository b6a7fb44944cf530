//! Literal operands in inline predicates

use super::core::InlinePredicateParser;
use crate::jsonpath::{error::JsonPathResult, tokenizer::strings::read_quoted};
use crate::value::Value;

/// Parse a number, quoted string, `true`, `false` or `null`
pub(super) fn parse_literal(parser: &mut InlinePredicateParser<'_>) -> JsonPathResult<Value> {
    match parser.peek() {
        Some('\'' | '"') => {
            let (text, end) = read_quoted(parser.input, &parser.chars, parser.position)?;
            parser.position = end;
            Ok(Value::String(text))
        }
        Some(c) if c == '-' || c.is_ascii_digit() => parse_number(parser),
        Some(c) if c.is_ascii_alphabetic() => parse_keyword(parser),
        Some(c) => Err(parser.error(format!("unexpected '{c}', expected a literal"))),
        None => Err(parser.error("expected a literal")),
    }
}

fn parse_number(parser: &mut InlinePredicateParser<'_>) -> JsonPathResult<Value> {
    let start = parser.position;
    if parser.peek() == Some('-') {
        parser.position += 1;
    }
    while parser
        .peek()
        .is_some_and(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        parser.position += 1;
    }
    let text: String = parser.chars[start..parser.position].iter().collect();

    if text.contains(['.', 'e', 'E']) {
        return text
            .parse::<f64>()
            .map(Value::Double)
            .map_err(|_| parser.error(format!("invalid number '{text}'")));
    }
    let integer = text
        .parse::<i64>()
        .map_err(|_| parser.error(format!("invalid number '{text}'")))?;
    Ok(i32::try_from(integer).map_or(Value::Long(integer), Value::Int))
}

fn parse_keyword(parser: &mut InlinePredicateParser<'_>) -> JsonPathResult<Value> {
    let start = parser.position;
    while parser.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
        parser.position += 1;
    }
    let word: String = parser.chars[start..parser.position].iter().collect();
    match word.as_str() {
        "true" => Ok(Value::Bool(true)),
        "false" => Ok(Value::Bool(false)),
        "null" => Ok(Value::Null),
        _ => Err(parser.error(format!("unknown literal '{word}'"))),
    }
}
