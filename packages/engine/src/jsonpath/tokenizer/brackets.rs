//! Bracket segment classification
//!
//! Turns the trimmed content of one `[...]` segment into a fragment: quoted
//! property, wildcard, placeholder, inline predicate, slice, index union or
//! single index.

use super::strings::read_quoted;
use crate::jsonpath::{
    ast::Fragment,
    error::{JsonPathResult, invalid_path_error},
};

/// Classify bracket `content` (without the surrounding brackets)
pub(super) fn classify(source: &str, content: &str, offset: usize) -> JsonPathResult<Fragment> {
    let trimmed = content.trim();

    match trimmed.chars().next() {
        None => Err(invalid_path_error(source, "empty brackets", Some(offset))),
        Some('\'' | '"') => quoted_property(source, trimmed, offset),
        Some('*') if trimmed == "*" => Ok(Fragment::Wildcard),
        Some('?') => predicate(source, &trimmed[1..], offset),
        Some(_) if trimmed.contains(':') => slice(source, trimmed, offset),
        Some(_) if trimmed.contains(',') => indices(source, trimmed, offset),
        Some(_) => index(source, trimmed, offset).map(Fragment::Index),
    }
}

fn quoted_property(source: &str, literal: &str, offset: usize) -> JsonPathResult<Fragment> {
    let chars: Vec<char> = literal.chars().collect();
    let (name, end) = read_quoted(source, &chars, 0)?;
    if end != chars.len() {
        return Err(invalid_path_error(
            source,
            format!("unexpected content after quoted name in '[{literal}]'"),
            Some(offset),
        ));
    }
    Ok(Fragment::Property(name))
}

/// `?` alone is a placeholder; `?(expr)` carries the trimmed expression text
fn predicate(source: &str, rest: &str, offset: usize) -> JsonPathResult<Fragment> {
    let rest = rest.trim_start();
    if rest.is_empty() {
        return Ok(Fragment::Placeholder);
    }
    match rest.strip_prefix('(').and_then(|inner| inner.strip_suffix(')')) {
        Some(expression) if !expression.trim().is_empty() => {
            Ok(Fragment::Expression(expression.trim().to_string()))
        }
        _ => Err(invalid_path_error(
            source,
            format!("malformed predicate '[?{rest}]', expected '[?]' or '[?(expression)]'"),
            Some(offset),
        )),
    }
}

fn slice(source: &str, content: &str, offset: usize) -> JsonPathResult<Fragment> {
    let Some((start, end)) = content.split_once(':') else {
        return Err(invalid_path_error(source, "malformed slice", Some(offset)));
    };
    if end.contains(':') {
        return Err(invalid_path_error(
            source,
            format!("slice step is not supported in '[{content}]'"),
            Some(offset),
        ));
    }
    Ok(Fragment::Slice {
        start: optional_bound(source, start, offset)?,
        end: optional_bound(source, end, offset)?,
    })
}

fn optional_bound(source: &str, bound: &str, offset: usize) -> JsonPathResult<Option<i64>> {
    let bound = bound.trim();
    if bound.is_empty() {
        Ok(None)
    } else {
        index(source, bound, offset).map(Some)
    }
}

fn indices(source: &str, content: &str, offset: usize) -> JsonPathResult<Fragment> {
    content
        .split(',')
        .map(|part| index(source, part.trim(), offset))
        .collect::<JsonPathResult<Vec<_>>>()
        .map(Fragment::Indices)
}

fn index(source: &str, text: &str, offset: usize) -> JsonPathResult<i64> {
    text.parse::<i64>().map_err(|_| {
        invalid_path_error(
            source,
            format!("unrecognized bracket segment '[{text}]'"),
            Some(offset),
        )
    })
}
