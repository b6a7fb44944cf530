//! Quoted literal reading with escape sequence handling
//!
//! Shared by bracket classification and the inline predicate parser. Content
//! between the quotes is kept verbatim apart from backslash escapes.

use crate::jsonpath::error::{JsonPathResult, invalid_path_error};

/// Read a quoted literal starting at `chars[start]` (which must be `'` or `"`)
///
/// Returns the unescaped content and the index just past the closing quote.
pub(crate) fn read_quoted(
    source: &str,
    chars: &[char],
    start: usize,
) -> JsonPathResult<(String, usize)> {
    let quote = chars[start];
    let mut value = String::new();
    let mut i = start + 1;

    while i < chars.len() {
        match chars[i] {
            c if c == quote => return Ok((value, i + 1)),
            '\\' => {
                i += 1;
                let Some(&escaped) = chars.get(i) else {
                    break;
                };
                match escaped {
                    '\'' | '"' | '\\' | '/' => value.push(escaped),
                    'b' => value.push('\u{0008}'),
                    'f' => value.push('\u{000C}'),
                    'n' => value.push('\n'),
                    'r' => value.push('\r'),
                    't' => value.push('\t'),
                    'u' => {
                        value.push(parse_unicode_escape(source, chars, i)?);
                        i += 4;
                    }
                    _ => {
                        return Err(invalid_path_error(
                            source,
                            format!("invalid escape sequence '\\{escaped}'"),
                            Some(i),
                        ));
                    }
                }
            }
            c => value.push(c),
        }
        i += 1;
    }

    Err(invalid_path_error(source, "unterminated quote", Some(start)))
}

/// Parse the four hex digits following `\u` at `chars[i]`
fn parse_unicode_escape(source: &str, chars: &[char], i: usize) -> JsonPathResult<char> {
    let Some(digits) = chars.get(i + 1..i + 5) else {
        return Err(invalid_path_error(
            source,
            "incomplete unicode escape sequence",
            Some(i),
        ));
    };
    let hex: String = digits.iter().collect();
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| invalid_path_error(source, "invalid unicode escape sequence", Some(i)))
}
