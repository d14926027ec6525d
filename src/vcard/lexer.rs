//! Line unfolding and content line parsing.
//!
//! A content line has the shape `[group.]NAME[;PARAM=value[,value]]*:value`.
//! Long lines may be folded: a line break followed by a single space or tab
//! continues the previous line (RFC 6350 §3.2).

use crate::error::{CardError, CardResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// Property name after an optional, discarded group prefix.
static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9-]+\.)?([A-Za-z0-9-]+)$").expect("valid property name regex")
});

/// A logical line after unfolding, tagged with the physical line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    pub line: usize,
    pub text: String,
}

/// Join folded continuation lines and drop blank lines.
///
/// Handles CRLF and bare LF line endings.
pub fn unfold(input: &str) -> Vec<LogicalLine> {
    let mut lines: Vec<LogicalLine> = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        if let Some(continuation) = raw.strip_prefix([' ', '\t']) {
            if let Some(previous) = lines.last_mut() {
                previous.text.push_str(continuation);
                continue;
            }
        }

        if raw.trim().is_empty() {
            continue;
        }

        lines.push(LogicalLine {
            line: index + 1,
            text: raw.to_string(),
        });
    }

    lines
}

/// A parsed content line before value interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name, lowercased.
    pub name: String,
    /// Parameters in order of appearance; names lowercased.
    pub params: Vec<(String, Vec<String>)>,
    /// Raw, still escaped, value.
    pub value: String,
}

/// Parse one logical line.
///
/// # Errors
///
/// Returns `CardError::MissingSeparator` when there is no unquoted `:` and
/// `CardError::InvalidPropertyName` when the name is empty or malformed.
pub fn parse_content_line(line: &LogicalLine) -> CardResult<ContentLine> {
    let text = line.text.as_str();
    let colon = find_unquoted(text, ':').ok_or(CardError::MissingSeparator { line: line.line })?;
    let (head, value) = (&text[..colon], &text[colon + 1..]);

    let (name_part, params_part) = match find_unquoted(head, ';') {
        Some(semi) => (&head[..semi], Some(&head[semi + 1..])),
        None => (head, None),
    };

    let captures = NAME_RE
        .captures(name_part.trim())
        .ok_or_else(|| CardError::InvalidPropertyName {
            line: line.line,
            name: name_part.to_string(),
        })?;

    let name = captures
        .get(1)
        .map(|n| n.as_str().to_ascii_lowercase())
        .unwrap_or_default();

    Ok(ContentLine {
        name,
        params: params_part.map(parse_parameters).unwrap_or_default(),
        value: value.to_string(),
    })
}

/// Byte offset of the first `needle` outside double quotes.
fn find_unquoted(s: &str, needle: char) -> Option<usize> {
    let mut in_quotes = false;
    for (i, c) in s.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c == needle && !in_quotes => return Some(i),
            _ => {}
        }
    }
    None
}

/// Split `a=b,c;d` style parameter text.
///
/// A bare token with no `=` (vCard 2.1 `TEL;CELL:`) is read as a `type` value.
fn parse_parameters(s: &str) -> Vec<(String, Vec<String>)> {
    let mut params = Vec::new();
    let mut rest = s;

    loop {
        let (current, next) = match find_unquoted(rest, ';') {
            Some(semi) => (&rest[..semi], Some(&rest[semi + 1..])),
            None => (rest, None),
        };

        if !current.trim().is_empty() {
            let (name, values) = match current.split_once('=') {
                Some((name, values)) => (name.trim().to_ascii_lowercase(), split_values(values)),
                None => ("type".to_string(), vec![current.trim().to_string()]),
            };
            params.push((name, values));
        }

        match next {
            Some(next) => rest = next,
            None => break,
        }
    }

    params
}

/// Split comma separated parameter values, honoring quotes.
fn split_values(s: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in s.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    values.push(current);

    values
}
