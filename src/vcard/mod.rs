//! vCard decoding (RFC 6350, lenient).
//!
//! Turns the text of a `.vcf` file into [`CardRecord`]s. Only the record
//! structure is validated here; whether a record holds a usable contact is
//! the card parser's call.
//!
//! ```
//! use contact_lookup::vcard::{decode, CardField};
//!
//! let input = "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Jane Q Public\r\nEND:VCARD\r\n";
//! let records = decode(input).unwrap();
//! let name = &records[0].get(CardField::FullName).unwrap()[0];
//! assert_eq!(name.value.primary(), Some("Jane Q Public"));
//! ```

mod lexer;
mod record;

pub use lexer::{parse_content_line, unfold, ContentLine, LogicalLine};
pub use record::{adr, CardField, CardRecord, FieldValue, RawField};

use crate::error::{CardError, CardResult};
use record::STRUCTURED_PROPERTIES;

/// Written at the start of the file by some Windows exporters.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Decode every card in `input`.
///
/// Content outside `BEGIN:VCARD`/`END:VCARD` blocks is ignored, as is a
/// leading byte order mark.
///
/// # Errors
///
/// Any structural problem fails the whole input: a record that is never
/// closed, a nested `BEGIN:VCARD`, a stray `END:VCARD`, or a malformed
/// content line inside a record.
pub fn decode(input: &str) -> CardResult<Vec<CardRecord>> {
    let mut records = Vec::new();
    let mut open: Option<CardRecord> = None;

    let input = input.strip_prefix(BYTE_ORDER_MARK).unwrap_or(input);

    for line in unfold(input) {
        let marker = line.text.trim();

        if marker.eq_ignore_ascii_case("BEGIN:VCARD") {
            if open.is_some() {
                return Err(CardError::NestedRecord { line: line.line });
            }
            open = Some(CardRecord::new(line.line));
            continue;
        }

        if marker.eq_ignore_ascii_case("END:VCARD") {
            let record = open
                .take()
                .ok_or(CardError::UnmatchedEnd { line: line.line })?;
            records.push(record);
            continue;
        }

        let Some(record) = open.as_mut() else {
            continue;
        };

        let content = parse_content_line(&line)?;
        if content.name == "version" {
            continue;
        }
        let name = content.name.clone();
        record.push(&name, to_raw_field(content));
    }

    if let Some(record) = open {
        return Err(CardError::UnterminatedRecord { line: record.line });
    }

    tracing::debug!(count = records.len(), "Decoded card records");
    Ok(records)
}

fn to_raw_field(content: ContentLine) -> RawField {
    let value = if STRUCTURED_PROPERTIES.contains(&content.name.as_str()) {
        FieldValue::Structured(
            split_structured(&content.value)
                .into_iter()
                .map(unescape_text)
                .collect(),
        )
    } else {
        FieldValue::Text(unescape_text(&content.value))
    };

    let mut field = RawField::new(value);
    for (name, values) in &content.params {
        for value in values {
            field.push_param(name, value);
        }
    }
    field
}

/// Unescape a vCard text value: `\n`, `\N`, `\,`, `\;`, `\\`.
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.peek() {
            Some('n' | 'N') => {
                chars.next();
                result.push('\n');
            }
            Some(&escaped) if matches!(escaped, ',' | ';' | '\\') => {
                chars.next();
                result.push(escaped);
            }
            _ => result.push(c),
        }
    }

    result
}

/// Split a structured value on unescaped semicolons.
pub fn split_structured(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        match c {
            '\\' if !escaped => {
                escaped = true;
                continue;
            }
            ';' if !escaped => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        escaped = false;
    }

    parts.push(&s[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CARDS: &str = "BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Jane Q Public\r\n\
ORG:ACME;Sales\r\n\
TEL;TYPE=work:+1 (555) 555-5555\r\n\
TEL;TYPE=cell:555-0100\r\n\
ADR;TYPE=home:;;123 Main St;Anytown;CA;12345;USA\r\n\
NOTE:Line one\\nline two\\, continued\r\n\
END:VCARD\r\n\
BEGIN:VCARD\r\n\
FN:John\r\n\
END:VCARD\r\n";

    #[test]
    fn test_decode_two_cards() {
        let records = decode(TWO_CARDS).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 1);
        assert_eq!(records[1].line, 10);
        assert!(records[0].get_property("version").is_none());
    }

    #[test]
    fn test_decode_field_shapes() {
        let records = decode(TWO_CARDS).unwrap();
        let card = &records[0];

        let org = &card.get(CardField::Organization).unwrap()[0];
        assert_eq!(
            org.value.components(),
            Some(&["ACME".to_string(), "Sales".to_string()][..])
        );

        let phones = card.get(CardField::Telephone).unwrap();
        assert_eq!(phones.len(), 2);
        assert_eq!(phones[1].kind(), Some("cell"));

        let address = &card.get(CardField::Address).unwrap()[0];
        let parts = address.value.components().unwrap();
        assert_eq!(parts[adr::STREET], "123 Main St");
        assert_eq!(parts[adr::REGION], "CA");
        assert_eq!(parts[adr::COUNTRY], "USA");

        let note = &card.get_property("note").unwrap()[0];
        assert_eq!(note.value.primary(), Some("Line one\nline two, continued"));
    }

    #[test]
    fn test_decode_ignores_content_outside_records() {
        let input = "garbage line without colon\nBEGIN:VCARD\nFN:A B\nEND:VCARD\ntrailer";
        assert_eq!(decode(input).unwrap().len(), 1);
    }

    #[test]
    fn test_decode_skips_byte_order_mark() {
        let input = "\u{feff}BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Jeff Brown\r\nEND:VCARD\r\n";
        let records = decode(input).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].line, 1);

        let name = &records[0].get(CardField::FullName).unwrap()[0];
        assert_eq!(name.value.primary(), Some("Jeff Brown"));
    }

    #[test]
    fn test_decode_empty_input() {
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_unterminated_record() {
        let input = "BEGIN:VCARD\nFN:A\n";
        assert_eq!(
            decode(input),
            Err(CardError::UnterminatedRecord { line: 1 })
        );
    }

    #[test]
    fn test_decode_nested_record() {
        let input = "BEGIN:VCARD\nBEGIN:VCARD\nEND:VCARD\n";
        assert_eq!(decode(input), Err(CardError::NestedRecord { line: 2 }));
    }

    #[test]
    fn test_decode_stray_end() {
        assert_eq!(
            decode("END:VCARD\n"),
            Err(CardError::UnmatchedEnd { line: 1 })
        );
    }

    #[test]
    fn test_decode_malformed_line_inside_record() {
        let input = "BEGIN:VCARD\nFN Jane\nEND:VCARD\n";
        assert_eq!(
            decode(input),
            Err(CardError::MissingSeparator { line: 2 })
        );
    }

    #[test]
    fn test_unescape_text() {
        assert_eq!(unescape_text(r"a\,b\;c\\d\Ne"), "a,b;c\\d\ne");
        assert_eq!(unescape_text(r"trailing\"), "trailing\\");
    }

    #[test]
    fn test_split_structured_escaped() {
        assert_eq!(split_structured(r"a\;b;c"), vec![r"a\;b", "c"]);
        assert_eq!(split_structured(";;x"), vec!["", "", "x"]);
        assert_eq!(split_structured(r"a\\;b"), vec![r"a\\", "b"]);
    }
}
