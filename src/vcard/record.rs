//! Decoded card records.
//!
//! A [`CardRecord`] maps a lowercase property name to every value that
//! property had in the card, in file order. Values are unescaped; structured
//! properties keep their `;`-separated components.

use std::collections::HashMap;

/// The properties the card parser reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardField {
    FullName,
    Organization,
    Title,
    Nickname,
    Birthday,
    Telephone,
    Email,
    Address,
}

impl CardField {
    /// Lowercase vCard property name.
    pub fn property_name(&self) -> &'static str {
        match self {
            Self::FullName => "fn",
            Self::Organization => "org",
            Self::Title => "title",
            Self::Nickname => "nickname",
            Self::Birthday => "bday",
            Self::Telephone => "tel",
            Self::Email => "email",
            Self::Address => "adr",
        }
    }
}

/// Indexes into an `ADR` value (RFC 6350 §6.3.1).
pub mod adr {
    pub const STREET: usize = 2;
    pub const LOCALITY: usize = 3;
    pub const REGION: usize = 4;
    pub const POSTAL_CODE: usize = 5;
    pub const COUNTRY: usize = 6;
}

/// Properties whose values are `;`-separated component lists.
pub(crate) const STRUCTURED_PROPERTIES: [&str; 3] = ["adr", "n", "org"];

/// Payload of one property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Structured(Vec<String>),
}

impl FieldValue {
    /// The text, or the first component of a structured value.
    pub fn primary(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Structured(parts) => parts.first().map(String::as_str),
        }
    }

    /// Components of a structured value; `None` for text.
    pub fn components(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::Structured(parts) => Some(parts),
        }
    }
}

/// One occurrence of a property, with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    pub value: FieldValue,
    params: HashMap<String, String>,
}

impl RawField {
    pub fn new(value: FieldValue) -> Self {
        Self {
            value,
            params: HashMap::new(),
        }
    }

    /// Add a parameter value; repeated values for one name are joined with `,`.
    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.push_param(name, value);
        self
    }

    pub(crate) fn push_param(&mut self, name: &str, value: &str) {
        self.params
            .entry(name.to_ascii_lowercase())
            .and_modify(|existing| {
                existing.push(',');
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    /// Parameter value by case-insensitive name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// The `TYPE` parameter, if present.
    pub fn kind(&self) -> Option<&str> {
        self.param("type")
    }
}

/// One decoded `BEGIN:VCARD` ... `END:VCARD` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardRecord {
    /// Line of the `BEGIN:VCARD` that opened this record.
    pub line: usize,
    fields: HashMap<String, Vec<RawField>>,
}

impl CardRecord {
    pub fn new(line: usize) -> Self {
        Self {
            line,
            fields: HashMap::new(),
        }
    }

    /// Append a value for a property.
    pub fn push(&mut self, name: &str, field: RawField) {
        self.fields
            .entry(name.to_ascii_lowercase())
            .or_default()
            .push(field);
    }

    /// Builder form of [`CardRecord::push`], handy for constructing records by hand.
    pub fn with(mut self, field: CardField, value: RawField) -> Self {
        self.push(field.property_name(), value);
        self
    }

    /// All values of a field, or `None` if the card does not have it.
    pub fn get(&self, field: CardField) -> Option<&[RawField]> {
        self.get_property(field.property_name())
    }

    /// All values of any property by name.
    pub fn get_property(&self, name: &str) -> Option<&[RawField]> {
        self.fields
            .get(&name.to_ascii_lowercase())
            .map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
