//! Card record to contact conversion.

use crate::domain::{ContactId, IdSequence};
use crate::error::{CardError, CardResult};
use crate::models::{present, AddressParts, Contact};
use crate::vcard::{adr, CardField, CardRecord, RawField};
use tracing::{debug, error};

/// Turns card records into contacts, numbering them as it goes.
///
/// Every call to [`CardParser::parse`] reserves the next ID before looking
/// at the record. A record that cannot be used gives its ID back, so the
/// contacts produced by one parser are numbered `1..=n` with no gaps.
#[derive(Debug, Default)]
pub struct CardParser {
    ids: IdSequence,
}

impl CardParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one record.
    ///
    /// Returns `None` when the record is unusable. The failure is logged and
    /// the caller should move on to the next record.
    pub fn parse(&mut self, record: &CardRecord) -> Option<Contact> {
        let id = self.ids.advance();
        match build_contact(id, record) {
            Ok(contact) => {
                debug!(id = %id, name = %contact.display_name(), "Parsed contact");
                Some(contact)
            }
            Err(e) => {
                error!(
                    operation = "parse_card",
                    line = record.line,
                    error = %e,
                    "Skipping unusable card record"
                );
                self.ids.rewind();
                None
            }
        }
    }

    /// ID of the most recent successfully parsed contact.
    pub fn last_id(&self) -> Option<ContactId> {
        self.ids.current()
    }
}

/// Build a contact with the given ID from one record.
///
/// Fields absent from the record leave the contact's field empty. An address
/// without a street is skipped.
///
/// # Errors
///
/// Returns a [`CardError`] when a present field does not have the shape the
/// contact needs: no values, a blank full name, or an address that is not a
/// structured value.
pub fn build_contact(id: ContactId, record: &CardRecord) -> CardResult<Contact> {
    let (first, last, others) = match record.get(CardField::FullName) {
        Some(values) => split_full_name(first_text(CardField::FullName, values)?)?,
        None => ("", "", None),
    };

    let mut contact = Contact::new(id, first, last)
        .with_other_names(others.as_deref())
        .with_company(single(record, CardField::Organization)?)
        .with_title(single(record, CardField::Title)?)
        .with_nickname(single(record, CardField::Nickname)?)
        .with_birthday(single(record, CardField::Birthday)?);

    for phone in record.get(CardField::Telephone).unwrap_or_default() {
        let number = text_of(CardField::Telephone, phone)?;
        contact.add_phone_number(number, phone.kind());
    }

    for email in record.get(CardField::Email).unwrap_or_default() {
        let address = text_of(CardField::Email, email)?;
        contact.add_email(address, email.kind());
    }

    for address in record.get(CardField::Address).unwrap_or_default() {
        let parts = address_parts(address)?;
        if !contact.add_address(parts) {
            debug!(id = %id, line = record.line, "Dropping address without street");
        }
    }

    Ok(contact)
}

/// Split `"Jane Q Public"` into first, last and joined middle names.
fn split_full_name(full_name: &str) -> CardResult<(&str, &str, Option<String>)> {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    let (first, rest) = parts.split_first().ok_or(CardError::BlankName)?;

    let last = rest.last().copied().unwrap_or("");
    let others = (parts.len() > 2).then(|| parts[1..parts.len() - 1].join(" "));

    Ok((*first, last, others))
}

fn first_text<'a>(field: CardField, values: &'a [RawField]) -> CardResult<&'a str> {
    let value = values
        .first()
        .ok_or_else(|| CardError::EmptyField(field.property_name().to_string()))?;
    text_of(field, value)
}

fn text_of(field: CardField, value: &RawField) -> CardResult<&str> {
    value.value.primary().ok_or_else(|| CardError::MissingComponent {
        field: field.property_name().to_string(),
        index: 0,
    })
}

/// First value of a single-valued field, trimmed, with `"None"` read as absent.
fn single(record: &CardRecord, field: CardField) -> CardResult<Option<&str>> {
    match record.get(field) {
        Some(values) => Ok(present(first_text(field, values)?)),
        None => Ok(None),
    }
}

fn address_parts(value: &RawField) -> CardResult<AddressParts<'_>> {
    let components = value
        .value
        .components()
        .ok_or_else(|| CardError::NotStructured(CardField::Address.property_name().to_string()))?;
    let component = |index: usize| components.get(index).map(String::as_str);

    Ok(AddressParts {
        street: component(adr::STREET).unwrap_or(""),
        city: component(adr::LOCALITY),
        state: component(adr::REGION),
        postal_code: component(adr::POSTAL_CODE),
        country: component(adr::COUNTRY),
        kind: value.kind(),
    })
}
