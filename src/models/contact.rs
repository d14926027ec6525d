//! Contact model: one person parsed from a card file.

use super::{Address, AddressParts, Email, PhoneNumber};
use crate::domain::ContactId;
use serde::Serialize;
use std::sync::Arc;

/// Shared reference to a Contact.
///
/// The store's canonical list owns each contact through one of these; every
/// index holds clones of the same `Arc`, so a contact reachable through
/// several indexes is stored once.
pub type ContactRef = Arc<Contact>;

/// A contact with normalized names and its owned child records.
///
/// Names, title, other names and nickname are trimmed and uppercased on the
/// way in; company is trimmed with case preserved; birthday is kept as
/// written. Once a contact is shared as a [`ContactRef`] it is never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    id: ContactId,
    first_name: String,
    last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    other_names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<String>,
    phone_numbers: Vec<PhoneNumber>,
    addresses: Vec<Address>,
    emails: Vec<Email>,
}

fn upper(value: &str) -> String {
    value.trim().to_uppercase()
}

impl Contact {
    /// Create a contact with only its ID and names set.
    pub fn new(id: ContactId, first_name: &str, last_name: &str) -> Self {
        Self {
            id,
            first_name: upper(first_name),
            last_name: upper(last_name),
            other_names: None,
            company: None,
            title: None,
            nickname: None,
            birthday: None,
            phone_numbers: Vec::new(),
            addresses: Vec::new(),
            emails: Vec::new(),
        }
    }

    pub fn with_other_names(mut self, other_names: Option<&str>) -> Self {
        self.other_names = other_names.map(upper);
        self
    }

    pub fn with_company(mut self, company: Option<&str>) -> Self {
        self.company = company.map(|c| c.trim().to_string());
        self
    }

    pub fn with_title(mut self, title: Option<&str>) -> Self {
        self.title = title.map(upper);
        self
    }

    pub fn with_nickname(mut self, nickname: Option<&str>) -> Self {
        self.nickname = nickname.map(upper);
        self
    }

    pub fn with_birthday(mut self, birthday: Option<&str>) -> Self {
        self.birthday = birthday.map(str::to_string);
        self
    }

    /// Attach a phone number owned by this contact.
    pub fn add_phone_number(&mut self, number: &str, kind: Option<&str>) {
        self.phone_numbers
            .push(PhoneNumber::new(number, self.id, kind));
    }

    /// Attach an email owned by this contact.
    pub fn add_email(&mut self, email: &str, kind: Option<&str>) {
        self.emails.push(Email::new(email, self.id, kind));
    }

    /// Attach an address owned by this contact.
    ///
    /// Returns false, and attaches nothing, when the street is missing.
    pub fn add_address(&mut self, parts: AddressParts<'_>) -> bool {
        match Address::new(parts, self.id) {
            Some(address) => {
                self.addresses.push(address);
                true
            }
            None => false,
        }
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn other_names(&self) -> Option<&str> {
        self.other_names.as_deref()
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    pub fn birthday(&self) -> Option<&str> {
        self.birthday.as_deref()
    }

    pub fn phone_numbers(&self) -> &[PhoneNumber] {
        &self.phone_numbers
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    /// Full name for display, e.g. `JANE Q PUBLIC`.
    pub fn display_name(&self) -> String {
        [
            Some(self.first_name.as_str()),
            self.other_names.as_deref(),
            Some(self.last_name.as_str()),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

// Identity is not part of equality: two cards describing the same person
// compare equal even though they were assigned different IDs.
impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.other_names == other.other_names
            && self.company == other.company
            && self.title == other.title
            && self.nickname == other.nickname
            && self.birthday == other.birthday
            && self.phone_numbers == other.phone_numbers
            && self.addresses == other.addresses
            && self.emails == other.emails
    }
}

impl Eq for Contact {}
