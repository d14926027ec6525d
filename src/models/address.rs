//! Postal address belonging to a contact.

use super::present;
use crate::domain::{ContactId, RegionKey};
use serde::Serialize;

/// Raw address components as they come out of a card, before cleaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts<'a> {
    pub street: &'a str,
    pub city: Option<&'a str>,
    pub state: Option<&'a str>,
    pub postal_code: Option<&'a str>,
    pub country: Option<&'a str>,
    pub kind: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Address {
    street: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    contact_id: ContactId,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
}

impl Address {
    /// Clean the parts into an address.
    ///
    /// Returns `None` when the street is blank or the `"None"` sentinel;
    /// an address without a street is not kept.
    pub(crate) fn new(parts: AddressParts<'_>, contact_id: ContactId) -> Option<Self> {
        let street = present(parts.street)?;
        let clean = |part: Option<&str>| part.and_then(present).map(str::to_string);

        Some(Self {
            street: street.to_string(),
            city: clean(parts.city),
            state: clean(parts.state),
            postal_code: clean(parts.postal_code),
            country: clean(parts.country),
            contact_id,
            kind: parts
                .kind
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn contact_id(&self) -> ContactId {
        self.contact_id
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// State as an index key, if the address has one.
    pub fn state_key(&self) -> Option<RegionKey> {
        self.state.as_deref().map(RegionKey::new)
    }

    /// Country as an index key, if the address has one.
    pub fn country_key(&self) -> Option<RegionKey> {
        self.country.as_deref().map(RegionKey::new)
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.street == other.street
            && self.city == other.city
            && self.state == other.state
            && self.postal_code == other.postal_code
            && self.country == other.country
            && self.kind == other.kind
    }
}

impl Eq for Address {}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> ContactId {
        ContactId::new(1).unwrap()
    }

    #[test]
    fn test_address_trims_all_fields() {
        let address = Address::new(
            AddressParts {
                street: " 123 Main St ",
                city: Some(" Anytown"),
                state: Some("ca "),
                postal_code: Some(" 12345 "),
                country: Some(" USA "),
                kind: Some(" home "),
            },
            id(),
        )
        .unwrap();

        assert_eq!(address.street(), "123 Main St");
        assert_eq!(address.city(), Some("Anytown"));
        assert_eq!(address.state(), Some("ca"));
        assert_eq!(address.postal_code(), Some("12345"));
        assert_eq!(address.country(), Some("USA"));
        assert_eq!(address.kind(), Some("home"));
        assert_eq!(address.state_key().unwrap().as_str(), "CA");
    }

    #[test]
    fn test_address_requires_street() {
        let blank = AddressParts {
            street: "  ",
            city: Some("Anytown"),
            ..Default::default()
        };
        assert!(Address::new(blank, id()).is_none());

        let sentinel = AddressParts {
            street: "None",
            ..Default::default()
        };
        assert!(Address::new(sentinel, id()).is_none());
    }

    #[test]
    fn test_address_none_sentinel_collapses() {
        let address = Address::new(
            AddressParts {
                street: "1 Road",
                city: Some("None"),
                state: Some(""),
                postal_code: None,
                country: Some(" None "),
                kind: None,
            },
            id(),
        )
        .unwrap();

        assert_eq!(address.city(), None);
        assert_eq!(address.state(), None);
        assert_eq!(address.country(), None);
        assert!(address.country_key().is_none());
    }
}
