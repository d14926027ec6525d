//! In-memory indexes over one load of contacts.

use super::name_tree::ContactTree;
use crate::domain::{EmailKey, PhoneKey, RegionKey};
use crate::models::{Contact, ContactRef};
use std::collections::HashMap;
use std::sync::Arc;

/// Every lookup structure for one set of contacts.
///
/// Built once from parsed contacts and read-only afterwards. Each contact is
/// allocated once; the list, the tree and the maps share it through
/// [`ContactRef`] clones.
#[derive(Debug, Default)]
pub struct ContactIndex {
    all: Vec<ContactRef>,
    by_name: ContactTree,
    by_phone: HashMap<PhoneKey, ContactRef>,
    by_email: HashMap<EmailKey, ContactRef>,
    by_state: HashMap<RegionKey, Vec<ContactRef>>,
    by_country: HashMap<RegionKey, Vec<ContactRef>>,
}

impl ContactIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index contacts in the order given.
    ///
    /// The contacts' IDs are expected to be `1..=n` in that order, which is
    /// what [`CardParser`](crate::parser::CardParser) produces.
    pub fn build(contacts: impl IntoIterator<Item = Contact>) -> Self {
        let mut index = Self::new();
        for contact in contacts {
            index.insert(contact);
        }
        index
    }

    /// Add one contact to every index.
    ///
    /// Phone and email keys are last-writer-wins. A contact lands in a state
    /// or country bucket once per address in that region.
    pub fn insert(&mut self, contact: Contact) {
        let contact: ContactRef = Arc::new(contact);

        self.all.push(Arc::clone(&contact));
        self.by_name.insert(Arc::clone(&contact));

        for phone in contact.phone_numbers() {
            if !phone.number().is_empty() {
                self.by_phone
                    .insert(phone.number().clone(), Arc::clone(&contact));
            }
        }

        for email in contact.emails() {
            let key = email.key();
            if !key.is_empty() {
                self.by_email.insert(key, Arc::clone(&contact));
            }
        }

        for address in contact.addresses() {
            if let Some(state) = address.state_key().filter(|k| !k.is_empty()) {
                self.by_state
                    .entry(state)
                    .or_default()
                    .push(Arc::clone(&contact));
            }
            if let Some(country) = address.country_key().filter(|k| !k.is_empty()) {
                self.by_country
                    .entry(country)
                    .or_default()
                    .push(Arc::clone(&contact));
            }
        }
    }

    /// Contact with a 1-based ID; `None` for zero, negative or past the end.
    pub fn get(&self, id: i64) -> Option<&ContactRef> {
        let position = usize::try_from(id).ok()?.checked_sub(1)?;
        self.all.get(position)
    }

    pub fn all(&self) -> &[ContactRef] {
        &self.all
    }

    pub fn by_first_name(&self, first_name: &str) -> &[ContactRef] {
        self.by_name.get(first_name)
    }

    pub fn by_phone_number(&self, phone_number: &str) -> Option<&ContactRef> {
        let key = PhoneKey::new(phone_number);
        if key.is_empty() {
            return None;
        }
        self.by_phone.get(&key)
    }

    pub fn by_email(&self, email: &str) -> Option<&ContactRef> {
        self.by_email.get(&EmailKey::new(email))
    }

    pub fn by_state(&self, state: &str) -> &[ContactRef] {
        self.by_state
            .get(&RegionKey::new(state))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn by_country(&self, country: &str) -> &[ContactRef] {
        self.by_country
            .get(&RegionKey::new(country))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn name_tree(&self) -> &ContactTree {
        &self.by_name
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactId;
    use crate::models::AddressParts;

    fn person(id: u32, name: &str, phone: &str, email: &str, state: &str) -> Contact {
        let (first, last) = name.split_once(' ').unwrap_or((name, ""));
        let mut contact = Contact::new(ContactId::new(id).unwrap(), first, last);
        contact.add_phone_number(phone, Some("cell"));
        contact.add_email(email, None);
        contact.add_address(AddressParts {
            street: "1 Main St",
            state: Some(state),
            country: Some("USA"),
            ..Default::default()
        });
        contact
    }

    fn sample() -> ContactIndex {
        ContactIndex::build(vec![
            person(1, "Jeff Smith", "+1 (555) 555-0001", "jeff@example.com", "CA"),
            person(2, "Karla Jones", "555-0002", "Karla@Example.com", "ny"),
            person(3, "Jeff Adams", "555.0003", "adams@example.com", "ca"),
        ])
    }

    #[test]
    fn test_get_by_position() {
        let index = sample();
        assert_eq!(index.len(), 3);
        assert_eq!(index.get(1).map(|c| c.first_name()), Some("JEFF"));
        assert_eq!(index.get(3).map(|c| c.last_name()), Some("ADAMS"));
        assert!(index.get(0).is_none());
        assert!(index.get(-1).is_none());
        assert!(index.get(4).is_none());
    }

    #[test]
    fn test_lookups_normalize_keys() {
        let index = sample();
        assert_eq!(index.by_first_name("jeff").len(), 2);
        assert!(index.by_phone_number("15555550001").is_some());
        assert!(index.by_phone_number("+1-555-555-0001").is_some());
        assert!(index.by_email(" KARLA@example.COM ").is_some());
        assert_eq!(index.by_state("CA").len(), 2);
        assert_eq!(index.by_state(" Ny").len(), 1);
        assert_eq!(index.by_country("usa").len(), 3);
    }

    #[test]
    fn test_missing_keys_are_empty() {
        let index = sample();
        assert!(index.by_first_name("Kristen").is_empty());
        assert!(index.by_phone_number("555-555-5555").is_none());
        assert!(index.by_phone_number("no digits").is_none());
        assert!(index.by_email("nobody@example.com").is_none());
        assert!(index.by_state("TX").is_empty());
        assert!(index.by_country("").is_empty());
    }

    #[test]
    fn test_indexes_share_one_allocation() {
        let index = sample();
        let by_id = index.get(2).unwrap();
        let by_email = index.by_email("karla@example.com").unwrap();
        assert!(Arc::ptr_eq(by_id, by_email));
    }

    #[test]
    fn test_phone_collision_last_writer_wins() {
        let index = ContactIndex::build(vec![
            person(1, "Jeff Smith", "555-0001", "a@example.com", "CA"),
            person(2, "Karla Jones", "(555) 0001", "b@example.com", "CA"),
        ]);
        let found = index.by_phone_number("5550001").unwrap();
        assert_eq!(found.id().get(), 2);
    }

    #[test]
    fn test_region_bucket_repeats_per_address() {
        let mut contact = person(1, "Jeff Smith", "1", "a@example.com", "CA");
        contact.add_address(AddressParts {
            street: "2 Second St",
            state: Some("ca"),
            ..Default::default()
        });
        let index = ContactIndex::build(vec![contact]);
        assert_eq!(index.by_state("CA").len(), 2);
        assert_eq!(index.by_country("USA").len(), 1);
    }

    #[test]
    fn test_empty_index() {
        let index = ContactIndex::new();
        assert!(index.is_empty());
        assert!(index.all().is_empty());
        assert!(index.get(1).is_none());
        assert!(index.name_tree().is_empty());
    }
}
