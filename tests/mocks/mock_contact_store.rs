use contact_lookup::domain::ContactId;
use contact_lookup::models::{Contact, ContactRef};
use contact_lookup::store::ContactStore;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Serves a fixed list of contacts and records every query it receives, with
/// the raw argument, so tests can check what the service layer passed down.
#[allow(dead_code)]
pub struct MockContactStore {
    contacts: Vec<ContactRef>,
    initialized: bool,
    calls: Mutex<Vec<(String, String)>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a mock serving the given `(first, last)` names with IDs `1..=n`.
    pub fn with_names(names: &[(&str, &str)]) -> Self {
        let contacts = names
            .iter()
            .enumerate()
            .map(|(i, (first, last))| {
                let id = ContactId::new(i as u32 + 1).unwrap();
                Arc::new(Contact::new(id, first, last))
            })
            .collect();
        Self {
            contacts,
            initialized: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that reports itself as not initialized.
    pub fn uninitialized() -> Self {
        Self {
            contacts: Vec::new(),
            initialized: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every `(method, argument)` pair received, in order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == method)
            .count()
    }

    fn track_call(&self, method: &str, argument: &str) {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), argument.to_string()));
    }

    fn first(&self) -> Option<ContactRef> {
        self.contacts.first().cloned()
    }
}

impl ContactStore for MockContactStore {
    fn set_path(&mut self, path: &Path) -> bool {
        self.track_call("set_path", &path.display().to_string());
        true
    }

    fn initialize(&mut self) -> bool {
        self.track_call("initialize", "");
        self.initialized = true;
        true
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn get_contact(&self, id: i64) -> Option<ContactRef> {
        self.track_call("get_contact", &id.to_string());
        let position = usize::try_from(id).ok()?.checked_sub(1)?;
        self.contacts.get(position).cloned()
    }

    fn get_contacts(&self) -> &[ContactRef] {
        self.track_call("get_contacts", "");
        &self.contacts
    }

    fn get_contacts_by_first_name(&self, first_name: &str) -> &[ContactRef] {
        self.track_call("get_contacts_by_first_name", first_name);
        &self.contacts
    }

    fn get_contact_by_phone_number(&self, phone_number: &str) -> Option<ContactRef> {
        self.track_call("get_contact_by_phone_number", phone_number);
        self.first()
    }

    fn get_contact_by_email(&self, email: &str) -> Option<ContactRef> {
        self.track_call("get_contact_by_email", email);
        None
    }

    fn get_contacts_by_country(&self, country: &str) -> &[ContactRef] {
        self.track_call("get_contacts_by_country", country);
        &self.contacts
    }

    fn get_contacts_by_state(&self, state: &str) -> &[ContactRef] {
        self.track_call("get_contacts_by_state", state);
        &[]
    }

    fn count(&self) -> usize {
        self.contacts.len()
    }
}

