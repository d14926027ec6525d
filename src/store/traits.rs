use crate::models::ContactRef;
use std::path::Path;

/// A source of contacts that answers the lookup queries.
///
/// Setup happens through `&mut self` before the store is shared; after a
/// successful [`initialize`](ContactStore::initialize) every query is a plain
/// read and the store can sit behind an `Arc` for concurrent readers.
///
/// No method fails. Setup reports success as a `bool` and logs the reason
/// for a failure; a query on a store that is not initialized returns nothing.
pub trait ContactStore: Send + Sync {
    /// Point the store at a contacts file. Returns whether the path was accepted.
    fn set_path(&mut self, path: &Path) -> bool;

    /// Load and index the contacts file. Returns whether the store is now ready.
    fn initialize(&mut self) -> bool;

    fn is_initialized(&self) -> bool;

    /// Contact by 1-based ID.
    fn get_contact(&self, id: i64) -> Option<ContactRef>;

    /// Every contact, in load order.
    fn get_contacts(&self) -> &[ContactRef];

    /// Contacts with this first name, sorted by last name.
    fn get_contacts_by_first_name(&self, first_name: &str) -> &[ContactRef];

    /// The contact owning this phone number, if any.
    fn get_contact_by_phone_number(&self, phone_number: &str) -> Option<ContactRef>;

    /// The contact owning this email address, if any.
    fn get_contact_by_email(&self, email: &str) -> Option<ContactRef>;

    /// Contacts with an address in this country, once per matching address.
    fn get_contacts_by_country(&self, country: &str) -> &[ContactRef];

    /// Contacts with an address in this state, once per matching address.
    fn get_contacts_by_state(&self, state: &str) -> &[ContactRef];

    /// Number of contacts loaded.
    fn count(&self) -> usize;
}
