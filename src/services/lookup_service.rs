//! Contact lookup service layer.
//!
//! Turns requests into store queries and wraps the results in the response
//! bodies the boundary hands back to clients.

use crate::models::ContactRef;
use crate::store::ContactStore;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Greeting returned for the root request.
pub const WELCOME_MESSAGE: &str =
    "Welcome to the Contact Lookup App. Use the tools list to see the available lookups.";

/// Error body returned when no store is attached.
pub const STORE_NOT_SET: &str = "Data store service not set";

/// Body of one lookup response.
///
/// Serializes to a single-key object: `{"contacts": [...]}`,
/// `{"contact": {...}}` (or `null`), `{"message": "..."}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LookupResponse {
    Contacts { contacts: Vec<ContactRef> },
    Contact { contact: Option<ContactRef> },
    Message { message: String },
    Error { error: String },
}

impl LookupResponse {
    pub fn contacts(contacts: impl Into<Vec<ContactRef>>) -> Self {
        Self::Contacts {
            contacts: contacts.into(),
        }
    }

    pub fn contact(contact: Option<ContactRef>) -> Self {
        Self::Contact { contact }
    }

    pub fn store_not_set() -> Self {
        Self::Error {
            error: STORE_NOT_SET.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Contacts carried by this response; empty for messages and errors.
    pub fn found(&self) -> &[ContactRef] {
        match self {
            Self::Contacts { contacts } => contacts,
            Self::Contact { contact } => contact.as_slice(),
            Self::Message { .. } | Self::Error { .. } => &[],
        }
    }
}

/// Lookup operations exposed to clients.
#[async_trait]
pub trait ContactLookupService: Send + Sync {
    /// Greeting for the root request.
    async fn welcome(&self) -> LookupResponse;

    /// Every contact in load order.
    async fn list_contacts(&self) -> LookupResponse;

    /// One contact by 1-based ID; `{"contact": null}` when there is none.
    async fn get_contact(&self, contact_id: i64) -> LookupResponse;

    async fn find_by_first_name(&self, first_name: &str) -> LookupResponse;

    async fn find_by_phone_number(&self, phone_number: &str) -> LookupResponse;

    async fn find_by_email(&self, email: &str) -> LookupResponse;

    async fn find_by_country(&self, country: &str) -> LookupResponse;

    async fn find_by_state(&self, state: &str) -> LookupResponse;
}

/// Default implementation of ContactLookupService.
///
/// Answers every lookup with the "not set" error until a store is attached.
#[derive(Clone, Default)]
pub struct ContactLookupServiceImpl {
    store: Option<Arc<dyn ContactStore>>,
}

impl ContactLookupServiceImpl {
    /// Create a service over an initialized store.
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        if !store.is_initialized() {
            warn!("Lookup service created over a store that is not initialized");
        }
        Self { store: Some(store) }
    }

    /// Create a service with no store attached.
    pub fn without_store() -> Self {
        Self::default()
    }

    /// Attach or replace the store.
    pub fn set_store(&mut self, store: Arc<dyn ContactStore>) {
        self.store = Some(store);
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    fn query(
        &self,
        operation: &str,
        lookup: impl FnOnce(&dyn ContactStore) -> LookupResponse,
    ) -> LookupResponse {
        match self.store.as_deref() {
            Some(store) => {
                let response = lookup(store);
                debug!(operation, found = response.found().len(), "Lookup served");
                response
            }
            None => {
                warn!(operation, "{}", STORE_NOT_SET);
                LookupResponse::store_not_set()
            }
        }
    }
}

#[async_trait]
impl ContactLookupService for ContactLookupServiceImpl {
    async fn welcome(&self) -> LookupResponse {
        LookupResponse::Message {
            message: WELCOME_MESSAGE.to_string(),
        }
    }

    async fn list_contacts(&self) -> LookupResponse {
        self.query("list_contacts", |store| {
            LookupResponse::contacts(store.get_contacts())
        })
    }

    async fn get_contact(&self, contact_id: i64) -> LookupResponse {
        self.query("get_contact", |store| {
            LookupResponse::contact(store.get_contact(contact_id))
        })
    }

    async fn find_by_first_name(&self, first_name: &str) -> LookupResponse {
        self.query("find_by_first_name", |store| {
            LookupResponse::contacts(store.get_contacts_by_first_name(first_name))
        })
    }

    async fn find_by_phone_number(&self, phone_number: &str) -> LookupResponse {
        self.query("find_by_phone_number", |store| {
            LookupResponse::contacts(Vec::from_iter(
                store.get_contact_by_phone_number(phone_number),
            ))
        })
    }

    async fn find_by_email(&self, email: &str) -> LookupResponse {
        self.query("find_by_email", |store| {
            LookupResponse::contacts(Vec::from_iter(store.get_contact_by_email(email)))
        })
    }

    async fn find_by_country(&self, country: &str) -> LookupResponse {
        self.query("find_by_country", |store| {
            LookupResponse::contacts(store.get_contacts_by_country(country))
        })
    }

    async fn find_by_state(&self, state: &str) -> LookupResponse {
        self.query("find_by_state", |store| {
            LookupResponse::contacts(store.get_contacts_by_state(state))
        })
    }
}
