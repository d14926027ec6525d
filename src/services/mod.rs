//! Application service layer.
//!
//! Services sit between the MCP handlers and the contact store. They hold no
//! state of their own beyond the store they query.

mod lookup_service;

pub use lookup_service::{
    ContactLookupService, ContactLookupServiceImpl, LookupResponse, STORE_NOT_SET,
    WELCOME_MESSAGE,
};
