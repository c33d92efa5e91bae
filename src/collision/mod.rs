//! Contact classification and routing.

pub mod logic;

pub use logic::{route_contacts, Contact, ContactKind, ContactTarget};
