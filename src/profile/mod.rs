//! Persisted player record: lifetime totals plus the most recent
//! session.

pub mod persistence;
pub mod types;

pub use persistence::{load_profile, save_profile};
pub use types::PlayerProfile;
