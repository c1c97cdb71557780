//! Persisted checklist state.
//!
//! This module holds the [`StateStore`], the only entity startcheck
//! persists: the checkbox values and free-text inputs entered by the user.

pub mod store;

pub use store::{StateStore, DEFAULT_DATA_FILE};
