//! Form session: the command handlers a form host calls.
//!
//! A [`FormSession`] owns one [`StateStore`](crate::state::StateStore) for
//! the lifetime of a session. The host reads values through the session,
//! pushes edits through the `on_*` handlers, and triggers save and export
//! explicitly.

pub mod session;

pub use session::{parse_checkbox, Completion, FieldValue, FormSession};
