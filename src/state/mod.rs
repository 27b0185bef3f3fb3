//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `store`, `login`, `remote`) so
//! components depend on small focused models. Only `session` may change who
//! is signed in.

pub mod login;
pub mod remote;
pub mod session;
pub mod store;
