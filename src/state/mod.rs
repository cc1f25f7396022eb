//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `auth`, `login`, `vendors`) so
//! views depend on small focused models, and every model here is a plain
//! struct that tests exercise natively without a browser.

pub mod auth;
pub mod login;
pub mod session;
pub mod vendors;
