//! Reusable view components.

pub mod header;
pub mod route_guard;
pub mod vendor_table;
