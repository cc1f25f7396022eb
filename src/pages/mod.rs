//! Routed views, one module per page.

pub mod login;
pub mod manager_dashboard;
pub mod unauthorized;
pub mod vendor_dashboard;
