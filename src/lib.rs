//! # vendor-compliance-client
//!
//! Leptos + WASM frontend for the vendor compliance workflow: users log
//! in, receive role claims, and land on a role-scoped dashboard. Vendors
//! see their own records read-only; managers filter by status and approve
//! pending vendors. The backend REST API is an external collaborator
//! reached through the `net` layer.
//!
//! The authorization core (session store, auth context, route guard,
//! login redirect) is plain Rust under `state` and `components`, testable
//! without a browser; everything browser-bound is gated by the `csr`
//! feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
