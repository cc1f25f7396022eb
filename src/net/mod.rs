//! Network layer: HTTP adapter, typed endpoint wrappers, and wire types.

pub mod api;
pub mod http;
pub mod types;
