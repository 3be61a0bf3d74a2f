//! Network layer: API record types and the REST client.

pub mod api;
pub mod types;
