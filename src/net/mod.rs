//! Networking modules for the session and team REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the requests behind the `SessionApi` seam and `types`
//! defines the wire schema.

pub mod api;
pub mod types;
