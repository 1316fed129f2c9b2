//! Networking modules for the chat backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON response schema and the request error, `api`
//! performs the HTTP calls (browser only) behind the `ChatTransport` seam.

pub mod api;
pub mod types;
