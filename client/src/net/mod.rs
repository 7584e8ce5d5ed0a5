//! Networking modules for the contact endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single REST call the page makes, and `types` defines the
//! wire schema shared with the server crate.

pub mod api;
pub mod types;
