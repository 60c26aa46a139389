//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST endpoints; wire types come from the shared `roster`
//! crate so client and server agree on field names.

pub mod api;
