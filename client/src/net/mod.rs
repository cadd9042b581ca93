//! Networking for the lead-management REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every endpoint the UI calls. Wire types and envelope decoding
//! live in the `schema` crate so the CLI decodes responses identically.

pub mod api;
