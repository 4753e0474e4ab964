//! Networking modules for the diary REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the three endpoints the client uses: token issuance, entry
//! listing, and entry creation.

pub mod api;
