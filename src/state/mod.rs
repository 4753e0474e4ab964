//! Shared application state provided to pages via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` owns the bearer credential and its persistence, `diary` owns the
//! entry list. Both expose async actions that pages drive with
//! `spawn_local`; the actions talk to `net::api` through injected futures
//! so the state machines stay natively testable.

pub mod auth;
pub mod diary;
