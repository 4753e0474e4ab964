//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render diary chrome while reading/writing shared state from
//! Leptos context providers or props.

pub mod entry_card;
pub mod entry_form;
