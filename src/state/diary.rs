//! Diary store: the entry list and fetch/create actions.
//!
//! DESIGN
//! ======
//! Both actions refuse to touch the network without a credential and record
//! a fixed message instead. Creation never updates the list locally; it
//! re-fetches the whole collection, sequenced strictly after the create
//! response, so the server stays the single source of truth. The
//! orchestration is generic over injected transport futures; the public
//! wrappers plug in `net::api`.

#[cfg(test)]
#[path = "diary_test.rs"]
mod diary_test;

use std::future::Future;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::api;
use crate::state::auth::AuthState;

/// Surfaced when an entry action runs without a credential.
pub const UNAUTHENTICATED_MESSAGE: &str = "User not authenticated.";
/// Surfaced when fetching the entry collection fails.
pub const LOAD_FAILED_MESSAGE: &str = "Could not load entries.";
/// Surfaced when creating an entry fails.
pub const SAVE_FAILED_MESSAGE: &str = "Could not save the new entry.";

/// A diary entry as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Server-assigned identifier.
    pub id: i64,
    pub title: String,
    /// Body text; the API allows entries with no content.
    #[serde(default)]
    pub content: Option<String>,
    /// Server-assigned creation timestamp (ISO-8601, kept opaque).
    pub created_at: String,
    /// Owning user's identifier.
    pub owner_id: i64,
}

/// Diary state: the current user's entries and the last action error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiaryState {
    pub entries: Vec<DiaryEntry>,
    pub error: Option<String>,
}

/// A present, non-empty token, or `None`.
fn usable_token(auth: &AuthState) -> Option<String> {
    auth.token.clone().filter(|t| !t.is_empty())
}

/// Fetch the full entry collection with `fetch` and replace `entries`
/// wholesale on success. Without a credential this is a no-op that records
/// [`UNAUTHENTICATED_MESSAGE`]; on transport failure the prior list is left
/// untouched and [`LOAD_FAILED_MESSAGE`] is recorded.
pub async fn fetch_entries_with<F, Fut>(diary: RwSignal<DiaryState>, token: Option<String>, fetch: F)
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<Vec<DiaryEntry>, String>>,
{
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        diary.update(|state| state.error = Some(UNAUTHENTICATED_MESSAGE.to_owned()));
        return;
    };

    diary.update(|state| state.error = None);
    match fetch(token).await {
        Ok(entries) => diary.update(|state| state.entries = entries),
        Err(err) => {
            log::error!("failed to fetch entries: {err}");
            diary.update(|state| state.error = Some(LOAD_FAILED_MESSAGE.to_owned()));
        }
    }
}

/// Create an entry with `create`, then re-fetch the collection with `fetch`.
///
/// The fetch runs exactly once and only after the create succeeds; a failed
/// create records [`SAVE_FAILED_MESSAGE`] and leaves the list alone. The
/// credential policy matches [`fetch_entries_with`].
pub async fn create_entry_with<C, CFut, F, FFut>(
    diary: RwSignal<DiaryState>,
    token: Option<String>,
    create: C,
    fetch: F,
    title: String,
    content: String,
) where
    C: FnOnce(String, String, String) -> CFut,
    CFut: Future<Output = Result<(), String>>,
    F: FnOnce(String) -> FFut,
    FFut: Future<Output = Result<Vec<DiaryEntry>, String>>,
{
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        diary.update(|state| state.error = Some(UNAUTHENTICATED_MESSAGE.to_owned()));
        return;
    };

    diary.update(|state| state.error = None);
    match create(token.clone(), title, content).await {
        Ok(()) => fetch_entries_with(diary, Some(token), fetch).await,
        Err(err) => {
            log::error!("failed to create entry: {err}");
            diary.update(|state| state.error = Some(SAVE_FAILED_MESSAGE.to_owned()));
        }
    }
}

/// Fetch the authenticated user's entries from the diary API.
pub async fn fetch_entries(diary: RwSignal<DiaryState>, auth: RwSignal<AuthState>) {
    let token = usable_token(&auth.get_untracked());
    fetch_entries_with(diary, token, api::fetch_entries).await;
}

/// Create an entry via the diary API, then resynchronize the list.
pub async fn create_entry(
    diary: RwSignal<DiaryState>,
    auth: RwSignal<AuthState>,
    title: String,
    content: String,
) {
    let token = usable_token(&auth.get_untracked());
    create_entry_with(diary, token, api::create_entry, api::fetch_entries, title, content).await;
}
