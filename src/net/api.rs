//! REST API helpers for the diary service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics; the stores
//! translate failures into fixed user-facing messages.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::diary::DiaryEntry;
#[cfg(feature = "hydrate")]
use serde::Deserialize;

/// Base URL of the diary API service.
pub const API_BASE: &str = "http://localhost:8000";

#[cfg(any(test, feature = "hydrate"))]
fn token_endpoint() -> String {
    format!("{API_BASE}/token")
}

#[cfg(any(test, feature = "hydrate"))]
fn entries_endpoint() -> String {
    format!("{API_BASE}/entries")
}

// The create route carries a trailing slash on the server.
#[cfg(any(test, feature = "hydrate"))]
fn create_entry_endpoint() -> String {
    format!("{API_BASE}/entries/")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn token_request_failed_message(status: u16) -> String {
    format!("token request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn entries_request_failed_message(status: u16) -> String {
    format!("entries request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn create_entry_failed_message(status: u16) -> String {
    format!("create entry failed: {status}")
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange credentials for a bearer token via `POST /token`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn request_token(email: String, password: String) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&token_endpoint())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(token_request_failed_message(resp.status()));
        }
        let body: TokenResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the authenticated user's entries via `GET /entries`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the body does not parse as an entry array.
pub async fn fetch_entries(token: String) -> Result<Vec<DiaryEntry>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&entries_endpoint())
            .header("Authorization", &bearer_header(&token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(entries_request_failed_message(resp.status()));
        }
        resp.json::<Vec<DiaryEntry>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Create an entry via `POST /entries/`. The response body is unused; the
/// caller resynchronizes by re-fetching the collection.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn create_entry(token: String, title: String, content: String) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "title": title, "content": content });
        let resp = gloo_net::http::Request::post(&create_entry_endpoint())
            .header("Authorization", &bearer_header(&token))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(create_entry_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, title, content);
        Err("not available on server".to_owned())
    }
}
