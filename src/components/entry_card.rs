//! Card component for a single diary entry.

#[cfg(test)]
#[path = "entry_card_test.rs"]
mod entry_card_test;

use leptos::prelude::*;

use crate::state::diary::DiaryEntry;

/// Shorten a server timestamp (`2024-05-01T09:30:12.345`) to a readable
/// `2024-05-01 09:30`. Unrecognized shapes pass through untouched.
fn format_created_at(raw: &str) -> String {
    let Some((date, time)) = raw.split_once('T') else {
        return raw.to_owned();
    };
    let minutes = time.get(..5).unwrap_or(time);
    format!("{date} {minutes}")
}

#[component]
pub fn EntryCard(entry: DiaryEntry) -> impl IntoView {
    let created = format_created_at(&entry.created_at);
    view! {
        <article class="entry-card">
            <header class="entry-card__header">
                <h2 class="entry-card__title">{entry.title}</h2>
                <span class="entry-card__date">{created}</span>
            </header>
            <p class="entry-card__content">{entry.content.unwrap_or_default()}</p>
        </article>
    }
}
