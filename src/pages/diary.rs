//! Diary page: the protected entry list plus the new-entry form.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It installs the login redirect
//! guard, fetches the entry collection once on mount, and drives entry
//! creation through the diary store (which re-fetches after a save).

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::entry_card::EntryCard;
use crate::components::entry_form::EntryForm;
use crate::state::auth::AuthState;
use crate::state::diary::DiaryState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DiaryPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let diary = expect_context::<RwSignal<DiaryState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate);

    // Initial load, once per mount.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || !auth.get().is_authenticated() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::state::diary::fetch_entries(diary, auth).await;
        });
    });

    let on_create = Callback::new(move |(title, content): (String, String)| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::state::diary::create_entry(diary, auth, title, content).await;
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (title, content);
        }
    });

    let on_logout = move |_| {
        // The guard effect sees the cleared token and bounces to /login.
        crate::state::auth::logout(auth);
    };

    view! {
        <div class="diary-page">
            <header class="diary-header">
                <h1>"My Diary"</h1>
                <button class="diary-header__logout" on:click=on_logout>
                    "Sign out"
                </button>
            </header>
            <EntryForm on_submit=on_create/>
            <Show when=move || diary.get().error.is_some()>
                <p class="diary-error">{move || diary.get().error.unwrap_or_default()}</p>
            </Show>
            <section class="diary-entries">
                <Show
                    when=move || !diary.get().entries.is_empty()
                    fallback=|| view! { <p class="diary-entries__empty">"No entries yet."</p> }
                >
                    <For
                        each=move || diary.get().entries
                        key=|entry| entry.id
                        let:entry
                    >
                        <EntryCard entry=entry/>
                    </For>
                </Show>
            </section>
        </div>
    }
}
