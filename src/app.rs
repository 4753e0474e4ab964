//! Application shell, store context providers, and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the two shared stores (`AuthState`, `DiaryState`) and exposes
//! them to pages via context so no module reaches for a global singleton.
//! Routes: `/` and `/login` are public; `/diary` requires a credential and
//! bounces to `/login` otherwise (see `util::auth`).

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::diary::DiaryPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::state::auth::AuthState;
use crate::state::diary::DiaryState;

/// HTML document shell used by the `ssr` host.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component: provides store contexts and mounts the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The token is restored from localStorage exactly once, here, so every
    // consumer sees the same post-restart state.
    provide_context(RwSignal::new(AuthState::restore()));
    provide_context(RwSignal::new(DiaryState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/diary-client.css"/>
        <Title text="AI Diary"/>
        <Router>
            <main class="app-main">
                <Routes fallback=|| "Not found.">
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/diary") view=DiaryPage/>
                </Routes>
            </main>
        </Router>
    }
}
