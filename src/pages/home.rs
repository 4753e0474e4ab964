//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"AI Diary"</h1>
            <p class="home-page__tagline">"A personal diary, one entry at a time."</p>
            <nav class="home-page__links">
                <A href="/login">"Sign in"</A>
                <A href="/diary">"My diary"</A>
            </nav>
        </div>
    }
}
