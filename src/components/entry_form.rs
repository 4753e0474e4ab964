//! New-entry form: title plus free-form content.

#[cfg(test)]
#[path = "entry_form_test.rs"]
mod entry_form_test;

use leptos::prelude::*;

/// Trim the form fields and require a title; content may be empty.
fn validate_entry_input(title: &str, content: &str) -> Result<(String, String), &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Enter a title first.");
    }
    Ok((title.to_owned(), content.trim().to_owned()))
}

#[component]
pub fn EntryForm(#[prop(into)] on_submit: Callback<(String, String)>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_entry_input(&title.get(), &content.get()) {
            Ok(values) => {
                info.set(String::new());
                title.set(String::new());
                content.set(String::new());
                on_submit.run(values);
            }
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    view! {
        <form class="entry-form" on:submit=on_form_submit>
            <input
                class="entry-form__title"
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <textarea
                class="entry-form__content"
                placeholder="What happened today?"
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            />
            <button class="entry-form__save" type="submit">
                "Save Entry"
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="entry-form__message">{move || info.get()}</p>
            </Show>
        </form>
    }
}
