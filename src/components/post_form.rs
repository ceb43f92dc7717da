//! Shared form fields for the create/edit post dialogs.

use leptos::prelude::*;

use crate::components::toaster::show_toast;
use crate::forms::{PostErrors, PostForm};
use crate::net::api::ApiClient;
use crate::net::types::Category;
use crate::state::toast::{ToastKind, ToastState};

/// Fetch the category list for the selector.
///
/// A failed fetch is surfaced as an error toast instead of silently leaving
/// the selector empty.
pub fn load_categories(
    api: ApiClient,
    categories: RwSignal<Vec<Category>>,
    toasts: RwSignal<ToastState>,
) {
    leptos::task::spawn_local(async move {
        match api.categories().await {
            Ok(list) => categories.set(list),
            Err(e) => {
                leptos::logging::warn!("category fetch failed: {e}");
                show_toast(toasts, ToastKind::Error, "Could not load categories");
            }
        }
    });
}

/// Title, content, and category inputs with their validation messages.
#[component]
pub fn PostFormFields(
    form: RwSignal<PostForm>,
    errors: RwSignal<PostErrors>,
    categories: RwSignal<Vec<Category>>,
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            "Title"
            <input
                class="dialog__input"
                type="text"
                placeholder="Post title"
                prop:value=move || form.get().title
                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
            />
        </label>
        {move || errors.get().title.map(|msg| view! { <p class="dialog__error">{msg}</p> })}

        <label class="dialog__label">
            "Content"
            <textarea
                class="dialog__input dialog__textarea"
                placeholder="Write your post"
                prop:value=move || form.get().content
                on:input=move |ev| form.update(|f| f.content = event_target_value(&ev))
            ></textarea>
        </label>
        {move || errors.get().content.map(|msg| view! { <p class="dialog__error">{msg}</p> })}

        <label class="dialog__label">
            "Category"
            <select
                class="dialog__input"
                prop:value=move || form.get().category
                on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
            >
                <option value="">"Pick a category"</option>
                {move || {
                    categories
                        .get()
                        .into_iter()
                        .map(|category| {
                            view! { <option value=category.id>{category.name}</option> }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
        {move || errors.get().category.map(|msg| view! { <p class="dialog__error">{msg}</p> })}
    }
}
