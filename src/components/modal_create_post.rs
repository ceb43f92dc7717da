//! Modal dialog for creating a post.

#[cfg(test)]
#[path = "modal_create_post_test.rs"]
mod modal_create_post_test;

use leptos::prelude::*;

use crate::components::post_form::{PostFormFields, load_categories};
use crate::components::toaster::show_toast;
use crate::forms::{PostErrors, PostForm};
use crate::net::api::ApiClient;
use crate::net::gateway::{ApiError, ApiResponse};
use crate::net::types::{Category, NewPost};
use crate::state::toast::{ToastKind, ToastState};

/// True when the server confirmed creation (201).
fn created(result: &Result<ApiResponse, ApiError>) -> bool {
    matches!(result, Ok(response) if response.status == 201)
}

/// Create-post dialog: validated form plus a category selector fetched from
/// the API on mount. On success the form resets, the dialog closes, and the
/// post list is reloaded through `on_saved`.
#[component]
pub fn ModalCreatePost(on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let form = RwSignal::new(PostForm::default());
    let errors = RwSignal::new(PostErrors::default());
    let categories = RwSignal::new(Vec::<Category>::new());

    {
        let api = api.clone();
        Effect::new(move || load_categories(api.clone(), categories, toasts));
    }

    let submit = Callback::new(move |()| {
        let current = form.get();
        let validation = current.validate();
        if !validation.ok() {
            errors.set(validation);
            return;
        }
        errors.set(PostErrors::default());

        let api = api.clone();
        leptos::task::spawn_local(async move {
            let payload = NewPost {
                title: current.title.trim().to_owned(),
                content: current.content.trim().to_owned(),
                category_id: current.category,
            };
            let result = api.create_post(&payload).await;
            if created(&result) {
                show_toast(toasts, ToastKind::Success, "Post created");
                form.set(PostForm::default());
                on_close.run(());
                on_saved.run(());
            } else if let Err(e) = result {
                leptos::logging::warn!("create post failed: {e}");
                show_toast(toasts, ToastKind::Error, "Could not create the post");
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create your post"</h2>
                <p class="dialog__description">"Fill in the fields below to publish a post"</p>

                <PostFormFields form=form errors=errors categories=categories/>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create post"
                    </button>
                </div>
            </div>
        </div>
    }
}
