//! Modal dialog for editing an existing post.

#[cfg(test)]
#[path = "modal_edit_post_test.rs"]
mod modal_edit_post_test;

use leptos::prelude::*;

use crate::components::post_form::{PostFormFields, load_categories};
use crate::components::toaster::show_toast;
use crate::forms::{PostErrors, PostForm};
use crate::net::api::ApiClient;
use crate::net::gateway::{ApiError, ApiResponse};
use crate::net::types::{Category, NewPost};
use crate::state::toast::{ToastKind, ToastState};

/// True when the server confirmed the edit (200).
fn updated(result: &Result<ApiResponse, ApiError>) -> bool {
    matches!(result, Ok(response) if response.status == 200)
}

/// Edit-post dialog. Prefills the form from `GET /posts/:id` on mount; on
/// success the dialog closes and the post list is reloaded via `on_saved`.
#[component]
pub fn ModalEditPost(
    post_id: String,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let form = RwSignal::new(PostForm::default());
    let errors = RwSignal::new(PostErrors::default());
    let categories = RwSignal::new(Vec::<Category>::new());

    {
        let api = api.clone();
        Effect::new(move || load_categories(api.clone(), categories, toasts));
    }

    // Prefill from the current post. A failed fetch is surfaced; the dialog
    // stays open with empty fields rather than crashing.
    {
        let api = api.clone();
        let id = post_id.clone();
        Effect::new(move || {
            let api = api.clone();
            let id = id.clone();
            leptos::task::spawn_local(async move {
                match api.post(&id).await {
                    Ok(post) => form.update(|f| {
                        f.title = post.title;
                        f.content = post.content.unwrap_or_default();
                        f.category = post.category_id.unwrap_or_default();
                    }),
                    Err(e) => {
                        leptos::logging::warn!("post fetch failed: {e}");
                        show_toast(toasts, ToastKind::Error, "Could not load the post");
                    }
                }
            });
        });
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
        let id = post_id.clone();
        leptos::task::spawn_local(async move {
            let payload = NewPost {
                title: current.title.trim().to_owned(),
                content: current.content.trim().to_owned(),
                category_id: current.category,
            };
            let result = api.update_post(&id, &payload).await;
            if updated(&result) {
                show_toast(toasts, ToastKind::Success, "Post updated");
                on_close.run(());
                on_saved.run(());
            } else if let Err(e) = result {
                leptos::logging::warn!("update post failed: {e}");
                show_toast(toasts, ToastKind::Error, "Could not update the post");
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit your post"</h2>
                <p class="dialog__description">"Change the fields below and save"</p>

                <PostFormFields form=form errors=errors categories=categories/>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Save changes"
                    </button>
                </div>
            </div>
        </div>
    }
}
