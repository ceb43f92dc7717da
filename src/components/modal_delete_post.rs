//! Confirmation dialog for deleting a post.

#[cfg(test)]
#[path = "modal_delete_post_test.rs"]
mod modal_delete_post_test;

use leptos::prelude::*;

use crate::components::toaster::show_toast;
use crate::net::api::ApiClient;
use crate::net::gateway::{ApiError, ApiResponse};
use crate::state::toast::{ToastKind, ToastState};
use crate::state::ui::UiState;

/// True when the server confirmed the deletion (200).
fn deleted(result: &Result<ApiResponse, ApiError>) -> bool {
    matches!(result, Ok(response) if response.status == 200)
}

/// Delete confirmation dialog. The target id comes from the shared modal
/// state; confirming with no target issues no request at all.
#[component]
pub fn ModalDeletePost(on_close: Callback<()>, on_deleted: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let confirm = Callback::new(move |()| {
        let mut target = None;
        ui.update(|state| target = state.confirm_delete());
        let Some(id) = target else {
            return;
        };

        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.delete_post(&id).await;
            if deleted(&result) {
                show_toast(toasts, ToastKind::Success, "Post deleted");
                on_deleted.run(());
            } else if let Err(e) = result {
                leptos::logging::warn!("delete post failed: {e}");
                show_toast(toasts, ToastKind::Error, "Could not delete the post");
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--alert" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete this post?"</h2>
                <p class="dialog__description">
                    "This action cannot be undone. The post will be permanently removed."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
