//! Transient success/error notifications.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// How long a toast stays on screen.
#[cfg(feature = "hydrate")]
const TOAST_MS: u64 = 4000;

/// Push a toast and schedule its dismissal. In non-browser contexts the
/// toast is queued but no timer runs.
pub fn show_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: &str) {
    let mut id = 0;
    toasts.update(|state| id = state.push(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_MS)).await;
        toasts.update(|state| state.dismiss(id));
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Stacked toast container rendered once at the app root. Clicking a toast
/// dismisses it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        let id = toast.id;
                        let message = toast.message;
                        view! {
                            <div class=class on:click=move |_| toasts.update(|state| state.dismiss(id))>
                                {message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
