//! Admin posts page: list, create, edit, and delete posts.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::modal_create_post::ModalCreatePost;
use crate::components::modal_delete_post::ModalDeletePost;
use crate::components::modal_edit_post::ModalEditPost;
use crate::components::post_card::PostCard;
use crate::net::api::ApiClient;
use crate::state::posts::PostsState;
use crate::state::session::BrowserSession;
use crate::state::ui::UiState;

/// Load the post list into `posts`. A failed fetch lands in the error
/// banner rather than being swallowed.
fn reload_posts(api: &ApiClient, posts: RwSignal<PostsState>) {
    posts.update(PostsState::begin_load);
    let api = api.clone();
    leptos::task::spawn_local(async move {
        match api.posts().await {
            Ok(items) => posts.update(|state| state.loaded(items)),
            Err(e) => {
                leptos::logging::warn!("post list fetch failed: {e}");
                posts.update(|state| state.failed("Could not load posts"));
            }
        }
    });
}

/// Post listing with the create/edit/delete dialogs. Management actions
/// only appear when the session is authenticated.
#[component]
pub fn PostsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let api = expect_context::<ApiClient>();

    let posts = RwSignal::new(PostsState {
        loading: true,
        ..PostsState::default()
    });

    {
        let api = api.clone();
        Effect::new(move || reload_posts(&api, posts));
    }

    let reload = Callback::new({
        let api = api.clone();
        move |()| reload_posts(&api, posts)
    });

    let authed = Signal::derive(move || session.with(|s| s.is_authenticated()) == Some(true));

    let on_edit = Callback::new(move |id: String| ui.update(|state| state.open_edit(id)));
    let on_delete = Callback::new(move |id: String| ui.update(|state| state.open_delete(id)));
    let close_modals = Callback::new(move |()| ui.update(UiState::close_modals));

    let navigate = use_navigate();
    let sign_out = Callback::new(move |()| {
        session.update(|s| s.logout());
        navigate("/auth/login", NavigateOptions::default());
    });

    view! {
        <div class="posts-page">
            <header class="posts-page__header">
                <h1>"Blog admin"</h1>
                <Show when=move || authed.get()>
                    <div class="posts-page__actions">
                        <button class="btn btn--primary" on:click=move |_| ui.update(UiState::open_create)>
                            "New post"
                        </button>
                        <button class="btn" on:click=move |_| sign_out.run(())>
                            "Sign out"
                        </button>
                    </div>
                </Show>
            </header>

            <main class="posts-page__content">
                {move || {
                    let state = posts.get();
                    if state.loading {
                        view! { <p class="posts-page__loading">"Loading posts..."</p> }.into_any()
                    } else if let Some(message) = state.error {
                        view! { <div class="posts-page__error">{message}</div> }.into_any()
                    } else if state.items.is_empty() {
                        view! { <div class="posts-page__empty">"No posts published yet."</div> }
                            .into_any()
                    } else {
                        view! {
                            <div class="posts-page__grid">
                                {state
                                    .items
                                    .into_iter()
                                    .map(|post| {
                                        view! {
                                            <PostCard
                                                post=post
                                                can_edit=authed
                                                on_edit=on_edit
                                                on_delete=on_delete
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </main>

            <Show when=move || ui.with(|state| state.create_open)>
                <ModalCreatePost on_close=close_modals on_saved=reload/>
            </Show>
            {move || {
                ui.with(|state| state.edit_target.clone())
                    .map(|id| view! { <ModalEditPost post_id=id on_close=close_modals on_saved=reload/> })
            }}
            <Show when=move || ui.with(|state| state.delete_target.is_some())>
                <ModalDeletePost on_close=close_modals on_deleted=reload/>
            </Show>
        </div>
    }
}
