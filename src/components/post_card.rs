//! Card component for post list items on the admin posts page.

use leptos::prelude::*;

use crate::net::types::Post;

/// A post summary card; edit/delete actions appear for signed-in users.
#[component]
pub fn PostCard(
    post: Post,
    can_edit: Signal<bool>,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let Post {
        id,
        title,
        excerpt,
        cover_url,
        created_at,
        ..
    } = post;

    let actions = move || {
        can_edit.get().then(|| {
            let edit_id = id.clone();
            let delete_id = id.clone();
            view! {
                <div class="post-card__actions">
                    <button class="btn" on:click=move |_| on_edit.run(edit_id.clone())>
                        "Edit"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                        "Delete"
                    </button>
                </div>
            }
        })
    };

    view! {
        <article class="post-card">
            {cover_url.map(|url| view! { <img class="post-card__cover" src=url alt=""/> })}
            <div class="post-card__body">
                <h2 class="post-card__title">{title}</h2>
                {excerpt.map(|text| view! { <p class="post-card__excerpt">{text}</p> })}
                {created_at.map(|date| view! { <div class="post-card__date">{date}</div> })}
                {actions}
            </div>
        </article>
    }
}
