//! Login page posting credentials to `/sessions`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toaster::show_toast;
use crate::forms::{LoginErrors, LoginForm};
use crate::net::api::ApiClient;
use crate::net::gateway::ApiError;
use crate::net::types::LoginPayload;
use crate::state::session::BrowserSession;
use crate::state::toast::{ToastKind, ToastState};

/// What the UI should do with a login attempt's result.
#[derive(Clone, Debug, PartialEq, Eq)]
enum LoginFeedback {
    /// Store the token, show success, reset the form, go to the posts page.
    SignedIn(String),
    /// 401 from the server: bad e-mail/password pair. Stay on the page.
    InvalidCredentials,
    /// Anything else, surfaced as a generic error toast.
    Failed(String),
}

fn classify_login(result: Result<String, ApiError>) -> LoginFeedback {
    match result {
        Ok(token) => LoginFeedback::SignedIn(token),
        Err(e) if e.status() == Some(401) => LoginFeedback::InvalidCredentials,
        Err(e) => LoginFeedback::Failed(e.to_string()),
    }
}

/// Login page — e-mail/password form; a 200 stores the bearer token in the
/// session and redirects to the admin posts page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let api = expect_context::<ApiClient>();

    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(LoginErrors::default());

    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        let current = form.get();
        let validation = current.validate();
        if !validation.ok() {
            errors.set(validation);
            return;
        }
        errors.set(LoginErrors::default());

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let payload = LoginPayload {
                email: current.email.trim().to_owned(),
                password: current.password,
            };
            match classify_login(api.login(&payload).await) {
                LoginFeedback::SignedIn(token) => {
                    session.update(|s| s.login(&token));
                    show_toast(toasts, ToastKind::Success, "Signed in");
                    form.set(LoginForm::default());
                    navigate("/admin/posts", NavigateOptions::default());
                }
                LoginFeedback::InvalidCredentials => {
                    show_toast(toasts, ToastKind::Error, "Invalid credentials");
                }
                LoginFeedback::Failed(reason) => {
                    leptos::logging::warn!("login failed: {reason}");
                    show_toast(toasts, ToastKind::Error, "Could not sign in");
                }
            }
        });
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <p class="auth-card__subtitle">"Access your account"</p>

                <form
                    class="auth-card__form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="auth-card__label">
                        "E-mail"
                        <input
                            class="auth-card__input"
                            type="email"
                            placeholder="you@email.com"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    {move || errors.get().email.map(|msg| view! { <p class="auth-card__error">{msg}</p> })}

                    <label class="auth-card__label">
                        "Password"
                        <input
                            class="auth-card__input"
                            type="password"
                            placeholder="***********"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </label>
                    {move || errors.get().password.map(|msg| view! { <p class="auth-card__error">{msg}</p> })}

                    <button class="btn btn--primary" type="submit">
                        "Sign in"
                    </button>
                </form>

                <p class="auth-card__footer">
                    "No account yet? "
                    <a href="/auth/register">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
