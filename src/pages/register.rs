//! Registration page posting new accounts to `/account`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toaster::show_toast;
use crate::forms::{RegisterErrors, RegisterForm};
use crate::net::api::ApiClient;
use crate::net::gateway::{ApiError, ApiResponse};
use crate::net::types::RegisterPayload;
use crate::state::toast::{ToastKind, ToastState};

/// What the UI should do with a registration attempt's result.
#[derive(Clone, Debug, PartialEq, Eq)]
enum RegisterFeedback {
    /// 201: show success, reset the form, go to the login page.
    Registered,
    /// 409: the e-mail is already taken. Stay on the page.
    AlreadyRegistered,
    /// Anything else, surfaced as a generic error toast.
    Failed(String),
}

fn classify_register(result: Result<ApiResponse, ApiError>) -> RegisterFeedback {
    match result {
        Ok(response) if response.status == 201 => RegisterFeedback::Registered,
        Ok(response) => RegisterFeedback::Failed(format!("unexpected status {}", response.status)),
        Err(e) if e.status() == Some(409) => RegisterFeedback::AlreadyRegistered,
        Err(e) => RegisterFeedback::Failed(e.to_string()),
    }
}

/// Registration page — account form; a 201 redirects to the login page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let api = expect_context::<ApiClient>();

    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(RegisterErrors::default());

    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        let current = form.get();
        let validation = current.validate();
        if !validation.ok() {
            errors.set(validation);
            return;
        }
        errors.set(RegisterErrors::default());

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let payload = RegisterPayload {
                name: current.name.trim().to_owned(),
                email: current.email.trim().to_owned(),
                phone: current.phone.trim().to_owned(),
                password: current.password,
            };
            match classify_register(api.register(&payload).await) {
                RegisterFeedback::Registered => {
                    show_toast(toasts, ToastKind::Success, "Account created");
                    form.set(RegisterForm::default());
                    navigate("/auth/login", NavigateOptions::default());
                }
                RegisterFeedback::AlreadyRegistered => {
                    show_toast(toasts, ToastKind::Error, "E-mail already registered");
                }
                RegisterFeedback::Failed(reason) => {
                    leptos::logging::warn!("registration failed: {reason}");
                    show_toast(toasts, ToastKind::Error, "Could not create the account");
                }
            }
        });
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <p class="auth-card__subtitle">"Register to manage the blog"</p>

                <form
                    class="auth-card__form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="auth-card__label">
                        "Name"
                        <input
                            class="auth-card__input"
                            type="text"
                            placeholder="Your name"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    {move || errors.get().name.map(|msg| view! { <p class="auth-card__error">{msg}</p> })}

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
                        "Phone"
                        <input
                            class="auth-card__input"
                            type="tel"
                            placeholder="(00) 00000-0000"
                            prop:value=move || form.get().phone
                            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                        />
                    </label>
                    {move || errors.get().phone.map(|msg| view! { <p class="auth-card__error">{msg}</p> })}

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

                    <label class="auth-card__label">
                        "Confirm password"
                        <input
                            class="auth-card__input"
                            type="password"
                            placeholder="***********"
                            prop:value=move || form.get().confirm_password
                            on:input=move |ev| {
                                form.update(|f| f.confirm_password = event_target_value(&ev));
                            }
                        />
                    </label>
                    {move || {
                        errors
                            .get()
                            .confirm_password
                            .map(|msg| view! { <p class="auth-card__error">{msg}</p> })
                    }}

                    <button class="btn btn--primary" type="submit">
                        "Create account"
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Already registered? "
                    <a href="/auth/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
