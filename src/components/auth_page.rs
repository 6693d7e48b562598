//! Auth Page Component
//!
//! Login / register form. Switching modes clears the error.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::auth;
use crate::context::use_app_context;
use crate::models::AuthMode;

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (mode, set_mode) = signal(AuthMode::Login);
    let (error, set_error) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (signed_in, set_signed_in) = signal(false);

    Effect::new(move |_| {
        if signed_in.get() {
            navigate("/dashboard", Default::default());
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let email = email.get_untracked();
        let password = password.get_untracked();
        let mode = mode.get_untracked();
        let engine = ctx.engine();

        set_submitting.set(true);
        spawn_local(async move {
            match auth::submit_credentials(engine.api(), engine.session(), &email, &password, mode).await {
                Ok(_) => {
                    let _ = set_error.try_set(String::new());
                    let _ = set_signed_in.try_set(true);
                }
                Err(failure) => {
                    let _ = set_error.try_set(failure.to_string());
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    let switch_mode = move |_| {
        set_mode.update(|m| *m = m.toggled());
        set_error.set(String::new());
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" novalidate=true on:submit=submit>
                <h1>{move || mode.get().label()}</h1>

                {move || {
                    let message = error.get();
                    (!message.is_empty()).then(|| view! { <p class="error auth-error">{message}</p> })
                }}

                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                    {move || mode.get().label()}
                </button>

                <p class="switch-mode" on:click=switch_mode>
                    {move || mode.get().switch_label()}
                </p>
            </form>
        </div>
    }
}
