//! Sign In Page
//!
//! Validates locally, posts to `/api/auth/login`, persists the token, and
//! hands off to the dashboard. Bad credentials (401 or 400) always render
//! the same message regardless of backend detail.

use leptos::html;
use leptos::*;

use crate::api::auth;
use crate::api::client::{self, AuthError};
use crate::components::{focus_field, FieldError, FormError};
use crate::state::i18n;
use crate::validate::is_plausible_email;

const EMAIL_HINT: &str = "Enter a valid email address (e.g. name@gmail.com, \
name@yahoo.com, name@outlook.com, or another correctly spelled .com address).";

/// Sign-in page component
#[component]
pub fn SignIn() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let (email_error, set_email_error) = create_signal(None::<String>);
    let (password_error, set_password_error) = create_signal(None::<String>);
    let (form_error, set_form_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let email_ref = create_node_ref::<html::Input>();
    let password_ref = create_node_ref::<html::Input>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        set_email_error.set(None);
        set_password_error.set(None);
        set_form_error.set(None);

        let email_value = email.get().trim().to_string();
        let password_value = password.get();

        let mut first_invalid = None;

        if email_value.is_empty() {
            set_email_error.set(Some("Enter your email.".to_string()));
            first_invalid = first_invalid.or(Some(email_ref));
        } else if !is_plausible_email(&email_value) {
            set_email_error.set(Some(EMAIL_HINT.to_string()));
            first_invalid = first_invalid.or(Some(email_ref));
        }

        if password_value.is_empty() {
            set_password_error.set(Some("Enter your password.".to_string()));
            first_invalid = first_invalid.or(Some(password_ref));
        }

        if let Some(field) = first_invalid {
            focus_field(field);
            return;
        }

        set_submitting.set(true);

        spawn_local(async move {
            match client::login(&email_value, &password_value).await {
                Ok(token) => {
                    auth::set_token(&token);
                    let lang = i18n::current_lang();
                    auth::redirect_to(&i18n::with_lang("/dashboard/accounts", lang));
                }
                Err(AuthError::Status(status, msg)) => {
                    let text = client::login_error_text(status, &msg);
                    if status == 400 || status == 401 {
                        set_password_error.set(Some(text.clone()));
                        focus_field(password_ref);
                    }
                    set_form_error.set(Some(text));
                }
                Err(AuthError::Network(e)) => {
                    web_sys::console::error_1(&format!("Login error: {}", e).into());
                    set_form_error.set(Some(
                        "Network error while signing in. Please try again.".to_string(),
                    ));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <a href="/" class="brand">"🦙 Market Llama"</a>

            <form class="auth-form" on:submit=on_submit>
                <h1>"Sign In"</h1>

                <FormError message=form_error />

                <label for="email">"Email"</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    node_ref=email_ref
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        set_email.set(event_target_value(&ev));
                        set_email_error.set(None);
                    }
                />
                <FieldError message=email_error />

                <label for="password">"Password"</label>
                <input
                    id="password"
                    name="password"
                    type="password"
                    node_ref=password_ref
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        set_password.set(event_target_value(&ev));
                        set_password_error.set(None);
                    }
                />
                <FieldError message=password_error />

                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>

                <div class="auth-links">
                    <a href="/reset-password">"Forgot password?"</a>
                    <a href="/signup">"Create an account"</a>
                </div>
            </form>
        </div>
    }
}
