//! Password Reset Page
//!
//! Email-only form posting `/api/auth/request-password-reset`. The
//! confirmation is deliberately neutral so the form does not reveal
//! whether an account exists.

use leptos::html;
use leptos::*;

use crate::api::client::{self, AuthError};
use crate::components::{focus_field, FieldError, FormError};
use crate::state::global::set_reset_email;
use crate::validate::is_plausible_email;

/// Password reset request page
#[component]
pub fn ResetPassword() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (email_error, set_email_error) = create_signal(None::<String>);
    let (form_error, set_form_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);
    let (sent, set_sent) = create_signal(false);

    let email_ref = create_node_ref::<html::Input>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        set_email_error.set(None);
        set_form_error.set(None);

        let email_value = email.get().trim().to_string();
        if email_value.is_empty() || !is_plausible_email(&email_value) {
            set_email_error.set(Some("Enter a valid email address.".to_string()));
            focus_field(email_ref);
            return;
        }

        set_submitting.set(true);

        spawn_local(async move {
            set_reset_email(&email_value);

            match client::request_password_reset(&email_value).await {
                // Backend rejections get the same neutral confirmation
                Ok(()) | Err(AuthError::Status(..)) => set_sent.set(true),
                Err(AuthError::Network(e)) => {
                    web_sys::console::error_1(&format!("Reset error: {}", e).into());
                    set_form_error.set(Some("Network error. Please try again.".to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <a href="/" class="brand">"🦙 Market Llama"</a>

            {move || {
                if sent.get() {
                    return view! {
                        <div class="auth-form">
                            <h1>"Check your inbox"</h1>
                            <p class="muted">
                                "If an account exists for that address, a reset link is on the way."
                            </p>
                            <a href="/signin">"Back to sign in"</a>
                        </div>
                    }.into_view();
                }

                view! {
                    <form class="auth-form" on:submit=on_submit>
                        <h1>"Reset password"</h1>

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

                        <button type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Sending..." } else { "Send reset link" }}
                        </button>

                        <div class="auth-links">
                            <a href="/signin">"Back to sign in"</a>
                        </div>
                    </form>
                }.into_view()
            }}
        </div>
    }
}
