//! Email Verification Page
//!
//! Step 2 of onboarding: collect the 6-digit code, verify it, then log in
//! immediately with the still-held pending password so the user lands in
//! the dashboard with a session. The password is cleared as soon as the
//! token is persisted.

use leptos::html;
use leptos::*;

use crate::api::auth;
use crate::api::client::{self, AuthError};
use crate::components::{focus_field, FieldError, FormError};
use crate::state::global::{
    clear_pending_password, pending_email, pending_password, GlobalState,
};

/// Email verification page component
#[component]
pub fn VerifyEmail() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Without a pending signup there is nothing to verify.
    let Some(email) = pending_email() else {
        auth::redirect_to("/signup");
        return view! { <div class="auth-page" /> }.into_view();
    };

    let (code, set_code) = create_signal(String::new());
    let (code_error, set_code_error) = create_signal(None::<String>);
    let (form_error, set_form_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let code_ref = create_node_ref::<html::Input>();

    let email_for_submit = email.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        set_code_error.set(None);
        set_form_error.set(None);

        let code_value = code.get().trim().to_string();
        if code_value.len() != 6 || !code_value.chars().all(|c| c.is_ascii_digit()) {
            set_code_error.set(Some("Enter the 6-digit code from your email.".to_string()));
            focus_field(code_ref);
            return;
        }

        let email = email_for_submit.clone();
        set_submitting.set(true);

        spawn_local(async move {
            let result = verify_and_login(&email, &code_value).await;
            match result {
                Ok(token) => {
                    auth::set_token(&token);
                    clear_pending_password();
                    auth::redirect_to("/final-step");
                }
                Err(AuthError::Status(_, msg)) => {
                    let text = if msg.is_empty() {
                        "Verification failed. Check the code and try again.".to_string()
                    } else {
                        msg
                    };
                    set_form_error.set(Some(text));
                }
                Err(AuthError::Network(e)) => {
                    web_sys::console::error_1(&format!("Verify error: {}", e).into());
                    set_form_error.set(Some("Network error. Please try again.".to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    let email_for_resend = email.clone();
    let state_for_resend = state.clone();
    let on_resend = move |_| {
        let email = email_for_resend.clone();
        let state = state_for_resend.clone();
        spawn_local(async move {
            match client::resend_verification_email(&email).await {
                Ok(()) => state.show_success("A new code is on its way."),
                Err(_) => state.show_error("Could not resend the code. Try again shortly."),
            }
        });
    };

    view! {
        <div class="auth-page">
            <a href="/" class="brand">"🦙 Market Llama"</a>

            <form class="auth-form" on:submit=on_submit>
                <h1>"Verify your email"</h1>
                <p class="muted">
                    "We sent a 6-digit code to " <strong>{email.clone()}</strong> "."
                </p>

                <FormError message=form_error />

                <label for="code">"Verification code"</label>
                <input
                    id="code"
                    name="code"
                    type="text"
                    inputmode="numeric"
                    maxlength="6"
                    node_ref=code_ref
                    prop:value=move || code.get()
                    on:input=move |ev| {
                        set_code.set(event_target_value(&ev));
                        set_code_error.set(None);
                    }
                />
                <FieldError message=code_error />

                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Verifying..." } else { "Verify" }}
                </button>

                <button type="button" class="link-btn" on:click=on_resend>
                    "Resend code"
                </button>
            </form>
        </div>
    }
    .into_view()
}

/// Verify the code, then trade the pending password for a session token.
async fn verify_and_login(email: &str, code: &str) -> Result<String, AuthError> {
    client::verify_email(email, code).await?;

    let Some(password) = pending_password() else {
        // Signup state was lost (another tab, cleared storage): fall back
        // to a manual sign-in rather than failing opaquely.
        auth::redirect_to("/signin");
        return Err(AuthError::Network("pending password missing".to_string()));
    };

    client::login(email, &password).await
}
