//! Sign Up Page
//!
//! Step 1 of onboarding: validate, register, persist the pending
//! credentials, and move to the email-verification step.

use leptos::html;
use leptos::*;

use crate::api::client::{self, AuthError};
use crate::api::auth;
use crate::components::{focus_field, FieldError, FormError};
use crate::state::global::set_pending_signup;
use crate::validate::{
    is_plausible_email, password_meets_floor, password_strength, MIN_PASSWORD_LENGTH,
};

const EMAIL_HINT: &str = "Enter a valid email address (e.g. name@gmail.com, \
name@yahoo.com, name@outlook.com, or another correctly spelled .com address).";

/// Sign-up page component
#[component]
pub fn SignUp() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (terms, set_terms) = create_signal(false);

    let (email_error, set_email_error) = create_signal(None::<String>);
    let (password_error, set_password_error) = create_signal(None::<String>);
    let (confirm_error, set_confirm_error) = create_signal(None::<String>);
    let (terms_error, set_terms_error) = create_signal(None::<String>);
    let (form_error, set_form_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let email_ref = create_node_ref::<html::Input>();
    let password_ref = create_node_ref::<html::Input>();
    let confirm_ref = create_node_ref::<html::Input>();
    let terms_ref = create_node_ref::<html::Input>();

    // Cosmetic strength hint; only the 8-character floor blocks submission.
    let strength = move || password_strength(&password.get());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        set_email_error.set(None);
        set_password_error.set(None);
        set_confirm_error.set(None);
        set_terms_error.set(None);
        set_form_error.set(None);

        let email_value = email.get().trim().to_string();
        let password_value = password.get();
        let confirm_value = confirm.get();

        let mut first_invalid = None;

        if email_value.is_empty() || !is_plausible_email(&email_value) {
            set_email_error.set(Some(EMAIL_HINT.to_string()));
            first_invalid = first_invalid.or(Some(email_ref));
        }

        if password_value.is_empty() {
            set_password_error.set(Some("Password is required.".to_string()));
            first_invalid = first_invalid.or(Some(password_ref));
        } else if !password_meets_floor(&password_value) {
            set_password_error.set(Some(format!(
                "Password must be at least {} characters.",
                MIN_PASSWORD_LENGTH
            )));
            first_invalid = first_invalid.or(Some(password_ref));
        }

        if confirm_value.is_empty() {
            set_confirm_error.set(Some("Please confirm your password.".to_string()));
            first_invalid = first_invalid.or(Some(confirm_ref));
        } else if confirm_value != password_value {
            set_confirm_error.set(Some("Passwords do not match.".to_string()));
            first_invalid = first_invalid.or(Some(confirm_ref));
        }

        if !terms.get() {
            set_terms_error.set(Some(
                "You must agree to the Terms and Privacy Policy to continue.".to_string(),
            ));
            first_invalid = first_invalid.or(Some(terms_ref));
        }

        if let Some(field) = first_invalid {
            focus_field(field);
            return;
        }

        set_submitting.set(true);

        spawn_local(async move {
            match client::register(&email_value, &password_value).await {
                Ok(()) => {
                    // The verify step finishes login with these credentials.
                    set_pending_signup(&email_value, &password_value);
                    auth::redirect_to("/verify-email");
                }
                Err(AuthError::Status(_, msg)) if client::is_email_taken_message(&msg) => {
                    set_email_error.set(Some("This email is already in use.".to_string()));
                    focus_field(email_ref);
                }
                Err(AuthError::Status(_, msg)) => {
                    let text = if msg.is_empty() {
                        "Sign up failed. Please check your details.".to_string()
                    } else {
                        msg
                    };
                    set_form_error.set(Some(text));
                }
                Err(AuthError::Network(e)) => {
                    web_sys::console::error_1(&format!("Signup error: {}", e).into());
                    set_form_error.set(Some(
                        "Network error while creating your account. Please try again.".to_string(),
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
                <h1>"Create Account"</h1>

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
                {move || {
                    let pw = password.get();
                    if pw.is_empty() {
                        return view! {}.into_view();
                    }
                    let grade = strength();
                    view! {
                        <p class="password-hint" style=format!("color: {}", grade.color())>
                            {grade.hint()}
                        </p>
                    }.into_view()
                }}
                <FieldError message=password_error />

                <label for="confirmPassword">"Confirm password"</label>
                <input
                    id="confirmPassword"
                    name="passwordConfirm"
                    type="password"
                    node_ref=confirm_ref
                    prop:value=move || confirm.get()
                    on:input=move |ev| {
                        set_confirm.set(event_target_value(&ev));
                        set_confirm_error.set(None);
                    }
                />
                <FieldError message=confirm_error />

                <label class="terms-row">
                    <input
                        id="terms"
                        name="terms"
                        type="checkbox"
                        node_ref=terms_ref
                        prop:checked=move || terms.get()
                        on:change=move |ev| {
                            set_terms.set(event_target_checked(&ev));
                            set_terms_error.set(None);
                        }
                    />
                    <span>"I agree to the Terms and Privacy Policy"</span>
                </label>
                <FieldError message=terms_error />

                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Sign Up" }}
                </button>

                <div class="auth-links">
                    <a href="/signin">"Already have an account? Sign in"</a>
                </div>
            </form>
        </div>
    }
}
