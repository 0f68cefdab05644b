//! Final Onboarding Step
//!
//! Shown after verification and automatic login; clears the signup
//! handoff state and sends the user into the dashboard.

use leptos::*;

use crate::api::auth;
use crate::state::global::{clear_pending_signup, pending_email};
use crate::state::i18n;

/// Final onboarding page component
#[component]
pub fn FinalStep() -> impl IntoView {
    // An unauthenticated arrival here skipped verification.
    if !auth::require_auth() {
        return view! { <div class="auth-page" /> }.into_view();
    }

    let email = pending_email();

    let go_to_dashboard = move |_| {
        clear_pending_signup();
        let lang = i18n::current_lang();
        auth::redirect_to(&i18n::with_lang("/dashboard/accounts", lang));
    };

    view! {
        <div class="auth-page">
            <a href="/" class="brand">"🦙 Market Llama"</a>

            <div class="auth-form">
                <h1>"You're all set"</h1>
                <p class="muted">
                    {match email {
                        Some(email) => format!("{} is verified and your account is ready.", email),
                        None => "Your account is verified and ready.".to_string(),
                    }}
                </p>

                <button on:click=go_to_dashboard>"Go to dashboard"</button>
            </div>
        </div>
    }
    .into_view()
}
