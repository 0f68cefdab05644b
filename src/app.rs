//! App Root Component
//!
//! Routing and global providers. The language comes from the `?lang=` query
//! parameter and is applied to the document direction before anything
//! renders.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::{
    Accounts, FinalStep, Landing, Performance, ResetPassword, SignIn, SignUp, Subscription,
    VerifyEmail,
};
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::i18n;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let lang = i18n::current_lang();
    state.lang.set(lang);
    i18n::apply_direction(lang);

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Landing />
                <Route path="/signin" view=SignIn />
                <Route path="/signup" view=SignUp />
                <Route path="/verify-email" view=VerifyEmail />
                <Route path="/final-step" view=FinalStep />
                <Route path="/reset-password" view=ResetPassword />
                <Route path="/dashboard/accounts" view=Accounts />
                <Route path="/dashboard/performance" view=Performance />
                <Route path="/dashboard/subscription" view=Subscription />
                <Route path="/*any" view=NotFound />
            </Routes>

            // Toast notifications
            <Toast />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1>"Page Not Found"</h1>
            <p class="muted">"The page you're looking for doesn't exist."</p>
            <a class="btn" href="/">"Back to Market Llama"</a>
        </div>
    }
}
