//! Landing Page
//!
//! Public marketing page: hero, feature highlights, a pricing teaser, and
//! the support chat widget. Signed-in visitors are offered the dashboard
//! instead of the sign-up CTA.

use leptos::*;

use crate::api::auth;
use crate::components::ChatWidget;
use crate::state::i18n;

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    let signed_in = auth::is_authenticated();
    let lang = i18n::current_lang();
    let dashboard_href = i18n::with_lang("/dashboard/accounts", lang);

    view! {
        <div class="landing">
            <header class="landing-header">
                <a href="/" class="brand">"🦙 Market Llama"</a>
                <nav class="landing-nav">
                    {if signed_in {
                        view! {
                            <a class="btn" href=dashboard_href.clone()>"Dashboard"</a>
                        }.into_view()
                    } else {
                        view! {
                            <a href="/signin">"Sign in"</a>
                            <a class="btn" href="/signup">"Get started"</a>
                        }.into_view()
                    }}
                </nav>
            </header>

            <section class="hero">
                <h1>"Trade smarter, not louder."</h1>
                <p class="muted">
                    "Connect your broker accounts, track live and demo balances in one \
                     place, and see your performance without spreadsheets."
                </p>
                {if signed_in {
                    view! {
                        <a class="btn btn-primary" href=dashboard_href>"Open dashboard"</a>
                    }.into_view()
                } else {
                    view! {
                        <a class="btn btn-primary" href="/signup">"Create a free account"</a>
                    }.into_view()
                }}
            </section>

            <section class="features">
                <FeatureCard
                    title="All accounts, one view"
                    body="Live and demo balances from Deriv, aggregated and always visible."
                />
                <FeatureCard
                    title="Honest performance"
                    body="Win rate, lots, and trade history straight from your fills."
                />
                <FeatureCard
                    title="Privacy on demand"
                    body="One click hides every balance on screen. Another brings it back."
                />
            </section>

            <section class="pricing-teaser">
                <h2>"Simple pricing"</h2>
                <p class="muted">
                    "Monthly plans, or pay annually and get two months free. \
                     Full details after you sign in."
                </p>
                <a href="/signup">"See plans"</a>
            </section>

            <footer class="landing-footer">
                <span class="muted">"© 2026 Market Llama"</span>
            </footer>

            <ChatWidget />
        </div>
    }
}

#[component]
fn FeatureCard(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <h3>{title}</h3>
            <p class="muted">{body}</p>
        </div>
    }
}
