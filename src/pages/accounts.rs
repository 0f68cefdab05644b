//! Accounts Page
//!
//! Main dashboard view: aggregated live/demo balances and one card per
//! broker account. The profile and summary fetches race independently and
//! update disjoint regions. On any fetch failure the view degrades to
//! zero-balance placeholder cards; it is never left blank.

use leptos::*;

use crate::api::{auth, client, ApiError};
use crate::components::{AccountCard, BalanceText, CardSkeleton, Nav};
use crate::format::format_amount;
use crate::state::global::{cache_profile, AccountSummary, GlobalState};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Live,
    Demo,
}

/// Accounts page component
#[component]
pub fn Accounts() -> impl IntoView {
    if !auth::require_auth() {
        return view! { <div class="dashboard" /> }.into_view();
    }

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (loading, set_loading) = create_signal(true);
    let (tab, set_tab) = create_signal(Tab::Overview);

    // Profile for the navbar greeting; failure is non-fatal.
    let state_for_profile = state.clone();
    spawn_local(async move {
        match client::fetch_profile().await {
            Ok(profile) => {
                cache_profile(&profile);
                state_for_profile.profile.set(Some(profile));
            }
            Err(ApiError::Unauthorized) => {} // already redirected
            Err(e) => {
                web_sys::console::warn_1(&format!("Profile fetch failed: {}", e).into());
            }
        }
    });

    // Balance summary; a failed fetch renders the placeholder cards.
    let state_for_summary = state.clone();
    spawn_local(async move {
        match client::fetch_account_summary().await {
            Ok(summary) => state_for_summary.summary.set(summary),
            Err(ApiError::Unauthorized) => return,
            Err(e) => {
                web_sys::console::error_1(&format!("Accounts fetch failed: {}", e).into());
                state_for_summary.summary.set(AccountSummary::default());
            }
        }
        set_loading.set(false);
    });

    let state_for_link = state.clone();
    let connect_deriv = move |_| {
        let state = state_for_link.clone();
        spawn_local(async move {
            match client::fetch_deriv_oauth_url().await {
                Ok(url) => auth::redirect_to(&url),
                Err(e) => {
                    web_sys::console::error_1(&format!("Deriv OAuth failed: {}", e).into());
                    state.show_error("Could not start broker linking. Try again shortly.");
                }
            }
        });
    };

    let summary = state.summary;

    view! {
        <div class="dashboard">
            <Nav />

            <main class="dashboard-main">
                <div class="page-head">
                    <h1>"Accounts"</h1>
                    <button class="btn" on:click=connect_deriv>"Connect Deriv"</button>
                </div>

                <div class="tabs" role="tablist">
                    <TabButton label="Overview" target=Tab::Overview current=tab set_current=set_tab />
                    <TabButton label="Live" target=Tab::Live current=tab set_current=set_tab />
                    <TabButton label="Demo" target=Tab::Demo current=tab set_current=set_tab />
                </div>

                {move || {
                    if loading.get() {
                        return view! {
                            <div class="account-grid">
                                <CardSkeleton />
                                <CardSkeleton />
                            </div>
                        }.into_view();
                    }

                    let current = summary.get();
                    let (live, demo) = current.cards();
                    let currency = current.currency().to_string();

                    match tab.get() {
                        Tab::Overview => {
                            let live_total = format_amount(current.live_balance, &currency);
                            let demo_total = format_amount(current.demo_balance, &currency);
                            view! {
                                <section class="totals-row">
                                    <div class="total-card">
                                        <span class="muted">"Live balance"</span>
                                        <BalanceText value=Signal::derive(move || live_total.clone()) />
                                    </div>
                                    <div class="total-card">
                                        <span class="muted">"Demo balance"</span>
                                        <BalanceText value=Signal::derive(move || demo_total.clone()) />
                                    </div>
                                </section>

                                <AccountSection title="Live accounts" accounts=live />
                                <AccountSection title="Demo accounts" accounts=demo />
                            }.into_view()
                        }
                        Tab::Live => view! {
                            <AccountSection title="Live accounts" accounts=live />
                        }.into_view(),
                        Tab::Demo => view! {
                            <AccountSection title="Demo accounts" accounts=demo />
                        }.into_view(),
                    }
                }}
            </main>
        </div>
    }
    .into_view()
}

#[component]
fn TabButton(
    label: &'static str,
    target: Tab,
    current: ReadSignal<Tab>,
    set_current: WriteSignal<Tab>,
) -> impl IntoView {
    view! {
        <button
            class="tab"
            role="tab"
            aria-selected=move || (current.get() == target).to_string()
            on:click=move |_| set_current.set(target)
        >
            {label}
        </button>
    }
}

#[component]
fn AccountSection(
    title: &'static str,
    accounts: Vec<crate::state::global::Account>,
) -> impl IntoView {
    view! {
        <section class="account-section">
            <h2>{title}</h2>
            <div class="account-grid">
                {accounts.into_iter().map(|account| view! {
                    <AccountCard account=account />
                }).collect_view()}
            </div>
        </section>
    }
}
