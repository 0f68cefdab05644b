//! Subscription Page
//!
//! Plan catalog with a monthly/annual billing toggle. Annual pricing is ten
//! monthly payments. Checkout itself lives elsewhere; choosing a plan here
//! only confirms the selection.

use leptos::*;

use crate::api::{auth, client, ApiError};
use crate::components::{CardSkeleton, Nav};
use crate::format::format_decimal;
use crate::state::global::{BillingCycle, GlobalState, Plan};

/// Subscription page component
#[component]
pub fn Subscription() -> impl IntoView {
    if !auth::require_auth() {
        return view! { <div class="dashboard" /> }.into_view();
    }

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (plans, set_plans) = create_signal(Vec::<Plan>::new());
    let (cycle, set_cycle) = create_signal(BillingCycle::Monthly);
    let (loading, set_loading) = create_signal(true);

    let state_for_fetch = state.clone();
    spawn_local(async move {
        match client::fetch_plans().await {
            Ok(data) => set_plans.set(data),
            Err(ApiError::Unauthorized) => return,
            Err(e) => {
                web_sys::console::error_1(&format!("Plans fetch failed: {}", e).into());
                state_for_fetch.show_error("Could not load plans. Try again shortly.");
            }
        }
        set_loading.set(false);
    });

    view! {
        <div class="dashboard">
            <Nav />

            <main class="dashboard-main">
                <div class="page-head">
                    <h1>"Subscription"</h1>
                </div>

                <div class="cycle-toggle" role="tablist">
                    <CycleButton label="Monthly" target=BillingCycle::Monthly current=cycle set_current=set_cycle />
                    <CycleButton label="Annual (2 months free)" target=BillingCycle::Annual current=cycle set_current=set_cycle />
                </div>

                {move || {
                    if loading.get() {
                        return view! {
                            <div class="plan-grid">
                                <CardSkeleton />
                                <CardSkeleton />
                                <CardSkeleton />
                            </div>
                        }.into_view();
                    }

                    let state = state.clone();
                    view! {
                        <div class="plan-grid">
                            {plans.get().into_iter().map(|plan| {
                                let state = state.clone();
                                view! { <PlanCard plan=plan cycle=cycle state=state /> }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }}
            </main>
        </div>
    }
    .into_view()
}

#[component]
fn CycleButton(
    label: &'static str,
    target: BillingCycle,
    current: ReadSignal<BillingCycle>,
    set_current: WriteSignal<BillingCycle>,
) -> impl IntoView {
    view! {
        <button
            class="tab"
            class:active=move || current.get() == target
            role="tab"
            on:click=move |_| set_current.set(target)
        >
            {label}
        </button>
    }
}

#[component]
fn PlanCard(plan: Plan, cycle: ReadSignal<BillingCycle>, state: GlobalState) -> impl IntoView {
    let name = plan.name.clone();
    let plan_for_price = plan.clone();
    let price = move || {
        let cycle = cycle.get();
        format!(
            "${} {}",
            format_decimal(cycle.price_for(&plan_for_price)),
            cycle.per_label()
        )
    };

    let select = move |_| {
        state.show_success(&format!("{} plan selected.", plan.name));
    };

    view! {
        <div class="plan-card">
            <h3>{name}</h3>
            <p class="plan-price">{price}</p>
            <button class="btn" on:click=select>"Choose plan"</button>
        </div>
    }
}
