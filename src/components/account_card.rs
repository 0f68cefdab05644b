//! Account Card Component
//!
//! One card per broker account: live/demo chip, broker chip, and the
//! balance with its own hide toggle.

use leptos::*;

use crate::components::BalanceText;
use crate::format::format_amount;
use crate::state::global::Account;

/// Account card component
#[component]
pub fn AccountCard(account: Account) -> impl IntoView {
    let amount = format_amount(account.balance, &account.currency);

    view! {
        <div class="account-card" data-id=account.id.clone()>
            <div class="card-head">
                <span class=format!("chip chip-{}", account.kind.css_class())>
                    {account.kind.label()}
                </span>
                <span class="chip chip-broker">{account.broker.clone()}</span>
            </div>

            <div class="card-body">
                <div class="big-amount">
                    <BalanceText value=Signal::derive(move || amount.clone()) />
                </div>
            </div>

            <div class="line-art"></div>
        </div>
    }
}
