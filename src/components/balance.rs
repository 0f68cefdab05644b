//! Balance Display Component
//!
//! A formatted amount with an eye toggle. Visibility is local to the
//! element and never persists across reloads.

use leptos::*;

use crate::format::masked_or;

/// Amount text with a show/hide toggle
#[component]
pub fn BalanceText(
    /// Formatted amount, e.g. "1,234.50 USD"
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    let (hidden, set_hidden) = create_signal(false);

    view! {
        <span class="balance-row">
            <span class="balance-value">
                {move || masked_or(hidden.get(), &value.get())}
            </span>
            <button
                type="button"
                class="icon-btn sm balance-toggle"
                aria-label="Toggle balance visibility"
                on:click=move |_| set_hidden.update(|h| *h = !*h)
            >
                {move || if hidden.get() { "🙈" } else { "👁" }}
            </button>
        </span>
    }
}
