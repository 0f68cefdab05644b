//! Loading Component
//!
//! Skeleton states shown while dashboard fetches are in flight.

use leptos::*;

/// Skeleton loader for account cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="account-card animate-pulse">
            <div class="h-4 bg-gray-700 rounded w-1/3 mb-4" />
            <div class="h-8 bg-gray-700 rounded w-1/2" />
        </div>
    }
}

/// Skeleton loader for table rows
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-700 rounded h-12" />
            }).collect_view()}
        </div>
    }
}
