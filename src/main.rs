//! Market Llama Web Client
//!
//! Client-side rendered Leptos application for the Market Llama trading
//! platform: the public landing pages (sign up, sign in, email verification,
//! password reset, plans) and the authenticated dashboard (accounts,
//! performance, subscription).
//!
//! # Architecture
//!
//! Compiles to WebAssembly and talks to the Market Llama REST API over HTTP.
//! The session/auth client in [`api::auth`] is the only module that touches
//! the persisted bearer token; every authenticated page goes through it.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod pages;
mod state;
mod validate;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
