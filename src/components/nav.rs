//! Dashboard Sidebar
//!
//! Navigation for the authenticated pages: translated links carrying the
//! `?lang=` selection, active-page highlight, collapse toggle, language
//! dropdown, the top balance with its eye toggle, and logout.

use leptos::*;
use leptos_router::use_location;

use crate::api::auth;
use crate::components::BalanceText;
use crate::format::format_amount;
use crate::state::global::GlobalState;
use crate::state::i18n::{self, Lang};

/// Sidebar component for dashboard pages
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let pathname = use_location().pathname;

    let (collapsed, set_collapsed) = create_signal(false);
    let (lang_open, set_lang_open) = create_signal(false);

    let lang = state.lang;
    let top_balance = {
        let state = state.clone();
        Signal::derive(move || {
            let summary = state.summary.get();
            format_amount(summary.total(), summary.currency())
        })
    };

    let display_name = {
        let state = state.clone();
        move || state.display_name()
    };

    // Hard reload so every label and the document direction pick up the
    // new `?lang=` value.
    let switch_lang = move |target: Lang| {
        let path = pathname.get_untracked();
        auth::redirect_to(&i18n::with_lang(&path, target));
    };

    view! {
        <aside
            class="sidebar"
            data-state=move || if collapsed.get() { "collapsed" } else { "expanded" }
        >
            <div class="side-head">
                <a href="/" class="brand">
                    <span class="brand-mark">"🦙"</span>
                    <span class="brand-name">"Market Llama"</span>
                </a>
                <button
                    class="icon-btn side-toggle"
                    aria-expanded=move || (!collapsed.get()).to_string()
                    on:click=move |_| set_collapsed.update(|c| *c = !*c)
                >
                    {move || if collapsed.get() { "»" } else { "«" }}
                </button>
            </div>

            <div class="top-balance-row">
                <span class="muted">{display_name}</span>
                <BalanceText value=top_balance />
            </div>

            <ul class="side-menu">
                <SideLink
                    path="/dashboard/accounts"
                    label=Signal::derive(move || lang.get().labels().accounts)
                    current=pathname
                    lang=lang
                />
                <SideLink
                    path="/dashboard/performance"
                    label=Signal::derive(move || lang.get().labels().performance)
                    current=pathname
                    lang=lang
                />
                <SideLink
                    path="/dashboard/subscription"
                    label=Signal::derive(move || lang.get().labels().subscription)
                    current=pathname
                    lang=lang
                />
            </ul>

            <div class="side-foot">
                // Language dropdown
                <div class="lang-picker">
                    <button
                        class="icon-btn"
                        on:click=move |_| set_lang_open.update(|o| *o = !*o)
                    >
                        {move || lang.get().code().to_uppercase()}
                    </button>

                    {move || {
                        if !lang_open.get() {
                            return view! {}.into_view();
                        }

                        view! {
                            <div class="lang-dropdown">
                                {Lang::ALL.into_iter().map(|option| view! {
                                    <button
                                        class="lang-option"
                                        on:click=move |_| switch_lang(option)
                                    >
                                        {option.name()}
                                    </button>
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }}
                </div>

                <button
                    class="logout-btn"
                    on:click=move |_| auth::logout(true)
                >
                    "Log out"
                </button>
            </div>
        </aside>
    }
}

/// Sidebar link with active-page highlight
#[component]
fn SideLink(
    path: &'static str,
    #[prop(into)]
    label: Signal<&'static str>,
    current: Memo<String>,
    lang: RwSignal<Lang>,
) -> impl IntoView {
    view! {
        <li class=move || if current.get() == path { "active" } else { "" }>
            <a href=move || i18n::with_lang(path, lang.get())>
                {move || label.get()}
            </a>
        </li>
    }
}
