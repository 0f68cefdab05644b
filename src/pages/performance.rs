//! Performance Page
//!
//! Trading KPIs and the trade history table. Both fetches degrade to zeroed
//! defaults on failure so the page always renders something.

use leptos::*;

use crate::api::{auth, client, ApiError};
use crate::components::{ListSkeleton, Nav};
use crate::format::{format_decimal, format_signed};
use crate::state::global::{PerformanceOverview, TradeRecord};

/// Performance page component
#[component]
pub fn Performance() -> impl IntoView {
    if !auth::require_auth() {
        return view! { <div class="dashboard" /> }.into_view();
    }

    let (overview, set_overview) = create_signal(PerformanceOverview::default());
    let (trades, set_trades) = create_signal(Vec::<TradeRecord>::new());
    let (loading, set_loading) = create_signal(true);

    spawn_local(async move {
        match client::fetch_performance_overview().await {
            Ok(data) => set_overview.set(data),
            Err(ApiError::Unauthorized) => return,
            Err(e) => {
                web_sys::console::error_1(&format!("Overview fetch failed: {}", e).into());
                set_overview.set(PerformanceOverview::default());
            }
        }
    });

    spawn_local(async move {
        match client::fetch_performance_history().await {
            Ok(data) => set_trades.set(data),
            Err(ApiError::Unauthorized) => return,
            Err(e) => {
                web_sys::console::error_1(&format!("History fetch failed: {}", e).into());
                set_trades.set(Vec::new());
            }
        }
        set_loading.set(false);
    });

    view! {
        <div class="dashboard">
            <Nav />

            <main class="dashboard-main">
                <div class="page-head">
                    <h1>"Performance"</h1>
                </div>

                <section class="kpi-row">
                    {move || {
                        let o = overview.get();
                        view! {
                            <KpiCard label="Days traded" value=o.days_traded.to_string() />
                            <KpiCard label="Total trades" value=o.total_trades.to_string() />
                            <KpiCard label="Total lots" value=format_decimal(o.total_lots) />
                            <KpiCard label="Win rate" value=format!("{:.1}%", o.win_rate) />
                            <KpiCard label="Loss rate" value=format!("{:.1}%", o.loss_rate) />
                        }
                    }}
                </section>

                <section class="trade-history">
                    <h2>"Trade history"</h2>
                    {move || {
                        if loading.get() {
                            return view! { <ListSkeleton count=5 /> }.into_view();
                        }

                        let rows = trades.get();
                        view! {
                            <table class="trade-table">
                                <thead>
                                    <tr>
                                        <th>"Symbol"</th>
                                        <th>"Side"</th>
                                        <th>"Lots"</th>
                                        <th>"Entry"</th>
                                        <th>"Exit"</th>
                                        <th>"P/L"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {if rows.is_empty() {
                                        view! {
                                            <tr>
                                                <td class="muted" colspan="6">"No trades yet"</td>
                                            </tr>
                                        }.into_view()
                                    } else {
                                        rows.into_iter().map(|trade| view! {
                                            <TradeRow trade=trade />
                                        }).collect_view()
                                    }}
                                </tbody>
                            </table>
                        }.into_view()
                    }}
                </section>
            </main>
        </div>
    }
    .into_view()
}

#[component]
fn KpiCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="kpi-card">
            <span class="muted">{label}</span>
            <span class="kpi-value">{value}</span>
        </div>
    }
}

#[component]
fn TradeRow(trade: TradeRecord) -> impl IntoView {
    let pnl_class = if trade.pnl >= 0.0 { "pnl-green" } else { "pnl-red" };

    view! {
        <tr>
            <td>{trade.symbol}</td>
            <td>
                <span class=format!("side-badge {}", trade.side.css_class())>
                    {trade.side.label()}
                </span>
            </td>
            <td>{format_decimal(trade.lot_size)}</td>
            <td>{format_decimal(trade.entry_price)}</td>
            <td>{format_decimal(trade.exit_price)}</td>
            <td class=pnl_class>{format_signed(trade.pnl)}</td>
        </tr>
    }
}
