use contracts::analytics::alerts::ticker_messages;
use contracts::analytics::dashboard::{dashboard_summary, DashboardSummary};
use contracts::analytics::stock::stock_distribution;
use contracts::analytics::trend::consumption_trend;
use contracts::domain::{ActualConsumption, InventoryItem, Order, SystemAlert};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::data::AppData;
use crate::shared::format::{format_money, format_quantity, format_signed_percent};

/// Alerts shown in the ticker strip
const TICKER_LIMIT: usize = 5;

#[component]
pub fn HomePage() -> impl IntoView {
    let data = use_context::<AppData>().expect("DataService context not found");

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let (alerts, set_alerts) = signal(Vec::<SystemAlert>::new());
    let (consumption, set_consumption) = signal(Vec::<ActualConsumption>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let data = data.clone();
        spawn_local(async move {
            set_orders.set(data.get_all().await);
            set_items.set(data.get_all().await);
            set_alerts.set(data.get_all().await);
            set_consumption.set(data.get_all().await);
            set_loading.set(false);
        });
    });

    let summary = Memo::new(move |_| {
        dashboard_summary(&orders.get(), &items.get(), &alerts.get(), &consumption.get())
    });
    let ticker = Memo::new(move |_| ticker_messages(&alerts.get(), TICKER_LIMIT));
    let trend = Memo::new(move |_| consumption_trend(&consumption.get()));
    let distribution = Memo::new(move |_| stock_distribution(&items.get()));

    view! {
        <div class="page page--home">
            <div class="page__header">
                <h1 class="page__title">"Quantum Inventory"</h1>
                <p class="page__subtitle">"Predictive inventory and production overview"</p>
            </div>

            <Show when=move || loading.get()>
                <div class="page__loading">"Loading..."</div>
            </Show>

            <div class="ticker">
                <For
                    each={move || ticker.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(index, _)| *index
                    children=|(_, message)| {
                        view! { <span class="ticker__item">{message}</span> }
                    }
                />
            </div>

            <section class="metric-grid">
                <MetricCard label="Total Orders" value=Signal::derive(move || summary.get().total_orders.to_string()) />
                <MetricCard label="Total Stock" value=Signal::derive(move || format_quantity(summary.get().total_stock)) />
                <MetricCard label="Reorder Alerts" value=Signal::derive(move || summary.get().reorder_alerts.to_string()) />
                <MetricCard label="Unread Alerts" value=Signal::derive(move || summary.get().unread_alerts.to_string()) />
            </section>

            <section class="panel panel--variance">
                <h2 class="panel__title">"Order Value vs Actual Cost"</h2>
                <div class="variance-row">
                    <div class="variance-row__cell">
                        <span class="variance-row__label">"Order Value"</span>
                        <span class="variance-row__value">
                            {move || format_money(summary.get().total_order_value)}
                        </span>
                    </div>
                    <div class="variance-row__cell">
                        <span class="variance-row__label">"Actual Cost"</span>
                        <span class="variance-row__value">
                            {move || format_money(summary.get().total_actual_cost)}
                        </span>
                    </div>
                    <div class="variance-row__cell">
                        <span class="variance-row__label">"Variance"</span>
                        <span class=move || variance_class(&summary.get())>
                            {move || {
                                let current = summary.get();
                                format!(
                                    "{} ({})",
                                    format_money(current.variance),
                                    format_signed_percent(current.variance_percentage),
                                )
                            }}
                        </span>
                    </div>
                </div>
            </section>

            <section class="panel panel--trend">
                <h2 class="panel__title">"Consumption Trend"</h2>
                <Show when=move || trend.get().is_empty()>
                    <p class="panel__empty">"No consumption recorded yet"</p>
                </Show>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Quantity"</th>
                            <th>"Cost"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each={move || trend.get().into_iter().enumerate().collect::<Vec<_>>()}
                            key=|(index, _)| *index
                            children=|(_, point)| {
                                view! {
                                    <tr>
                                        <td>{point.date.clone()}</td>
                                        <td>{format_quantity(point.quantity)}</td>
                                        <td>{format_money(point.cost)}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>

            <section class="panel panel--distribution">
                <h2 class="panel__title">"Stock Distribution"</h2>
                <div class="distribution">
                    <span class="badge badge--success">
                        {move || format!("In Stock: {}", distribution.get().in_stock)}
                    </span>
                    <span class="badge badge--warning">
                        {move || format!("Low Stock: {}", distribution.get().low_stock)}
                    </span>
                    <span class="badge badge--danger">
                        {move || format!("Out of Stock: {}", distribution.get().out_of_stock)}
                    </span>
                </div>
            </section>
        </div>
    }
}

fn variance_class(summary: &DashboardSummary) -> &'static str {
    if summary.is_profit() {
        "variance-row__value variance-row__value--profit"
    } else {
        "variance-row__value variance-row__value--loss"
    }
}

#[component]
fn MetricCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="metric-card">
            <span class="metric-card__label">{label}</span>
            <span class="metric-card__value">{move || value.get()}</span>
        </div>
    }
}
