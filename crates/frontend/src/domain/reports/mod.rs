use contracts::analytics::costs::{cost_analysis, cost_totals, CostTotals};
use contracts::analytics::orders::order_totals;
use contracts::domain::{ActualConsumption, Order, ProductionPlan};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::data::AppData;
use crate::shared::format::{format_money, format_quantity, format_signed_percent};

fn totals_class(totals: &CostTotals) -> &'static str {
    if totals.is_profit() {
        "metric-card__value metric-card__value--profit"
    } else {
        "metric-card__value metric-card__value--loss"
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let data = use_context::<AppData>().expect("DataService context not found");

    let (plans, set_plans) = signal(Vec::<ProductionPlan>::new());
    let (consumption, set_consumption) = signal(Vec::<ActualConsumption>::new());
    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let data = data.clone();
        spawn_local(async move {
            set_plans.set(data.get_all().await);
            set_consumption.set(data.get_all().await);
            set_orders.set(data.get_all().await);
            set_loading.set(false);
        });
    });

    let rows = Memo::new(move |_| cost_analysis(&plans.get(), &consumption.get()));
    let totals = Memo::new(move |_| cost_totals(&rows.get()));
    let order_summary = Memo::new(move |_| order_totals(&orders.get()));

    view! {
        <div class="page page--reports">
            <div class="page__header">
                <h1 class="page__title">"Reports"</h1>
                <p class="page__subtitle">"Planned vs actual cost by item"</p>
            </div>

            <Show when=move || loading.get()>
                <div class="page__loading">"Loading..."</div>
            </Show>

            <section class="metric-grid">
                <div class="metric-card">
                    <span class="metric-card__label">"Planned Cost"</span>
                    <span class="metric-card__value">
                        {move || format_money(totals.get().planned_cost)}
                    </span>
                </div>
                <div class="metric-card">
                    <span class="metric-card__label">"Actual Cost"</span>
                    <span class="metric-card__value">
                        {move || format_money(totals.get().actual_cost)}
                    </span>
                </div>
                <div class="metric-card">
                    <span class="metric-card__label">"Variance"</span>
                    <span class=move || totals_class(&totals.get())>
                        {move || {
                            let current = totals.get();
                            format!(
                                "{} ({})",
                                format_money(current.variance),
                                format_signed_percent(current.variance_percentage),
                            )
                        }}
                    </span>
                </div>
            </section>

            <section class="panel">
                <h2 class="panel__title">"Cost Analysis"</h2>
                <Show when=move || !loading.get() && rows.get().is_empty()>
                    <p class="panel__empty">"Nothing planned or consumed yet"</p>
                </Show>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Item"</th>
                            <th>"Planned Cost"</th>
                            <th>"Actual Cost"</th>
                            <th>"Variance"</th>
                            <th>"Variance %"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|row| row.item_name.clone()
                            children=|row| {
                                let status_class = if row.is_profit() {
                                    "badge badge--success"
                                } else {
                                    "badge badge--danger"
                                };
                                view! {
                                    <tr>
                                        <td>{row.item_name.clone()}</td>
                                        <td>{format_money(row.planned_cost)}</td>
                                        <td>{format_money(row.actual_cost)}</td>
                                        <td>{format_money(row.variance)}</td>
                                        <td>{format_signed_percent(row.variance_percentage)}</td>
                                        <td>
                                            <span class=status_class>{row.status_label()}</span>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>

            <section class="panel">
                <h2 class="panel__title">"Order Summary"</h2>
                <div class="variance-row">
                    <div class="variance-row__cell">
                        <span class="variance-row__label">"Orders"</span>
                        <span class="variance-row__value">{move || order_summary.get().count}</span>
                    </div>
                    <div class="variance-row__cell">
                        <span class="variance-row__label">"Total Quantity"</span>
                        <span class="variance-row__value">
                            {move || format_quantity(order_summary.get().total_quantity)}
                        </span>
                    </div>
                    <div class="variance-row__cell">
                        <span class="variance-row__label">"Total Value"</span>
                        <span class="variance-row__value">
                            {move || format_money(order_summary.get().total_value)}
                        </span>
                    </div>
                </div>
            </section>
        </div>
    }
}
