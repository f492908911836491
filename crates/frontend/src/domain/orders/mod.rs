use contracts::analytics::orders::order_totals;
use contracts::domain::{Order, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::data::AppData;
use crate::shared::date_utils::format_date;
use crate::shared::format::{format_money, format_quantity};

fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Delivered => "badge badge--success",
        OrderStatus::Pending => "badge badge--warning",
        OrderStatus::Cancelled => "badge badge--danger",
        OrderStatus::Unknown => "badge",
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let data = use_context::<AppData>().expect("DataService context not found");

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let data = data.clone();
        spawn_local(async move {
            set_orders.set(data.get_all().await);
            set_loading.set(false);
        });
    });

    let totals = Memo::new(move |_| order_totals(&orders.get()));

    view! {
        <div class="page page--orders">
            <div class="page__header">
                <h1 class="page__title">"Orders"</h1>
                <p class="page__subtitle">"Purchase orders and their delivery status"</p>
            </div>

            <section class="metric-grid">
                <div class="metric-card">
                    <span class="metric-card__label">"Orders"</span>
                    <span class="metric-card__value">{move || totals.get().count}</span>
                </div>
                <div class="metric-card">
                    <span class="metric-card__label">"Total Quantity"</span>
                    <span class="metric-card__value">
                        {move || format_quantity(totals.get().total_quantity)}
                    </span>
                </div>
                <div class="metric-card">
                    <span class="metric-card__label">"Total Value"</span>
                    <span class="metric-card__value">
                        {move || format_money(totals.get().total_value)}
                    </span>
                </div>
            </section>

            <Show when=move || loading.get()>
                <div class="page__loading">"Loading..."</div>
            </Show>

            <Show when=move || !loading.get() && orders.get().is_empty()>
                <div class="page__empty">"No orders found"</div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Order #"</th>
                        <th>"Vendor"</th>
                        <th>"Quantity"</th>
                        <th>"Value"</th>
                        <th>"Status"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || orders.get()
                        key=|order| order.id.clone()
                        children=|order| {
                            view! {
                                <tr>
                                    <td>{order.order_number.clone()}</td>
                                    <td>{order.vendor.clone()}</td>
                                    <td>{format_quantity(order.total_quantity)}</td>
                                    <td>{format_money(order.total_value)}</td>
                                    <td>
                                        <span class=status_class(order.status)>
                                            {order.status.label()}
                                        </span>
                                    </td>
                                    <td>{format_date(&order.created_at)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
