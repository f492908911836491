use contracts::analytics::stock::{stock_level_percent, stock_status, StockStatus};
use contracts::domain::InventoryItem;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::data::AppData;
use crate::shared::format::format_quantity;

fn status_class(status: StockStatus) -> &'static str {
    match status {
        StockStatus::InStock => "badge badge--success",
        StockStatus::LowStock => "badge badge--warning",
        StockStatus::OutOfStock => "badge badge--danger",
    }
}

fn bar_class(percent: f64) -> &'static str {
    if percent < 30.0 {
        "stock-bar__fill stock-bar__fill--danger"
    } else if percent < 60.0 {
        "stock-bar__fill stock-bar__fill--warning"
    } else {
        "stock-bar__fill stock-bar__fill--ok"
    }
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    let data = use_context::<AppData>().expect("DataService context not found");

    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let data = data.clone();
        spawn_local(async move {
            set_items.set(data.get_all().await);
            set_loading.set(false);
        });
    });

    view! {
        <div class="page page--inventory">
            <div class="page__header">
                <h1 class="page__title">"Inventory Items"</h1>
                <p class="page__subtitle">
                    "Complete overview of all inventory items and stock levels"
                </p>
            </div>

            <Show when=move || loading.get()>
                <div class="page__loading">"Loading..."</div>
            </Show>

            <Show when=move || !loading.get() && items.get().is_empty()>
                <div class="page__empty">"No inventory items found"</div>
            </Show>

            <section class="card-grid">
                <For
                    each=move || items.get()
                    key=|item| item.id.clone()
                    children=move |item| {
                        let status = stock_status(item.current_stock, item.safety_stock);
                        let percent = stock_level_percent(item.current_stock, item.safety_stock);
                        let unit = item.unit_of_measure.clone();
                        view! {
                            <div class="card card--item">
                                <div class="card__header">
                                    <h3 class="card__title">{item.item_name.clone()}</h3>
                                    <span class=status_class(status)>{status.label()}</span>
                                </div>
                                <Show when={
                                    let description = item.description.clone();
                                    move || !description.is_empty()
                                }>
                                    <p class="card__description">{item.description.clone()}</p>
                                </Show>

                                <div class="stock-bar">
                                    <div class="stock-bar__labels">
                                        <span>"Stock Level"</span>
                                        <span>{format!("{percent:.0}%")}</span>
                                    </div>
                                    <div class="stock-bar__track">
                                        <div
                                            class=bar_class(percent)
                                            style=format!("width: {percent:.0}%")
                                        ></div>
                                    </div>
                                </div>

                                <dl class="card__stats">
                                    <dt>"Current Stock"</dt>
                                    <dd>{format!("{} {}", format_quantity(item.current_stock), unit)}</dd>
                                    <dt>"Safety Stock"</dt>
                                    <dd>{format!("{} {}", format_quantity(item.safety_stock), unit)}</dd>
                                    <dt>"Lead Time"</dt>
                                    <dd>{format!("{} days", format_quantity(item.lead_time))}</dd>
                                    <dt>"Planned Rate"</dt>
                                    <dd>{format_quantity(item.planned_rate)}</dd>
                                </dl>
                            </div>
                        }
                    }
                />
            </section>
        </div>
    }
}
