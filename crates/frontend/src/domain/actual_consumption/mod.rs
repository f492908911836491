use contracts::analytics::costs::line_cost;
use contracts::domain::ActualConsumption;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::data::AppData;
use crate::shared::date_utils::format_datetime;
use crate::shared::format::{format_money, format_quantity};
use crate::shared::forms::{parse_required_number, parse_required_text, preview_number};

#[component]
pub fn ActualConsumptionPage() -> impl IntoView {
    let data = use_context::<AppData>().expect("DataService context not found");

    let (records, set_records) = signal(Vec::<ActualConsumption>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let item_sku = RwSignal::new(String::new());
    let item_name = RwSignal::new(String::new());
    let actual_quantity = RwSignal::new(String::new());
    let actual_rate = RwSignal::new(String::new());
    let consumption_date_time = RwSignal::new(String::new());
    let unit_of_measure = RwSignal::new(String::new());

    {
        let data = data.clone();
        Effect::new(move |_| {
            let data = data.clone();
            spawn_local(async move {
                set_records.set(data.get_all().await);
                set_loading.set(false);
            });
        });
    }

    let actual_cost_preview = Memo::new(move |_| {
        line_cost(
            preview_number(&actual_quantity.get()),
            preview_number(&actual_rate.get()),
        )
    });

    let submit = {
        let data = data.clone();
        move || {
            let parsed = (|| -> Result<ActualConsumption, String> {
                Ok(ActualConsumption {
                    id: uuid::Uuid::new_v4().to_string(),
                    item_sku: item_sku.get_untracked().trim().to_string(),
                    item_name: parse_required_text("Item name", &item_name.get_untracked())?,
                    actual_quantity: parse_required_number("Actual quantity", &actual_quantity.get_untracked())?,
                    actual_rate: parse_required_number("Actual rate", &actual_rate.get_untracked())?,
                    consumption_date_time: consumption_date_time.get_untracked(),
                    unit_of_measure: unit_of_measure.get_untracked().trim().to_string(),
                })
            })();

            let record = match parsed {
                Ok(record) => record,
                Err(message) => {
                    set_error.set(Some(message));
                    return;
                }
            };
            if let Err(message) = record.validate() {
                set_error.set(Some(message));
                return;
            }

            set_error.set(None);
            let previous = records.get_untracked();
            set_records.update(|current| current.insert(0, record.clone()));
            item_sku.set(String::new());
            item_name.set(String::new());
            actual_quantity.set(String::new());
            actual_rate.set(String::new());
            consumption_date_time.set(String::new());
            unit_of_measure.set(String::new());

            let data = data.clone();
            spawn_local(async move {
                if let Err(err) = data.create(record).await {
                    log::error!("failed to save consumption record: {err}");
                    set_records.set(previous);
                    set_error.set(Some(format!("Could not save record: {err}")));
                }
            });
        }
    };

    let remove = {
        let data = data.clone();
        move |id: String| {
            let data = data.clone();
            let previous = records.get_untracked();
            set_error.set(None);
            set_records.update(|current| current.retain(|record| record.id != id));
            spawn_local(async move {
                if let Err(err) = data.delete::<ActualConsumption>(&id).await {
                    log::error!("failed to delete consumption record: {err}");
                    set_records.set(previous);
                    set_error.set(Some(format!("Could not delete record: {err}")));
                }
            });
        }
    };

    view! {
        <div class="page page--consumption">
            <div class="page__header">
                <h1 class="page__title">"Actual Consumption"</h1>
                <p class="page__subtitle">"Record what was actually used on the floor"</p>
            </div>

            <section class="panel panel--form">
                <h2 class="panel__title">"New Record"</h2>
                <Show when=move || error.get().is_some()>
                    <div class="form-error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <div class="form-grid">
                    <label class="form-field">
                        <span class="form-field__label">"Item SKU"</span>
                        <input
                            type="text"
                            prop:value=move || item_sku.get()
                            on:input=move |ev| item_sku.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Item Name"</span>
                        <input
                            type="text"
                            prop:value=move || item_name.get()
                            on:input=move |ev| item_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Actual Quantity"</span>
                        <input
                            type="number"
                            prop:value=move || actual_quantity.get()
                            on:input=move |ev| actual_quantity.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Actual Rate"</span>
                        <input
                            type="number"
                            prop:value=move || actual_rate.get()
                            on:input=move |ev| actual_rate.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Date & Time"</span>
                        <input
                            type="datetime-local"
                            prop:value=move || consumption_date_time.get()
                            on:input=move |ev| consumption_date_time.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Unit"</span>
                        <input
                            type="text"
                            prop:value=move || unit_of_measure.get()
                            on:input=move |ev| unit_of_measure.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="form-footer">
                    <span class="form-footer__preview">
                        {move || format!("Actual cost: {}", format_money(actual_cost_preview.get()))}
                    </span>
                    <button class="button button--primary" on:click=move |_| submit()>
                        "Add Record"
                    </button>
                </div>
            </section>

            <Show when=move || loading.get()>
                <div class="page__loading">"Loading..."</div>
            </Show>

            <Show when=move || !loading.get() && records.get().is_empty()>
                <div class="page__empty">"No consumption recorded"</div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"SKU"</th>
                        <th>"Item"</th>
                        <th>"Quantity"</th>
                        <th>"Rate"</th>
                        <th>"Actual Cost"</th>
                        <th>"When"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || records.get()
                        key=|record| record.id.clone()
                        children={
                            let remove = remove.clone();
                            move |record| {
                                let remove = remove.clone();
                                let remove_id = record.id.clone();
                                let unit = record.unit_of_measure.clone();
                                view! {
                                    <tr>
                                        <td>{record.item_sku.clone()}</td>
                                        <td>{record.item_name.clone()}</td>
                                        <td>{format!("{} {}", format_quantity(record.actual_quantity), unit)}</td>
                                        <td>{format_money(record.actual_rate)}</td>
                                        <td>{format_money(line_cost(record.actual_quantity, record.actual_rate))}</td>
                                        <td>{format_datetime(&record.consumption_date_time)}</td>
                                        <td>
                                            <button
                                                class="button button--small button--danger"
                                                on:click=move |_| remove(remove_id.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
