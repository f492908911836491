use contracts::analytics::costs::line_cost;
use contracts::domain::ProductionPlan;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::data::AppData;
use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::format::{format_money, format_quantity};
use crate::shared::forms::{parse_required_number, parse_required_text, preview_number};

#[component]
pub fn ProductionPlanningPage() -> impl IntoView {
    let data = use_context::<AppData>().expect("DataService context not found");

    let (plans, set_plans) = signal(Vec::<ProductionPlan>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let plan_identifier = RwSignal::new(String::new());
    let item_name = RwSignal::new(String::new());
    let planned_quantity = RwSignal::new(String::new());
    let planned_rate = RwSignal::new(String::new());
    let planning_date = RwSignal::new(today_iso());
    let notes = RwSignal::new(String::new());

    {
        let data = data.clone();
        Effect::new(move |_| {
            let data = data.clone();
            spawn_local(async move {
                set_plans.set(data.get_all().await);
                set_loading.set(false);
            });
        });
    }

    let planned_cost_preview = Memo::new(move |_| {
        line_cost(
            preview_number(&planned_quantity.get()),
            preview_number(&planned_rate.get()),
        )
    });

    let submit = {
        let data = data.clone();
        move || {
            let parsed = (|| -> Result<ProductionPlan, String> {
                Ok(ProductionPlan {
                    id: uuid::Uuid::new_v4().to_string(),
                    plan_identifier: parse_required_text("Plan identifier", &plan_identifier.get_untracked())?,
                    item_name: parse_required_text("Item name", &item_name.get_untracked())?,
                    planned_quantity: parse_required_number("Planned quantity", &planned_quantity.get_untracked())?,
                    planned_rate: parse_required_number("Planned rate", &planned_rate.get_untracked())?,
                    planning_date: planning_date.get_untracked(),
                    notes: notes.get_untracked().trim().to_string(),
                })
            })();

            let plan = match parsed {
                Ok(plan) => plan,
                Err(message) => {
                    set_error.set(Some(message));
                    return;
                }
            };
            if let Err(message) = plan.validate() {
                set_error.set(Some(message));
                return;
            }

            set_error.set(None);
            let previous = plans.get_untracked();
            set_plans.update(|current| current.insert(0, plan.clone()));
            plan_identifier.set(String::new());
            item_name.set(String::new());
            planned_quantity.set(String::new());
            planned_rate.set(String::new());
            planning_date.set(today_iso());
            notes.set(String::new());

            let data = data.clone();
            spawn_local(async move {
                if let Err(err) = data.create(plan).await {
                    log::error!("failed to save production plan: {err}");
                    set_plans.set(previous);
                    set_error.set(Some(format!("Could not save plan: {err}")));
                }
            });
        }
    };

    let remove = {
        let data = data.clone();
        move |id: String| {
            let data = data.clone();
            let previous = plans.get_untracked();
            set_error.set(None);
            set_plans.update(|current| current.retain(|plan| plan.id != id));
            spawn_local(async move {
                if let Err(err) = data.delete::<ProductionPlan>(&id).await {
                    log::error!("failed to delete production plan: {err}");
                    set_plans.set(previous);
                    set_error.set(Some(format!("Could not delete plan: {err}")));
                }
            });
        }
    };

    view! {
        <div class="page page--planning">
            <div class="page__header">
                <h1 class="page__title">"Production Planning"</h1>
                <p class="page__subtitle">"Plan production batches and budgeted material cost"</p>
            </div>

            <section class="panel panel--form">
                <h2 class="panel__title">"New Plan"</h2>
                <Show when=move || error.get().is_some()>
                    <div class="form-error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <div class="form-grid">
                    <label class="form-field">
                        <span class="form-field__label">"Plan Identifier"</span>
                        <input
                            type="text"
                            prop:value=move || plan_identifier.get()
                            on:input=move |ev| plan_identifier.set(event_target_value(&ev))
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
                        <span class="form-field__label">"Planned Quantity"</span>
                        <input
                            type="number"
                            prop:value=move || planned_quantity.get()
                            on:input=move |ev| planned_quantity.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Planned Rate"</span>
                        <input
                            type="number"
                            prop:value=move || planned_rate.get()
                            on:input=move |ev| planned_rate.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Planning Date"</span>
                        <input
                            type="date"
                            prop:value=move || planning_date.get()
                            on:input=move |ev| planning_date.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Notes"</span>
                        <input
                            type="text"
                            prop:value=move || notes.get()
                            on:input=move |ev| notes.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="form-footer">
                    <span class="form-footer__preview">
                        {move || format!("Planned cost: {}", format_money(planned_cost_preview.get()))}
                    </span>
                    <button class="button button--primary" on:click=move |_| submit()>
                        "Add Plan"
                    </button>
                </div>
            </section>

            <Show when=move || loading.get()>
                <div class="page__loading">"Loading..."</div>
            </Show>

            <Show when=move || !loading.get() && plans.get().is_empty()>
                <div class="page__empty">"No production plans found"</div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Plan"</th>
                        <th>"Item"</th>
                        <th>"Quantity"</th>
                        <th>"Rate"</th>
                        <th>"Planned Cost"</th>
                        <th>"Date"</th>
                        <th>"Notes"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || plans.get()
                        key=|plan| plan.id.clone()
                        children={
                            let remove = remove.clone();
                            move |plan| {
                                let remove = remove.clone();
                                let remove_id = plan.id.clone();
                                view! {
                                    <tr>
                                        <td>{plan.plan_identifier.clone()}</td>
                                        <td>{plan.item_name.clone()}</td>
                                        <td>{format_quantity(plan.planned_quantity)}</td>
                                        <td>{format_money(plan.planned_rate)}</td>
                                        <td>{format_money(line_cost(plan.planned_quantity, plan.planned_rate))}</td>
                                        <td>{format_date(&plan.planning_date)}</td>
                                        <td>{plan.notes.clone()}</td>
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
