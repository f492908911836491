use contracts::prediction::{stock_vs_reorder_percent, PredictionRequest, PredictionResponse};
use contracts::shared::errors::PredictionError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::format::{format_money, format_quantity};
use crate::shared::forms::parse_required_number;
use crate::shared::prediction_api::request_prediction;

fn error_message(err: &PredictionError) -> String {
    match err {
        PredictionError::Unreachable(_) => {
            "Prediction service is unreachable. Is it running on 127.0.0.1:5000?".to_string()
        }
        PredictionError::Service { status, message } => {
            format!("Prediction service rejected the request ({status}): {message}")
        }
        PredictionError::InvalidResponse(_) => {
            "Prediction service returned a response that could not be read.".to_string()
        }
    }
}

#[component]
pub fn PredictionPage() -> impl IntoView {
    let planned_qty = RwSignal::new(String::new());
    let actual_qty = RwSignal::new(String::new());
    let planned_rate = RwSignal::new(String::new());
    let actual_rate = RwSignal::new(String::new());
    let current_stock = RwSignal::new(String::new());
    let lead_time = RwSignal::new(String::new());
    let safety_stock = RwSignal::new(String::new());

    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (result, set_result) = signal(Option::<(PredictionRequest, PredictionResponse)>::None);

    let submit = move || {
        let parsed = (|| -> Result<PredictionRequest, String> {
            Ok(PredictionRequest {
                planned_qty: parse_required_number("Planned quantity", &planned_qty.get_untracked())?,
                actual_qty: parse_required_number("Actual quantity", &actual_qty.get_untracked())?,
                planned_rate: parse_required_number("Planned rate", &planned_rate.get_untracked())?,
                actual_rate: parse_required_number("Actual rate", &actual_rate.get_untracked())?,
                current_stock: parse_required_number("Current stock", &current_stock.get_untracked())?,
                lead_time: parse_required_number("Lead time", &lead_time.get_untracked())?,
                safety_stock: parse_required_number("Safety stock", &safety_stock.get_untracked())?,
            })
        })();

        let request = match parsed {
            Ok(request) => request,
            Err(message) => {
                set_error.set(Some(message));
                return;
            }
        };

        set_error.set(None);
        set_busy.set(true);
        spawn_local(async move {
            match request_prediction(&request).await {
                Ok(response) => set_result.set(Some((request, response))),
                Err(err) => {
                    set_result.set(None);
                    set_error.set(Some(error_message(&err)));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="page page--prediction">
            <div class="page__header">
                <h1 class="page__title">"Inventory Prediction"</h1>
                <p class="page__subtitle">
                    "Forecast consumption and reorder needs from current figures"
                </p>
            </div>

            <section class="panel panel--form">
                <h2 class="panel__title">"Input"</h2>
                <Show when=move || error.get().is_some()>
                    <div class="form-error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <div class="form-grid">
                    <NumberField label="Planned Quantity" value=planned_qty />
                    <NumberField label="Actual Quantity" value=actual_qty />
                    <NumberField label="Planned Rate" value=planned_rate />
                    <NumberField label="Actual Rate" value=actual_rate />
                    <NumberField label="Current Stock" value=current_stock />
                    <NumberField label="Lead Time (days)" value=lead_time />
                    <NumberField label="Safety Stock" value=safety_stock />
                </div>
                <div class="form-footer">
                    <button
                        class="button button--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit()
                    >
                        {move || if busy.get() { "Predicting..." } else { "Predict" }}
                    </button>
                </div>
            </section>

            <Show when=move || result.get().is_some()>
                {move || {
                    result
                        .get()
                        .map(|(request, response)| {
                            let percent = stock_vs_reorder_percent(
                                request.current_stock,
                                response.reorder_level,
                            );
                            view! {
                                <section class="panel panel--result">
                                    <h2 class="panel__title">"Forecast"</h2>
                                    <Show when={
                                        let reorder = response.reorder_required();
                                        move || reorder
                                    }>
                                        <div class="reorder-banner">"REORDER REQUIRED"</div>
                                    </Show>

                                    <div class="metric-grid">
                                        <div class="metric-card">
                                            <span class="metric-card__label">"Predicted Consumption"</span>
                                            <span class="metric-card__value">
                                                {format_quantity(response.predicted_consumption)}
                                            </span>
                                        </div>
                                        <div class="metric-card">
                                            <span class="metric-card__label">"Reorder Level"</span>
                                            <span class="metric-card__value">
                                                {format_quantity(response.reorder_level)}
                                            </span>
                                        </div>
                                        <div class="metric-card">
                                            <span class="metric-card__label">"Reorder Quantity"</span>
                                            <span class="metric-card__value">
                                                {format_quantity(response.reorder_quantity)}
                                            </span>
                                        </div>
                                        <div class="metric-card">
                                            <span class="metric-card__label">"Cost Variance"</span>
                                            <span class="metric-card__value">
                                                {format_money(response.variance)}
                                            </span>
                                        </div>
                                    </div>

                                    <div class="stock-bar">
                                        <div class="stock-bar__labels">
                                            <span>"Stock vs Reorder Level"</span>
                                            <span>{format!("{percent:.0}%")}</span>
                                        </div>
                                        <div class="stock-bar__track">
                                            <div
                                                class="stock-bar__fill stock-bar__fill--ok"
                                                style=format!("width: {percent:.0}%")
                                            ></div>
                                        </div>
                                    </div>

                                    <dl class="card__stats">
                                        <dt>"Planned Cost"</dt>
                                        <dd>{format_money(request.planned_cost())}</dd>
                                        <dt>"Actual Cost"</dt>
                                        <dd>{format_money(request.actual_cost())}</dd>
                                    </dl>
                                </section>
                            }
                        })
                }}
            </Show>
        </div>
    }
}

#[component]
fn NumberField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                type="number"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
