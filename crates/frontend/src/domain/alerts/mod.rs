use contracts::analytics::alerts::{sorted_newest_first, unread_count, AlertSeverity};
use contracts::domain::SystemAlert;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;

use crate::shared::data::AppData;
use crate::shared::date_utils::format_datetime;

fn severity_class(severity: &str) -> &'static str {
    match AlertSeverity::parse(severity) {
        AlertSeverity::Critical => "badge badge--danger",
        AlertSeverity::High => "badge badge--danger",
        AlertSeverity::Warning => "badge badge--warning",
        AlertSeverity::Info => "badge badge--info",
        AlertSeverity::Other => "badge",
    }
}

#[component]
pub fn AlertsPage() -> impl IntoView {
    let data = use_context::<AppData>().expect("DataService context not found");

    let (alerts, set_alerts) = signal(Vec::<SystemAlert>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    {
        let data = data.clone();
        Effect::new(move |_| {
            let data = data.clone();
            spawn_local(async move {
                set_alerts.set(data.get_all().await);
                set_loading.set(false);
            });
        });
    }

    let feed = Memo::new(move |_| sorted_newest_first(&alerts.get()));
    let unread = Memo::new(move |_| unread_count(&alerts.get()));

    let mark_read = {
        let data = data.clone();
        move |id: String| {
            let data = data.clone();
            let previous = alerts.get_untracked();
            set_error.set(None);
            // Flip locally first; the store write confirms or rolls back.
            set_alerts.update(|current| {
                if let Some(alert) = current.iter_mut().find(|alert| alert.id == id) {
                    alert.is_read = true;
                }
            });
            spawn_local(async move {
                if let Err(err) = data.update::<SystemAlert>(&id, json!({ "isRead": true })).await {
                    log::error!("failed to mark alert read: {err}");
                    set_alerts.set(previous);
                    set_error.set(Some(format!("Could not mark alert as read: {err}")));
                }
            });
        }
    };

    let remove = {
        let data = data.clone();
        move |id: String| {
            let data = data.clone();
            let previous = alerts.get_untracked();
            set_error.set(None);
            set_alerts.update(|current| current.retain(|alert| alert.id != id));
            spawn_local(async move {
                if let Err(err) = data.delete::<SystemAlert>(&id).await {
                    log::error!("failed to delete alert: {err}");
                    set_alerts.set(previous);
                    set_error.set(Some(format!("Could not delete alert: {err}")));
                }
            });
        }
    };

    view! {
        <div class="page page--alerts">
            <div class="page__header">
                <h1 class="page__title">"System Alerts"</h1>
                <p class="page__subtitle">
                    {move || format!("{} unread", unread.get())}
                </p>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="form-error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <Show when=move || loading.get()>
                <div class="page__loading">"Loading..."</div>
            </Show>

            <Show when=move || !loading.get() && feed.get().is_empty()>
                <div class="page__empty">"No alerts"</div>
            </Show>

            <ul class="alert-list">
                <For
                    each=move || feed.get()
                    key=|alert| (alert.id.clone(), alert.is_read)
                    children={
                        let mark_read = mark_read.clone();
                        let remove = remove.clone();
                        move |alert| {
                            let mark_read = mark_read.clone();
                            let remove = remove.clone();
                            let mark_id = alert.id.clone();
                            let remove_id = alert.id.clone();
                            let is_read = alert.is_read;
                            view! {
                                <li class=if is_read { "alert-list__item" } else { "alert-list__item alert-list__item--unread" }>
                                    <div class="alert-list__meta">
                                        <span class=severity_class(&alert.severity)>
                                            {alert.severity.clone()}
                                        </span>
                                        <span class="alert-list__kind">{alert.kind.clone()}</span>
                                        <span class="alert-list__time">
                                            {format_datetime(&alert.generated_at)}
                                        </span>
                                    </div>
                                    <p class="alert-list__message">{alert.message.clone()}</p>
                                    <div class="alert-list__actions">
                                        <Show when=move || !is_read>
                                            <button
                                                class="button button--small"
                                                on:click={
                                                    let mark_read = mark_read.clone();
                                                    let mark_id = mark_id.clone();
                                                    move |_| mark_read(mark_id.clone())
                                                }
                                            >
                                                "Mark as read"
                                            </button>
                                        </Show>
                                        <button
                                            class="button button--small button--danger"
                                            on:click=move |_| remove(remove_id.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </li>
                            }
                        }
                    }
                />
            </ul>
        </div>
    }
}
