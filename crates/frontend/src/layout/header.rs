use contracts::analytics::unread_count;
use contracts::domain::SystemAlert;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::shared::data::AppData;

#[component]
pub fn Header() -> impl IntoView {
    let data = use_context::<AppData>().expect("DataService context not found");

    let (unread, set_unread) = signal(0usize);

    Effect::new(move |_| {
        let data = data.clone();
        spawn_local(async move {
            let alerts: Vec<SystemAlert> = data.get_all().await;
            set_unread.set(unread_count(&alerts));
        });
    });

    view! {
        <header class="app-header">
            <div class="app-header__brand">
                <A href="/">
                    <span class="app-header__logo">"QUANTUM INVENTORY"</span>
                </A>
            </div>
            <nav class="app-header__nav">
                <A href="/inventory">"Inventory"</A>
                <A href="/production-planning">"Planning"</A>
                <A href="/actual-consumption">"Consumption"</A>
                <A href="/orders">"Orders"</A>
                <A href="/reports">"Reports"</A>
                <A href="/inventory-prediction">"Prediction"</A>
                <A href="/alerts">
                    "Alerts"
                    <Show when={move || unread.get() > 0}>
                        <span class="app-header__badge">{move || unread.get()}</span>
                    </Show>
                </A>
            </nav>
        </header>
    }
}
