use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::data::{AppData, BrowserStorage, DataService};

#[component]
pub fn App() -> impl IntoView {
    let data: AppData = DataService::new(BrowserStorage::new());

    // One-time demo dataset; a persisted sentinel keeps reloads from
    // clobbering user edits.
    if let Err(err) = data.seed_if_empty() {
        log::warn!("demo data seeding skipped: {err}");
    }

    // Provide the store to every page via context.
    provide_context(data);

    view! {
        <AppRoutes />
    }
}
