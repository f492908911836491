use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::actual_consumption::ActualConsumptionPage;
use crate::domain::alerts::AlertsPage;
use crate::domain::home::HomePage;
use crate::domain::inventory::InventoryPage;
use crate::domain::orders::OrdersPage;
use crate::domain::prediction::PredictionPage;
use crate::domain::production_planning::ProductionPlanningPage;
use crate::domain::reports::ReportsPage;
use crate::layout::{Footer, Header};

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--empty">
            <h1 class="page__title">"404"</h1>
            <p class="page__subtitle">"This route does not exist."</p>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <main class="app__main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/inventory") view=InventoryPage />
                    <Route path=path!("/production-planning") view=ProductionPlanningPage />
                    <Route path=path!("/actual-consumption") view=ActualConsumptionPage />
                    <Route path=path!("/orders") view=OrdersPage />
                    <Route path=path!("/reports") view=ReportsPage />
                    <Route path=path!("/inventory-prediction") view=PredictionPage />
                    <Route path=path!("/alerts") view=AlertsPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
