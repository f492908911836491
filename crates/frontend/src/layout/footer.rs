use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <span class="app-footer__text">
                "Quantum Inventory - predictive logistics dashboard"
            </span>
            <span class="app-footer__text app-footer__text--muted">
                "Local data only; prediction service at 127.0.0.1:5000"
            </span>
        </footer>
    }
}
