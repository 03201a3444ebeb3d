//! Analytics Section
//!
//! Placeholder; entering the section only shows a notification.

use leptos::prelude::*;

#[component]
pub fn AnalyticsView() -> impl IntoView {
    view! {
        <section class="content-section analytics">
            <div class="card empty">
                <i class="fas fa-chart-bar"></i>
                <h3>"Analytics"</h3>
                <p>"Detailed insights will appear here."</p>
            </div>
        </section>
    }
}
