//! Chart Grid Component

use leptos::prelude::*;

use crate::models::ChartSet;

/// Server-rendered chart images; absent slots are not shown
#[component]
pub fn ChartGrid(#[prop(into)] charts: Signal<ChartSet>) -> impl IntoView {
    view! {
        <div class="charts-grid">
            <For
                each=move || charts.get().images()
                key=|chart| chart.data_url.clone()
                children=move |chart| {
                    view! {
                        <div class="chart-card">
                            <h4>{chart.title}</h4>
                            <img src=chart.data_url alt=chart.alt />
                        </div>
                    }
                }
            />
        </div>
    }
}
