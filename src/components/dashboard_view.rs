//! Dashboard Section
//!
//! Statistic cards, quick stats, recent tasks and charts. Data comes from
//! `AppContext::load_dashboard`; this component only renders the snapshot.

use leptos::prelude::*;

use crate::components::{ChartGrid, RecentTaskItem};
use crate::models::Statistics;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::summary::QuickStats;

#[component]
fn StatCard(
    label: &'static str,
    icon: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-icon"><i class=icon></i></div>
            <div class="stat-info">
                <h3>{move || value.get()}</h3>
                <p>{label}</p>
            </div>
        </div>
    }
}

#[component]
pub fn DashboardView() -> impl IntoView {
    let store = use_app_store();
    let dashboard = store.dashboard();

    let stat = move |pick: fn(&Statistics) -> String| {
        Signal::derive(move || {
            dashboard.with(|d| d.statistics.as_ref().map(pick).unwrap_or_else(|| "0".to_string()))
        })
    };
    let quick = move |pick: fn(&QuickStats) -> usize| {
        Signal::derive(move || dashboard.with(|d| pick(&d.quick).to_string()))
    };

    let recent = move || dashboard.with(|d| d.recent.clone());
    let charts = Signal::derive(move || dashboard.with(|d| d.charts.clone()));

    view! {
        <section class="content-section dashboard">
            <div class="stats-grid">
                <StatCard label="Total Tasks" icon="fas fa-list" value=stat(|s| s.total_tasks.to_string()) />
                <StatCard label="Pending" icon="fas fa-hourglass-half" value=stat(|s| s.pending_tasks.to_string()) />
                <StatCard label="Completed" icon="fas fa-check-circle" value=stat(|s| s.completed_tasks.to_string()) />
                <StatCard label="Completion Rate" icon="fas fa-percentage" value=stat(|s| format!("{}%", s.completion_rate)) />
            </div>

            <div class="quick-stats">
                <StatCard label="Overdue" icon="fas fa-exclamation-circle" value=quick(|q| q.overdue) />
                <StatCard label="Due This Week" icon="fas fa-calendar-week" value=quick(|q| q.due_soon) />
                <StatCard label="High Priority" icon="fas fa-flag" value=quick(|q| q.open) />
            </div>

            <div class="dashboard-grid">
                <div class="card recent-tasks">
                    <h3>"Recent Tasks"</h3>
                    <Show
                        when=move || dashboard.with(|d| !d.recent.is_empty())
                        fallback=|| view! { <p class="empty-note">"No tasks yet"</p> }
                    >
                        <For
                            each=recent
                            key=|task| (task.id, task.title.clone(), task.due_date.clone(), task.status)
                            children=move |task| view! { <RecentTaskItem task=task /> }
                        />
                    </Show>
                </div>

                <div class="card charts">
                    <h3>"Analytics Overview"</h3>
                    <Show
                        when=move || charts.with(|c| !c.is_empty())
                        fallback=|| view! { <p class="empty-note">"No chart data yet"</p> }
                    >
                        <ChartGrid charts=charts />
                    </Show>
                </div>
            </div>
        </section>
    }
}
