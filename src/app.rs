//! Task Dashboard App
//!
//! Root component: sidebar, section header, active section, dialog and toasts.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AnalyticsView, DashboardView, NavSidebar, TaskListView, TaskModal, ToastStack};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields, Section};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_document();
    web_sys::console::log_1(&format!("[APP] API base {}", config.api_base).into());

    let store = Store::new(AppState::new());
    let ctx = AppContext::new(store, config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Dashboard is the landing section
    Effect::new(move |_| {
        ctx.load_dashboard();
    });

    let section = store.section();

    view! {
        <div class="app-container">
            <NavSidebar />

            <main class="main-content">
                <header class="page-header">
                    <div>
                        <h1 id="page-title">{move || section.get().title()}</h1>
                        <p id="page-subtitle">{move || section.get().subtitle()}</p>
                    </div>
                    <button class="btn btn-primary" on:click=move |_| ctx.open_modal(None)>
                        <i class="fas fa-plus"></i>
                        " Add Task"
                    </button>
                </header>

                {move || match section.get() {
                    Section::Dashboard => view! { <DashboardView /> }.into_any(),
                    Section::Tasks => view! { <TaskListView /> }.into_any(),
                    Section::Analytics => view! { <AnalyticsView /> }.into_any(),
                }}
            </main>

            <TaskModal />
            <ToastStack />
        </div>
    }
}
