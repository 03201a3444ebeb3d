//! Task List Section
//!
//! Search box, sort controls, status filter badges and the task cards.

use leptos::prelude::*;

use crate::components::TaskCard;
use crate::context::use_app_context;
use crate::format::today;
use crate::models::{SortField, TaskStatus};
use crate::store::{displayed_tasks, AppStateStoreFields};

/// Status filter buttons and their labels
const FILTERS: [(Option<TaskStatus>, &str); 3] = [
    (None, "All"),
    (Some(TaskStatus::Pending), "Pending"),
    (Some(TaskStatus::Completed), "Completed"),
];

#[component]
fn TaskToolbar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store();

    view! {
        <div class="task-toolbar">
            <div class="search-box">
                <i class="fas fa-search"></i>
                <input
                    id="search-input"
                    type="text"
                    placeholder="Search tasks..."
                    prop:value=move || store.search_keyword().get()
                    on:input=move |ev| ctx.search_input(event_target_value(&ev))
                />
            </div>

            <select
                id="sort-by"
                on:change=move |ev| {
                    let field = SortField::parse(&event_target_value(&ev)).unwrap_or_default();
                    ctx.set_sort(field);
                }
            >
                {SortField::ALL.into_iter().map(|field| view! {
                    <option
                        value=field.as_str()
                        prop:selected=move || store.sort_by().get() == field
                    >
                        {field.label()}
                    </option>
                }).collect_view()}
            </select>

            <select
                id="sort-order"
                on:change=move |ev| ctx.set_descending(event_target_value(&ev) == "false")
            >
                <option value="true" prop:selected=move || !store.descending().get()>"Ascending"</option>
                <option value="false" prop:selected=move || store.descending().get()>"Descending"</option>
            </select>

            <div class="filter-badges">
                {FILTERS.into_iter().map(|(status, label)| {
                    let count = move || {
                        let badges = store.badges().get();
                        match status {
                            None => badges.total,
                            Some(TaskStatus::Pending) => badges.pending,
                            Some(TaskStatus::Completed) => badges.completed,
                        }
                    };
                    view! {
                        <button
                            class=move || {
                                if store.status_filter().get() == status { "filter-btn active" } else { "filter-btn" }
                            }
                            on:click=move |_| ctx.set_status_filter(status)
                        >
                            {label}
                            <span class="badge">{count}</span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store();

    let tasks = move || {
        let search = store.search_results().get();
        displayed_tasks(&store.current_tasks().get(), search.as_deref())
    };
    let is_empty = move || tasks().is_empty();

    view! {
        <section class="content-section tasks">
            <TaskToolbar />

            <div id="tasks-container" class="tasks-container">
                {move || if store.list_loading().get() {
                    view! { <div class="loading">"Loading..."</div> }.into_any()
                } else if is_empty() {
                    view! {
                        <div class="empty">
                            <i class="fas fa-tasks"></i>
                            <h3>"No tasks found"</h3>
                            <p>"Get started by creating your first task!"</p>
                            <button class="btn btn-primary" on:click=move |_| ctx.open_modal(None)>
                                <i class="fas fa-plus"></i>
                                " Create Task"
                            </button>
                        </div>
                    }.into_any()
                } else {
                    let today = today();
                    view! {
                        <For
                            each=tasks
                            key=|task| (
                                task.id,
                                task.title.clone(),
                                task.description.clone(),
                                task.due_date.clone(),
                                task.status,
                            )
                            children=move |task| view! { <TaskCard task=task today=today /> }
                        />
                    }.into_any()
                }}
            </div>
        </section>
    }
}
