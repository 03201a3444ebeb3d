//! Task Card Components
//!
//! Full card for the task list and a compact row for the dashboard.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::format::{escape_html, format_date};
use crate::models::Task;
use crate::summary::is_overdue;

/// CSS classes for a list card: `completed` and `overdue` markers
pub fn card_class(task: &Task, today: NaiveDate) -> String {
    let mut c = String::from("task-item");
    if task.is_completed() {
        c.push_str(" completed");
    }
    if is_overdue(task, today) {
        c.push_str(" overdue");
    }
    c
}

/// Escaped description markup, or `None` when there is nothing to show.
/// The text is inserted verbatim; no markup in it is interpreted.
pub fn description_html(description: Option<&str>) -> Option<String> {
    description.filter(|d| !d.trim().is_empty()).map(escape_html)
}

/// Task list card with complete / edit / delete actions
#[component]
pub fn TaskCard(task: Task, today: NaiveDate) -> impl IntoView {
    let ctx = use_app_context();
    let id = task.id;
    let class = card_class(&task, today);
    let status = task.status;
    let show_complete = !task.is_completed();

    let description = description_html(task.description.as_deref())
        .map(|html| view! { <div class="task-description" inner_html=html></div> });
    let due = task.due_date.clone().map(|d| {
        view! {
            <span><i class="fas fa-calendar"></i> " Due: " {format_date(Some(&d))}</span>
        }
    });

    view! {
        <div class=class>
            <div class="task-content">
                <div class="task-title">{task.title.clone()}</div>
                {description}
                <div class="task-meta">
                    {due}
                    <span>
                        <i class="fas fa-clock"></i>
                        " Created: "
                        {format_date(task.created_at.as_deref())}
                    </span>
                    <span>
                        <i class="fas fa-circle" style=format!("color: {}", status.color())></i>
                        " "
                        {status.as_str()}
                    </span>
                </div>
            </div>
            <div class="task-actions">
                <Show when=move || show_complete>
                    <button
                        class="task-btn btn-complete"
                        title="Complete"
                        on:click=move |_| ctx.complete_task(id)
                    >
                        <i class="fas fa-check"></i>
                    </button>
                </Show>
                <button
                    class="task-btn btn-edit"
                    title="Edit"
                    on:click=move |_| ctx.open_modal(Some(id))
                >
                    <i class="fas fa-edit"></i>
                </button>
                <DeleteConfirmButton
                    button_class="task-btn btn-delete"
                    on_confirm=Callback::new(move |_: ()| ctx.delete_task(id))
                />
            </div>
        </div>
    }
}

/// Compact dashboard row: title, due date, status
#[component]
pub fn RecentTaskItem(task: Task) -> impl IntoView {
    let due = task
        .due_date
        .as_deref()
        .map(|d| format!("Due: {} • ", format_date(Some(d))));

    view! {
        <div class="task-item recent">
            <div class="task-content">
                <div class="task-title">{task.title.clone()}</div>
                <div class="task-meta">
                    {due}
                    "Status: "
                    <strong style=format!("color: {}", task.status.color())>
                        {task.status.as_str()}
                    </strong>
                </div>
            </div>
        </div>
    }
}
