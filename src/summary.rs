//! Client-side Derivations
//!
//! Overdue rule, dashboard quick stats and list badges. All computed from a
//! freshly fetched task set, never patched incrementally.

use chrono::{Duration, NaiveDate};

use crate::format::parse_date;
use crate::models::{Task, TaskStatus};

/// Due date strictly before `today` and not completed.
/// Unparseable due dates never count as overdue.
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    if task.is_completed() {
        return false;
    }
    task.due_date
        .as_deref()
        .and_then(parse_date)
        .is_some_and(|due| due < today)
}

/// Open task due between today and `today + days`, inclusive
pub fn is_due_within(task: &Task, today: NaiveDate, days: i64) -> bool {
    if task.is_completed() {
        return false;
    }
    let horizon = today + Duration::days(days);
    task.due_date
        .as_deref()
        .and_then(parse_date)
        .is_some_and(|due| due >= today && due <= horizon)
}

/// Dashboard quick stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuickStats {
    pub overdue: usize,
    pub due_soon: usize,
    /// Shown as "High Priority"; there is no priority field, so this is every open task
    pub open: usize,
}

impl QuickStats {
    pub fn compute(tasks: &[Task], today: NaiveDate, due_soon_days: i64) -> Self {
        Self {
            overdue: tasks.iter().filter(|t| is_overdue(t, today)).count(),
            due_soon: tasks.iter().filter(|t| is_due_within(t, today, due_soon_days)).count(),
            open: tasks.iter().filter(|t| !t.is_completed()).count(),
        }
    }
}

/// Counts shown on the task list filter badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Badges {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl Badges {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let count = |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count();
        Self {
            total: tasks.len(),
            pending: count(TaskStatus::Pending),
            completed: count(TaskStatus::Completed),
        }
    }
}

/// First `limit` tasks of an already newest-first list
pub fn recent_tasks(tasks: Vec<Task>, limit: usize) -> Vec<Task> {
    tasks.into_iter().take(limit).collect()
}
