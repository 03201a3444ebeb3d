//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is the
//! only owner of UI state; components reach it through `use_app_store`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::form::TaskForm;
use crate::models::{ChartSet, SortField, Statistics, Task, TaskStatus};
use crate::summary::{Badges, QuickStats};
use crate::toast::ToastQueue;

/// Top-level view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Tasks,
    Analytics,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Dashboard, Section::Tasks, Section::Analytics];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Tasks => "All Tasks",
            Section::Analytics => "Analytics",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Section::Dashboard => "Manage your tasks efficiently",
            Section::Tasks => "View and manage all your tasks",
            Section::Analytics => "Detailed insights and analytics",
        }
    }

    /// Font Awesome icon for the navigation entry
    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "fas fa-home",
            Section::Tasks => "fas fa-tasks",
            Section::Analytics => "fas fa-chart-bar",
        }
    }
}

/// Which views to reload after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPlan {
    pub dashboard: bool,
    pub tasks: bool,
}

impl RefreshPlan {
    /// Dashboard always; task list only while it is on screen
    pub fn after_mutation(current: Section) -> Self {
        Self {
            dashboard: true,
            tasks: current == Section::Tasks,
        }
    }
}

/// What a search input value asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchIntent {
    Search(String),
    ListAll,
}

impl SearchIntent {
    pub fn from_input(raw: &str) -> Self {
        let keyword = raw.trim();
        if keyword.is_empty() {
            SearchIntent::ListAll
        } else {
            SearchIntent::Search(keyword.to_string())
        }
    }
}

/// Create/edit dialog state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open { editing: Option<u32> },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    pub fn heading(&self) -> &'static str {
        match self {
            ModalState::Open { editing: Some(_) } => "Edit Task",
            _ => "Add New Task",
        }
    }
}

/// Latest dashboard data; each part is replaced as its fetch resolves
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub statistics: Option<Statistics>,
    pub recent: Vec<Task>,
    pub charts: ChartSet,
    pub quick: QuickStats,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last successful list fetch; always replaced whole
    pub current_tasks: Vec<Task>,
    /// Search results shown instead of `current_tasks` while a keyword is active
    pub search_results: Option<Vec<Task>>,
    pub section: Section,
    pub sort_by: SortField,
    pub descending: bool,
    pub status_filter: Option<TaskStatus>,
    pub search_keyword: String,
    /// Task list request in flight
    pub list_loading: bool,
    pub badges: Badges,
    pub dashboard: DashboardSnapshot,
    pub modal: ModalState,
    pub form: TaskForm,
    pub toasts: ToastQueue,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Tasks to render in the list: search results take precedence over the cache
pub fn displayed_tasks(current: &[Task], search_results: Option<&[Task]>) -> Vec<Task> {
    search_results.unwrap_or(current).to_vec()
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the cached task list and recompute badges
pub fn store_replace_tasks(store: &AppStore, tasks: Vec<Task>) {
    store.badges().set(Badges::from_tasks(&tasks));
    store.current_tasks().set(tasks);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            due_date: None,
            status: TaskStatus::Pending,
            created_at: None,
        }
    }

    #[test]
    fn test_section_titles() {
        assert_eq!(Section::default(), Section::Dashboard);
        assert_eq!(Section::Tasks.title(), "All Tasks");
        assert_eq!(Section::Analytics.subtitle(), "Detailed insights and analytics");
    }

    #[test]
    fn test_refresh_plan_after_mutation() {
        assert_eq!(
            RefreshPlan::after_mutation(Section::Dashboard),
            RefreshPlan { dashboard: true, tasks: false }
        );
        assert_eq!(
            RefreshPlan::after_mutation(Section::Tasks),
            RefreshPlan { dashboard: true, tasks: true }
        );
        assert_eq!(
            RefreshPlan::after_mutation(Section::Analytics),
            RefreshPlan { dashboard: true, tasks: false }
        );
    }

    #[test]
    fn test_search_intent() {
        assert_eq!(
            SearchIntent::from_input("  groceries "),
            SearchIntent::Search("groceries".to_string())
        );
        assert_eq!(SearchIntent::from_input("   "), SearchIntent::ListAll);
        assert_eq!(SearchIntent::from_input(""), SearchIntent::ListAll);
    }

    #[test]
    fn test_search_results_bypass_cached_list() {
        let cache = vec![make_task(1, "Walk dog"), make_task(2, "Buy groceries"), make_task(3, "Pay rent")];
        let results = vec![make_task(2, "Buy groceries")];

        let shown = displayed_tasks(&cache, Some(&results));
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "Buy groceries");

        assert_eq!(displayed_tasks(&cache, None).len(), 3);
    }

    #[test]
    fn test_modal_heading() {
        assert_eq!(ModalState::Open { editing: None }.heading(), "Add New Task");
        assert_eq!(ModalState::Open { editing: Some(4) }.heading(), "Edit Task");
        assert!(!ModalState::Closed.is_open());
    }
}
