//! Application Context
//!
//! Navigation and refresh controller shared via the Leptos Context API.
//! Every mutation is followed by a full re-fetch of the affected views;
//! cached tasks are never patched in place.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ListQuery};
use crate::config::AppConfig;
use crate::form::{Submission, TaskForm};
use crate::format::{today, Debouncer};
use crate::models::{SortField, TaskStatus};
use crate::store::{
    store_replace_tasks, AppStateStoreFields, AppStore, ModalState, RefreshPlan,
    SearchIntent, Section,
};
use crate::summary::{recent_tasks, QuickStats};
use crate::toast::ToastKind;

fn log(message: String) {
    web_sys::console::log_1(&message.into());
}

fn log_error(message: String) {
    web_sys::console::error_1(&message.into());
}

/// App-wide controller provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    config: StoredValue<AppConfig>,
    search_debounce: StoredValue<Debouncer>,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
            search_debounce: StoredValue::new(Debouncer::new()),
        }
    }

    pub fn store(&self) -> AppStore {
        self.store
    }

    fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    // ========================
    // Toasts
    // ========================

    /// Show a toast that removes itself after the configured duration
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.store.toasts().write().push(kind, message);
        let duration = self.config.with_value(|c| c.toast_duration_ms);
        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            store.toasts().write().dismiss(id);
        });
    }

    // ========================
    // Navigation
    // ========================

    pub fn navigate(&self, section: Section) {
        log(format!("[NAV] -> {:?}", section));
        self.store.section().set(section);
        match section {
            Section::Dashboard => self.load_dashboard(),
            Section::Tasks => {
                self.reset_search();
                self.load_tasks();
            }
            Section::Analytics => self.notify(ToastKind::Success, "Analytics loaded successfully!"),
        }
    }

    /// Statistics, recent tasks, charts, then quick stats, one after another.
    /// A failed step is logged and skipped.
    pub fn load_dashboard(&self) {
        let store = self.store;
        let config = self.config();
        spawn_local(async move {
            match api::get_statistics(&config).await {
                Ok(stats) => store.dashboard().update(|d| d.statistics = Some(stats)),
                Err(e) => log_error(format!("[DASHBOARD] Error loading statistics: {}", e)),
            }

            match api::list_tasks(&config, &ListQuery::recent()).await {
                Ok(tasks) => {
                    let recent = recent_tasks(tasks, config.recent_task_count);
                    store.dashboard().update(|d| d.recent = recent);
                }
                Err(e) => log_error(format!("[DASHBOARD] Error loading recent tasks: {}", e)),
            }

            match api::get_charts(&config).await {
                Ok(charts) => store.dashboard().update(|d| d.charts = charts),
                Err(e) => log_error(format!("[DASHBOARD] Error loading charts: {}", e)),
            }

            match api::list_all_tasks(&config).await {
                Ok(tasks) => {
                    let quick = QuickStats::compute(&tasks, today(), config.due_soon_days);
                    store.dashboard().update(|d| d.quick = quick);
                }
                Err(e) => log_error(format!("[DASHBOARD] Error loading quick stats: {}", e)),
            }
        });
    }

    fn list_query(&self) -> ListQuery {
        ListQuery {
            status: self.store.status_filter().get_untracked(),
            sort_by: self.store.sort_by().get_untracked(),
            descending: self.store.descending().get_untracked(),
        }
    }

    /// Fetch the list with current sort and filter, replacing the cache on success
    pub fn load_tasks(&self) {
        let store = self.store;
        let ctx = *self;
        let config = self.config();
        let query = self.list_query();
        store.list_loading().set(true);
        spawn_local(async move {
            let result = api::list_tasks(&config, &query).await;
            store.list_loading().set(false);
            match result {
                Ok(tasks) => {
                    log(format!("[TASKS] Loaded {} tasks", tasks.len()));
                    store.search_results().set(None);
                    store_replace_tasks(&store, tasks);
                }
                Err(e) if e.is_transport() => ctx.notify(ToastKind::Error, "Error loading tasks"),
                Err(_) => ctx.notify(ToastKind::Error, "Failed to load tasks"),
            }
        });
    }

    /// Apply the refresh contract for the current section
    pub fn refresh_after_mutation(&self) {
        let plan = RefreshPlan::after_mutation(self.store.section().get_untracked());
        if plan.dashboard {
            self.load_dashboard();
        }
        if plan.tasks {
            self.load_tasks();
        }
    }

    // ========================
    // Sort / Filter / Search
    // ========================

    pub fn set_sort(&self, field: SortField) {
        self.store.sort_by().set(field);
        self.reset_search();
        self.load_tasks();
    }

    pub fn set_descending(&self, descending: bool) {
        self.store.descending().set(descending);
        self.reset_search();
        self.load_tasks();
    }

    pub fn set_status_filter(&self, status: Option<TaskStatus>) {
        self.store.status_filter().set(status);
        self.reset_search();
        self.load_tasks();
    }

    fn reset_search(&self) {
        self.store.search_keyword().set(String::new());
        self.store.search_results().set(None);
    }

    /// Record the keystroke now; issue the request once typing pauses
    pub fn search_input(&self, raw: String) {
        self.store.search_keyword().set(raw.clone());
        let ctx = *self;
        let wait = self.config.with_value(|c| c.search_debounce_ms);
        self.search_debounce
            .with_value(|debouncer| debouncer.call(wait, move || ctx.run_search(raw)));
    }

    /// Keyword search, bypassing sort and filter; blank input reloads the list
    pub fn run_search(&self, raw: String) {
        let keyword = match SearchIntent::from_input(&raw) {
            SearchIntent::ListAll => {
                self.store.search_results().set(None);
                self.load_tasks();
                return;
            }
            SearchIntent::Search(keyword) => keyword,
        };

        let store = self.store;
        let ctx = *self;
        let config = self.config();
        store.list_loading().set(true);
        spawn_local(async move {
            let result = api::search_tasks(&config, &keyword).await;
            store.list_loading().set(false);
            match result {
                Ok(tasks) => {
                    log(format!("[SEARCH] '{}' matched {} tasks", keyword, tasks.len()));
                    store.search_results().set(Some(tasks));
                }
                Err(e) => {
                    log_error(format!("[SEARCH] '{}' failed: {}", keyword, e));
                    ctx.notify(ToastKind::Error, "Search failed");
                }
            }
        });
    }

    // ========================
    // Mutations
    // ========================

    pub fn complete_task(&self, id: u32) {
        let ctx = *self;
        let config = self.config();
        spawn_local(async move {
            match api::complete_task(&config, id).await {
                Ok(()) => {
                    ctx.notify(ToastKind::Success, "Task completed!");
                    ctx.refresh_after_mutation();
                }
                Err(_) => ctx.notify(ToastKind::Error, "Error completing task"),
            }
        });
    }

    /// Caller is responsible for confirmation
    pub fn delete_task(&self, id: u32) {
        let ctx = *self;
        let config = self.config();
        spawn_local(async move {
            match api::delete_task(&config, id).await {
                Ok(()) => {
                    ctx.notify(ToastKind::Success, "Task deleted!");
                    ctx.refresh_after_mutation();
                }
                Err(_) => ctx.notify(ToastKind::Error, "Error deleting task"),
            }
        });
    }

    /// Validate the dialog's fields and create or update
    pub fn submit_form(&self) {
        let submission = match self.store.form().get_untracked().to_submission() {
            Ok(submission) => submission,
            Err(e) => {
                self.notify(ToastKind::Error, e.to_string());
                return;
            }
        };

        let ctx = *self;
        let config = self.config();
        spawn_local(async move {
            let result = match &submission {
                Submission::Create(draft) => api::create_task(&config, draft).await.map(|id| {
                    log(format!("[FORM] Created task {}", id));
                }),
                Submission::Update(id, patch) => api::update_task(&config, *id, patch).await,
            };
            match result {
                Ok(()) => {
                    ctx.notify(ToastKind::Success, submission.success_message());
                    ctx.close_modal();
                    ctx.refresh_after_mutation();
                }
                Err(_) => ctx.notify(ToastKind::Error, "Error saving task"),
            }
        });
    }

    // ========================
    // Modal
    // ========================

    /// Open blank for a new task, or populated from memory for an edit.
    /// A stale id is reported and the dialog stays closed.
    pub fn open_modal(&self, id: Option<u32>) {
        let form = match id {
            None => TaskForm::blank(),
            Some(id) => {
                let in_list = TaskForm::lookup(id, &self.store.current_tasks().read_untracked());
                let found = in_list.or_else(|| {
                    self.store
                        .search_results()
                        .read_untracked()
                        .as_deref()
                        .and_then(|results| TaskForm::lookup(id, results))
                });
                match found {
                    Some(form) => form,
                    None => {
                        log_error(format!("[MODAL] Task {} not in memory", id));
                        self.notify(ToastKind::Error, "Task is no longer available, reload and try again");
                        return;
                    }
                }
            }
        };
        self.store.form().set(form);
        self.store.modal().set(ModalState::Open { editing: id });
    }

    pub fn close_modal(&self) {
        self.store.modal().set(ModalState::Closed);
    }
}

/// Get the controller from context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
