//! UI Components
//!
//! Leptos components for the three sections, the task dialog and toasts.

mod analytics_view;
mod chart_grid;
mod dashboard_view;
mod delete_confirm_button;
mod nav_sidebar;
mod task_card;
mod task_list_view;
mod task_modal;
mod toast_stack;

pub use analytics_view::AnalyticsView;
pub use chart_grid::ChartGrid;
pub use dashboard_view::DashboardView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use nav_sidebar::NavSidebar;
pub use task_card::{RecentTaskItem, TaskCard};
pub use task_list_view::TaskListView;
pub use task_modal::TaskModal;
pub use toast_stack::ToastStack;
