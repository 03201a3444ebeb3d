//! Application Configuration
//!
//! Compiled defaults, with the API base overridable from the host page via
//! `<meta name="task-api-base" content="https://host/api">`.

/// Backend base used when the host page does not override it
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

const API_BASE_META: &str = "meta[name=\"task-api-base\"]";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// REST base path, without trailing slash
    pub api_base: String,
    /// Quiet period before a search keystroke issues a request
    pub search_debounce_ms: u32,
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
    /// Number of tasks shown in the dashboard's recent list
    pub recent_task_count: usize,
    /// Window for the "due this week" quick stat
    pub due_soon_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            search_debounce_ms: 300,
            toast_duration_ms: 5000,
            recent_task_count: 5,
            due_soon_days: 7,
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with host page overrides
    pub fn from_document() -> Self {
        let mut config = Self::default();
        let meta_base = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(API_BASE_META).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        if let Some(base) = meta_base {
            config = config.with_api_base(&base);
        }
        config
    }

    pub fn with_api_base(mut self, base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            self.api_base = trimmed.to_string();
        }
        self
    }

    /// Absolute URL for an endpoint path such as `/tasks`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}
