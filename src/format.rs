//! Formatting Helpers
//!
//! HTML escaping, date handling and the search debounce.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

/// Escape the five HTML-significant characters
pub fn escape_html(unsafe_text: &str) -> String {
    let mut out = String::with_capacity(unsafe_text.len());
    for c in unsafe_text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Parse the date part of `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS[.ffffff]`
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Display form `Jan 5, 2024`; missing dates read "No date", unparseable ones are shown as-is
pub fn format_date(value: Option<&str>) -> String {
    match value {
        None => "No date".to_string(),
        Some(raw) if raw.trim().is_empty() => "No date".to_string(),
        Some(raw) => match parse_date(raw) {
            Some(date) => date.format("%b %-d, %Y").to_string(),
            None => raw.to_string(),
        },
    }
}

/// Current calendar date (UTC) from the browser clock
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_utc_full_year() as i32,
        now.get_utc_month() + 1,
        now.get_utc_date(),
    )
    .unwrap_or_default()
}

/// Generation counter shared by all calls of one debounced action.
///
/// Every call arms a new generation; a pending call only runs if its
/// generation is still the latest when its timer fires.
#[derive(Clone, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, superseding any pending call
    pub fn arm(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == token
    }

    /// Arm a new generation and wrap `action` so it only runs if no later
    /// call has been armed by the time it fires. Returns whether it ran.
    pub fn gate<F>(&self, action: F) -> impl FnOnce() -> bool + 'static
    where
        F: FnOnce() + 'static,
    {
        let token = self.arm();
        let debouncer = self.clone();
        move || {
            let current = debouncer.is_current(token);
            if current {
                action();
            }
            current
        }
    }

    /// Run `action` after `wait_ms` unless another call arrives first
    pub fn call<F>(&self, wait_ms: u32, action: F)
    where
        F: FnOnce() + 'static,
    {
        let fire = self.gate(action);
        spawn_local(async move {
            TimeoutFuture::new(wait_ms).await;
            fire();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_all_special_chars() {
        let escaped = escape_html(r#"<a href="x">Tom & Jerry's</a>"#);
        assert_eq!(
            escaped,
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
        for raw in ['<', '>', '"', '\''] {
            assert!(!escaped.contains(raw));
        }
    }

    #[test]
    fn test_escape_html_plain_text_untouched() {
        assert_eq!(escape_html("Buy groceries"), "Buy groceries");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2024-01-05")), "Jan 5, 2024");
        assert_eq!(format_date(Some("2024-12-31 23:59:59.123456")), "Dec 31, 2024");
        assert_eq!(format_date(None), "No date");
        assert_eq!(format_date(Some("")), "No date");
        assert_eq!(format_date(Some("someday")), "someday");
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("24-1-1"), None);
        assert_eq!(parse_date("2024-02-29"), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_burst_of_keystrokes_fires_once_with_final_value() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let debouncer = Debouncer::new();
        let sent: Rc<RefCell<Vec<String>>> = Rc::default();

        // Three keystrokes inside the wait window; every timer fires afterwards
        let pending: Vec<_> = ["g", "gr", "gro"]
            .into_iter()
            .map(|value| {
                let sent = Rc::clone(&sent);
                debouncer.gate(move || sent.borrow_mut().push(value.to_string()))
            })
            .collect();
        let ran: Vec<bool> = pending.into_iter().map(|fire| fire()).collect();

        assert_eq!(ran, vec![false, false, true]);
        assert_eq!(*sent.borrow(), vec!["gro".to_string()]);
    }

    #[test]
    fn test_pause_between_keystrokes_fires_each() {
        let debouncer = Debouncer::new();
        let first = debouncer.gate(|| {});
        assert!(first());
        let second = debouncer.gate(|| {});
        assert!(second());
    }

    #[test]
    fn test_burst_of_calls_leaves_only_last_current() {
        let debouncer = Debouncer::new();
        let keystrokes = ["g", "gr", "gro"];
        let tokens: Vec<(u64, &str)> = keystrokes.iter().map(|k| (debouncer.arm(), *k)).collect();

        let fired: Vec<&str> = tokens
            .iter()
            .filter(|(token, _)| debouncer.is_current(*token))
            .map(|(_, value)| *value)
            .collect();

        assert_eq!(fired, vec!["gro"]);
    }

    #[test]
    fn test_clones_share_generation() {
        let debouncer = Debouncer::new();
        let clone = debouncer.clone();
        let first = debouncer.arm();
        let second = clone.arm();
        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
    }
}
