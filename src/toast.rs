//! Toast Queue
//!
//! Transient notifications. The queue is plain data kept in the store; the
//! timed removal lives in `AppContext::notify`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
            ToastKind::Info => "toast info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "fas fa-check",
            ToastKind::Error => "fas fa-exclamation-triangle",
            ToastKind::Info => "fas fa-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u32,
}

impl ToastQueue {
    /// Append a toast and return its id for later dismissal
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Remove a toast; unknown ids are ignored
    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "Task created!");
        let b = queue.push(ToastKind::Error, "Error saving task");
        assert!(b > a);
        assert_eq!(queue.items().len(), 2);
        assert_eq!(queue.items()[0].message, "Task created!");
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Info, "one");
        let b = queue.push(ToastKind::Info, "two");
        queue.dismiss(a);
        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, b);
    }

    #[test]
    fn test_kind_styling() {
        assert_eq!(ToastKind::Error.class(), "toast error");
        assert_eq!(ToastKind::Success.icon(), "fas fa-check");
    }
}
