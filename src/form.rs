//! Task Form
//!
//! Field values of the create/edit dialog and their conversion into an API
//! request. The title check here runs before any network call.

use crate::api::{TaskDraft, TaskPatch};
use crate::error::ApiError;
use crate::models::Task;

/// Raw form field values, as typed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskForm {
    /// Present when editing an existing task
    pub id: Option<u32>,
    pub title: String,
    pub description: String,
    pub due_date: String,
}

/// Request a valid form submits
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(TaskDraft),
    Update(u32, TaskPatch),
}

impl TaskForm {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn for_task(task: &Task) -> Self {
        Self {
            id: Some(task.id),
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            due_date: task.due_date.clone().unwrap_or_default(),
        }
    }

    /// Populate from the cached list only; `None` when the id is stale
    pub fn lookup(id: u32, cached: &[Task]) -> Option<Self> {
        cached.iter().find(|t| t.id == id).map(Self::for_task)
    }

    /// Trimmed draft, or a validation error if the title is blank
    pub fn to_draft(&self) -> Result<TaskDraft, ApiError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ApiError::Validation("Task title is required".to_string()));
        }
        let non_empty = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Ok(TaskDraft {
            title: title.to_string(),
            description: non_empty(&self.description),
            due_date: non_empty(&self.due_date),
        })
    }

    /// An id on the form selects update, otherwise create
    pub fn to_submission(&self) -> Result<Submission, ApiError> {
        let draft = self.to_draft()?;
        Ok(match self.id {
            Some(id) => Submission::Update(id, TaskPatch::from(draft)),
            None => Submission::Create(draft),
        })
    }
}

impl Submission {
    pub fn success_message(&self) -> &'static str {
        match self {
            Submission::Create(_) => "Task created!",
            Submission::Update(..) => "Task updated!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    fn sample_task() -> Task {
        Task {
            id: 9,
            title: "Buy groceries".to_string(),
            description: Some("milk, eggs".to_string()),
            due_date: Some("2024-05-01".to_string()),
            status: TaskStatus::Pending,
            created_at: None,
        }
    }

    #[test]
    fn test_blank_and_whitespace_titles_rejected() {
        for title in ["", "   ", "\t\n"] {
            let form = TaskForm { title: title.to_string(), ..TaskForm::blank() };
            assert_eq!(
                form.to_submission(),
                Err(ApiError::Validation("Task title is required".to_string()))
            );
        }
    }

    #[test]
    fn test_new_form_creates_with_trimmed_fields() {
        let form = TaskForm {
            id: None,
            title: "  Buy groceries ".to_string(),
            description: "   ".to_string(),
            due_date: String::new(),
        };
        let submission = form.to_submission().unwrap();
        assert_eq!(
            submission,
            Submission::Create(TaskDraft {
                title: "Buy groceries".to_string(),
                description: None,
                due_date: None,
            })
        );
        assert_eq!(submission.success_message(), "Task created!");
    }

    #[test]
    fn test_form_with_id_updates() {
        let mut form = TaskForm::for_task(&sample_task());
        form.title = "Buy more groceries".to_string();
        match form.to_submission().unwrap() {
            Submission::Update(id, patch) => {
                assert_eq!(id, 9);
                assert_eq!(patch.title.as_deref(), Some("Buy more groceries"));
                assert_eq!(patch.description, Some(Some("milk, eggs".to_string())));
                assert_eq!(patch.status, None);
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_uses_cache_only() {
        let cached = vec![sample_task()];
        let form = TaskForm::lookup(9, &cached).unwrap();
        assert_eq!(form.due_date, "2024-05-01");
        assert_eq!(TaskForm::lookup(10, &cached), None);
    }
}
