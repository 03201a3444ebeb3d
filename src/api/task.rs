//! Task Endpoints
//!
//! List, search, create, update and delete against `/tasks`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use super::send;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{SortField, Task, TaskStatus};

/// Characters `encodeURIComponent` leaves alone
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT_ENCODE_SET).to_string()
}

// ========================
// Argument Structs
// ========================

/// Filter and ordering for the task list
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ListQuery {
    pub status: Option<TaskStatus>,
    pub sort_by: SortField,
    pub descending: bool,
}

impl ListQuery {
    /// Newest first, as used by the dashboard's recent list
    pub fn recent() -> Self {
        Self {
            status: None,
            sort_by: SortField::CreatedAt,
            descending: true,
        }
    }

    pub fn to_query_string(&self) -> String {
        let mut params = Vec::with_capacity(3);
        if let Some(status) = self.status {
            params.push(format!("status={}", status.as_str()));
        }
        params.push(format!("sort_by={}", self.sort_by.as_str()));
        params.push(format!("ascending={}", !self.descending));
        format!("?{}", params.join("&"))
    }
}

/// Fields for a new task. `description` and `due_date` are sent as null when absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
}

/// Partial update; omitted fields are left untouched, `Some(None)` clears a field
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    pub fn complete() -> Self {
        Self {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        }
    }
}

impl From<TaskDraft> for TaskPatch {
    /// Editing replaces every form field, clearing blanks
    fn from(draft: TaskDraft) -> Self {
        Self {
            title: Some(draft.title),
            description: Some(draft.description),
            due_date: Some(draft.due_date),
            status: None,
        }
    }
}

// ========================
// URLs
// ========================

pub(crate) fn list_url(config: &AppConfig, query: Option<&ListQuery>) -> String {
    let qs = query.map(ListQuery::to_query_string).unwrap_or_default();
    config.endpoint(&format!("/tasks{}", qs))
}

pub(crate) fn search_url(config: &AppConfig, keyword: &str) -> String {
    config.endpoint(&format!("/tasks/search?q={}", encode_component(keyword)))
}

fn task_url(config: &AppConfig, id: u32) -> String {
    config.endpoint(&format!("/tasks/{}", id))
}

// ========================
// Commands
// ========================

pub async fn list_tasks(config: &AppConfig, query: &ListQuery) -> Result<Vec<Task>, ApiError> {
    let envelope = send("GET", &list_url(config, Some(query)), None).await?;
    Ok(envelope.tasks.unwrap_or_default())
}

/// Full list in backend default order, no parameters
pub async fn list_all_tasks(config: &AppConfig) -> Result<Vec<Task>, ApiError> {
    let envelope = send("GET", &list_url(config, None), None).await?;
    Ok(envelope.tasks.unwrap_or_default())
}

pub async fn search_tasks(config: &AppConfig, keyword: &str) -> Result<Vec<Task>, ApiError> {
    let envelope = send("GET", &search_url(config, keyword), None).await?;
    Ok(envelope.tasks.unwrap_or_default())
}

/// Create a task and return its server-assigned id
pub async fn create_task(config: &AppConfig, draft: &TaskDraft) -> Result<u32, ApiError> {
    if draft.title.trim().is_empty() {
        return Err(ApiError::Validation("Task title is required".to_string()));
    }
    let body = serde_json::to_string(draft)?;
    let envelope = send("POST", &config.endpoint("/tasks"), Some(body)).await?;
    envelope
        .task_id
        .ok_or_else(|| ApiError::Decode("missing task_id".to_string()))
}

pub async fn update_task(config: &AppConfig, id: u32, patch: &TaskPatch) -> Result<(), ApiError> {
    let body = serde_json::to_string(patch)?;
    send("PUT", &task_url(config, id), Some(body)).await?;
    Ok(())
}

pub async fn complete_task(config: &AppConfig, id: u32) -> Result<(), ApiError> {
    update_task(config, id, &TaskPatch::complete()).await
}

pub async fn delete_task(config: &AppConfig, id: u32) -> Result<(), ApiError> {
    send("DELETE", &task_url(config, id), None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_has_sort_but_no_status() {
        let qs = ListQuery::default().to_query_string();
        assert_eq!(qs, "?sort_by=due_date&ascending=true");
    }

    #[test]
    fn test_filtered_descending_query() {
        let query = ListQuery {
            status: Some(TaskStatus::Completed),
            sort_by: SortField::Title,
            descending: true,
        };
        assert_eq!(query.to_query_string(), "?status=completed&sort_by=title&ascending=false");
    }

    #[test]
    fn test_recent_query_is_created_at_descending() {
        let url = list_url(&AppConfig::default(), Some(&ListQuery::recent()));
        assert_eq!(url, "http://localhost:5000/api/tasks?sort_by=created_at&ascending=false");
    }

    #[test]
    fn test_unparameterized_list_url() {
        assert_eq!(list_url(&AppConfig::default(), None), "http://localhost:5000/api/tasks");
    }

    #[test]
    fn test_search_keyword_encoded_like_encode_uri_component() {
        let url = search_url(&AppConfig::default(), "milk & eggs/bread?");
        assert_eq!(
            url,
            "http://localhost:5000/api/tasks/search?q=milk%20%26%20eggs%2Fbread%3F"
        );
        assert!(search_url(&AppConfig::default(), "don't(*)").ends_with("q=don't(*)"));
    }

    #[test]
    fn test_draft_serializes_nulls() {
        let draft = TaskDraft {
            title: "Buy groceries".to_string(),
            description: None,
            due_date: Some("2024-05-01".to_string()),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "Buy groceries", "description": null, "due_date": "2024-05-01"})
        );
    }

    #[test]
    fn test_complete_patch_only_sends_status() {
        let json = serde_json::to_value(TaskPatch::complete()).unwrap();
        assert_eq!(json, serde_json::json!({"status": "completed"}));
    }

    #[test]
    fn test_patch_from_draft_clears_blank_fields() {
        let patch = TaskPatch::from(TaskDraft {
            title: "Renamed".to_string(),
            description: None,
            due_date: None,
        });
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "Renamed", "description": null, "due_date": null})
        );
    }
}
