//! Frontend Models
//!
//! Data structures matching the REST backend payloads.

use serde::{Deserialize, Serialize};

/// Task completion status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }

    /// Dot colour shown next to the status label
    pub fn color(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "#f59e0b",
            TaskStatus::Completed => "#10b981",
        }
    }
}

/// Backend sort keys for the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    #[default]
    DueDate,
    CreatedAt,
    Title,
    Status,
    Id,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::DueDate,
        SortField::CreatedAt,
        SortField::Title,
        SortField::Status,
        SortField::Id,
    ];

    /// Query parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::DueDate => "due_date",
            SortField::CreatedAt => "created_at",
            SortField::Title => "title",
            SortField::Status => "status",
            SortField::Id => "id",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::DueDate => "Due Date",
            SortField::CreatedAt => "Created",
            SortField::Title => "Title",
            SortField::Status => "Status",
            SortField::Id => "ID",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }
}

/// Task data structure (matches backend `task_to_dict`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

/// Aggregate counts computed server-side
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub total_tasks: u32,
    pub pending_tasks: u32,
    pub completed_tasks: u32,
    pub completion_rate: f64,
}

/// Named chart slots, each a base64-encoded PNG
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSet {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub due_dates: Option<String>,
    #[serde(default)]
    pub trend: Option<String>,
}

/// Display metadata for one chart slot: (title, alt text)
const CHART_SLOTS: [(&str, &str); 3] = [
    ("Task Status Distribution", "Status Chart"),
    ("Due Date Overview", "Due Dates Chart"),
    ("Completion Trend", "Trend Chart"),
];

/// A populated chart ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ChartImage {
    pub title: &'static str,
    pub alt: &'static str,
    pub data_url: String,
}

impl ChartSet {
    /// Populated slots in display order; absent slots are skipped
    pub fn images(&self) -> Vec<ChartImage> {
        [&self.status, &self.due_dates, &self.trend]
            .into_iter()
            .zip(CHART_SLOTS)
            .filter_map(|(payload, (title, alt))| {
                payload.as_ref().map(|data| ChartImage {
                    title,
                    alt,
                    data_url: format!("data:image/png;base64,{}", data),
                })
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.due_dates.is_none() && self.trend.is_none()
    }
}

/// Response envelope shared by every endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
    #[serde(default)]
    pub task_id: Option<u32>,
    #[serde(default)]
    pub statistics: Option<Statistics>,
    #[serde(default)]
    pub charts: Option<ChartSet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_task_list_envelope() {
        let json = r#"{
            "success": true,
            "count": 2,
            "tasks": [
                {"id": 1, "title": "Buy groceries", "description": null, "status": "pending",
                 "due_date": "2024-05-01", "created_at": "2024-04-20 09:15:00.123456"},
                {"id": 2, "title": "File taxes", "description": "Before April", "status": "completed",
                 "due_date": null, "created_at": null}
            ]
        }"#;

        let envelope: Envelope = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        let tasks = envelope.tasks.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].status, TaskStatus::Pending);
        assert_eq!(tasks[0].due_date.as_deref(), Some("2024-05-01"));
        assert!(tasks[1].is_completed());
        assert_eq!(tasks[1].description.as_deref(), Some("Before April"));
    }

    #[test]
    fn test_statistics_accepts_integer_rate() {
        let json = r#"{"total_tasks": 0, "pending_tasks": 0, "completed_tasks": 0, "completion_rate": 0}"#;
        let stats: Statistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.completion_rate, 0.0);
    }

    #[test]
    fn test_chart_images_skip_absent_slots() {
        let charts = ChartSet {
            status: Some("AAA".to_string()),
            due_dates: None,
            trend: Some("BBB".to_string()),
        };

        let images = charts.images();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].title, "Task Status Distribution");
        assert_eq!(images[0].data_url, "data:image/png;base64,AAA");
        assert_eq!(images[1].title, "Completion Trend");
        assert!(ChartSet::default().is_empty());
    }
}
