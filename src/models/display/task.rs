//! Task display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_timestamp, or_dash, truncate_string};
use crate::client::models::Task;

/// Widest description shown in list output
const DESCRIPTION_WIDTH: usize = 40;

/// Task list row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TaskDisplay {
    #[tabled(rename = "TASK ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "SCHEDULE")]
    pub schedule: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<Task> for TaskDisplay {
    fn from(task: Task) -> Self {
        Self {
            id: task
                .task_id()
                .map(|id| id.to_string())
                .unwrap_or_else(|| or_dash(None)),
            name: or_dash(Some(&task.name)),
            description: truncate_string(
                &or_dash(task.description.as_deref()),
                DESCRIPTION_WIDTH,
            ),
            category: or_dash(task.category.as_deref()),
            schedule: or_dash(task.schedule.as_deref()),
            status: or_dash(task.status.as_deref()),
            created: task
                .created()
                .map(format_timestamp)
                .unwrap_or_else(|| or_dash(None)),
        }
    }
}

/// Full task record for `task info`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TaskDetailDisplay {
    #[tabled(rename = "TASK ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "SITE URL")]
    pub site_url: String,

    #[tabled(rename = "SCHEDULE")]
    pub schedule: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<Task> for TaskDetailDisplay {
    fn from(task: Task) -> Self {
        // List rows truncate the description; keep the full text here
        let description = or_dash(task.description.as_deref());
        let site_url = or_dash(task.target_url());
        let row = TaskDisplay::from(task);

        Self {
            id: row.id,
            name: row.name,
            description,
            category: row.category,
            site_url,
            schedule: row.schedule,
            status: row.status,
            created: row.created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::TaskId;

    fn task() -> Task {
        serde_json::from_value(serde_json::json!({
            "id": 42,
            "name": "nightly crawl",
            "description": "Fetch the partner catalogue and diff it against yesterday's copy",
            "category": "crawler",
            "site_url": "https://example.com",
            "schedule": "0 3 * * *",
            "created_at": "2024-05-02 03:00:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_task_row() {
        let row = TaskDisplay::from(task());

        assert_eq!(row.id, "42");
        assert_eq!(row.schedule, "0 3 * * *");
        assert_eq!(row.status, "--");
        assert_eq!(row.created, "2024-05-02 03:00");
    }

    #[test]
    fn test_task_detail_keeps_description_and_url() {
        let detail = TaskDetailDisplay::from(task());

        assert!(detail.description.starts_with("Fetch the partner"));
        assert_eq!(detail.site_url, "https://example.com");
        assert_eq!(detail.category, "crawler");
    }

    #[test]
    fn test_row_description_is_truncated() {
        let row = TaskDisplay::from(task());
        assert_eq!(row.description.chars().count(), DESCRIPTION_WIDTH);
        assert!(row.description.ends_with('…'));
    }

    #[test]
    fn test_minimal_task() {
        let row = TaskDisplay::from(Task {
            fc_task_id: Some(TaskId::Text("t-1".to_string())),
            status: Some("running".to_string()),
            ..Task::default()
        });

        assert_eq!(row.id, "t-1");
        assert_eq!(row.name, "--");
        assert_eq!(row.status, "running");
        assert_eq!(row.created, "--");
    }
}
