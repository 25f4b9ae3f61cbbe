//! Scheduled task models

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::client::form::FormFields;

/// Server-assigned task identifier; the service emits both numbers and strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(n) => write!(f, "{}", n),
            TaskId::Text(s) => f.write_str(s),
        }
    }
}

/// Scheduled task as returned by list and info endpoints.
///
/// The service has used more than one key for the identifier, the target
/// URL and the creation time. Each key is kept as sent; the accessors pick
/// whichever is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fc_task_id: Option<TaskId>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Schedule expression, e.g. a cron line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
}

impl Task {
    /// Task identifier: `id`, else `fc_task_id`
    pub fn task_id(&self) -> Option<&TaskId> {
        self.id.as_ref().or(self.fc_task_id.as_ref())
    }

    /// Target URL: `site_url`, else `url`
    pub fn target_url(&self) -> Option<&str> {
        self.site_url.as_deref().or(self.url.as_deref())
    }

    /// Creation time: `created_at`, else `create_time`
    pub fn created(&self) -> Option<&str> {
        self.created_at.as_deref().or(self.create_time.as_deref())
    }
}

/// One page of tasks.
///
/// Deserializes from either a page object or a bare array of tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "TaskListBody")]
pub struct TaskList {
    pub tasks: Vec<Task>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Wire shapes accepted for a task list
#[derive(Deserialize)]
#[serde(untagged)]
enum TaskListBody {
    Bare(Vec<Task>),
    Page(TaskPage),
}

#[derive(Deserialize)]
struct TaskPage {
    #[serde(default, alias = "items", deserialize_with = "null_as_default")]
    tasks: Vec<Task>,

    #[serde(default)]
    total: Option<u64>,

    #[serde(default)]
    page: Option<u32>,

    #[serde(default)]
    page_size: Option<u32>,
}

impl From<TaskListBody> for TaskList {
    fn from(body: TaskListBody) -> Self {
        match body {
            TaskListBody::Bare(tasks) => Self {
                tasks,
                ..Self::default()
            },
            TaskListBody::Page(page) => Self {
                tasks: page.tasks,
                total: page.total,
                page: page.page,
                page_size: page.page_size,
            },
        }
    }
}

/// Fields for a new task
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub name: String,
    pub description: String,
    pub category: String,
    pub site_url: String,
    pub schedule: String,
}

impl TaskForm {
    pub(crate) fn to_form(&self) -> FormFields {
        FormFields::new()
            .field("name", &self.name)
            .field("description", &self.description)
            .field("category", &self.category)
            .field("site_url", &self.site_url)
            .field("schedule", &self.schedule)
    }
}

/// Partial update of an existing task
#[derive(Debug, Clone, Default)]
pub struct TaskModification {
    pub task_id: String,
    pub url: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub schedule: Option<String>,
}

impl TaskModification {
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            ..Self::default()
        }
    }

    pub(crate) fn to_form(&self) -> FormFields {
        FormFields::new()
            .field("task_id", &self.task_id)
            .optional("url", self.url.as_deref())
            .optional("name", self.name.as_deref())
            .optional("description", self.description.as_deref())
            .optional("schedule", self.schedule.as_deref())
    }
}

/// Filters for listing tasks.
///
/// Use the builder methods to set only the filters you need; unset filters
/// are left out of the query string entirely.
///
/// # Example
/// ```ignore
/// let filter = TaskFilter::new().status("done").page(2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Convert to query parameters.
    ///
    /// Empty strings and zero page numbers count as unset, matching how the
    /// web front end builds the same query.
    pub fn to_query(&self) -> FormFields {
        let text = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());
        let number = |v: Option<u32>| v.filter(|n| *n != 0);
        let date = |v: Option<NaiveDate>| v.map(|d| d.format("%Y-%m-%d").to_string());

        FormFields::new()
            .optional("status", text(&self.status))
            .optional("category", text(&self.category))
            .optional("start_date", date(self.start_date))
            .optional("end_date", date(self.end_date))
            .optional("page", number(self.page))
            .optional("page_size", number(self.page_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_has_no_query() {
        assert!(TaskFilter::new().to_query().is_empty());
    }

    #[test]
    fn test_status_and_page_query() {
        let query = TaskFilter::new().status("done").page(2).to_query();
        assert_eq!(query.encode(), "status=done&page=2");
    }

    #[test]
    fn test_blank_filters_are_skipped() {
        let query = TaskFilter::new().status("").category("").page(0).to_query();
        assert!(query.is_empty());
    }

    #[test]
    fn test_full_filter_order() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let query = TaskFilter::new()
            .page_size(50)
            .category("crawler")
            .date_range(Some(start), Some(end))
            .status("running")
            .page(1)
            .to_query();

        assert_eq!(
            query.encode(),
            "status=running&category=crawler&start_date=2024-01-01&end_date=2024-01-31&page=1&page_size=50"
        );
    }

    #[test]
    fn test_task_accepts_numeric_and_string_ids() {
        let numeric: Task = serde_json::from_str(r#"{"id": 12, "name": "a"}"#).unwrap();
        assert_eq!(numeric.task_id(), Some(&TaskId::Number(12)));
        assert_eq!(numeric.id.as_ref().map(|id| id.to_string()).as_deref(), Some("12"));

        let text: Task = serde_json::from_str(r#"{"fc_task_id": "t-9", "name": "b"}"#).unwrap();
        assert_eq!(text.task_id(), Some(&TaskId::Text("t-9".to_string())));
    }

    #[test]
    fn test_task_with_both_id_keys() {
        let task: Task =
            serde_json::from_str(r#"{"id": 3, "fc_task_id": 4, "name": null}"#).unwrap();

        assert_eq!(task.task_id(), Some(&TaskId::Number(3)));
        assert_eq!(task.fc_task_id, Some(TaskId::Number(4)));
        assert!(task.name.is_empty());
    }

    #[test]
    fn test_task_alternate_url_and_time_keys() {
        let task: Task = serde_json::from_str(
            r#"{"id": 1, "url": "https://a.example", "site_url": "https://b.example", "create_time": "2024-01-01 00:00:00"}"#,
        )
        .unwrap();

        assert_eq!(task.target_url(), Some("https://b.example"));
        assert_eq!(task.created(), Some("2024-01-01 00:00:00"));
    }

    #[test]
    fn test_task_list_accepts_items_alias() {
        let list: TaskList =
            serde_json::from_str(r#"{"items": [{"id": 1, "name": "x"}], "total": 1}"#).unwrap();
        assert_eq!(list.tasks.len(), 1);
        assert_eq!(list.total, Some(1));
    }

    #[test]
    fn test_task_list_accepts_bare_array() {
        let list: TaskList =
            serde_json::from_str(r#"[{"id": 1, "name": "x"}, {"fc_task_id": 2}]"#).unwrap();

        assert_eq!(list.tasks.len(), 2);
        assert!(list.total.is_none());
        assert_eq!(list.tasks[1].task_id(), Some(&TaskId::Number(2)));
    }

    #[test]
    fn test_task_list_with_null_tasks() {
        let list: TaskList = serde_json::from_str(r#"{"tasks": null, "total": 0}"#).unwrap();
        assert!(list.tasks.is_empty());
        assert_eq!(list.total, Some(0));
    }

    #[test]
    fn test_task_form_sends_every_field() {
        let form = TaskForm {
            name: "nightly".to_string(),
            description: String::new(),
            category: "crawler".to_string(),
            site_url: "https://example.com".to_string(),
            schedule: "daily".to_string(),
        };

        let encoded = form.to_form().encode();
        assert_eq!(
            encoded,
            "name=nightly&description=&category=crawler&site_url=https%3A%2F%2Fexample.com&schedule=daily"
        );
    }

    #[test]
    fn test_modification_omits_unset_fields() {
        let modification = TaskModification {
            name: Some("renamed".to_string()),
            ..TaskModification::new("7")
        };

        assert_eq!(modification.to_form().encode(), "task_id=7&name=renamed");
    }
}
