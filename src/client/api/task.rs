//! Scheduled task API trait

use async_trait::async_trait;

use crate::client::models::{
    ApiResponse, Task, TaskFilter, TaskForm, TaskList, TaskModification,
};
use crate::error::ApiResult;

/// Scheduled task operations for the fctask service
///
/// Tasks can be listed, created, inspected and modified; this layer never
/// deletes them.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// List tasks, sending only the filters that are set
    async fn get_tasks(&self, filter: &TaskFilter) -> ApiResult<ApiResponse<TaskList>>;

    /// Create a task
    async fn create_task(&self, form: &TaskForm) -> ApiResult<ApiResponse<serde_json::Value>>;

    /// Fetch one task.
    ///
    /// An empty `task_id` is rejected locally without contacting the server.
    async fn get_task_info(&self, task_id: &str) -> ApiResult<ApiResponse<Task>>;

    /// Apply a partial update to a task
    async fn modify_task(
        &self,
        modification: &TaskModification,
    ) -> ApiResult<ApiResponse<serde_json::Value>>;
}
