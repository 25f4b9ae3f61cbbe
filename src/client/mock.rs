//! Mock fctask API client for testing
//!
//! Provides an in-memory implementation of the API traits so the auth check
//! and navigation guard can be tested without a server.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{TaskApi, UserApi};
use super::models::{
    ApiResponse, Credentials, LoginData, Profile, ProfileUpdate, Task, TaskFilter, TaskForm,
    TaskList, TaskModification,
};
use crate::error::{ApiError, ApiResult};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockFcTaskClient::new().with_profile_error(ApiError::Unreachable);
/// assert!(mock.get_profile().await.is_err());
/// assert_eq!(mock.call_counts().await.get_profile, 1);
/// ```
#[derive(Default)]
pub struct MockFcTaskClient {
    /// Error returned by every `get_profile` call, if set
    profile_error: Option<ApiError>,
    /// Tasks returned by `get_tasks`
    tasks: Vec<Task>,
    /// Call counters for verification
    call_count: Arc<Mutex<CallCounts>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub register: usize,
    pub login: usize,
    pub get_profile: usize,
    pub update_profile: usize,
    pub get_tasks: usize,
    pub create_task: usize,
    pub get_task_info: usize,
    pub modify_task: usize,
}

impl MockFcTaskClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `get_profile` fail with `error`
    pub fn with_profile_error(mut self, error: ApiError) -> Self {
        self.profile_error = Some(error);
        self
    }

    /// Tasks to return from `get_tasks`
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    fn ok<T>(data: T) -> ApiResult<ApiResponse<T>> {
        Ok(ApiResponse {
            code: Some(0),
            message: None,
            data: Some(data),
        })
    }
}

#[async_trait]
impl UserApi for MockFcTaskClient {
    async fn register(
        &self,
        _credentials: &Credentials,
    ) -> ApiResult<ApiResponse<serde_json::Value>> {
        self.call_count.lock().await.register += 1;
        Self::ok(serde_json::Value::Null)
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<ApiResponse<LoginData>> {
        self.call_count.lock().await.login += 1;
        Self::ok(LoginData {
            token: format!("token-for-{}", credentials.username),
        })
    }

    async fn get_profile(&self) -> ApiResult<ApiResponse<Profile>> {
        self.call_count.lock().await.get_profile += 1;
        match &self.profile_error {
            Some(err) => Err(err.clone()),
            None => Self::ok(Profile {
                nickname: "mock".to_string(),
                ..Profile::default()
            }),
        }
    }

    async fn update_profile(
        &self,
        _update: &ProfileUpdate,
    ) -> ApiResult<ApiResponse<serde_json::Value>> {
        self.call_count.lock().await.update_profile += 1;
        Self::ok(serde_json::Value::Null)
    }
}

#[async_trait]
impl TaskApi for MockFcTaskClient {
    async fn get_tasks(&self, _filter: &TaskFilter) -> ApiResult<ApiResponse<TaskList>> {
        self.call_count.lock().await.get_tasks += 1;
        Self::ok(TaskList {
            tasks: self.tasks.clone(),
            total: Some(self.tasks.len() as u64),
            ..TaskList::default()
        })
    }

    async fn create_task(&self, _form: &TaskForm) -> ApiResult<ApiResponse<serde_json::Value>> {
        self.call_count.lock().await.create_task += 1;
        Self::ok(serde_json::Value::Null)
    }

    async fn get_task_info(&self, task_id: &str) -> ApiResult<ApiResponse<Task>> {
        self.call_count.lock().await.get_task_info += 1;
        self.tasks
            .iter()
            .find(|t| t.task_id().is_some_and(|id| id.to_string() == task_id))
            .cloned()
            .map(Self::ok)
            .unwrap_or_else(|| Err(ApiError::Rejected("Task not found".to_string())))
    }

    async fn modify_task(
        &self,
        _modification: &TaskModification,
    ) -> ApiResult<ApiResponse<serde_json::Value>> {
        self.call_count.lock().await.modify_task += 1;
        Self::ok(serde_json::Value::Null)
    }
}
