//! fctask API client implementation

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as HttpClient, Method};
use serde::de::DeserializeOwned;
use url::Url;

use super::api::{TaskApi, UserApi};
use super::form::FormFields;
use super::models::{
    ApiResponse, Credentials, ErrorBody, LoginData, Profile, ProfileUpdate, Task, TaskFilter,
    TaskForm, TaskList, TaskModification,
};
use crate::error::{ApiError, ApiResult, ConfigError, Result};
use crate::session::Session;

/// Content type declared on every request
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Message for a task lookup without an identifier
pub const MISSING_TASK_ID_MESSAGE: &str = "Missing task ID";

/// How an operation's fields travel with the request
enum Payload {
    Empty,
    Query(FormFields),
    Form(FormFields),
}

/// fctask API client
///
/// Reads the bearer token from the shared [`Session`] at the moment each
/// request is built; it never writes the token itself.
pub struct FcTaskClient {
    http: HttpClient,
    base_url: Url,
    session: Session,
}

impl FcTaskClient {
    /// Create a client for the service at `host`
    pub fn with_host(session: Session, host: &str) -> Result<Self> {
        let mut base_url = Url::parse(host)
            .map_err(|e| ConfigError::Invalid(format!("Invalid API host '{}': {}", host, e)))?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));

        let http = HttpClient::builder()
            .default_headers(headers)
            .user_agent(format!("fctask/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::Invalid(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    /// The normalized service address
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Validation(format!("Invalid request path '{}': {}", path, e)))
    }

    /// Send one request and normalize the outcome.
    ///
    /// A request that cannot be built (for instance a token that is not a
    /// valid header value) becomes [`ApiError::Validation`]. Transport
    /// failures become [`ApiError::Unreachable`]. Error statuses
    /// become [`ApiError::Rejected`] carrying the server's `message`, or
    /// `fallback` when there is none. A success body that is not a valid
    /// envelope is also rejected with `fallback`.
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
        fallback: &str,
    ) -> ApiResult<ApiResponse<T>> {
        let mut url = self.endpoint(path)?;
        let mut body = None;

        match payload {
            Payload::Empty => {}
            Payload::Query(fields) => {
                if !fields.is_empty() {
                    url.query_pairs_mut()
                        .extend_pairs(fields.pairs().iter().map(|(k, v)| (*k, v.as_str())));
                }
            }
            Payload::Form(fields) => body = Some(fields.encode()),
        }

        let mut request = self.http.request(method.clone(), url);
        if let Some(token) = self.session.token().await {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) if e.is_builder() => {
                log::debug!("{} {} could not be built: {}", method, path, e);
                return Err(ApiError::Validation(format!("Invalid request: {}", e)));
            }
            Err(e) => {
                log::debug!("{} {} failed before a response: {}", method, path, e);
                return Err(ApiError::Unreachable);
            }
        };

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            log::debug!("{} {} body could not be read: {}", method, path, e);
            ApiError::Rejected(fallback.to_string())
        })?;

        if status.is_success() {
            log::debug!("{} {} -> {}", method, path, status);
            serde_json::from_str(&text).map_err(|e| {
                log::debug!("{} {} returned an unreadable body: {}", method, path, e);
                ApiError::Rejected(fallback.to_string())
            })
        } else {
            log::debug!("{} {} -> {}", method, path, status);
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| fallback.to_string());
            Err(ApiError::Rejected(message))
        }
    }
}

#[async_trait]
impl UserApi for FcTaskClient {
    async fn register(
        &self,
        credentials: &Credentials,
    ) -> ApiResult<ApiResponse<serde_json::Value>> {
        self.execute(
            Method::POST,
            "/user/register",
            Payload::Form(credentials.to_form()),
            "Registration failed",
        )
        .await
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<ApiResponse<LoginData>> {
        self.execute(
            Method::POST,
            "/user/login",
            Payload::Form(credentials.to_form()),
            "Login failed",
        )
        .await
    }

    async fn get_profile(&self) -> ApiResult<ApiResponse<Profile>> {
        self.execute(
            Method::GET,
            "/user/profile/get",
            Payload::Empty,
            "Failed to fetch profile",
        )
        .await
    }

    async fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> ApiResult<ApiResponse<serde_json::Value>> {
        self.execute(
            Method::POST,
            "/user/profile/update",
            Payload::Form(update.to_form()),
            "Failed to update profile",
        )
        .await
    }
}

#[async_trait]
impl TaskApi for FcTaskClient {
    async fn get_tasks(&self, filter: &TaskFilter) -> ApiResult<ApiResponse<TaskList>> {
        self.execute(
            Method::GET,
            "/fctask/get",
            Payload::Query(filter.to_query()),
            "Failed to fetch task list",
        )
        .await
    }

    async fn create_task(&self, form: &TaskForm) -> ApiResult<ApiResponse<serde_json::Value>> {
        self.execute(
            Method::POST,
            "/fctask/create",
            Payload::Form(form.to_form()),
            "Failed to create task",
        )
        .await
    }

    async fn get_task_info(&self, task_id: &str) -> ApiResult<ApiResponse<Task>> {
        if task_id.is_empty() {
            return Err(ApiError::Validation(MISSING_TASK_ID_MESSAGE.to_string()));
        }

        self.execute(
            Method::GET,
            "/fctask/info",
            Payload::Query(FormFields::new().field("fc_task_id", task_id)),
            "Failed to fetch task details",
        )
        .await
    }

    async fn modify_task(
        &self,
        modification: &TaskModification,
    ) -> ApiResult<ApiResponse<serde_json::Value>> {
        self.execute(
            Method::POST,
            "/fctask/modify",
            Payload::Form(modification.to_form()),
            "Failed to modify task",
        )
        .await
    }
}
