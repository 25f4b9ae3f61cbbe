//! User account API trait

use async_trait::async_trait;

use crate::client::models::{ApiResponse, Credentials, LoginData, Profile, ProfileUpdate};
use crate::error::ApiResult;

/// Account and profile operations for the fctask service
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Create a new account
    async fn register(&self, credentials: &Credentials)
    -> ApiResult<ApiResponse<serde_json::Value>>;

    /// Exchange credentials for a session token
    async fn login(&self, credentials: &Credentials) -> ApiResult<ApiResponse<LoginData>>;

    /// Fetch the signed-in user's profile.
    ///
    /// Also serves as the probe for whether the current token is still valid.
    async fn get_profile(&self) -> ApiResult<ApiResponse<Profile>>;

    /// Update nickname, name and department
    async fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> ApiResult<ApiResponse<serde_json::Value>>;
}
