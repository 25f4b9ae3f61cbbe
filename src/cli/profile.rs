//! Profile command implementations

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::UserApi;
use crate::client::models::{Profile, ProfileUpdate};
use crate::error::{ApiError, Result};
use crate::models::ProfileDisplay;
use crate::output;
use crate::router::DASHBOARD_ROUTE;

/// Run the `profile get` command
pub async fn get(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::for_route(opts, DASHBOARD_ROUTE).await?;

    let (profile, message) = fetch_profile(ctx.client.as_ref()).await?;

    output::print_record(
        &ProfileDisplay::from(profile),
        message.as_deref(),
        ctx.format,
    )
}

/// Run the `profile update` command
pub async fn update(
    opts: &GlobalOptions,
    nickname: Option<String>,
    name: Option<String>,
    department: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::for_route(opts, DASHBOARD_ROUTE).await?;

    // The service replaces all three fields, so start from the current values
    let (current, _) = fetch_profile(ctx.client.as_ref()).await?;
    let update = overlay_update(&current, nickname, name, department);

    let response = ctx.client.update_profile(&update).await?;

    output::print_ack(
        response.message.as_deref(),
        "Profile updated",
        response.data.as_ref(),
        ctx.format,
    )
}

/// Fetch the profile, treating a response without data as a failure.
async fn fetch_profile<A>(api: &A) -> Result<(Profile, Option<String>)>
where
    A: UserApi + ?Sized,
{
    let response = api.get_profile().await?;
    match response.data {
        Some(profile) => Ok((profile, response.message)),
        None => Err(ApiError::Rejected("Failed to fetch profile".to_string()).into()),
    }
}

/// Apply the given fields over the current profile.
fn overlay_update(
    current: &Profile,
    nickname: Option<String>,
    name: Option<String>,
    department: Option<String>,
) -> ProfileUpdate {
    let base = ProfileUpdate::from(current);
    ProfileUpdate {
        nickname: nickname.or(base.nickname),
        name: name.or(base.name),
        department: department.or(base.department),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockFcTaskClient;

    #[test]
    fn test_overlay_keeps_unset_fields() {
        let current = Profile {
            nickname: "ana".to_string(),
            name: "Ana Lima".to_string(),
            department: "Ops".to_string(),
            role: "admin".to_string(),
        };

        let update = overlay_update(&current, None, None, Some("Platform".to_string()));

        assert_eq!(update.nickname.as_deref(), Some("ana"));
        assert_eq!(update.name.as_deref(), Some("Ana Lima"));
        assert_eq!(update.department.as_deref(), Some("Platform"));
    }

    #[tokio::test]
    async fn test_fetch_profile_from_mock() {
        let api = MockFcTaskClient::new();
        let (profile, _) = fetch_profile(&api).await.unwrap();

        assert_eq!(profile.nickname, "mock");
        assert_eq!(api.call_counts().await.get_profile, 1);
    }

    #[tokio::test]
    async fn test_fetch_profile_propagates_error() {
        let api = MockFcTaskClient::new().with_profile_error(ApiError::Unreachable);
        assert!(fetch_profile(&api).await.is_err());
    }
}
