//! Authentication status check
//!
//! Probes the profile endpoint to decide whether the stored token is still
//! good. The check never fails and never touches the session itself: when the
//! probe fails it reports that the token should be cleared and leaves the
//! clear to the caller.

use crate::client::UserApi;
use crate::session::Session;

/// Why a session is not authenticated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnauthenticatedReason {
    /// No token is stored; nothing was sent
    NoToken,
    /// The profile probe failed with this message
    ProbeFailed(String),
}

/// Result of [`check_auth_status`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated,
    Unauthenticated {
        reason: UnauthenticatedReason,
        /// The stored token has been rejected and should be discarded
        clear_token: bool,
    },
}

impl AuthStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::Authenticated)
    }

    pub fn should_clear_token(&self) -> bool {
        matches!(
            self,
            AuthStatus::Unauthenticated {
                clear_token: true,
                ..
            }
        )
    }
}

/// Check whether `session` holds a token the server still accepts.
pub async fn check_auth_status<A>(session: &Session, api: &A) -> AuthStatus
where
    A: UserApi + ?Sized,
{
    if !session.has_token().await {
        return AuthStatus::Unauthenticated {
            reason: UnauthenticatedReason::NoToken,
            clear_token: false,
        };
    }

    match api.get_profile().await {
        Ok(_) => AuthStatus::Authenticated,
        Err(err) => {
            log::debug!("Profile probe failed: {}", err);
            AuthStatus::Unauthenticated {
                reason: UnauthenticatedReason::ProbeFailed(err.message()),
                clear_token: true,
            }
        }
    }
}
