//! Route table and navigation guard
//!
//! Routes are static. Before every transition the [`NavigationGuard`] decides
//! whether to let it through or send the user to the login route.

use std::fmt;
use std::sync::Arc;

use crate::auth::{AuthStatus, check_auth_status};
use crate::client::UserApi;
use crate::session::Session;

/// Name of the login route, the target of every redirect
pub const LOGIN_ROUTE: &str = "login";

/// Landing route for signed-in users
pub const DASHBOARD_ROUTE: &str = "dashboard";

/// Routes reachable without authentication
pub const PUBLIC_ROUTES: [&str; 3] = ["home", LOGIN_ROUTE, "register"];

/// View rendered by a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Login,
    Register,
    Dashboard,
}

/// Static route descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    pub path: &'static str,
    pub view: View,
    pub requires_auth: bool,
}

/// Every route the application knows about
pub const ROUTES: &[Route] = &[
    Route {
        name: "home",
        path: "/",
        view: View::Home,
        requires_auth: false,
    },
    Route {
        name: LOGIN_ROUTE,
        path: "/login",
        view: View::Login,
        requires_auth: false,
    },
    Route {
        name: "register",
        path: "/register",
        view: View::Register,
        requires_auth: false,
    },
    Route {
        name: DASHBOARD_ROUTE,
        path: "/dashboard",
        view: View::Dashboard,
        requires_auth: true,
    },
];

/// Look up a route by name
pub fn find_route(name: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|r| r.name == name)
}

/// Look up a route by path
pub fn find_route_by_path(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|r| r.path == path)
}

pub fn is_public(name: &str) -> bool {
    PUBLIC_ROUTES.contains(&name)
}

/// Outcome of a guarded navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Allow,
    Redirect(&'static str),
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Navigation::Allow => f.write_str("allow"),
            Navigation::Redirect(to) => write!(f, "redirect to {}", to),
        }
    }
}

/// Gate in front of every route transition.
///
/// Each protected navigation re-validates the token with one profile probe;
/// results are not cached between navigations.
pub struct NavigationGuard<A: ?Sized> {
    session: Session,
    api: Arc<A>,
}

impl<A: UserApi + ?Sized> NavigationGuard<A> {
    pub fn new(session: Session, api: Arc<A>) -> Self {
        Self { session, api }
    }

    /// Decide whether navigation to the route named `to` may proceed.
    ///
    /// Public routes always pass. Anything else, unknown names included,
    /// requires a successful auth check; otherwise the user is sent to
    /// login. A token the server rejected is cleared before returning.
    pub async fn before_each(&self, to: &str) -> Navigation {
        if is_public(to) {
            return Navigation::Allow;
        }

        let status = check_auth_status(&self.session, self.api.as_ref()).await;

        if status.should_clear_token() {
            if let Err(e) = self.session.clear().await {
                log::warn!("Failed to clear rejected session token: {}", e);
            }
        }

        if !status.is_authenticated() && to != LOGIN_ROUTE {
            if let AuthStatus::Unauthenticated { reason, .. } = &status {
                log::debug!("Redirecting {} to {}: {:?}", to, LOGIN_ROUTE, reason);
            }
            Navigation::Redirect(LOGIN_ROUTE)
        } else {
            Navigation::Allow
        }
    }
}
