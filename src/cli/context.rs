//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, session setup, and client initialization.

use std::sync::Arc;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::FcTaskClient;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::router::{Navigation, NavigationGuard};
use crate::session::{ConfigTokenStore, Session};

/// Context for command execution containing config, session, client, and
/// runtime options.
pub struct CommandContext {
    /// Loaded configuration (defaults when no file exists yet)
    pub config: Config,
    /// Session token owner, persisted to the config file
    pub session: Session,
    /// API client bound to `session` (Arc-wrapped so the guard can share it)
    pub client: Arc<FcTaskClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a context from global options.
    ///
    /// A missing config file is not an error: the session simply starts
    /// without a token. The service address is the `--api-host` override,
    /// then the config file value, then the default.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default_at(opts.config_ref())?;
        let session = Session::open(Arc::new(ConfigTokenStore::new(opts.config_ref())))?;

        let host = config.api_host(opts.api_host_ref());
        log::debug!("Using service at {}", host);
        let client = Arc::new(FcTaskClient::with_host(session.clone(), &host)?);

        Ok(Self {
            config,
            session,
            client,
            format: opts.format,
        })
    }

    /// Create a context and pass the navigation guard for `route`.
    ///
    /// Fails with [`Error::NotAuthenticated`] when the guard redirects.
    pub async fn for_route(opts: &GlobalOptions, route: &str) -> Result<Self> {
        let ctx = Self::new(opts)?;
        ctx.navigate(route).await?;
        Ok(ctx)
    }

    /// Navigation guard sharing this context's session and client
    pub fn guard(&self) -> NavigationGuard<FcTaskClient> {
        NavigationGuard::new(self.session.clone(), self.client.clone())
    }

    /// Run the guard for `route`, turning a redirect into an error.
    pub async fn navigate(&self, route: &str) -> Result<()> {
        match self.guard().before_each(route).await {
            Navigation::Allow => Ok(()),
            Navigation::Redirect(to) => {
                log::debug!("Navigation to {} redirected to {}", route, to);
                Err(Error::NotAuthenticated)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn opts_for(dir: &TempDir) -> GlobalOptions {
        GlobalOptions {
            format: OutputFormat::Json,
            config: Some(dir.path().join("config.yaml").to_string_lossy().to_string()),
            api_host: Some("http://127.0.0.1:1".to_string()),
        }
    }

    #[tokio::test]
    async fn test_new_without_config_file() {
        let dir = TempDir::new().unwrap();
        let ctx = CommandContext::new(&opts_for(&dir)).unwrap();

        assert!(!ctx.session.has_token().await);
        assert_eq!(ctx.format, OutputFormat::Json);
        assert_eq!(ctx.client.base_url().as_str(), "http://127.0.0.1:1/");
    }

    #[tokio::test]
    async fn test_protected_route_without_token_is_not_authenticated() {
        let dir = TempDir::new().unwrap();
        let result = CommandContext::for_route(&opts_for(&dir), "dashboard").await;

        assert!(matches!(result, Err(Error::NotAuthenticated)));
    }

    #[tokio::test]
    async fn test_public_route_is_allowed_without_token() {
        let dir = TempDir::new().unwrap();
        assert!(CommandContext::for_route(&opts_for(&dir), "home").await.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_server_clears_stored_token() {
        let dir = TempDir::new().unwrap();
        let opts = opts_for(&dir);
        let config = Config {
            token: Some("stale".to_string()),
            ..Config::default()
        };
        config.save_at(opts.config_ref()).unwrap();

        let ctx = CommandContext::new(&opts).unwrap();
        assert!(ctx.session.has_token().await);

        let result = ctx.navigate("dashboard").await;

        assert!(matches!(result, Err(Error::NotAuthenticated)));
        assert!(!ctx.session.has_token().await);
        let reloaded = Config::load_at(opts.config_ref()).unwrap();
        assert!(reloaded.token.is_none());
    }
}
