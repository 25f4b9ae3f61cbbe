//! Session token ownership and persistence
//!
//! The [`Session`] is the single owner of the auth token. It is passed
//! explicitly to the API client and the navigation guard; the token can only
//! change through [`Session::set_token`] and [`Session::clear`], which write
//! through to the backing [`TokenStore`].

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::error::Result;

/// Persistent storage for the session token.
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored token; `None` removes it
    fn save(&self, token: Option<&str>) -> Result<()>;
}

/// Token store backed by the `token` key of the YAML config file.
pub struct ConfigTokenStore {
    path: Option<String>,
}

impl ConfigTokenStore {
    /// Create a store for the given config path (or the default location)
    pub fn new(path: Option<&str>) -> Self {
        Self {
            path: path.map(str::to_string),
        }
    }
}

impl TokenStore for ConfigTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(Config::load_or_default_at(self.path.as_deref())?.token)
    }

    fn save(&self, token: Option<&str>) -> Result<()> {
        let mut config = Config::load_or_default_at(self.path.as_deref())?;
        config.token = token.map(str::to_string);
        config.save_at(self.path.as_deref())
    }
}

/// In-process token store, used when nothing should touch the disk.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryTokenStore {
    token: std::sync::Mutex<Option<String>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    /// Create a store that starts out holding `token`
    pub fn with_token(token: &str) -> Self {
        Self {
            token: std::sync::Mutex::new(Some(token.to_string())),
        }
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.lock().map(|t| t.clone()).unwrap_or_default())
    }

    fn save(&self, token: Option<&str>) -> Result<()> {
        if let Ok(mut slot) = self.token.lock() {
            *slot = token.map(str::to_string);
        }
        Ok(())
    }
}

/// Shared handle to the current session token.
///
/// Clones share the same token; a clear through one handle is seen by all.
#[derive(Clone)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
    store: Arc<dyn TokenStore>,
}

impl Session {
    /// Open a session, reading the current token from `store`
    pub fn open(store: Arc<dyn TokenStore>) -> Result<Self> {
        let token = store.load()?.filter(|t| !t.is_empty());
        Ok(Self {
            token: Arc::new(RwLock::new(token)),
            store,
        })
    }

    /// A session with no persistence, starting without a token
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            token: Arc::new(RwLock::new(None)),
            store: Arc::new(MemoryTokenStore::default()),
        }
    }

    /// The current token, if a non-empty one is held
    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Whether a token is currently held
    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Store a new token. An empty string is treated as a clear.
    pub async fn set_token(&self, token: &str) -> Result<()> {
        if token.is_empty() {
            return self.clear().await;
        }

        let mut slot = self.token.write().await;
        self.store.save(Some(token))?;
        *slot = Some(token.to_string());
        Ok(())
    }

    /// Forget the token, in memory and in the store
    pub async fn clear(&self) -> Result<()> {
        let mut slot = self.token.write().await;
        self.store.save(None)?;
        *slot = None;
        log::info!("Session token cleared");
        Ok(())
    }
}
