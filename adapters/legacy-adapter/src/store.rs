//! The wrapped legacy user store.
//!
//! Stand-in for the pre-existing backend this crate adapts. It predates the
//! domain crate and knows nothing about it: record shape, id scheme, and
//! failure taxonomy are its own. In-memory only; data is not persisted
//! across runs.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// User record as the legacy side shapes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacyUserRecord {
    pub mail: String,
    pub forename: String,
    pub surname: String,
}

/// Failures raised by the legacy store.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LegacyStoreError {
    #[error("user with mail {0} already registered")]
    DuplicateUser(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// In-memory legacy user store. Assigns its own identifiers
/// (`"<prefix>-<n>"`) and rejects mail addresses it has already seen.
pub struct LegacyUserStore {
    users: Mutex<BTreeMap<String, LegacyUserRecord>>,
    next_id: AtomicU64,
    id_prefix: String,
}

impl LegacyUserStore {
    /// Create a store with the default `legacy` id prefix.
    pub fn new() -> Self {
        Self::with_prefix("legacy")
    }

    /// Create a store with an explicit id prefix.
    pub fn with_prefix<S: Into<String>>(prefix: S) -> Self {
        Self {
            users: Mutex::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
            id_prefix: prefix.into(),
        }
    }

    /// Construct from env var `LEGACY_ID_PREFIX` (defaults to `legacy`).
    pub fn from_env() -> Self {
        let prefix = std::env::var("LEGACY_ID_PREFIX").unwrap_or_else(|_| "legacy".to_string());
        Self::with_prefix(prefix)
    }

    fn reserve_id(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.id_prefix, n)
    }

    /// Add a user and return the identifier assigned to it.
    pub async fn add_user(&self, record: LegacyUserRecord) -> Result<String, LegacyStoreError> {
        let mut users = self
            .users
            .lock()
            .map_err(|_| LegacyStoreError::Unavailable("mutex poisoned".into()))?;
        if users.values().any(|u| u.mail == record.mail) {
            return Err(LegacyStoreError::DuplicateUser(record.mail));
        }
        let id = self.reserve_id();
        users.insert(id.clone(), record);
        Ok(id)
    }

    /// Look up a user by the identifier `add_user` returned.
    pub async fn get_user(
        &self,
        user_id: &str,
    ) -> Result<Option<LegacyUserRecord>, LegacyStoreError> {
        let users = self
            .users
            .lock()
            .map_err(|_| LegacyStoreError::Unavailable("mutex poisoned".into()))?;
        Ok(users.get(user_id).cloned())
    }

    /// Number of records held.
    pub async fn user_count(&self) -> usize {
        self.users.lock().map(|u| u.len()).unwrap_or(0)
    }
}

impl Default for LegacyUserStore {
    fn default() -> Self {
        Self::new()
    }
}
