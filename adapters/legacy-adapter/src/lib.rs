//! legacy-adapter — adapts the legacy user store to the `UserRepository` port.
//!
//! Purpose
//! - Satisfy the domain's `UserRepository` trait by delegating to the
//!   differently-shaped `LegacyUserStore`, isolating the rest of the system
//!   from the legacy record layout.
//! - Field mapping: `email` <-> `mail`, `first_name` <-> `forename`,
//!   `last_name` <-> `surname`.
//!
//! Notes
//! - Each adapter owns its store exclusively; instances share nothing.
//! - Store failures pass through `map_store_err` and nothing else: no
//!   retries, no recovery, no extra failure modes.

pub mod store;

use async_trait::async_trait;
use domain::{CoreError, NewUser, User, UserId, UserRepository};
use tracing::debug;

use crate::store::{LegacyStoreError, LegacyUserRecord, LegacyUserStore};

/// Adapter exposing the legacy store through the domain port.
pub struct LegacyUserAdapter {
    store: LegacyUserStore,
}

impl LegacyUserAdapter {
    /// Create an adapter over a fresh store with default settings.
    pub fn new() -> Self {
        Self {
            store: LegacyUserStore::new(),
        }
    }

    /// Create an adapter over a store configured from the environment.
    pub fn from_env() -> Self {
        Self {
            store: LegacyUserStore::from_env(),
        }
    }

    /// Create an adapter over a pre-built store.
    pub fn with_store(store: LegacyUserStore) -> Self {
        Self { store }
    }
}

impl Default for LegacyUserAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn map_store_err(e: LegacyStoreError) -> CoreError {
    match e {
        LegacyStoreError::DuplicateUser(_) => CoreError::AlreadyExists,
        other => CoreError::Repository(format!("legacy store error: {other}")),
    }
}

fn to_legacy_record(user: NewUser) -> LegacyUserRecord {
    LegacyUserRecord {
        mail: user.email,
        forename: user.first_name,
        surname: user.last_name,
    }
}

fn from_legacy_record(id: UserId, record: LegacyUserRecord) -> User {
    User {
        id,
        email: record.mail,
        first_name: record.forename,
        last_name: record.surname,
    }
}

#[async_trait]
impl UserRepository for LegacyUserAdapter {
    async fn create_user(&self, user: NewUser) -> Result<UserId, CoreError> {
        let record = to_legacy_record(user);
        debug!(mail = %record.mail, "delegating user creation to legacy store");
        let id = self.store.add_user(record).await.map_err(map_store_err)?;
        Ok(UserId::new(id))
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<User>, CoreError> {
        let record = self
            .store
            .get_user(id.as_str())
            .await
            .map_err(map_store_err)?;
        Ok(record.map(|r| from_legacy_record(id.clone(), r)))
    }
}
