//! Domain library for the user registry.
//!
//! This crate holds the domain types, ports (traits), and error definitions.
//! Keep backends and IO concerns out of this crate; the only adapter that
//! lives here is the in-memory one used by tests and demos.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Opaque identifier for a stored user, assigned by whichever backend
/// persists the record. No format constraints apply; any string value,
/// including the empty string, is representable.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Input data for creating a new user. Carries no identifier; the backend
/// assigns one on creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Stored user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Attach a backend-assigned id to creation input.
    pub fn from_new(id: UserId, input: NewUser) -> Self {
        Self {
            id,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
        }
    }
}

/// Repository port for persisting and loading users.
///
/// Backends (the in-memory repo, the legacy-store adapter, future native
/// ones) are interchangeable behind this trait; callers depend on the port,
/// never on a concrete type. Implementations may fail asynchronously for
/// their own reasons (duplicate user, backend unavailable) and such
/// failures propagate to the caller.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a user and return the identifier the backend assigned.
    async fn create_user(&self, user: NewUser) -> Result<UserId, CoreError>;

    /// Fetch a previously created user. `Ok(None)` when the id is unknown.
    async fn get_user(&self, id: &UserId) -> Result<Option<User>, CoreError>;
}

/// Core domain errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("resource already exists")]
    AlreadyExists,
    #[error("repository error: {0}")]
    Repository(String),
}

// Re-export modules when added
pub mod adapters;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory_repo::InMemoryUserRepo;

    #[test]
    fn user_id_is_opaque() {
        let id = UserId::new("legacy-7");
        assert_eq!(id.as_str(), "legacy-7");
        // No invariants declared on identifiers
        let empty = UserId::new("");
        assert_eq!(empty.as_str(), "");
    }

    #[test]
    fn user_from_new_attaches_id() {
        let input = NewUser {
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        };
        let user = User::from_new(UserId::new("u0"), input);
        assert_eq!(user.id.as_str(), "u0");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Lovelace");
    }

    #[tokio::test]
    async fn port_is_object_safe() {
        let repo: Box<dyn UserRepository> = Box::new(InMemoryUserRepo::new());
        let id = repo
            .create_user(NewUser {
                email: "ada@example.com".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            })
            .await
            .expect("created");
        assert!(repo.get_user(&id).await.expect("get").is_some());
    }
}
