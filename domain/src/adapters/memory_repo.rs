use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{CoreError, NewUser, User, UserId, UserRepository};

/// Simple in-memory repository for tests. Not thread-safe for high
/// concurrency beyond the internal mutex guarding the map.
pub struct InMemoryUserRepo {
    inner: Mutex<BTreeMap<String, User>>,
    next_id: AtomicU64,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(BTreeMap::new()),
            next_id: AtomicU64::new(0),
        }
    }

    fn reserve_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for InMemoryUserRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn create_user(&self, user: NewUser) -> Result<UserId, CoreError> {
        let id = UserId::new(format!("u{}", self.reserve_id()));
        let mut map = self
            .inner
            .lock()
            .map_err(|_| CoreError::Repository("mutex poisoned".into()))?;
        map.insert(id.as_str().to_string(), User::from_new(id.clone(), user));
        Ok(id)
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<User>, CoreError> {
        let map = self
            .inner
            .lock()
            .map_err(|_| CoreError::Repository("mutex poisoned".into()))?;
        Ok(map.get(id.as_str()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }
    }

    #[tokio::test]
    async fn create_get_roundtrip() {
        let repo = InMemoryUserRepo::new();
        let id = repo.create_user(mk_user("ada@example.com")).await.unwrap();
        let got = repo.get_user(&id).await.unwrap().unwrap();
        assert_eq!(got.id, id);
        assert_eq!(got.email, "ada@example.com");
    }

    #[tokio::test]
    async fn ids_are_sequential() {
        let repo = InMemoryUserRepo::new();
        let a = repo.create_user(mk_user("a@example.com")).await.unwrap();
        let b = repo.create_user(mk_user("b@example.com")).await.unwrap();
        assert_eq!(a.as_str(), "u0");
        assert_eq!(b.as_str(), "u1");
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() {
        let repo = InMemoryUserRepo::new();
        let got = repo.get_user(&UserId::new("missing")).await.unwrap();
        assert!(got.is_none());
    }
}
