use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use crate::fake;
use crate::models::User;

use super::{NewUser, UserChanges, UserStore};

/// In-memory implementation for contract tests and database-free demo runs.
///
/// Ids come from an atomic counter and are never reused, matching the
/// BIGSERIAL behavior of the persistent backend.
pub struct MemoryStore {
    users: Mutex<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            users: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// A store pre-populated with `count` fabricated users.
    pub fn seeded(count: usize) -> Self {
        let store = MemoryStore::new();
        {
            let mut users = store.users.lock().unwrap();
            for _ in 0..count {
                let id = store.next_id.fetch_add(1, Ordering::Relaxed);
                users.insert(id, fake::user(id));
            }
        }
        store
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        MemoryStore::new()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, new: NewUser) -> Result<i64, sqlx::Error> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let user = User {
            id,
            name: new.name,
            email: new.email,
            role: new.role,
            password_digest: new.password_digest,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.users.lock().unwrap().insert(id, user);
        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn update(&self, id: i64, changes: UserChanges) -> Result<bool, sqlx::Error> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.get_mut(&id) else {
            return Ok(false);
        };
        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(role) = changes.role {
            user.role = role;
        }
        user.updated_at = Some(Utc::now());
        Ok(true)
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        Ok(self.users.lock().unwrap().remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: format!("{}@test.com", name.to_lowercase()),
            role: Role::User,
            password_digest: crate::password::digest("secret"),
        }
    }

    #[tokio::test]
    async fn create_assigns_fresh_positive_ids() {
        let store = MemoryStore::new();
        let a = store.create(new_user("Alice")).await.unwrap();
        let b = store.create(new_user("Bob")).await.unwrap();
        assert!(a > 0);
        assert!(b > a);
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let store = MemoryStore::new();
        let id = store.create(new_user("Alice")).await.unwrap();

        let user = store.get(id).await.unwrap().expect("user exists");
        assert_eq!(user.id, id);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@test.com");
        assert_eq!(user.role, Role::User);
        assert!(user.updated_at.is_none());
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() {
        let store = MemoryStore::new();
        assert!(store.get(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_merges_and_refreshes_updated_at() {
        let store = MemoryStore::new();
        let id = store.create(new_user("Alice")).await.unwrap();

        let touched = store
            .update(
                id,
                UserChanges {
                    name: Some("Alicia".to_string()),
                    role: Some(Role::Admin),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(touched);

        let user = store.get(id).await.unwrap().unwrap();
        assert_eq!(user.name, "Alicia");
        assert_eq!(user.email, "alice@test.com"); // untouched
        assert_eq!(user.role, Role::Admin);
        let first = user.updated_at.expect("updated_at set");
        assert!(first >= user.created_at);

        store.update(id, UserChanges::default()).await.unwrap();
        let user = store.get(id).await.unwrap().unwrap();
        assert!(user.updated_at.unwrap() >= first);
    }

    #[tokio::test]
    async fn update_unknown_id_reports_missing() {
        let store = MemoryStore::new();
        let touched = store.update(7, UserChanges::default()).await.unwrap();
        assert!(!touched);
    }

    #[tokio::test]
    async fn delete_removes_and_reports_missing() {
        let store = MemoryStore::new();
        let id = store.create(new_user("Alice")).await.unwrap();

        assert!(store.delete(id).await.unwrap());
        assert!(store.get(id).await.unwrap().is_none());
        assert!(!store.delete(id).await.unwrap());
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let store = MemoryStore::new();
        let a = store.create(new_user("Alice")).await.unwrap();
        store.delete(a).await.unwrap();
        let b = store.create(new_user("Bob")).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn seeded_store_serves_fabricated_users() {
        let store = MemoryStore::seeded(5);
        let mut found = 0;
        for id in 1..=5 {
            let user = store.get(id).await.unwrap().expect("seeded user");
            assert!(!user.name.is_empty());
            assert!(user.email.contains('@'));
            found += 1;
        }
        assert_eq!(found, 5);

        // New creations continue past the seeded range.
        let id = store.create(new_user("Alice")).await.unwrap();
        assert_eq!(id, 6);
    }
}
