//! The four-operation user store contract and its two backends.
//!
//! `PostgresStore` maps each operation onto a parameterized statement against
//! the pooled connection; `MemoryStore` serves the same contract from a
//! mutex-guarded map and can be pre-seeded with fabricated users for local
//! development. Callers pick one at startup and never look behind the trait.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::{Role, User};

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Fields supplied when creating a user. The digest is already computed;
/// plaintext never crosses this boundary.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password_digest: String,
}

/// Partial-merge update: `None` fields leave the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user and return the storage-assigned id.
    async fn create(&self, new: NewUser) -> Result<i64, sqlx::Error>;

    /// Look up a user by id. `None` when the id does not exist.
    async fn get(&self, id: i64) -> Result<Option<User>, sqlx::Error>;

    /// Merge the provided fields and refresh `updated_at`.
    /// Returns `false` when the id does not exist.
    async fn update(&self, id: i64, changes: UserChanges) -> Result<bool, sqlx::Error>;

    /// Remove a user. Returns `false` when the id does not exist.
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;
}
