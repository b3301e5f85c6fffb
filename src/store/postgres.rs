use async_trait::async_trait;
use sqlx::PgPool;

use crate::db;
use crate::models::User;

use super::{NewUser, UserChanges, UserStore};

/// Storage-backed implementation over a pooled Postgres connection.
///
/// Every operation is a single auto-commit statement; concurrency safety is
/// the pool's contract, not ours.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresStore { pool }
    }
}

#[async_trait]
impl UserStore for PostgresStore {
    async fn create(&self, new: NewUser) -> Result<i64, sqlx::Error> {
        db::users::create(
            &self.pool,
            &new.name,
            &new.email,
            new.role,
            &new.password_digest,
        )
        .await
    }

    async fn get(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        db::users::find_by_id(&self.pool, id).await
    }

    async fn update(&self, id: i64, changes: UserChanges) -> Result<bool, sqlx::Error> {
        let rows = db::users::update(
            &self.pool,
            id,
            changes.name.as_deref(),
            changes.email.as_deref(),
            changes.role,
        )
        .await?;
        Ok(rows > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let rows = db::users::delete(&self.pool, id).await?;
        Ok(rows > 0)
    }
}
