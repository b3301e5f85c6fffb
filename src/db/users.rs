use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::{Role, User};

/// Raw row shape of the `users` table. The role column holds the enum name
/// as text; unknown names decode to `Role::Unspecified`.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    user_name: String,
    email: String,
    user_role: String,
    user_password: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.user_name,
            email: row.email,
            role: Role::from_name(&row.user_role),
            password_digest: row.user_password,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub async fn create(
    pool: &PgPool,
    name: &str,
    email: &str,
    role: Role,
    password_digest: &str,
) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO users (user_name, email, user_role, user_password)
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(role.as_str())
    .bind(password_digest)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, user_name, email, user_role, user_password, created_at, updated_at
         FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(User::from))
}

/// Merge the provided fields into the row and refresh `updated_at`.
/// Returns the number of rows touched (0 when the id does not exist).
pub async fn update(
    pool: &PgPool,
    id: i64,
    name: Option<&str>,
    email: Option<&str>,
    role: Option<Role>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE users
         SET user_name = COALESCE($2, user_name),
             email = COALESCE($3, email),
             user_role = COALESCE($4, user_role),
             updated_at = NOW()
         WHERE id = $1",
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(role.map(|r| r.as_str()))
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
