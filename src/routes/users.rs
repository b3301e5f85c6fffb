use axum::Json;
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{REDACTED_PASSWORD, Role, User};
use crate::password;
use crate::state::SharedState;
use crate::store::{NewUser, UserChanges};

#[derive(Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

/// Read shape of a user. The stored digest never leaves the service; reads
/// carry a fixed placeholder instead.
#[derive(Serialize)]
pub struct UserBody {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password: &'static str,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserBody {
    fn from(user: User) -> Self {
        UserBody {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            password: REDACTED_PASSWORD,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateUser>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = state
        .store
        .create(NewUser {
            name: req.name,
            email: req.email,
            role: req.role,
            password_digest: password::digest(&req.password),
        })
        .await?;

    tracing::info!(id, "user created");

    Ok(Json(serde_json::json!({ "id": id })))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<UserBody>, AppError> {
    let user = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(UserBody::from(user)))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUser>,
) -> Result<Json<serde_json::Value>, AppError> {
    let touched = state
        .store
        .update(
            id,
            UserChanges {
                name: req.name,
                email: req.email,
                role: req.role,
            },
        )
        .await?;

    if !touched {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    tracing::info!(id, "user updated");

    Ok(Json(serde_json::json!({ "message": "Updated" })))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let removed = state.store.delete(id).await?;

    if !removed {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    tracing::info!(id, "user deleted");

    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
