//! User handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::domain::entities::{User, UserId};
use crate::error::AppError;
use crate::AppState;

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// GET /api/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, AppError> {
    let user = state.user_service.get_user_by_id(UserId(id)).await?;
    Ok(Json(user))
}
