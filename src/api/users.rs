//! User management endpoints

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::{User, USER_NOT_FOUND};
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest};

/// Request to create a user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserApiRequest {
    pub name: String,
    pub email: String,
}

/// Request to update a user
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserApiRequest {
    pub name: String,
    pub email: String,
}

/// User representation on the wire
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value(),
            name: user.name().to_string(),
            email: user.email().to_string(),
        }
    }
}

/// Response for a successful create
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Response for a successful update
#[derive(Debug, Clone, Serialize)]
pub struct UpdateUserResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Create the `/user` router
pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/{user_id}",
            get(get_user)
                .put(update_user)
                .patch(update_user)
                .delete(delete_user),
        )
}

/// GET /user
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    debug!("Listing all users");

    let users = state.user_service.list().await.map_err(ApiError::from)?;

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// POST /user
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserApiRequest>,
) -> Result<Json<CreateUserResponse>, ApiError> {
    debug!(email = %request.email, "Creating user");

    let service_request = CreateUserRequest {
        name: request.name,
        email: request.email,
    };

    let user = state
        .user_service
        .create(service_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(CreateUserResponse {
        message: "User is Created".to_string(),
        user: UserResponse::from(&user),
    }))
}

/// GET /user/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %user_id, "Getting user");

    let user = state
        .user_service
        .get(&user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;

    Ok(Json(UserResponse::from(&user)))
}

/// PUT /user/{user_id} and PATCH /user/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateUserApiRequest>,
) -> Result<Json<UpdateUserResponse>, ApiError> {
    debug!(user_id = %user_id, "Updating user");

    let service_request = UpdateUserRequest {
        name: request.name,
        email: request.email,
    };

    let user = state
        .user_service
        .update(&user_id, service_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UpdateUserResponse {
        message: "User updated successfully.".to_string(),
        user: UserResponse::from(&user),
    }))
}

/// DELETE /user/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    debug!(user_id = %user_id, "Deleting user");

    let deleted = state
        .user_service
        .delete(&user_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::not_found(USER_NOT_FOUND));
    }

    Ok(Json(serde_json::json!({
        "message": "User deleted successfully."
    })))
}
