//! User resource handlers.

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::parse_id;
use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::UserData;
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// User creation request. Unset fields take zero values.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateUserRequest {
    /// User display name
    #[schema(example = "ahmad naufal")]
    pub name: String,
    /// User email address
    #[schema(example = "ahmad@gmail.com")]
    pub email: String,
    /// User password (hashed before storage, never echoed back)
    #[schema(example = "alta@1234")]
    pub password: String,
}

/// Partial user update request. Omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    /// New display name
    #[schema(example = "ahmad")]
    pub name: Option<String>,
    /// New email address
    #[schema(example = "naufal@gmail.com")]
    pub email: Option<String>,
    /// New password (re-hashed before storage)
    pub password: Option<String>,
}

/// List response for users
#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    /// Operation outcome literal
    #[schema(example = "success get all users")]
    pub message: String,
    /// All active users
    pub users: Vec<UserData>,
}

/// Detail response for a single user.
///
/// A missing row is still a 200 with a `null` user.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserDetailResponse {
    /// Operation outcome literal
    #[schema(example = "success get user by id")]
    pub message: String,
    /// The matching active user, or `null` when none exists
    pub user: Option<UserData>,
}

/// List all active users
#[utoipa::path(
    get,
    path = "/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All active users", body = UserListResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<UserListResponse>> {
    let users = state.user_service.list_users().await?;

    Ok(Json(UserListResponse {
        message: "success get all users".to_string(),
        users: users.into_iter().map(UserData::from).collect(),
    }))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID (non-negative integer)")),
    responses(
        (status = 200, description = "User by id, null when no row matches", body = UserDetailResponse),
        (status = 400, description = "Id is not a non-negative integer"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserDetailResponse>> {
    let id = parse_id(&id)?;
    let user = state.user_service.get_user(id).await?;

    Ok(Json(UserDetailResponse {
        message: "success get user by id".to_string(),
        user: user.map(UserData::from),
    }))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/v1/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created; the row is not echoed back", body = MessageResponse),
        (status = 400, description = "Malformed body or store error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .user_service
        .create_user(payload.name, payload.email, payload.password)
        .await?;

    Ok(Json(MessageResponse::new("success create new users")))
}

/// Update a user by id (partial merge)
#[utoipa::path(
    put,
    path = "/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID (non-negative integer)")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Update applied; unknown ids succeed with zero rows affected", body = MessageResponse),
        (status = 400, description = "Malformed id/body or store error"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateUserRequest>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;

    state
        .user_service
        .update_user(id, payload.name, payload.email, payload.password)
        .await?;

    Ok(Json(MessageResponse::new("success updated user by id")))
}

/// Soft delete a user by id
#[utoipa::path(
    delete,
    path = "/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID (non-negative integer)")),
    responses(
        (status = 200, description = "Delete applied (idempotent)", body = MessageResponse),
        (status = 400, description = "Malformed id or store error"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    state.user_service.delete_user(id).await?;

    Ok(Json(MessageResponse::new("success deleted user by id")))
}
