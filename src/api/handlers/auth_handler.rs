//! Login handler.

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::AuthenticatedUser;

/// Login request. Unset fields take zero values and will simply fail the
/// credential check.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    /// User email address
    #[schema(example = "ahmad@gmail.com")]
    pub email: String,
    /// User password
    #[schema(example = "alta@1234")]
    pub password: String,
}

/// Successful login response.
///
/// The `messages` key (plural) and its literal are wire-compatible with
/// existing clients. The password is never included.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Operation outcome literal
    #[schema(example = "success create user")]
    pub messages: String,
    /// The authenticated user with a fresh session token
    pub user: AuthenticatedUser,
}

/// Authenticate and obtain a session token
#[utoipa::path(
    post,
    path = "/v1/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "No active user matches the credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(LoginResponse {
        messages: "success create user".to_string(),
        user,
    }))
}
