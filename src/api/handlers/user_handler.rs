//! User registration handler.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{AuthResponse, CreateUser};
use crate::errors::AppResult;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(register))
}

/// Register a new account and receive a token for it
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User registered successfully", body = AuthResponse),
        (status = 400, description = "Validation error, password mismatch, or username/email taken")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let user = state.user_service.register(payload).await?;
    let token = state.auth_service.issue_token(&user)?;

    Ok((StatusCode::CREATED, Json(AuthResponse::new(&user, token))))
}
