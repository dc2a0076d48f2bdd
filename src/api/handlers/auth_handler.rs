//! Authentication handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};

use crate::api::AppState;
use crate::domain::{AuthResponse, Credentials};
use crate::errors::{AppError, AppResult};

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

/// Login with username and password
///
/// Missing or empty credentials are rejected as invalid credentials
/// rather than as a validation error.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = Credentials,
    responses(
        (status = 201, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 401, description = "Missing or invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let Json(credentials) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    let response = state.auth_service.login(credentials).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
