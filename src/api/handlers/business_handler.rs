//! Business handlers.
//!
//! Reads are public; writes sit behind the bearer guard.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, patch, post},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{Business, CreateBusiness, UpdateBusiness};
use crate::errors::AppResult;

/// Public business routes
pub fn public_business_routes() -> Router<AppState> {
    Router::new()
        .route("/business", get(list_businesses))
        .route("/business/:business_id", get(get_business))
}

/// Business routes requiring a bearer token
pub fn protected_business_routes() -> Router<AppState> {
    Router::new()
        .route("/business", post(create_business))
        .route(
            "/business/:business_id",
            patch(update_business).delete(delete_business),
        )
}

/// List all businesses
#[utoipa::path(
    get,
    path = "/business",
    tag = "Business",
    responses(
        (status = 200, description = "All businesses ordered by id", body = Vec<Business>)
    )
)]
pub async fn list_businesses(State(state): State<AppState>) -> AppResult<Json<Vec<Business>>> {
    let businesses = state.business_service.list_businesses().await?;
    Ok(Json(businesses))
}

/// Get a business by id
#[utoipa::path(
    get,
    path = "/business/{business_id}",
    tag = "Business",
    params(
        ("business_id" = i32, Path, description = "Business ID")
    ),
    responses(
        (status = 200, description = "Business found", body = Business),
        (status = 404, description = "Business not found")
    )
)]
pub async fn get_business(
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
) -> AppResult<Json<Business>> {
    let business = state.business_service.get_business(business_id).await?;
    Ok(Json(business))
}

/// Create a business
#[utoipa::path(
    post,
    path = "/business",
    tag = "Business",
    security(("bearer_auth" = [])),
    request_body = CreateBusiness,
    responses(
        (status = 201, description = "Business created", body = Business),
        (status = 400, description = "Validation error or duplicate name"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_business(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBusiness>,
) -> AppResult<(StatusCode, Json<Business>)> {
    tracing::debug!(user_id = current_user.id, "Creating business");
    let business = state.business_service.create_business(payload).await?;
    Ok((StatusCode::CREATED, Json(business)))
}

/// Partially update a business
#[utoipa::path(
    patch,
    path = "/business/{business_id}",
    tag = "Business",
    security(("bearer_auth" = [])),
    params(
        ("business_id" = i32, Path, description = "Business ID")
    ),
    request_body = UpdateBusiness,
    responses(
        (status = 200, description = "Business updated", body = Business),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Business not found")
    )
)]
pub async fn update_business(
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateBusiness>,
) -> AppResult<Json<Business>> {
    let business = state
        .business_service
        .update_business(business_id, payload)
        .await?;
    Ok(Json(business))
}

/// Delete a business and all of its staff
#[utoipa::path(
    delete,
    path = "/business/{business_id}",
    tag = "Business",
    security(("bearer_auth" = [])),
    params(
        ("business_id" = i32, Path, description = "Business ID")
    ),
    responses(
        (status = 204, description = "Business deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Business not found")
    )
)]
pub async fn delete_business(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
) -> AppResult<StatusCode> {
    tracing::debug!(user_id = current_user.id, business_id, "Deleting business");
    state.business_service.delete_business(business_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
