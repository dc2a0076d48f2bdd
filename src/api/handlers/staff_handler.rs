//! Staff handlers, nested under their business.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreateStaff, Staff, UpdateStaff};
use crate::errors::AppResult;

/// Create staff routes (all require a bearer token)
pub fn staff_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/business/:business_id/staff",
            get(list_staff).post(create_staff),
        )
        .route(
            "/business/:business_id/staff/:staff_id",
            get(get_staff).patch(update_staff).delete(delete_staff),
        )
}

/// List the staff of a business
#[utoipa::path(
    get,
    path = "/business/{business_id}/staff",
    tag = "Staff",
    security(("bearer_auth" = [])),
    params(
        ("business_id" = i32, Path, description = "Business ID")
    ),
    responses(
        (status = 200, description = "Staff of the business", body = Vec<Staff>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Business not found")
    )
)]
pub async fn list_staff(
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
) -> AppResult<Json<Vec<Staff>>> {
    let staff = state.staff_service.list_staff(business_id).await?;
    Ok(Json(staff))
}

/// Get a staff member by id
#[utoipa::path(
    get,
    path = "/business/{business_id}/staff/{staff_id}",
    tag = "Staff",
    security(("bearer_auth" = [])),
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("staff_id" = i32, Path, description = "Staff ID")
    ),
    responses(
        (status = 200, description = "Staff member found", body = Staff),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Staff not found")
    )
)]
pub async fn get_staff(
    State(state): State<AppState>,
    Path((_business_id, staff_id)): Path<(i32, i32)>,
) -> AppResult<Json<Staff>> {
    let staff = state.staff_service.get_staff(staff_id).await?;
    Ok(Json(staff))
}

/// Add a staff member to a business
#[utoipa::path(
    post,
    path = "/business/{business_id}/staff",
    tag = "Staff",
    security(("bearer_auth" = [])),
    params(
        ("business_id" = i32, Path, description = "Business ID")
    ),
    request_body = CreateStaff,
    responses(
        (status = 201, description = "Staff member created", body = Staff),
        (status = 400, description = "Validation error or duplicate email"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Business not found")
    )
)]
pub async fn create_staff(
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<CreateStaff>,
) -> AppResult<(StatusCode, Json<Staff>)> {
    let staff = state
        .staff_service
        .create_staff(business_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(staff)))
}

/// Partially update a staff member
#[utoipa::path(
    patch,
    path = "/business/{business_id}/staff/{staff_id}",
    tag = "Staff",
    security(("bearer_auth" = [])),
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("staff_id" = i32, Path, description = "Staff ID")
    ),
    request_body = UpdateStaff,
    responses(
        (status = 200, description = "Staff member updated", body = Staff),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Staff not found")
    )
)]
pub async fn update_staff(
    State(state): State<AppState>,
    Path((_business_id, staff_id)): Path<(i32, i32)>,
    ValidatedJson(payload): ValidatedJson<UpdateStaff>,
) -> AppResult<Json<Staff>> {
    let staff = state.staff_service.update_staff(staff_id, payload).await?;
    Ok(Json(staff))
}

/// Remove a staff member
#[utoipa::path(
    delete,
    path = "/business/{business_id}/staff/{staff_id}",
    tag = "Staff",
    security(("bearer_auth" = [])),
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("staff_id" = i32, Path, description = "Staff ID")
    ),
    responses(
        (status = 204, description = "Staff member deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Staff not found")
    )
)]
pub async fn delete_staff(
    State(state): State<AppState>,
    Path((_business_id, staff_id)): Path<(i32, i32)>,
) -> AppResult<StatusCode> {
    state.staff_service.delete_staff(staff_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
