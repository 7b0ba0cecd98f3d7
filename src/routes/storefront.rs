use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    dto::storefront::{PublicCheckoutRequest, Storefront},
    error::AppResult,
    models::{BusinessProfile, Order},
    response::ApiResponse,
    routes::{orders, params::MenuQuery},
    services::storefront_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile).put(set_profile))
        .route("/store/{slug}", get(storefront))
        .route("/store/{slug}/orders", post(public_checkout))
        .merge(orders::tracking_router())
}

#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Business profile", body = ApiResponse<BusinessProfile>),
        (status = 404, description = "Not configured yet")
    ),
    tag = "Profile"
)]
pub async fn get_profile(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<BusinessProfile>>> {
    let resp = storefront_service::get_profile(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/profile",
    request_body = BusinessProfile,
    responses(
        (status = 200, description = "Save business profile", body = ApiResponse<BusinessProfile>),
        (status = 400, description = "Missing name")
    ),
    tag = "Profile"
)]
pub async fn set_profile(
    State(state): State<AppState>,
    Json(payload): Json<BusinessProfile>,
) -> AppResult<Json<ApiResponse<BusinessProfile>>> {
    let resp = storefront_service::set_profile(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/store/{slug}",
    params(
        ("slug" = String, Path, description = "Storefront slug"),
        MenuQuery
    ),
    responses(
        (status = 200, description = "Profile and searchable menu", body = ApiResponse<Storefront>),
        (status = 404, description = "Unknown storefront")
    ),
    tag = "Storefront"
)]
pub async fn storefront(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<ApiResponse<Storefront>>> {
    let term = query.q.unwrap_or_default();
    let resp = storefront_service::storefront(&state, &slug, &term).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/store/{slug}/orders",
    params(("slug" = String, Path, description = "Storefront slug")),
    request_body = PublicCheckoutRequest,
    responses(
        (status = 200, description = "Register customer and place a delivery order", body = ApiResponse<Order>),
        (status = 404, description = "Unknown storefront"),
        (status = 422, description = "Invalid order")
    ),
    tag = "Storefront"
)]
pub async fn public_checkout(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(payload): Json<PublicCheckoutRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = storefront_service::public_checkout(&state, &slug, payload).await?;
    Ok(Json(resp))
}
