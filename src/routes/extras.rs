use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, put},
};
use uuid::Uuid;

use crate::{
    dto::products::{CreateExtraRequest, ExtraList, UpdateExtraRequest},
    error::AppResult,
    models::AddOn,
    response::ApiResponse,
    routes::params::ExtraQuery,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_extras).post(create_extra))
        .route("/{id}", put(update_extra).delete(delete_extra))
}

#[utoipa::path(
    get,
    path = "/api/extras",
    params(ExtraQuery),
    responses(
        (status = 200, description = "List extras", body = ApiResponse<ExtraList>)
    ),
    tag = "Extras"
)]
pub async fn list_extras(
    State(state): State<AppState>,
    Query(query): Query<ExtraQuery>,
) -> AppResult<Json<ApiResponse<ExtraList>>> {
    let resp = catalog_service::list_extras(&state, query.available.unwrap_or(false)).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/extras",
    request_body = CreateExtraRequest,
    responses(
        (status = 200, description = "Create extra", body = ApiResponse<AddOn>),
        (status = 400, description = "Invalid price")
    ),
    tag = "Extras"
)]
pub async fn create_extra(
    State(state): State<AppState>,
    Json(payload): Json<CreateExtraRequest>,
) -> AppResult<Json<ApiResponse<AddOn>>> {
    let resp = catalog_service::create_extra(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/extras/{id}",
    params(("id" = Uuid, Path, description = "Extra ID")),
    request_body = UpdateExtraRequest,
    responses(
        (status = 200, description = "Update extra; no data when the id is gone", body = ApiResponse<AddOn>)
    ),
    tag = "Extras"
)]
pub async fn update_extra(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateExtraRequest>,
) -> AppResult<Json<ApiResponse<AddOn>>> {
    let resp = catalog_service::update_extra(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/extras/{id}",
    params(("id" = Uuid, Path, description = "Extra ID")),
    responses(
        (status = 200, description = "Delete extra")
    ),
    tag = "Extras"
)]
pub async fn delete_extra(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = catalog_service::delete_extra(&state, id).await?;
    Ok(Json(resp))
}
