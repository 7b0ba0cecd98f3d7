use axum::{Json, Router, extract::State, routing::get};
use chrono::Utc;

use crate::{
    dto::dashboard::DashboardStats,
    error::AppResult,
    response::ApiResponse,
    services::dashboard_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Revenue and order counts", body = ApiResponse<DashboardStats>)
    ),
    tag = "Dashboard"
)]
pub async fn dashboard(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<DashboardStats>>> {
    let resp = dashboard_service::dashboard(&state, Utc::now()).await?;
    Ok(Json(resp))
}
