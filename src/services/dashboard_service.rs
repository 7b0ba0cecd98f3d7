use chrono::{DateTime, Utc};

use crate::{
    dto::dashboard::DashboardStats,
    error::AppResult,
    models::{Order, OrderStatus},
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Aggregates committed totals; orders are never re-priced here.
pub fn stats(orders: &[Order], now: DateTime<Utc>) -> DashboardStats {
    let today = now.date_naive();
    let (revenue_today, orders_today) = orders
        .iter()
        .filter(|o| o.created_at.date_naive() == today)
        .fold((0, 0), |(sum, count), o| (sum + o.total, count + 1));

    DashboardStats {
        revenue_today,
        revenue_total: orders.iter().map(|o| o.total).sum(),
        orders_today,
        orders_in_preparation: orders
            .iter()
            .filter(|o| o.status == OrderStatus::EmPreparo)
            .count(),
    }
}

pub async fn dashboard(
    state: &AppState,
    now: DateTime<Utc>,
) -> AppResult<ApiResponse<DashboardStats>> {
    let data = state.read(|store| stats(store.pedidos.as_slice(), now)).await;
    Ok(ApiResponse::success("Dashboard", data, Some(Meta::empty())))
}
