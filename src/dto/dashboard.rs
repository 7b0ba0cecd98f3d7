use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Figures are in centavos and come from committed totals.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub revenue_today: i64,
    pub revenue_total: i64,
    pub orders_today: usize,
    pub orders_in_preparation: usize,
}
