use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    services::query::OrderFilters,
};

/// Order list criteria as they arrive in the query string. Empty values mean
/// "no filter".
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub tipo: Option<String>,
    pub date_range: Option<String>,
}

fn parse_opt<T: std::str::FromStr<Err = String>>(raw: Option<&String>) -> AppResult<Option<T>> {
    match raw.map(|s| s.trim()).filter(|s| !s.is_empty()) {
        Some(s) => s.parse::<T>().map(Some).map_err(AppError::BadRequest),
        None => Ok(None),
    }
}

impl OrderListQuery {
    pub fn into_filters(self) -> AppResult<OrderFilters> {
        Ok(OrderFilters {
            status: parse_opt(self.status.as_ref())?,
            tipo: parse_opt(self.tipo.as_ref())?,
            date_range: parse_opt(self.date_range.as_ref())?,
            search: self.search.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExtraQuery {
    pub available: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MenuQuery {
    pub q: Option<String>,
}
