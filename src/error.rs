use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::response::{ApiResponse, Meta};

/// Rejections raised while building or committing an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("order has no items")]
    EmptyOrder,

    #[error("order has no customer")]
    MissingCustomer,

    #[error("table orders need a table number")]
    MissingTable,

    #[error("customer {0} does not exist")]
    UnknownCustomer(Uuid),

    #[error("product {0} does not exist")]
    UnknownProduct(Uuid),

    #[error("product {0} is not in the order")]
    ProductNotInDraft(Uuid),

    #[error("product {0} does not accept add-ons")]
    AddOnsNotAllowed(Uuid),

    #[error("add-on {0} is not available")]
    UnavailableAddOn(Uuid),

    #[error("quantity {0} exceeds the per-line limit")]
    QuantityTooLarge(u32),

    #[error("order total is too large")]
    TotalTooLarge,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Invalid order: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error")]
    Snapshot(#[from] SnapshotError),
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            AppError::Snapshot(err) => {
                tracing::error!(error = %err, "snapshot write failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = ApiResponse {
            message,
            data: Some(ErrorData {
                error: self.to_string(),
            }),
            meta: Some(Meta::empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
