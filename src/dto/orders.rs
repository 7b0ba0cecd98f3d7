use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    models::{Customer, FulfillmentType, ItemExtra, Order, OrderStatus},
    services::{draft::OrderDraft, lifecycle::Progress},
};

/// One product line as submitted by the ordering screen.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftLine {
    pub produto_id: Uuid,
    pub quantidade: u32,
    #[serde(default)]
    pub extras: Vec<ItemExtra>,
    #[serde(default)]
    pub observacoes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    #[serde(default)]
    pub cliente_id: Option<Uuid>,
    pub tipo: FulfillmentType,
    #[serde(default)]
    pub mesa: Option<u32>,
    #[serde(default)]
    pub items: Vec<DraftLine>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Quote {
    pub draft: OrderDraft,
    pub total: i64,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}

/// An order line priced against the current catalog for display.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackedLine {
    pub produto_id: Uuid,
    pub produto_nome: Option<String>,
    pub quantidade: u32,
    pub extras: Vec<TrackedExtra>,
    /// `None` when the repriced line does not fit in an `i64`.
    pub line_total: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackedExtra {
    pub extra_id: Uuid,
    pub nome: Option<String>,
    pub quantidade: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderTracking {
    pub order: Order,
    pub cliente: Option<Customer>,
    pub progress: Progress,
    pub lines: Vec<TrackedLine>,
}
