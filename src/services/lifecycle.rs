//! Order status progression: `Pendente` → `Em Preparo` → `Pronto` → `Entregue`.
//!
//! Transitions are operator driven and accept any target from any source,
//! including skips and reversals. Only the status field changes.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Order, OrderStatus};

pub fn transition(order: &Order, status: OrderStatus) -> Order {
    Order {
        status,
        ..order.clone()
    }
}

/// Zero-based position of `status` in the lifecycle.
pub fn step_index(status: OrderStatus) -> usize {
    OrderStatus::ALL
        .iter()
        .position(|s| *s == status)
        .unwrap_or_default()
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusStep {
    pub status: OrderStatus,
    pub description: String,
    pub reached: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Progress {
    pub current: usize,
    pub steps: Vec<StatusStep>,
}

pub fn progress(status: OrderStatus) -> Progress {
    let current = step_index(status);
    let steps = OrderStatus::ALL
        .iter()
        .enumerate()
        .map(|(idx, s)| StatusStep {
            status: *s,
            description: describe(*s).to_string(),
            reached: idx <= current,
        })
        .collect();
    Progress { current, steps }
}

fn describe(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pendente => "Aguardando confirmação",
        OrderStatus::EmPreparo => "Pedido em preparação",
        OrderStatus::Pronto => "Pronto para entrega",
        OrderStatus::Entregue => "Pedido entregue",
    }
}
