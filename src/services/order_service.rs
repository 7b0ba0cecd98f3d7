use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    catalog::{Catalog, Lookup},
    dto::orders::{
        DraftLine, DraftRequest, OrderList, OrderTracking, Quote, TrackedExtra, TrackedLine,
        UpdateOrderStatusRequest,
    },
    error::{AppError, AppResult, ValidationError},
    models::{FulfillmentType, Order},
    response::{ApiResponse, Meta},
    services::{draft::OrderDraft, lifecycle, pricing, query::{self, OrderFilters}},
    state::AppState,
    store::StoreState,
};

pub const MAX_LINE_QUANTITY: u32 = 999;

/// Rebuilds a draft by replaying the builder operations for each line, so
/// repeated products collapse and zero quantities disappear.
pub fn build_draft(
    catalog: &Catalog<'_>,
    cliente_id: Option<Uuid>,
    tipo: FulfillmentType,
    mesa: Option<u32>,
    lines: &[DraftLine],
) -> Result<OrderDraft, ValidationError> {
    let mut draft = OrderDraft {
        cliente_id,
        tipo,
        mesa,
        ..OrderDraft::default()
    };

    for line in lines {
        if line.quantidade > MAX_LINE_QUANTITY {
            return Err(ValidationError::QuantityTooLarge(line.quantidade));
        }
        if line.quantidade == 0 {
            continue;
        }
        for _ in 0..line.quantidade {
            draft.add_product(catalog, line.produto_id)?;
        }
        for extra in &line.extras {
            if extra.quantidade > MAX_LINE_QUANTITY {
                return Err(ValidationError::QuantityTooLarge(extra.quantidade));
            }
            // Bounded above, so the cast is lossless.
            let delta = extra.quantidade as i32;
            draft.set_add_on_quantity(catalog, line.produto_id, extra.extra_id, delta)?;
        }
        if line.observacoes.is_some() {
            draft.set_note(line.produto_id, line.observacoes.clone());
        }
    }

    Ok(draft)
}

fn draft_from_request(state: &StoreState, req: &DraftRequest) -> Result<OrderDraft, ValidationError> {
    build_draft(
        &state.catalog(),
        req.cliente_id,
        req.tipo,
        req.mesa,
        &req.items,
    )
}

/// Commits `draft` against `state`, checking that the customer exists.
pub fn commit_into(
    state: &mut StoreState,
    draft: &OrderDraft,
    now: DateTime<Utc>,
) -> Result<Order, ValidationError> {
    if let Some(id) = draft.cliente_id {
        if !state.clientes.contains(id) {
            return Err(ValidationError::UnknownCustomer(id));
        }
    }
    let order = draft.commit(&state.catalog(), draft.cliente_id, now)?;
    state.add_order(order.clone());
    Ok(order)
}

pub async fn quote(state: &AppState, req: DraftRequest) -> AppResult<ApiResponse<Quote>> {
    let quote = state
        .read(|store| {
            let draft = draft_from_request(store, &req)?;
            let total = draft.compute_total(&store.catalog())?;
            Ok::<_, ValidationError>(Quote { draft, total })
        })
        .await?;
    Ok(ApiResponse::success("Quote", quote, Some(Meta::empty())))
}

pub async fn place_order(state: &AppState, req: DraftRequest) -> AppResult<ApiResponse<Order>> {
    let order = state
        .mutate(|store| -> AppResult<Order> {
            let draft = draft_from_request(store, &req)?;
            Ok(commit_into(store, &draft, Utc::now())?)
        })
        .await?;

    tracing::info!(
        order_id = %order.id,
        total = order.total,
        items = order.items.len(),
        "order placed"
    );

    Ok(ApiResponse::success("Order created", order, Some(Meta::empty())))
}

pub async fn list_orders(
    state: &AppState,
    filters: OrderFilters,
    now: DateTime<Utc>,
) -> AppResult<ApiResponse<OrderList>> {
    let items = state
        .read(|store| {
            query::filter(
                store.pedidos.as_slice(),
                &store.clientes,
                &store.catalog(),
                &filters,
                now,
            )
        })
        .await;

    let meta = Meta::count(items.len());
    Ok(ApiResponse::success("Orders", OrderList { items }, Some(meta)))
}

pub async fn get_order(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Order>> {
    let order = state.read(|store| store.pedidos.get(id).cloned()).await;
    let order = match order {
        Some(o) => o,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Order found", order, Some(Meta::empty())))
}

pub async fn update_order_status(
    state: &AppState,
    id: Uuid,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<Order>> {
    let (previous, order) = state
        .mutate(|store| -> AppResult<_> {
            let previous = match store.pedidos.get(id) {
                Some(o) => o.status,
                None => return Err(AppError::NotFound),
            };
            store.update_order_status(id, payload.status);
            let order = store.pedidos.get(id).cloned().ok_or(AppError::NotFound)?;
            Ok((previous, order))
        })
        .await?;

    tracing::info!(order_id = %id, from = %previous, to = %order.status, "order status changed");

    Ok(ApiResponse::success("Order updated", order, Some(Meta::empty())))
}

/// Public tracking view. Lines are priced against the current catalog for
/// display only; `order.total` is the committed value.
pub async fn track_order(state: &AppState, id: Uuid) -> AppResult<ApiResponse<OrderTracking>> {
    let tracking = state
        .read(|store| {
            let order = store.pedidos.get(id)?.clone();
            let catalog = store.catalog();
            let lines = order
                .items
                .iter()
                .map(|item| TrackedLine {
                    produto_id: item.produto_id,
                    produto_nome: catalog.product(item.produto_id).resolved().map(|p| p.nome.clone()),
                    quantidade: item.quantidade,
                    extras: item
                        .extras
                        .iter()
                        .map(|extra| TrackedExtra {
                            extra_id: extra.extra_id,
                            nome: match catalog.add_on(extra.extra_id) {
                                Lookup::Resolved(a) => Some(a.nome.clone()),
                                Lookup::Missing => None,
                            },
                            quantidade: extra.quantidade,
                        })
                        .collect(),
                    line_total: pricing::line_total(item, &catalog),
                })
                .collect();
            Some(OrderTracking {
                cliente: store.clientes.get(order.cliente_id).cloned(),
                progress: lifecycle::progress(order.status),
                lines,
                order,
            })
        })
        .await;

    let tracking = match tracking {
        Some(t) => t,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Order tracking", tracking, Some(Meta::empty())))
}
