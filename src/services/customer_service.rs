use uuid::Uuid;

use crate::{
    dto::customers::{CustomerList, CustomerRequest},
    error::{AppError, AppResult},
    models::Customer,
    response::{ApiResponse, Meta},
    services::catalog_service::unchanged_or,
    state::AppState,
};

fn validate(payload: &CustomerRequest) -> AppResult<()> {
    if payload.nome.trim().is_empty() {
        return Err(AppError::BadRequest("customer name is required".into()));
    }
    Ok(())
}

pub async fn list_customers(state: &AppState) -> AppResult<ApiResponse<CustomerList>> {
    let items = state.read(|store| store.clientes.as_slice().to_vec()).await;
    let meta = Meta::count(items.len());
    Ok(ApiResponse::success("Customers", CustomerList { items }, Some(meta)))
}

pub async fn create_customer(
    state: &AppState,
    payload: CustomerRequest,
) -> AppResult<ApiResponse<Customer>> {
    validate(&payload)?;
    let customer = payload.into_customer(Uuid::new_v4());

    let created = customer.clone();
    state
        .mutate(|store| -> AppResult<()> {
            store.add_customer(created);
            Ok(())
        })
        .await?;
    tracing::info!(customer_id = %customer.id, "customer created");

    Ok(ApiResponse::success("Customer created", customer, Some(Meta::empty())))
}

/// Replaces the customer's fields; an id that no longer exists is left alone.
pub async fn update_customer(
    state: &AppState,
    id: Uuid,
    payload: CustomerRequest,
) -> AppResult<ApiResponse<Customer>> {
    validate(&payload)?;
    let customer = payload.into_customer(id);

    let updated = state
        .mutate(|store| -> AppResult<Option<Customer>> {
            if !store.clientes.contains(id) {
                return Ok(None);
            }
            store.update_customer(customer.clone());
            Ok(Some(customer))
        })
        .await?;

    Ok(unchanged_or("Updated", updated))
}

pub async fn delete_customer(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    state
        .mutate(|store| -> AppResult<()> {
            store.remove_customer(id);
            Ok(())
        })
        .await?;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
