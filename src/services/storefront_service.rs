use chrono::Utc;
use uuid::Uuid;

use crate::{
    dto::storefront::{PublicCheckoutRequest, Storefront},
    error::{AppError, AppResult},
    models::{BusinessProfile, FulfillmentType, Order, Product},
    response::{ApiResponse, Meta},
    services::order_service::{build_draft, commit_into},
    state::AppState,
    store::StoreState,
};

pub async fn get_profile(state: &AppState) -> AppResult<ApiResponse<BusinessProfile>> {
    let profile = state.read(|store| store.lanchonete.clone()).await;
    let profile = match profile {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Profile", profile, Some(Meta::empty())))
}

pub async fn set_profile(
    state: &AppState,
    mut payload: BusinessProfile,
) -> AppResult<ApiResponse<BusinessProfile>> {
    payload.nome = payload.nome.trim().to_string();
    if payload.nome.is_empty() {
        return Err(AppError::BadRequest("name is required".into()));
    }
    let profile = payload.clone();
    state
        .mutate(|store| -> AppResult<()> {
            store.set_profile(profile);
            Ok(())
        })
        .await?;
    tracing::info!(slug = %payload.slug(), "business profile saved");
    Ok(ApiResponse::success("Profile saved", payload, Some(Meta::empty())))
}

fn profile_for_slug<'a>(store: &'a StoreState, slug: &str) -> AppResult<&'a BusinessProfile> {
    match &store.lanchonete {
        Some(profile) if profile.slug() == slug => Ok(profile),
        _ => Err(AppError::NotFound),
    }
}

/// Products whose name or category contains `term`, ignoring case.
pub fn search_menu<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = term.trim().to_lowercase();
    products
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.nome.to_lowercase().contains(&needle)
                || p.categoria.as_str().to_lowercase().contains(&needle)
        })
        .collect()
}

pub async fn storefront(
    state: &AppState,
    slug: &str,
    term: &str,
) -> AppResult<ApiResponse<Storefront>> {
    let view = state
        .read(|store| -> AppResult<Storefront> {
            let profile = profile_for_slug(store, slug)?;
            let catalog = store.catalog();
            Ok(Storefront {
                slug: profile.slug(),
                lanchonete: profile.clone(),
                produtos: search_menu(catalog.list_products(), term)
                    .into_iter()
                    .cloned()
                    .collect(),
                extras: catalog
                    .list_available_add_ons()
                    .into_iter()
                    .cloned()
                    .collect(),
            })
        })
        .await?;
    let meta = Meta::count(view.produtos.len());
    Ok(ApiResponse::success("Storefront", view, Some(meta)))
}

/// Registers the customer and commits a delivery order for them in one write.
pub async fn public_checkout(
    state: &AppState,
    slug: &str,
    payload: PublicCheckoutRequest,
) -> AppResult<ApiResponse<Order>> {
    if payload.cliente.nome.trim().is_empty() {
        return Err(AppError::BadRequest("customer name is required".into()));
    }

    let order = state
        .mutate(|store| -> AppResult<Order> {
            profile_for_slug(store, slug)?;
            let customer = payload.cliente.into_customer(Uuid::new_v4());
            let draft = build_draft(
                &store.catalog(),
                Some(customer.id),
                FulfillmentType::Delivery,
                None,
                &payload.items,
            )?;
            // A rejected commit discards this copy, customer included.
            store.add_customer(customer);
            Ok(commit_into(store, &draft, Utc::now())?)
        })
        .await?;

    tracing::info!(order_id = %order.id, total = order.total, "storefront order placed");
    Ok(ApiResponse::success("Order created", order, Some(Meta::empty())))
}
