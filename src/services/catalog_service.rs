use uuid::Uuid;

use crate::{
    dto::products::{
        CreateExtraRequest, CreateProductRequest, ExtraList, ProductList, UpdateExtraRequest,
        UpdateProductRequest,
    },
    error::{AppError, AppResult},
    models::{AddOn, Product},
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Highest accepted unit price, in centavos (R$ 1.000.000,00).
pub const MAX_PRICE: i64 = 100_000_000;

fn validate_price(preco: i64) -> AppResult<()> {
    if preco < 0 {
        return Err(AppError::BadRequest("price must not be negative".into()));
    }
    if preco > MAX_PRICE {
        return Err(AppError::BadRequest(format!(
            "price must not exceed {MAX_PRICE} centavos"
        )));
    }
    Ok(())
}

pub async fn list_products(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let items = state.read(|store| store.catalog().list_products().to_vec()).await;
    let meta = Meta::count(items.len());
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn get_product(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Product>> {
    let result = state.read(|store| store.produtos.get(id).cloned()).await;
    let result = match result {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Product", result, None))
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    validate_price(payload.preco)?;
    let product = Product {
        id: Uuid::new_v4(),
        nome: payload.nome,
        descricao: payload.descricao,
        preco: payload.preco,
        categoria: payload.categoria,
        imagem: payload.imagem,
        permite_extras: payload.permite_extras,
    };

    let created = product.clone();
    state
        .mutate(|store| -> AppResult<()> {
            store.add_product(created);
            Ok(())
        })
        .await?;
    tracing::info!(product_id = %product.id, "product created");

    Ok(ApiResponse::success("Product created", product, Some(Meta::empty())))
}

/// Applies the patch if the product still exists. A product removed in the
/// meantime leaves the catalog as it is and yields no data.
pub async fn update_product(
    state: &AppState,
    id: Uuid,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    if let Some(preco) = payload.preco {
        validate_price(preco)?;
    }

    let updated = state
        .mutate(|store| -> AppResult<Option<Product>> {
            let Some(existing) = store.produtos.get(id) else {
                return Ok(None);
            };
            let mut product = existing.clone();
            if let Some(nome) = payload.nome {
                product.nome = nome;
            }
            if let Some(descricao) = payload.descricao {
                product.descricao = descricao;
            }
            if let Some(preco) = payload.preco {
                product.preco = preco;
            }
            if let Some(categoria) = payload.categoria {
                product.categoria = categoria;
            }
            if let Some(imagem) = payload.imagem {
                product.imagem = imagem;
            }
            if let Some(permite_extras) = payload.permite_extras {
                product.permite_extras = permite_extras;
            }
            store.update_product(product.clone());
            Ok(Some(product))
        })
        .await?;

    Ok(unchanged_or("Updated", updated))
}

pub async fn delete_product(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    state
        .mutate(|store| -> AppResult<()> {
            store.remove_product(id);
            Ok(())
        })
        .await?;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn list_extras(
    state: &AppState,
    only_available: bool,
) -> AppResult<ApiResponse<ExtraList>> {
    let items: Vec<AddOn> = state
        .read(|store| {
            let catalog = store.catalog();
            if only_available {
                catalog.list_available_add_ons().into_iter().cloned().collect()
            } else {
                catalog.list_add_ons().to_vec()
            }
        })
        .await;
    let meta = Meta::count(items.len());
    Ok(ApiResponse::success("Extras", ExtraList { items }, Some(meta)))
}

pub async fn create_extra(
    state: &AppState,
    payload: CreateExtraRequest,
) -> AppResult<ApiResponse<AddOn>> {
    validate_price(payload.preco)?;
    let extra = AddOn {
        id: Uuid::new_v4(),
        nome: payload.nome,
        preco: payload.preco,
        disponivel: payload.disponivel,
    };

    let created = extra.clone();
    state
        .mutate(|store| -> AppResult<()> {
            store.add_extra(created);
            Ok(())
        })
        .await?;
    tracing::info!(extra_id = %extra.id, "extra created");

    Ok(ApiResponse::success("Extra created", extra, Some(Meta::empty())))
}

pub async fn update_extra(
    state: &AppState,
    id: Uuid,
    payload: UpdateExtraRequest,
) -> AppResult<ApiResponse<AddOn>> {
    if let Some(preco) = payload.preco {
        validate_price(preco)?;
    }

    let updated = state
        .mutate(|store| -> AppResult<Option<AddOn>> {
            let Some(existing) = store.extras.get(id) else {
                return Ok(None);
            };
            let mut extra = existing.clone();
            if let Some(nome) = payload.nome {
                extra.nome = nome;
            }
            if let Some(preco) = payload.preco {
                extra.preco = preco;
            }
            if let Some(disponivel) = payload.disponivel {
                extra.disponivel = disponivel;
            }
            store.update_extra(extra.clone());
            Ok(Some(extra))
        })
        .await?;

    Ok(unchanged_or("Updated", updated))
}

pub async fn delete_extra(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    state
        .mutate(|store| -> AppResult<()> {
            store.remove_extra(id);
            Ok(())
        })
        .await?;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Shapes the answer to an update that may have targeted a vanished id.
pub(crate) fn unchanged_or<T>(message: &str, value: Option<T>) -> ApiResponse<T> {
    match value {
        Some(v) => ApiResponse {
            message: message.to_string(),
            data: Some(v),
            meta: Some(Meta::empty()),
        },
        None => ApiResponse {
            message: "Unchanged".to_string(),
            data: None,
            meta: Some(Meta::empty()),
        },
    }
}
