#![allow(dead_code)]

use lanchonete_orders::{
    dto::{
        customers::CustomerRequest,
        products::{CreateExtraRequest, CreateProductRequest},
    },
    models::{AddOn, Category, Customer, Product},
    services::{catalog_service, customer_service},
    snapshot::SnapshotStore,
    state::AppState,
    store::StoreState,
};
use tempfile::TempDir;

/// State over an empty catalog, persisted inside a throwaway directory.
pub fn empty_state() -> (TempDir, AppState) {
    let dir = TempDir::new().expect("tempdir");
    let state = AppState::new(StoreState::default(), SnapshotStore::new(dir.path()));
    (dir, state)
}

pub async fn product(state: &AppState, nome: &str, preco: i64, permite_extras: bool) -> Product {
    catalog_service::create_product(
        state,
        CreateProductRequest {
            nome: nome.into(),
            descricao: String::new(),
            preco,
            categoria: Category::Lanches,
            imagem: String::new(),
            permite_extras,
        },
    )
    .await
    .expect("create product")
    .data
    .expect("product data")
}

pub async fn extra(state: &AppState, nome: &str, preco: i64) -> AddOn {
    catalog_service::create_extra(
        state,
        CreateExtraRequest {
            nome: nome.into(),
            preco,
            disponivel: true,
        },
    )
    .await
    .expect("create extra")
    .data
    .expect("extra data")
}

pub async fn customer(state: &AppState, nome: &str) -> Customer {
    customer_service::create_customer(
        state,
        CustomerRequest {
            nome: nome.into(),
            telefone: "(11) 99999-0000".into(),
            ..CustomerRequest::default()
        },
    )
    .await
    .expect("create customer")
    .data
    .expect("customer data")
}
