use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{AddOn, Category, Product};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub nome: String,
    #[serde(default)]
    pub descricao: String,
    pub preco: i64,
    pub categoria: Category,
    #[serde(default)]
    pub imagem: String,
    #[serde(default)]
    pub permite_extras: bool,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub preco: Option<i64>,
    pub categoria: Option<Category>,
    pub imagem: Option<String>,
    pub permite_extras: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateExtraRequest {
    pub nome: String,
    pub preco: i64,
    #[serde(default = "default_true")]
    pub disponivel: bool,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateExtraRequest {
    pub nome: Option<String>,
    pub preco: Option<i64>,
    pub disponivel: Option<bool>,
}

fn default_true() -> bool {
    true
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ExtraList {
    #[schema(value_type = Vec<AddOn>)]
    pub items: Vec<AddOn>,
}
