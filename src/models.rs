use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Anything stored in a keyed collection.
pub trait Keyed {
    fn key(&self) -> Uuid;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Category {
    Lanches,
    Bebidas,
    Sobremesas,
    Acompanhamentos,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Lanches => "Lanches",
            Category::Bebidas => "Bebidas",
            Category::Sobremesas => "Sobremesas",
            Category::Acompanhamentos => "Acompanhamentos",
        }
    }
}

/// Prices are in centavos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    pub id: Uuid,
    pub nome: String,
    pub preco: i64,
    pub disponivel: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemExtra {
    pub extra_id: Uuid,
    pub quantidade: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: Uuid,
    pub produto_id: Uuid,
    pub quantidade: u32,
    #[serde(default)]
    pub extras: Vec<ItemExtra>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub nome: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default)]
    pub cep: String,
    #[serde(default)]
    pub endereco: String,
    #[serde(default)]
    pub numero: String,
    #[serde(default)]
    pub complemento: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub cidade: String,
    #[serde(default)]
    pub estado: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OrderStatus {
    Pendente,
    #[serde(rename = "Em Preparo")]
    EmPreparo,
    Pronto,
    Entregue,
}

impl OrderStatus {
    /// Lifecycle order, first to last.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pendente,
        OrderStatus::EmPreparo,
        OrderStatus::Pronto,
        OrderStatus::Entregue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pendente => "Pendente",
            OrderStatus::EmPreparo => "Em Preparo",
            OrderStatus::Pronto => "Pronto",
            OrderStatus::Entregue => "Entregue",
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown status {s:?}"))
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FulfillmentType {
    Mesa,
    Delivery,
}

impl std::str::FromStr for FulfillmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mesa" => Ok(FulfillmentType::Mesa),
            "delivery" => Ok(FulfillmentType::Delivery),
            _ => Err(format!("unknown order type {s:?}")),
        }
    }
}

/// A committed order. `total` is frozen at commit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub cliente_id: Uuid,
    pub items: Vec<OrderItem>,
    pub total: i64,
    pub status: OrderStatus,
    pub tipo: FulfillmentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesa: Option<u32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
}

impl BusinessProfile {
    /// Storefront slug: lowercased name, whitespace runs collapsed to `-`.
    pub fn slug(&self) -> String {
        self.nome
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl Keyed for Product {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for AddOn {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for Customer {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for Order {
    fn key(&self) -> Uuid {
        self.id
    }
}
