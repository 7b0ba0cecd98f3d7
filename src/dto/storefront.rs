use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    dto::{customers::CustomerRequest, orders::DraftLine},
    models::{AddOn, BusinessProfile, Product},
};

#[derive(Debug, Serialize, ToSchema)]
pub struct Storefront {
    pub lanchonete: BusinessProfile,
    pub slug: String,
    pub produtos: Vec<Product>,
    pub extras: Vec<AddOn>,
}

/// Public delivery order: the customer is registered along with the order.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct PublicCheckoutRequest {
    pub cliente: CustomerRequest,
    pub items: Vec<DraftLine>,
}
