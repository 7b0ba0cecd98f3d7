use uuid::Uuid;

use crate::{
    models::{AddOn, Product},
    store::Collection,
};

/// Result of resolving a catalog reference held by a draft or an order.
///
/// Entries can be deleted while orders still point at them, so callers match
/// on `Missing` instead of treating an absent entry as an error.
#[derive(Debug, PartialEq)]
pub enum Lookup<'a, T> {
    Resolved(&'a T),
    Missing,
}

impl<'a, T> Lookup<'a, T> {
    pub fn from_option(value: Option<&'a T>) -> Self {
        match value {
            Some(v) => Lookup::Resolved(v),
            None => Lookup::Missing,
        }
    }

    pub fn resolved(self) -> Option<&'a T> {
        match self {
            Lookup::Resolved(v) => Some(v),
            Lookup::Missing => None,
        }
    }
}

/// Read-only view over products and add-ons.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    products: &'a Collection<Product>,
    add_ons: &'a Collection<AddOn>,
}

impl<'a> Catalog<'a> {
    pub fn new(products: &'a Collection<Product>, add_ons: &'a Collection<AddOn>) -> Self {
        Self { products, add_ons }
    }

    pub fn list_products(&self) -> &'a [Product] {
        self.products.as_slice()
    }

    pub fn list_add_ons(&self) -> &'a [AddOn] {
        self.add_ons.as_slice()
    }

    pub fn list_available_add_ons(&self) -> Vec<&'a AddOn> {
        self.add_ons.iter().filter(|a| a.disponivel).collect()
    }

    pub fn product(&self, id: Uuid) -> Lookup<'a, Product> {
        Lookup::from_option(self.products.get(id))
    }

    pub fn add_on(&self, id: Uuid) -> Lookup<'a, AddOn> {
        Lookup::from_option(self.add_ons.get(id))
    }

    /// Unit price in centavos; a missing product is worth 0.
    pub fn product_price(&self, id: Uuid) -> i64 {
        match self.product(id) {
            Lookup::Resolved(product) => product.preco,
            Lookup::Missing => 0,
        }
    }

    /// Unit price in centavos; a missing add-on is worth 0.
    pub fn add_on_price(&self, id: Uuid) -> i64 {
        match self.add_on(id) {
            Lookup::Resolved(add_on) => add_on.preco,
            Lookup::Missing => 0,
        }
    }
}
