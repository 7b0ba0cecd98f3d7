use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    catalog::Catalog,
    models::{AddOn, BusinessProfile, Customer, Keyed, Order, OrderStatus, Product},
    services::lifecycle,
};

/// Flat keyed list with copy-on-write mutators.
///
/// Every mutator returns a new collection and leaves `self` untouched, so a
/// reader holding the previous value never observes a partial change. Updating
/// or removing an id that is not present returns an equal collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed + Clone> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn with_added(&self, item: T) -> Self {
        let mut items = self.items.clone();
        items.push(item);
        Self { items }
    }

    pub fn with_updated(&self, item: T) -> Self {
        let id = item.key();
        if !self.contains(id) {
            tracing::debug!(%id, "update of unknown id ignored");
        }
        let items = self
            .items
            .iter()
            .map(|existing| {
                if existing.key() == id {
                    item.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();
        Self { items }
    }

    pub fn without(&self, id: Uuid) -> Self {
        if !self.contains(id) {
            tracing::debug!(%id, "remove of unknown id ignored");
        }
        let items = self
            .items
            .iter()
            .filter(|existing| existing.key() != id)
            .cloned()
            .collect();
        Self { items }
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// The whole application state, persisted as one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    #[serde(default)]
    pub lanchonete: Option<BusinessProfile>,
    #[serde(default)]
    pub clientes: Collection<Customer>,
    #[serde(default)]
    pub produtos: Collection<Product>,
    #[serde(default)]
    pub extras: Collection<AddOn>,
    #[serde(default)]
    pub pedidos: Collection<Order>,
}

impl StoreState {
    pub fn catalog(&self) -> Catalog<'_> {
        Catalog::new(&self.produtos, &self.extras)
    }

    pub fn set_profile(&mut self, profile: BusinessProfile) {
        self.lanchonete = Some(profile);
    }

    pub fn add_customer(&mut self, customer: Customer) {
        self.clientes = self.clientes.with_added(customer);
    }

    pub fn update_customer(&mut self, customer: Customer) {
        self.clientes = self.clientes.with_updated(customer);
    }

    pub fn remove_customer(&mut self, id: Uuid) {
        self.clientes = self.clientes.without(id);
    }

    pub fn add_product(&mut self, product: Product) {
        self.produtos = self.produtos.with_added(product);
    }

    pub fn update_product(&mut self, product: Product) {
        self.produtos = self.produtos.with_updated(product);
    }

    pub fn remove_product(&mut self, id: Uuid) {
        self.produtos = self.produtos.without(id);
    }

    pub fn add_extra(&mut self, extra: AddOn) {
        self.extras = self.extras.with_added(extra);
    }

    pub fn update_extra(&mut self, extra: AddOn) {
        self.extras = self.extras.with_updated(extra);
    }

    pub fn remove_extra(&mut self, id: Uuid) {
        self.extras = self.extras.without(id);
    }

    pub fn add_order(&mut self, order: Order) {
        self.pedidos = self.pedidos.with_added(order);
    }

    /// Overwrites the status of the order with `id`; unknown ids are ignored.
    pub fn update_order_status(&mut self, id: Uuid, status: OrderStatus) {
        let Some(order) = self.pedidos.get(id) else {
            tracing::debug!(%id, "status change for unknown order ignored");
            return;
        };
        let updated = lifecycle::transition(order, status);
        self.pedidos = self.pedidos.with_updated(updated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn product(nome: &str, preco: i64) -> Product {
        Product {
            id: Uuid::new_v4(),
            nome: nome.into(),
            descricao: String::new(),
            preco,
            categoria: Category::Lanches,
            imagem: String::new(),
            permite_extras: false,
        }
    }

    #[test]
    fn mutators_leave_previous_version_untouched() {
        let burger = product("X-Burger", 1800);
        let before = Collection::default().with_added(burger.clone());

        let after = before.with_updated(Product {
            preco: 2000,
            ..burger.clone()
        });

        assert_eq!(before.get(burger.id).map(|p| p.preco), Some(1800));
        assert_eq!(after.get(burger.id).map(|p| p.preco), Some(2000));
    }

    #[test]
    fn unknown_ids_are_noops() {
        let burger = product("X-Burger", 1800);
        let products = Collection::default().with_added(burger);

        assert_eq!(products.without(Uuid::new_v4()), products);
        assert_eq!(products.with_updated(product("Ghost", 1)), products);
    }
}
