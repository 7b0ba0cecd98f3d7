use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    catalog::{Catalog, Lookup},
    error::ValidationError,
    models::{FulfillmentType, ItemExtra, Order, OrderItem, OrderStatus},
    services::pricing,
};

/// An order being assembled. Never persisted; turned into an [`Order`] by
/// [`OrderDraft::commit`].
///
/// Holds at most one item per product and never stores a zero quantity, for
/// items or for their add-on selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub cliente_id: Option<Uuid>,
    pub tipo: FulfillmentType,
    pub mesa: Option<u32>,
    pub items: Vec<OrderItem>,
    /// Product whose add-ons are open for editing, if any.
    pub editing_extras: Option<Uuid>,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            cliente_id: None,
            tipo: FulfillmentType::Mesa,
            mesa: Some(1),
            items: Vec::new(),
            editing_extras: None,
        }
    }
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivery() -> Self {
        Self {
            tipo: FulfillmentType::Delivery,
            mesa: None,
            ..Self::default()
        }
    }

    pub fn item(&self, product_id: Uuid) -> Option<&OrderItem> {
        self.items.iter().find(|item| item.produto_id == product_id)
    }

    pub fn quantity_of(&self, product_id: Uuid) -> u32 {
        self.item(product_id).map_or(0, |item| item.quantidade)
    }

    fn item_mut(&mut self, product_id: Uuid) -> Option<&mut OrderItem> {
        self.items
            .iter_mut()
            .find(|item| item.produto_id == product_id)
    }

    /// Adds one unit of `product_id`, collapsing into an existing item.
    pub fn add_product(
        &mut self,
        catalog: &Catalog<'_>,
        product_id: Uuid,
    ) -> Result<(), ValidationError> {
        let Lookup::Resolved(product) = catalog.product(product_id) else {
            return Err(ValidationError::UnknownProduct(product_id));
        };

        match self.item_mut(product_id) {
            Some(item) => {
                item.quantidade = item
                    .quantidade
                    .checked_add(1)
                    .ok_or(ValidationError::QuantityTooLarge(item.quantidade))?;
            }
            None => self.items.push(OrderItem {
                id: Uuid::new_v4(),
                produto_id: product_id,
                quantidade: 1,
                extras: Vec::new(),
                observacoes: None,
            }),
        }

        if product.permite_extras {
            self.editing_extras = Some(product_id);
        }
        Ok(())
    }

    /// Removes one unit of `product_id`; the item goes away at zero.
    pub fn remove_product(&mut self, product_id: Uuid) {
        let Some(item) = self.item_mut(product_id) else {
            return;
        };
        item.quantidade -= 1;
        if item.quantidade == 0 {
            self.items.retain(|item| item.produto_id != product_id);
            if self.editing_extras == Some(product_id) {
                self.editing_extras = None;
            }
        }
    }

    /// Moves the quantity of one add-on on one item by `delta`, clamped at 0.
    ///
    /// Starting a new selection requires the product to accept add-ons and the
    /// add-on to be available. Selections already present stay adjustable even
    /// if the add-on has since become unavailable.
    pub fn set_add_on_quantity(
        &mut self,
        catalog: &Catalog<'_>,
        product_id: Uuid,
        add_on_id: Uuid,
        delta: i32,
    ) -> Result<(), ValidationError> {
        let allows_extras = catalog
            .product(product_id)
            .resolved()
            .is_some_and(|product| product.permite_extras);
        let available = catalog
            .add_on(add_on_id)
            .resolved()
            .is_some_and(|add_on| add_on.disponivel);

        let item = self
            .item_mut(product_id)
            .ok_or(ValidationError::ProductNotInDraft(product_id))?;

        let position = item.extras.iter().position(|e| e.extra_id == add_on_id);
        match position {
            Some(idx) => {
                let current = i64::from(item.extras[idx].quantidade);
                let next = (current + i64::from(delta)).clamp(0, i64::from(u32::MAX));
                if next == 0 {
                    item.extras.remove(idx);
                } else {
                    item.extras[idx].quantidade = next as u32;
                }
            }
            None if delta > 0 => {
                if !allows_extras {
                    return Err(ValidationError::AddOnsNotAllowed(product_id));
                }
                if !available {
                    return Err(ValidationError::UnavailableAddOn(add_on_id));
                }
                item.extras.push(ItemExtra {
                    extra_id: add_on_id,
                    quantidade: delta as u32,
                });
            }
            None => {}
        }
        Ok(())
    }

    pub fn set_note(&mut self, product_id: Uuid, note: Option<String>) {
        if let Some(item) = self.item_mut(product_id) {
            item.observacoes = note.filter(|n| !n.trim().is_empty());
        }
    }

    /// Live total in centavos against the current catalog.
    pub fn compute_total(&self, catalog: &Catalog<'_>) -> Result<i64, ValidationError> {
        pricing::items_total(&self.items, catalog).ok_or(ValidationError::TotalTooLarge)
    }

    /// Freezes the draft into a `Pendente` order. The total is computed once
    /// here and never again. The draft itself is left as it was.
    pub fn commit(
        &self,
        catalog: &Catalog<'_>,
        customer_id: Option<Uuid>,
        now: DateTime<Utc>,
    ) -> Result<Order, ValidationError> {
        if self.items.is_empty() {
            return Err(ValidationError::EmptyOrder);
        }
        let cliente_id = customer_id.ok_or(ValidationError::MissingCustomer)?;
        let total = self.compute_total(catalog)?;
        let mesa = match self.tipo {
            FulfillmentType::Mesa => Some(self.mesa.ok_or(ValidationError::MissingTable)?),
            FulfillmentType::Delivery => None,
        };

        Ok(Order {
            id: Uuid::new_v4(),
            cliente_id,
            items: self.items.clone(),
            total,
            status: OrderStatus::Pendente,
            tipo: self.tipo,
            mesa,
            created_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddOn, Category, Product};
    use crate::store::Collection;

    fn product(preco: i64, permite_extras: bool) -> Product {
        Product {
            id: Uuid::new_v4(),
            nome: "X-Bacon".into(),
            descricao: String::new(),
            preco,
            categoria: Category::Lanches,
            imagem: String::new(),
            permite_extras,
        }
    }

    fn add_on(preco: i64, disponivel: bool) -> AddOn {
        AddOn {
            id: Uuid::new_v4(),
            nome: "Cheddar".into(),
            preco,
            disponivel,
        }
    }

    #[test]
    fn quantity_tracks_adds_minus_removes() {
        let p = product(1000, false);
        let products = Collection::new(vec![p.clone()]);
        let extras = Collection::default();
        let catalog = Catalog::new(&products, &extras);

        // + + - + - - - +
        let ops = [1, 1, -1, 1, -1, -1, -1, 1];
        let mut draft = OrderDraft::new();
        let mut expected: i32 = 0;
        for op in ops {
            if op > 0 {
                draft.add_product(&catalog, p.id).unwrap();
                expected += 1;
            } else {
                draft.remove_product(p.id);
                expected = (expected - 1).max(0);
            }
            assert_eq!(draft.quantity_of(p.id) as i32, expected);
            assert_eq!(draft.item(p.id).is_none(), expected == 0);
            assert!(draft.items.len() <= 1);
        }
    }

    #[test]
    fn add_marks_editing_only_for_products_with_extras() {
        let plain = product(500, false);
        let burger = product(1000, true);
        let products = Collection::new(vec![plain.clone(), burger.clone()]);
        let extras = Collection::default();
        let catalog = Catalog::new(&products, &extras);

        let mut draft = OrderDraft::new();
        draft.add_product(&catalog, plain.id).unwrap();
        assert_eq!(draft.editing_extras, None);

        draft.add_product(&catalog, burger.id).unwrap();
        assert_eq!(draft.editing_extras, Some(burger.id));

        draft.remove_product(burger.id);
        assert_eq!(draft.editing_extras, None);
    }

    #[test]
    fn unknown_product_is_rejected() {
        let products = Collection::default();
        let extras = Collection::default();
        let catalog = Catalog::new(&products, &extras);
        let id = Uuid::new_v4();

        let mut draft = OrderDraft::new();
        assert_eq!(
            draft.add_product(&catalog, id),
            Err(ValidationError::UnknownProduct(id))
        );
        assert!(draft.items.is_empty());
    }

    #[test]
    fn add_on_selection_is_removed_at_zero() {
        let p = product(1000, true);
        let a = add_on(200, true);
        let products = Collection::new(vec![p.clone()]);
        let extras = Collection::new(vec![a.clone()]);
        let catalog = Catalog::new(&products, &extras);

        let mut draft = OrderDraft::new();
        draft.add_product(&catalog, p.id).unwrap();
        draft.set_add_on_quantity(&catalog, p.id, a.id, 2).unwrap();
        assert_eq!(draft.item(p.id).unwrap().extras[0].quantidade, 2);

        draft.set_add_on_quantity(&catalog, p.id, a.id, -5).unwrap();
        assert!(draft.item(p.id).unwrap().extras.is_empty());

        // Decrementing something never selected is a no-op.
        draft.set_add_on_quantity(&catalog, p.id, a.id, -1).unwrap();
        assert!(draft.item(p.id).unwrap().extras.is_empty());
    }

    #[test]
    fn unavailable_add_on_cannot_start_a_selection_but_stays_once_chosen() {
        let p = product(1000, true);
        let a = add_on(200, true);
        let products = Collection::new(vec![p.clone()]);
        let extras = Collection::new(vec![a.clone()]);
        let catalog = Catalog::new(&products, &extras);

        let mut draft = OrderDraft::new();
        draft.add_product(&catalog, p.id).unwrap();
        draft.set_add_on_quantity(&catalog, p.id, a.id, 1).unwrap();

        let extras = extras.with_updated(AddOn {
            disponivel: false,
            ..a.clone()
        });
        let catalog = Catalog::new(&products, &extras);

        draft.set_add_on_quantity(&catalog, p.id, a.id, 1).unwrap();
        assert_eq!(draft.item(p.id).unwrap().extras[0].quantidade, 2);

        let other = add_on(300, false);
        let extras = extras.with_added(other.clone());
        let catalog = Catalog::new(&products, &extras);
        assert_eq!(
            draft.set_add_on_quantity(&catalog, p.id, other.id, 1),
            Err(ValidationError::UnavailableAddOn(other.id))
        );
    }

    #[test]
    fn add_ons_rejected_for_products_without_extras() {
        let p = product(600, false);
        let a = add_on(200, true);
        let products = Collection::new(vec![p.clone()]);
        let extras = Collection::new(vec![a.clone()]);
        let catalog = Catalog::new(&products, &extras);

        let mut draft = OrderDraft::new();
        draft.add_product(&catalog, p.id).unwrap();
        assert_eq!(
            draft.set_add_on_quantity(&catalog, p.id, a.id, 1),
            Err(ValidationError::AddOnsNotAllowed(p.id))
        );
        assert_eq!(
            draft.set_add_on_quantity(&catalog, Uuid::nil(), a.id, 1),
            Err(ValidationError::ProductNotInDraft(Uuid::nil()))
        );
    }

    #[test]
    fn total_includes_add_ons_and_commit_freezes_it() {
        let p1 = product(1000, true);
        let a1 = add_on(200, true);
        let products = Collection::new(vec![p1.clone()]);
        let extras = Collection::new(vec![a1.clone()]);
        let catalog = Catalog::new(&products, &extras);

        let mut draft = OrderDraft::new();
        draft.add_product(&catalog, p1.id).unwrap();
        draft.add_product(&catalog, p1.id).unwrap();
        draft.set_add_on_quantity(&catalog, p1.id, a1.id, 1).unwrap();

        assert_eq!(draft.compute_total(&catalog), Ok(2200));
        assert_eq!(draft.compute_total(&catalog), Ok(2200));

        let customer = Uuid::new_v4();
        let order = draft.commit(&catalog, Some(customer), Utc::now()).unwrap();
        assert_eq!(order.status, OrderStatus::Pendente);
        assert_eq!(order.total, 2200);
        assert_eq!(order.cliente_id, customer);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantidade, 2);
        assert_eq!(
            order.items[0].extras,
            vec![ItemExtra {
                extra_id: a1.id,
                quantidade: 1
            }]
        );

        // Dropping the add-on from the catalog reprices the draft, not the order.
        let extras = extras.without(a1.id);
        let catalog = Catalog::new(&products, &extras);
        assert_eq!(draft.compute_total(&catalog), Ok(2000));
        assert_eq!(order.total, 2200);
    }

    #[test]
    fn commit_requires_items_and_customer() {
        let p = product(1000, false);
        let products = Collection::new(vec![p.clone()]);
        let extras = Collection::default();
        let catalog = Catalog::new(&products, &extras);

        let draft = OrderDraft::new();
        assert_eq!(
            draft.commit(&catalog, Some(Uuid::new_v4()), Utc::now()),
            Err(ValidationError::EmptyOrder)
        );

        let mut draft = OrderDraft::new();
        draft.add_product(&catalog, p.id).unwrap();
        assert_eq!(
            draft.commit(&catalog, None, Utc::now()),
            Err(ValidationError::MissingCustomer)
        );

        draft.mesa = None;
        assert_eq!(
            draft.commit(&catalog, Some(Uuid::new_v4()), Utc::now()),
            Err(ValidationError::MissingTable)
        );
    }

    #[test]
    fn delivery_orders_drop_the_table_number() {
        let p = product(1000, false);
        let products = Collection::new(vec![p.clone()]);
        let extras = Collection::default();
        let catalog = Catalog::new(&products, &extras);

        let mut draft = OrderDraft::delivery();
        draft.mesa = Some(7);
        draft.add_product(&catalog, p.id).unwrap();

        let order = draft.commit(&catalog, Some(Uuid::new_v4()), Utc::now()).unwrap();
        assert_eq!(order.tipo, FulfillmentType::Delivery);
        assert_eq!(order.mesa, None);
    }

    #[test]
    fn add_refuses_to_wrap_the_item_quantity() {
        let p = product(1000, false);
        let products = Collection::new(vec![p.clone()]);
        let extras = Collection::default();
        let catalog = Catalog::new(&products, &extras);

        let mut draft = OrderDraft::new();
        draft.add_product(&catalog, p.id).unwrap();
        draft.items[0].quantidade = u32::MAX;

        assert_eq!(
            draft.add_product(&catalog, p.id),
            Err(ValidationError::QuantityTooLarge(u32::MAX))
        );
        assert_eq!(draft.quantity_of(p.id), u32::MAX);
    }

    #[test]
    fn overflowing_total_rejects_the_commit() {
        let p = product(i64::MAX / 2, false);
        let products = Collection::new(vec![p.clone()]);
        let extras = Collection::default();
        let catalog = Catalog::new(&products, &extras);

        let mut draft = OrderDraft::new();
        for _ in 0..3 {
            draft.add_product(&catalog, p.id).unwrap();
        }
        assert_eq!(draft.compute_total(&catalog), Err(ValidationError::TotalTooLarge));
        assert_eq!(
            draft.commit(&catalog, Some(Uuid::new_v4()), Utc::now()),
            Err(ValidationError::TotalTooLarge)
        );
    }
}
