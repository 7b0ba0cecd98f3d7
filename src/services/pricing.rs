use crate::{catalog::Catalog, models::OrderItem};

/// Price of one line: the product times its quantity plus every selected add-on
/// times its own quantity. Unresolvable ids contribute 0. `None` when the sum
/// does not fit in an `i64`.
pub fn line_total(item: &OrderItem, catalog: &Catalog<'_>) -> Option<i64> {
    let base = catalog
        .product_price(item.produto_id)
        .checked_mul(i64::from(item.quantidade))?;
    item.extras.iter().try_fold(base, |sum, extra| {
        catalog
            .add_on_price(extra.extra_id)
            .checked_mul(i64::from(extra.quantidade))
            .and_then(|price| sum.checked_add(price))
    })
}

pub fn items_total(items: &[OrderItem], catalog: &Catalog<'_>) -> Option<i64> {
    items
        .iter()
        .try_fold(0i64, |sum, item| sum.checked_add(line_total(item, catalog)?))
}
