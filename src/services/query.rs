use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    catalog::Catalog,
    models::{Customer, FulfillmentType, Order, OrderStatus},
    store::Collection,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    Today,
    Yesterday,
    Week,
    Month,
}

impl std::str::FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "today" => Ok(DateRange::Today),
            "yesterday" => Ok(DateRange::Yesterday),
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            other => Err(format!("unknown date range {other:?}")),
        }
    }
}

impl DateRange {
    /// Calendar days are taken in UTC.
    fn contains(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let today = now.date_naive();
        match self {
            DateRange::Today => created_at.date_naive() == today,
            DateRange::Yesterday => today
                .pred_opt()
                .is_some_and(|yesterday| created_at.date_naive() == yesterday),
            DateRange::Week => created_at > now - Duration::days(7),
            DateRange::Month => created_at > now - Duration::days(30),
        }
    }
}

/// Criteria applied conjunctively; an unset criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilters {
    pub search: String,
    pub status: Option<OrderStatus>,
    pub tipo: Option<FulfillmentType>,
    pub date_range: Option<DateRange>,
}

/// Returns the matching orders, most recent first. `orders` is not touched.
pub fn filter(
    orders: &[Order],
    customers: &Collection<Customer>,
    catalog: &Catalog<'_>,
    criteria: &OrderFilters,
    now: DateTime<Utc>,
) -> Vec<Order> {
    let needle = criteria.search.trim().to_lowercase();

    let mut matched: Vec<Order> = orders
        .iter()
        .filter(|order| criteria.status.is_none_or(|s| order.status == s))
        .filter(|order| criteria.tipo.is_none_or(|t| order.tipo == t))
        .filter(|order| {
            criteria
                .date_range
                .is_none_or(|range| range.contains(order.created_at, now))
        })
        .filter(|order| needle.is_empty() || matches_search(order, &needle, customers, catalog))
        .cloned()
        .collect();

    matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    matched
}

fn matches_search(
    order: &Order,
    needle: &str,
    customers: &Collection<Customer>,
    catalog: &Catalog<'_>,
) -> bool {
    if order.id.to_string().contains(needle) {
        return true;
    }
    if customers
        .get(order.cliente_id)
        .is_some_and(|c| c.nome.to_lowercase().contains(needle))
    {
        return true;
    }
    order.items.iter().any(|item| {
        catalog
            .product(item.produto_id)
            .resolved()
            .is_some_and(|p| p.nome.to_lowercase().contains(needle))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, OrderItem, Product};
    use uuid::Uuid;

    struct Fixture {
        customers: Collection<Customer>,
        products: Collection<Product>,
        extras: Collection<crate::models::AddOn>,
        orders: Vec<Order>,
        now: DateTime<Utc>,
    }

    fn customer(nome: &str) -> Customer {
        Customer {
            id: Uuid::new_v4(),
            nome: nome.into(),
            telefone: String::new(),
            cep: String::new(),
            endereco: String::new(),
            numero: String::new(),
            complemento: String::new(),
            bairro: String::new(),
            cidade: String::new(),
            estado: String::new(),
        }
    }

    fn order(
        cliente_id: Uuid,
        produto_id: Uuid,
        status: OrderStatus,
        tipo: FulfillmentType,
        created_at: DateTime<Utc>,
    ) -> Order {
        Order {
            id: Uuid::new_v4(),
            cliente_id,
            items: vec![OrderItem {
                id: Uuid::new_v4(),
                produto_id,
                quantidade: 1,
                extras: Vec::new(),
                observacoes: None,
            }],
            total: 1000,
            status,
            tipo,
            mesa: None,
            created_at,
        }
    }

    fn fixture() -> Fixture {
        let now = "2024-05-20T15:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let maria = customer("Maria Souza");
        let joao = customer("João Lima");
        let burger = Product {
            id: Uuid::new_v4(),
            nome: "X-Salada".into(),
            descricao: String::new(),
            preco: 1000,
            categoria: Category::Lanches,
            imagem: String::new(),
            permite_extras: true,
        };
        let juice = Product {
            nome: "Suco de Laranja".into(),
            id: Uuid::new_v4(),
            categoria: Category::Bebidas,
            ..burger.clone()
        };

        let orders = vec![
            order(maria.id, burger.id, OrderStatus::Pendente, FulfillmentType::Mesa, now - Duration::hours(1)),
            order(joao.id, juice.id, OrderStatus::Pronto, FulfillmentType::Delivery, now - Duration::days(1)),
            order(maria.id, juice.id, OrderStatus::Entregue, FulfillmentType::Delivery, now - Duration::days(5)),
            order(joao.id, burger.id, OrderStatus::Entregue, FulfillmentType::Mesa, now - Duration::days(20)),
            order(Uuid::new_v4(), Uuid::new_v4(), OrderStatus::Entregue, FulfillmentType::Mesa, now - Duration::days(45)),
        ];

        Fixture {
            customers: Collection::new(vec![maria, joao]),
            products: Collection::new(vec![burger, juice]),
            extras: Collection::default(),
            orders,
            now,
        }
    }

    fn run(f: &Fixture, criteria: &OrderFilters) -> Vec<Order> {
        let catalog = Catalog::new(&f.products, &f.extras);
        filter(&f.orders, &f.customers, &catalog, criteria, f.now)
    }

    #[test]
    fn empty_criteria_returns_everything_newest_first() {
        let f = fixture();
        let mut shuffled = f.orders.clone();
        shuffled.reverse();
        let f = Fixture { orders: shuffled, ..f };

        let out = run(&f, &OrderFilters::default());
        assert_eq!(out.len(), 5);
        assert!(out.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn search_matches_customer_product_and_id() {
        let f = fixture();

        let by_customer = run(&f, &OrderFilters { search: "maria".into(), ..Default::default() });
        assert_eq!(by_customer.len(), 2);

        let by_product = run(&f, &OrderFilters { search: "SUCO".into(), ..Default::default() });
        assert_eq!(by_product.len(), 2);

        let prefix = f.orders[3].id.to_string()[..8].to_uppercase();
        let by_id = run(&f, &OrderFilters { search: prefix, ..Default::default() });
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].id, f.orders[3].id);
    }

    #[test]
    fn dangling_references_only_miss_the_search() {
        let f = fixture();
        let delivered = run(&f, &OrderFilters { status: Some(OrderStatus::Entregue), ..Default::default() });
        assert_eq!(delivered.len(), 3);

        let named = run(&f, &OrderFilters { search: "x-".into(), ..Default::default() });
        assert_eq!(named.len(), 2);
    }

    #[test]
    fn criteria_combine() {
        let f = fixture();
        let out = run(
            &f,
            &OrderFilters {
                tipo: Some(FulfillmentType::Delivery),
                date_range: Some(DateRange::Week),
                status: Some(OrderStatus::Pronto),
                ..Default::default()
            },
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, f.orders[1].id);
    }

    #[test]
    fn date_ranges() {
        let f = fixture();
        let count = |range| {
            run(&f, &OrderFilters { date_range: Some(range), ..Default::default() }).len()
        };
        assert_eq!(count(DateRange::Today), 1);
        assert_eq!(count(DateRange::Yesterday), 1);
        assert_eq!(count(DateRange::Week), 3);
        assert_eq!(count(DateRange::Month), 4);
    }

    #[test]
    fn rolling_windows_exclude_their_lower_bound() {
        let f = fixture();
        let now = f.now;
        let week = DateRange::Week;
        let month = DateRange::Month;

        assert!(!week.contains(now - Duration::days(7), now));
        assert!(week.contains(now - Duration::days(7) + Duration::seconds(1), now));
        assert!(!month.contains(now - Duration::days(30), now));
        assert!(month.contains(now - Duration::days(30) + Duration::seconds(1), now));

        let edge = |created_at| {
            order(Uuid::new_v4(), Uuid::new_v4(), OrderStatus::Pendente, FulfillmentType::Mesa, created_at)
        };
        let mut orders = f.orders.clone();
        orders.push(edge(now - Duration::days(7)));
        orders.push(edge(now - Duration::days(7) + Duration::seconds(1)));
        orders.push(edge(now - Duration::days(30)));
        let f = Fixture { orders, ..f };

        let week = run(&f, &OrderFilters { date_range: Some(DateRange::Week), ..Default::default() });
        assert_eq!(week.len(), 4);
        let month = run(&f, &OrderFilters { date_range: Some(DateRange::Month), ..Default::default() });
        assert_eq!(month.len(), 6);
    }

    #[test]
    fn yesterday_follows_the_calendar_across_midnight() {
        let now = "2024-05-20T00:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let late_yesterday = "2024-05-19T23:59:00Z".parse::<DateTime<Utc>>().unwrap();
        let early_yesterday = "2024-05-19T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let day_before = "2024-05-18T23:59:59Z".parse::<DateTime<Utc>>().unwrap();

        assert!(DateRange::Yesterday.contains(late_yesterday, now));
        assert!(DateRange::Yesterday.contains(early_yesterday, now));
        assert!(!DateRange::Yesterday.contains(day_before, now));
        assert!(!DateRange::Yesterday.contains(now, now));
        assert!(!DateRange::Today.contains(late_yesterday, now));
        assert!(DateRange::Today.contains(now - Duration::minutes(30), now));
    }
}
