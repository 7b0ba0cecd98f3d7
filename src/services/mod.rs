pub mod catalog_service;
pub mod customer_service;
pub mod dashboard_service;
pub mod draft;
pub mod lifecycle;
pub mod order_service;
pub mod pricing;
pub mod query;
pub mod storefront_service;
