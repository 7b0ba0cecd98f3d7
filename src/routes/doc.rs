use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        customers::{CustomerList, CustomerRequest},
        dashboard::DashboardStats,
        orders::{
            DraftLine, DraftRequest, OrderList, OrderTracking, Quote, TrackedExtra, TrackedLine,
            UpdateOrderStatusRequest,
        },
        products::{
            CreateExtraRequest, CreateProductRequest, ExtraList, ProductList, UpdateExtraRequest,
            UpdateProductRequest,
        },
        storefront::{PublicCheckoutRequest, Storefront},
    },
    models::{
        AddOn, BusinessProfile, Category, Customer, FulfillmentType, ItemExtra, Order, OrderItem,
        OrderStatus, Product,
    },
    response::{ApiResponse, Meta},
    routes::{customers, dashboard, extras, health, orders, params, products, storefront},
    services::{
        draft::OrderDraft,
        lifecycle::{Progress, StatusStep},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        extras::list_extras,
        extras::create_extra,
        extras::update_extra,
        extras::delete_extra,
        customers::list_customers,
        customers::create_customer,
        customers::update_customer,
        customers::delete_customer,
        orders::list_orders,
        orders::quote_order,
        orders::create_order,
        orders::get_order,
        orders::update_order_status,
        orders::track_order,
        dashboard::dashboard,
        storefront::get_profile,
        storefront::set_profile,
        storefront::storefront,
        storefront::public_checkout
    ),
    components(
        schemas(
            Product,
            Category,
            AddOn,
            ItemExtra,
            OrderItem,
            Customer,
            Order,
            OrderStatus,
            FulfillmentType,
            BusinessProfile,
            OrderDraft,
            Progress,
            StatusStep,
            CreateProductRequest,
            UpdateProductRequest,
            CreateExtraRequest,
            UpdateExtraRequest,
            ProductList,
            ExtraList,
            CustomerRequest,
            CustomerList,
            DraftLine,
            DraftRequest,
            Quote,
            UpdateOrderStatusRequest,
            OrderList,
            TrackedLine,
            TrackedExtra,
            OrderTracking,
            Storefront,
            PublicCheckoutRequest,
            DashboardStats,
            health::HealthData,
            params::OrderListQuery,
            params::ExtraQuery,
            params::MenuQuery,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<Order>,
            ApiResponse<OrderList>,
            ApiResponse<OrderTracking>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product catalog"),
        (name = "Extras", description = "Add-on catalog"),
        (name = "Customers", description = "Customer records"),
        (name = "Orders", description = "Drafts, orders and status changes"),
        (name = "Dashboard", description = "Daily figures"),
        (name = "Profile", description = "Business profile"),
        (name = "Storefront", description = "Public menu, checkout and tracking"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
