mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use lanchonete_orders::routes::create_app;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_route_answers() {
    let (_dir, state) = common::empty_state();
    let app = create_app(state);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn empty_order_is_unprocessable() {
    let (_dir, state) = common::empty_state();
    let customer = common::customer(&state, "Lia").await;
    let app = create_app(state);

    let payload = serde_json::json!({
        "clienteId": customer.id,
        "tipo": "Mesa",
        "mesa": 2,
        "items": []
    });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/orders")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn order_filters_parse_from_query_string() {
    let (_dir, state) = common::empty_state();
    let app = create_app(state);

    let ok = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/orders?status=Em%20Preparo&tipo=&date_range=week")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);

    let bad = app
        .oneshot(
            Request::builder()
                .uri("/api/orders?date_range=decade")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (_dir, state) = common::empty_state();
    let app = create_app(state);

    let response = app
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
