use std::collections::HashMap;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use explorer_data::{CatalogApi, FetchError, HttpCatalogClient};
use serde_json::{json, Value};
use tokio::net::TcpListener;

fn product(id: u64, title: &str, category: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{title} description"),
        "category": category,
        "price": 10.0 + id as f64,
        "discountPercentage": 5.5,
        "rating": 4.2,
        "stock": 12,
        "brand": "Acme",
        "thumbnail": format!("https://cdn.example.com/{id}/thumb.png"),
        "images": [format!("https://cdn.example.com/{id}/1.png")]
    })
}

async fn list(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let limit: u64 = params.get("limit").and_then(|v| v.parse().ok()).unwrap_or(30);
    let skip: u64 = params.get("skip").and_then(|v| v.parse().ok()).unwrap_or(0);
    let products: Vec<Value> = (skip + 1..=skip + limit)
        .filter(|id| *id <= 20)
        .map(|id| product(id, &format!("Item {id}"), "beauty"))
        .collect();
    Json(json!({ "products": products, "total": 20, "skip": skip, "limit": limit }))
}

async fn single(Path(id): Path<u64>) -> Result<Json<Value>, StatusCode> {
    match id {
        1..=20 => Ok(Json(product(id, &format!("Item {id}"), "beauty"))),
        500 => Err(StatusCode::INTERNAL_SERVER_ERROR),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

async fn by_category(Path(slug): Path<String>) -> Json<Value> {
    let products = vec![
        product(31, &format!("{slug} one"), &slug),
        product(32, &format!("{slug} two"), &slug),
    ];
    Json(json!({ "products": products, "total": 2, "skip": 0, "limit": 2 }))
}

async fn categories() -> Json<Value> {
    Json(json!(["beauty", "", 7, null, "home-decoration"]))
}

async fn search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let q = params.get("q").cloned().unwrap_or_default();
    let products = vec![product(41, &q, "search")];
    Json(json!({ "products": products, "total": 1, "skip": 0, "limit": 1 }))
}

async fn spawn_server() -> anyhow::Result<String> {
    let app = Router::new()
        .route("/products", get(list))
        .route("/products/categories", get(categories))
        .route("/products/search", get(search))
        .route("/products/category/:slug", get(by_category))
        .route("/products/:id", get(single));

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(format!("http://{addr}"))
}

#[tokio::test]
async fn test_list_products_sends_limit_and_skip() -> anyhow::Result<()> {
    let client = HttpCatalogClient::new(&spawn_server().await?)?;

    let page = client.list_products(8, 16).await?;
    assert_eq!(page.total, 20);
    assert_eq!(page.skip, 16);
    let ids: Vec<u64> = page.products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![17, 18, 19, 20]);
    Ok(())
}

#[tokio::test]
async fn test_product_by_id() -> anyhow::Result<()> {
    let client = HttpCatalogClient::new(&spawn_server().await?)?;

    let item = client.product(3).await?;
    assert_eq!(item.title, "Item 3");
    assert_eq!(item.brand, "Acme");
    Ok(())
}

#[tokio::test]
async fn test_non_success_status_is_error() -> anyhow::Result<()> {
    let client = HttpCatalogClient::new(&spawn_server().await?)?;

    let err = client.product(404).await.unwrap_err();
    assert!(matches!(err, FetchError::Http { status: 404, .. }));
    assert!(err.is_network_failure());

    let err = client.product(500).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    Ok(())
}

#[tokio::test]
async fn test_category_slug_round_trips() -> anyhow::Result<()> {
    let client = HttpCatalogClient::new(&spawn_server().await?)?;

    let page = client.products_by_category("home decoration").await?;
    assert_eq!(page.total, 2);
    assert_eq!(page.products[0].category, "home decoration");
    Ok(())
}

#[tokio::test]
async fn test_categories_are_sanitized() -> anyhow::Result<()> {
    let client = HttpCatalogClient::new(&spawn_server().await?)?;

    let categories = client.categories().await?;
    assert_eq!(categories, vec!["beauty", "home-decoration"]);
    Ok(())
}

#[tokio::test]
async fn test_search_query_round_trips() -> anyhow::Result<()> {
    let client = HttpCatalogClient::new(&spawn_server().await?)?;

    let page = client.search_products("red & blue").await?;
    assert_eq!(page.products[0].title, "red & blue");
    Ok(())
}

#[tokio::test]
async fn test_connection_refused_is_request_error() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = HttpCatalogClient::new(&format!("http://{addr}"))?;
    let err = client.categories().await.unwrap_err();
    assert!(matches!(err, FetchError::Request(_)));
    Ok(())
}
