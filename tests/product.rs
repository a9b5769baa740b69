use reqwest::StatusCode;

mod common;
use common::{decimal, spawn_app};
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_get_products() {
    let base_url = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/product", base_url))
        .send()
        .await
        .expect("Failed to send get products request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse products response JSON");

    let products = body.as_array().expect("Expected an array of products");
    assert_eq!(products.len(), 12);
    assert_eq!(products[0]["id"], 1);
    assert_eq!(products[0]["name"], "Apple & Carrot Puree");
}

#[tokio::test]
async fn test_get_products_by_category() {
    let base_url = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/product?category=purees", base_url))
        .send()
        .await
        .expect("Failed to send get products request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse products response JSON");

    let products = body.as_array().expect("Expected an array of products");
    assert_eq!(products.len(), 5);
    assert!(products
        .iter()
        .all(|product| product["category"] == "purees"));
}

#[tokio::test]
async fn test_search_products_by_name() {
    let base_url = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/product?query=cereal", base_url))
        .send()
        .await
        .expect("Failed to send get products request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse products response JSON");

    let products = body.as_array().expect("Expected an array of products");
    assert_eq!(products.len(), 3);
    assert!(products.iter().all(|product| {
        product["name"]
            .as_str()
            .expect("Expected a product name")
            .to_lowercase()
            .contains("cereal")
    }));
}

#[tokio::test]
async fn test_get_product_by_id() {
    let base_url = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/product/3", base_url))
        .send()
        .await
        .expect("Failed to send get product request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse product response JSON");

    assert_eq!(body["name"], "Sweet Potato Puffs");
    assert_eq!(decimal(&body["price"]), dec!(2.99));
    assert_eq!(body["nutrition_info"]["calories"], 25);
}

#[tokio::test]
async fn test_get_unknown_product() {
    let base_url = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/product/999", base_url))
        .send()
        .await
        .expect("Failed to send get product request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse error response JSON");

    assert_eq!(
        body["error"].as_str(),
        Some("No product with 999 id was found")
    );
}

#[tokio::test]
async fn test_get_categories() {
    let base_url = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/category", base_url))
        .send()
        .await
        .expect("Failed to send get categories request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse categories response JSON");

    assert_eq!(body, serde_json::json!(["cereals", "purees", "snacks"]));
}
