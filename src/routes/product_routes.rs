use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::middleware::logging::{to_response, ApiError};
use crate::state::AppState;

//ROUTERS
pub fn product_routes() -> Router {
    Router::new()
        .route("/product", get(get_products))
        .route("/product/:id", get(get_product))
        .route("/category", get(get_categories))
}

//Routes
async fn get_products(
    Extension(state): Extension<AppState>,
    Query(params): Query<GetProductsQuery>,
) -> Response {
    let mut items = match params.category.as_deref() {
        Some(category) => state.catalog.list_by_category(category),
        None => state.catalog.list(),
    };

    if let Some(query) = params.query {
        let query = query.to_lowercase();
        items.retain(|product| product.name.to_lowercase().contains(&query));
    }

    to_response(Json(items), Ok(()))
}

async fn get_product(
    Path(id): Path<i32>,
    Extension(state): Extension<AppState>,
) -> Response {
    match state.catalog.find_by_id(id) {
        Some(product) => to_response(Json(product), Ok(())),
        None => {
            let tmp = format!("No product with {} id was found", id);
            to_response(
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({
                        "error": tmp
                    })),
                ),
                Err(ApiError::NotFound(tmp)),
            )
        }
    }
}

async fn get_categories(Extension(state): Extension<AppState>) -> Response {
    let mut categories: Vec<String> = state
        .catalog
        .list()
        .into_iter()
        .map(|product| product.category)
        .collect();
    categories.sort();
    categories.dedup();

    to_response(Json(categories), Ok(()))
}

//Structs
#[derive(Deserialize, Debug)]
struct GetProductsQuery {
    query: Option<String>,
    category: Option<String>,
}
