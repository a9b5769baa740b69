use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Response,
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::middleware::logging::{to_response, ApiError};
use crate::services::CartError;
use crate::state::AppState;

//ROUTERS
pub fn cart_routes() -> Router {
    Router::new()
        .route("/cart", get(get_cart).post(add_product).delete(clear_cart))
        .route("/cart/:product_id", patch(patch_entry))
}

//Routes
async fn get_cart(Extension(state): Extension<AppState>) -> Response {
    to_response(Json(state.cart.get_cart()), Ok(()))
}

async fn add_product(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AddProduct>,
) -> Response {
    // Merging into an existing line reads as a patch, a new line as a create.
    let already_in_cart = state
        .cart
        .get_cart()
        .items
        .iter()
        .any(|item| item.product_id == payload.product_id);

    match state.cart.add_item(payload.product_id, payload.quantity) {
        Ok(cart) => {
            let status = if already_in_cart {
                StatusCode::OK
            } else {
                StatusCode::CREATED
            };
            to_response((status, Json(cart)), Ok(()))
        }
        Err(CartError::Storage(err)) => to_response(
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            ),
            Err(ApiError::Storage(err)),
        ),
        Err(err) => {
            let tmp = err.to_string();
            to_response(
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": tmp
                    })),
                ),
                Err(ApiError::General(tmp)),
            )
        }
    }
}

async fn patch_entry(
    Path(product_id): Path<i32>,
    Extension(state): Extension<AppState>,
    Json(payload): Json<PatchCart>,
) -> Response {
    match state.cart.update_item_quantity(product_id, payload.quantity) {
        Ok(cart) => to_response((StatusCode::OK, Json(cart)), Ok(())),
        Err(CartError::Storage(err)) => to_response(
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            ),
            Err(ApiError::Storage(err)),
        ),
        Err(err) => {
            let tmp = err.to_string();
            to_response(
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": tmp
                    })),
                ),
                Err(ApiError::General(tmp)),
            )
        }
    }
}

async fn clear_cart(Extension(state): Extension<AppState>) -> Response {
    match state.cart.clear() {
        Ok(cart) => to_response((StatusCode::OK, Json(cart)), Ok(())),
        Err(err) => to_response(
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            ),
            Err(ApiError::Storage(err.to_string())),
        ),
    }
}

//Structs
#[derive(Deserialize, Debug)]
struct AddProduct {
    product_id: i32,
    quantity: u32,
}

#[derive(Deserialize)]
struct PatchCart {
    quantity: u32,
}
