use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::Response,
    routing::{get, patch, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::str::FromStr;
use validator::Validate;

use crate::entities::order::{OrderStatus, ShippingAddress};
use crate::middleware::{
    identity::{identity_middleware, Identity},
    logging::{to_response, ApiError},
};
use crate::services::{CartError, OrderError};
use crate::state::AppState;

//ROUTERS
pub fn order_routes() -> Router {
    Router::new()
        .route("/checkout", post(checkout))
        .route("/order", get(get_orders))
        .route("/order/:id", get(get_order))
        .layer(middleware::from_fn(identity_middleware))
}

pub fn admin_order_routes() -> Router {
    Router::new().route("/order/:id", patch(patch_order_status))
}

//Routes
async fn checkout(
    Extension(state): Extension<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<CheckoutPayload>,
) -> Response {
    if let Err(err) = payload.validate() {
        let tmp = err.to_string();
        return to_response(
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": tmp
                })),
            ),
            Err(ApiError::ValidationFail(tmp)),
        );
    }

    let cart = state.cart.get_cart();
    match state.orders.create_order(
        &identity.user_id,
        &cart,
        payload.shipping_address.into(),
        &payload.payment_method,
        payload.payment_id,
    ) {
        Ok(order) => to_response((StatusCode::CREATED, Json(order)), Ok(())),
        Err(OrderError::EmptyCart) => {
            let tmp = OrderError::EmptyCart.to_string();
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
        Err(OrderError::Cart(err)) => {
            let status = match err {
                CartError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_REQUEST,
            };
            to_response(
                (
                    status,
                    Json(json!({
                        "error": "Failed to finalize this order"
                    })),
                ),
                Err(ApiError::Storage(err.to_string())),
            )
        }
    }
}

async fn get_orders(
    Extension(state): Extension<AppState>,
    Extension(identity): Extension<Identity>,
) -> Response {
    to_response(Json(state.orders.orders_for_user(&identity.user_id)), Ok(()))
}

async fn get_order(
    Path(id): Path<String>,
    Extension(state): Extension<AppState>,
) -> Response {
    match state.orders.find_order(&id) {
        Some(order) => to_response(Json(order), Ok(())),
        None => {
            let tmp = format!("No order with {} id was found", id);
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

async fn patch_order_status(
    Path(id): Path<String>,
    Extension(state): Extension<AppState>,
    Json(payload): Json<PatchOrder>,
) -> Response {
    let status = match OrderStatus::from_str(&payload.status) {
        Ok(status) => status,
        Err(err) => {
            return to_response(
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": err
                    })),
                ),
                Err(ApiError::ValidationFail(err)),
            );
        }
    };

    match state
        .orders
        .update_status(&id, status, payload.tracking_number)
    {
        Some(order) => to_response((StatusCode::OK, Json(order)), Ok(())),
        None => {
            let tmp = format!("No order with {} id was found", id);
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

//Structs
#[derive(Deserialize, Debug, Validate)]
struct CheckoutPayload {
    #[validate(nested)]
    shipping_address: ShippingAddressPayload,
    #[validate(length(min = 1, message = "Payment method is required"))]
    payment_method: String,
    payment_id: Option<String>,
}

#[derive(Deserialize, Debug, Validate)]
struct ShippingAddressPayload {
    #[validate(length(min = 1))]
    full_name: String,
    #[validate(length(min = 1))]
    address: String,
    #[validate(length(min = 1))]
    city: String,
    #[validate(length(min = 1))]
    state: String,
    #[validate(length(min = 1))]
    postal_code: String,
    #[validate(length(min = 1))]
    country: String,
}

impl From<ShippingAddressPayload> for ShippingAddress {
    fn from(payload: ShippingAddressPayload) -> Self {
        Self {
            full_name: payload.full_name,
            address: payload.address,
            city: payload.city,
            state: payload.state,
            postal_code: payload.postal_code,
            country: payload.country,
        }
    }
}

#[derive(Deserialize)]
struct PatchOrder {
    status: String,
    tracking_number: Option<String>,
}
