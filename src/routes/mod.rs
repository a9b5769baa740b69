pub mod cart_routes;
pub mod order_routes;
pub mod product_routes;

use axum::{middleware, Extension, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::logging::logging_middleware;
use crate::state::AppState;

use {
    cart_routes::cart_routes,
    order_routes::{admin_order_routes, order_routes},
    product_routes::product_routes,
};

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", product_routes())
        .nest("/api", cart_routes())
        .nest("/api", order_routes())
        .nest("/api/admin", admin_order_routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}
