use rust_decimal::Decimal;
use std::str::FromStr;

use babybites::routes::api_router;
use babybites::state::AppState;

/// Boots the service with fresh in-memory state on an ephemeral port and
/// returns its base url. Each test gets its own isolated instance.
pub async fn spawn_app() -> String {
    let state = AppState::in_memory();
    let app = api_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server crashed");
    });

    format!("http://{}", addr)
}

/// Prices travel as decimal strings; parse one for numeric comparison.
pub fn decimal(value: &serde_json::Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("Expected a decimal string"))
        .expect("Failed to parse decimal")
}
