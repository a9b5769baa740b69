use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};

/// Who the external identity provider says is calling. The core treats
/// the id as an opaque string; the optional display name exists only so
/// the UI can pre-fill the shipping address.
#[derive(Clone, Debug)]
pub struct Identity {
    pub user_id: String,
    pub name: Option<String>,
}

/// Reads the identity forwarded by the identity provider. Requests
/// without a user id are rejected before they reach any handler.
pub async fn identity_middleware(mut req: Request, next: Next) -> Result<Response, StatusCode> {
    let user_id = req
        .headers()
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned);

    let Some(user_id) = user_id else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    let name = req
        .headers()
        .get("x-user-name")
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);

    req.extensions_mut().insert(Identity { user_id, name });
    Ok(next.run(req).await)
}
