use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;
use axum::response::Response;

use crate::shared::relay::{relay, RelayRoute};
use crate::shared::state::AppState;

/// POST /api/register
pub async fn register(State(state): State<AppState>, body: Bytes) -> Response {
    let route = RelayRoute::new(Method::POST, "/register")
        .public()
        .pass_upstream_message()
        .failure_message("Registrasi gagal");
    relay(state.upstream.as_ref(), route, None, Some(body)).await
}

/// POST /api/login
pub async fn login(State(state): State<AppState>, body: Bytes) -> Response {
    let route = RelayRoute::new(Method::POST, "/login")
        .public()
        .pass_upstream_message()
        .failure_message("Login gagal");
    relay(state.upstream.as_ref(), route, None, Some(body)).await
}
