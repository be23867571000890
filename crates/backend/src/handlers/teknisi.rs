use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::Method;
use axum::response::Response;

use crate::shared::relay::{relay, resource_path, RelayRoute};
use crate::shared::state::AppState;
use crate::system::auth::extractor::AuthHeader;

const DELETED_MESSAGE: &str = "Data deleted successfully";

/// GET /api/teknisi, GET /api/tampil
pub async fn list_all(State(state): State<AppState>, AuthHeader(auth): AuthHeader) -> Response {
    let route = RelayRoute::new(Method::GET, "/teknisi");
    relay(state.upstream.as_ref(), route, auth, None).await
}

/// POST /api/teknisi, POST /api/tambah
pub async fn create(
    State(state): State<AppState>,
    AuthHeader(auth): AuthHeader,
    body: Bytes,
) -> Response {
    let route =
        RelayRoute::new(Method::POST, "/teknisi").failure_message("Gagal menambahkan teknisi");
    relay(state.upstream.as_ref(), route, auth, Some(body)).await
}

/// GET /api/teknisi/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    AuthHeader(auth): AuthHeader,
    Path(id): Path<String>,
) -> Response {
    let route = RelayRoute::new(Method::GET, resource_path("/teknisi", &id));
    relay(state.upstream.as_ref(), route, auth, None).await
}

/// PUT /api/teknisi/:id, PUT /api/edit/:id
pub async fn update(
    State(state): State<AppState>,
    AuthHeader(auth): AuthHeader,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let route = RelayRoute::new(Method::PUT, resource_path("/teknisi", &id))
        .failure_message("Failed to update data")
        .strip_body_id();
    relay(state.upstream.as_ref(), route, auth, Some(body)).await
}

/// DELETE /api/teknisi/:id
pub async fn delete(
    State(state): State<AppState>,
    AuthHeader(auth): AuthHeader,
    Path(id): Path<String>,
) -> Response {
    let route = RelayRoute::new(Method::DELETE, resource_path("/teknisi", &id))
        .failure_message("Failed to delete data")
        .empty_success_message(DELETED_MESSAGE);
    relay(state.upstream.as_ref(), route, auth, None).await
}

/// DELETE /api/hapus/:id (альтернативный путь удаления upstream)
pub async fn delete_alt(
    State(state): State<AppState>,
    AuthHeader(auth): AuthHeader,
    Path(id): Path<String>,
) -> Response {
    let route = RelayRoute::new(Method::DELETE, resource_path("/hapus", &id))
        .failure_message("Failed to delete data")
        .empty_success_message(DELETED_MESSAGE);
    relay(state.upstream.as_ref(), route, auth, None).await
}
