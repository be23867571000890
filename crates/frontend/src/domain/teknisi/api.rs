//! Teknisi API: все запросы идут через локальный relay с bearer-токеном

use contracts::domain::teknisi::aggregate::{Teknisi, TeknisiDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, bearer, send_json, ApiError};

fn item_url(id: &str) -> String {
    api_url(&format!("/api/teknisi/{}", urlencoding::encode(id)))
}

/// Fetch all technicians
pub async fn fetch_all(token: String) -> Result<Vec<Teknisi>, ApiError> {
    send_json(
        Request::get(&api_url("/api/teknisi"))
            .header("Authorization", &bearer(&token))
            .build(),
    )
    .await
}

/// Fetch a technician by ID
pub async fn fetch_by_id(token: String, id: String) -> Result<Teknisi, ApiError> {
    send_json(
        Request::get(&item_url(&id))
            .header("Authorization", &bearer(&token))
            .build(),
    )
    .await
}

/// Create a technician; the response shape belongs to the upstream service
pub async fn create(token: &str, dto: &TeknisiDto) -> Result<serde_json::Value, ApiError> {
    send_json(
        Request::post(&api_url("/api/teknisi"))
            .header("Authorization", &bearer(token))
            .json(dto),
    )
    .await
}

/// Update a technician by ID
pub async fn update(token: &str, id: &str, dto: &TeknisiDto) -> Result<serde_json::Value, ApiError> {
    send_json(
        Request::put(&item_url(id))
            .header("Authorization", &bearer(token))
            .json(dto),
    )
    .await
}

/// Delete a technician by ID; on success the body is either upstream JSON or `{"message": ...}`
pub async fn delete(token: &str, id: &str) -> Result<serde_json::Value, ApiError> {
    send_json(
        Request::delete(&item_url(id))
            .header("Authorization", &bearer(token))
            .build(),
    )
    .await
}
