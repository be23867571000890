use contracts::system::auth::{LoginRequest, LoginResponse, RegisterRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, send_public_json, ApiError};

/// Login with username and password
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    send_public_json(Request::post(&api_url("/api/login")).json(request)).await
}

/// Register a new account; the response body is free-form upstream JSON
pub async fn register(request: &RegisterRequest) -> Result<serde_json::Value, ApiError> {
    send_public_json(Request::post(&api_url("/api/register")).json(request)).await
}
