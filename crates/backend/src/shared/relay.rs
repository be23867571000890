//! Проксирование запроса во внешний backend и обратно.
//!
//! Каждый вызов независим: один исходящий запрос, без повторов и без состояния.
//! Ни одна ошибка не выходит за пределы relay: клиент всегда получает
//! HTTP-статус и JSON вида `{"message": "..."}`.

use axum::body::Bytes;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api_message::ApiMessage;

use crate::shared::upstream::{Upstream, UpstreamRequest};

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Что отдавать клиенту, если upstream ответил не-2xx
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorBody {
    /// `message` из ответа upstream, иначе `failure_message`
    PassMessage,
    /// Всегда `failure_message`
    Generic,
}

/// Описание одного проксируемого маршрута
#[derive(Debug, Clone)]
pub struct RelayRoute {
    pub method: Method,
    /// Путь относительно base_url upstream, начинается с `/`
    pub upstream_path: String,
    pub requires_auth: bool,
    pub failure_message: &'static str,
    pub error_body: UpstreamErrorBody,
    /// Ответ на успешный запрос без JSON-тела (DELETE)
    pub empty_success_message: Option<&'static str>,
    /// Убрать поле `id` из тела: id берётся из пути
    pub strip_body_id: bool,
}

impl RelayRoute {
    pub fn new(method: Method, upstream_path: impl Into<String>) -> Self {
        Self {
            method,
            upstream_path: upstream_path.into(),
            requires_auth: true,
            failure_message: "Failed to fetch data",
            error_body: UpstreamErrorBody::Generic,
            empty_success_message: None,
            strip_body_id: false,
        }
    }

    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }

    pub fn failure_message(mut self, message: &'static str) -> Self {
        self.failure_message = message;
        self
    }

    pub fn pass_upstream_message(mut self) -> Self {
        self.error_body = UpstreamErrorBody::PassMessage;
        self
    }

    pub fn empty_success_message(mut self, message: &'static str) -> Self {
        self.empty_success_message = Some(message);
        self
    }

    pub fn strip_body_id(mut self) -> Self {
        self.strip_body_id = true;
        self
    }
}

/// Путь upstream для ресурса с идентификатором из URL
pub fn resource_path(prefix: &str, id: &str) -> String {
    format!("{}/{}", prefix, urlencoding::encode(id))
}

pub fn message_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiMessage::new(message))).into_response()
}

fn internal_error() -> Response {
    message_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
}

/// Выполняет один проксируемый запрос
pub async fn relay(
    upstream: &dyn Upstream,
    route: RelayRoute,
    authorization: Option<String>,
    body: Option<Bytes>,
) -> Response {
    if route.requires_auth && authorization.is_none() {
        return message_response(StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE);
    }

    let body = match body.map(|raw| parse_body(&raw, route.strip_body_id)).transpose() {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(
                "{} {}: invalid request body: {}",
                route.method,
                route.upstream_path,
                e
            );
            return internal_error();
        }
    };

    let request = UpstreamRequest {
        method: route.method.clone(),
        path: route.upstream_path.clone(),
        authorization,
        body,
    };

    let response = match upstream.send(request).await {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("{} {}: {}", route.method, route.upstream_path, e);
            return internal_error();
        }
    };

    if !response.status.is_success() {
        tracing::warn!(
            "{} {}: upstream responded {}",
            route.method,
            route.upstream_path,
            response.status
        );
        let message = match route.error_body {
            UpstreamErrorBody::PassMessage => ApiMessage::extract(&response.body)
                .unwrap_or_else(|| route.failure_message.to_string()),
            UpstreamErrorBody::Generic => route.failure_message.to_string(),
        };
        return message_response(response.status, message);
    }

    if let Some(message) = route.empty_success_message {
        if serde_json::from_slice::<serde_json::Value>(&response.body).is_err() {
            return message_response(StatusCode::OK, message);
        }
    }

    // Тело отдаём байт-в-байт, но только если это валидный JSON
    if let Err(e) = serde_json::from_slice::<serde_json::Value>(&response.body) {
        tracing::error!(
            "{} {}: upstream returned invalid JSON: {}",
            route.method,
            route.upstream_path,
            e
        );
        return internal_error();
    }

    (
        response.status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response()
}

fn parse_body(raw: &[u8], strip_id: bool) -> Result<serde_json::Value, serde_json::Error> {
    let mut value: serde_json::Value = serde_json::from_slice(raw)?;
    if strip_id {
        if let Some(obj) = value.as_object_mut() {
            obj.remove("id");
        }
    }
    Ok(value)
}
