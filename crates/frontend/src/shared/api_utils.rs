//! API utilities for frontend-backend communication
//!
//! Builds API URLs, attaches the bearer token and maps HTTP results
//! into [`ApiError`] so every view handles failures the same way.

use contracts::shared::api_message::ApiMessage;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Общий текст для сетевых ошибок и ошибок разбора ответа
pub const NETWORK_ERROR_MESSAGE: &str = "Terjadi kesalahan jaringan. Silakan coba lagi.";

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Сервер ответил 401: сессия недействительна
    Unauthorized,
    /// Любой другой не-2xx ответ
    Rejected { status: u16, message: Option<String> },
    /// Запрос не дошёл до сервера
    Network(String),
    /// Ответ пришёл, но не разобрался
    Parse(String),
}

impl ApiError {
    /// Сообщение для пользователя. Детали сетевых ошибок не показываются.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthorized => "Sesi berakhir, silakan login kembali.".to_string(),
            ApiError::Rejected {
                message: Some(m), ..
            } => m.clone(),
            ApiError::Rejected { message: None, .. } => fallback.to_string(),
            ApiError::Network(_) | ApiError::Parse(_) => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Разбирает ответ по статусу и телу
pub fn classify<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    classify_public(status, body)
}

/// Для публичных маршрутов (login, register) 401 означает неверные данные,
/// а не истёкшую сессию: сообщение сервера сохраняется
pub fn classify_public<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    match status {
        200..=299 => serde_json::from_str(body).map_err(|e| {
            log::error!("Failed to parse response: {}", e);
            ApiError::Parse(e.to_string())
        }),
        _ => Err(ApiError::Rejected {
            status,
            message: ApiMessage::extract(body.as_bytes()),
        }),
    }
}

/// Отправляет подготовленный запрос защищённого маршрута и разбирает JSON-ответ
pub async fn send_json<T: DeserializeOwned>(
    request: Result<Request, gloo_net::Error>,
) -> Result<T, ApiError> {
    let (status, text) = send(request).await?;
    classify(status, &text)
}

/// То же для публичного маршрута
pub async fn send_public_json<T: DeserializeOwned>(
    request: Result<Request, gloo_net::Error>,
) -> Result<T, ApiError> {
    let (status, text) = send(request).await?;
    classify_public(status, &text)
}

async fn send(request: Result<Request, gloo_net::Error>) -> Result<(u16, String), ApiError> {
    let request = request.map_err(|e| {
        log::error!("Failed to build request: {}", e);
        ApiError::Parse(e.to_string())
    })?;
    let response = request.send().await.map_err(|e| {
        log::error!("Failed to send request: {}", e);
        ApiError::Network(e.to_string())
    })?;
    read_text(response).await
}

async fn read_text(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(|e| {
        log::error!("Failed to read response body: {}", e);
        ApiError::Network(e.to_string())
    })?;
    Ok((status, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::teknisi::aggregate::Teknisi;

    #[test]
    fn test_classify_success() {
        let items: Vec<Teknisi> =
            classify(200, r#"[{"id":1,"nama":"A","jurusan":"B"}]"#).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].status(), "active");
    }

    #[test]
    fn test_classify_unauthorized_and_rejected() {
        assert_eq!(
            classify::<ApiMessage>(401, r#"{"message":"x"}"#),
            Err(ApiError::Unauthorized)
        );
        assert_eq!(
            classify::<ApiMessage>(404, r#"{"message":"Failed to fetch data"}"#),
            Err(ApiError::Rejected {
                status: 404,
                message: Some("Failed to fetch data".to_string())
            })
        );
        assert_eq!(
            classify::<ApiMessage>(502, "Bad Gateway"),
            Err(ApiError::Rejected {
                status: 502,
                message: None
            })
        );
    }

    #[test]
    fn test_classify_public_keeps_login_message() {
        assert_eq!(
            classify_public::<ApiMessage>(401, r#"{"message":"Password salah"}"#),
            Err(ApiError::Rejected {
                status: 401,
                message: Some("Password salah".to_string())
            })
        );
    }

    #[test]
    fn test_classify_malformed_records_is_parse_error() {
        let result = classify::<Vec<Teknisi>>(200, r#"{"not":"an array"}"#);
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_user_messages() {
        let rejected = ApiError::Rejected {
            status: 400,
            message: None,
        };
        assert_eq!(rejected.user_message("Gagal"), "Gagal");
        assert_eq!(
            ApiError::Network("TypeError: Failed to fetch".into()).user_message("Gagal"),
            NETWORK_ERROR_MESSAGE
        );
    }
}
