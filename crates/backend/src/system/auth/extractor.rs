use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use std::convert::Infallible;

/// Заголовок Authorization входящего запроса в исходном виде.
///
/// Сам по себе запрос не отклоняет: проверку наличия делает relay,
/// чтобы ответ 401 имел единый JSON-формат.
/// Usage in handlers: `async fn handler(AuthHeader(auth): AuthHeader) -> Response`
pub struct AuthHeader(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for AuthHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .filter(|h| !h.trim().is_empty())
            .map(str::to_string);
        Ok(AuthHeader(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Option<String> {
        let (mut parts, _) = request.into_parts();
        let AuthHeader(value) = AuthHeader::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        value
    }

    #[tokio::test]
    async fn test_header_is_taken_unchanged() {
        let request = Request::builder()
            .header("Authorization", "Bearer xyz")
            .body(())
            .unwrap();
        assert_eq!(extract(request).await.as_deref(), Some("Bearer xyz"));
    }

    #[tokio::test]
    async fn test_missing_or_blank_header_is_none() {
        let request = Request::builder().body(()).unwrap();
        assert_eq!(extract(request).await, None);

        let request = Request::builder()
            .header("Authorization", "  ")
            .body(())
            .unwrap();
        assert_eq!(extract(request).await, None);
    }
}
