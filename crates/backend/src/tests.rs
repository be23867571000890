use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::routes::configure_routes;
use crate::shared::relay::tests::{read_body, FakeUpstream};
use crate::shared::state::AppState;

fn app(fake: &Arc<FakeUpstream>) -> Router {
    configure_routes(AppState::new(fake.clone()))
}

fn request(method: Method, uri: &str, auth: Option<&str>, body: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header("Authorization", auth);
    }
    match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

#[tokio::test]
async fn test_protected_routes_reject_missing_authorization() {
    let fake = Arc::new(FakeUpstream::responding(StatusCode::OK, "[]"));

    let cases = [
        (Method::GET, "/api/teknisi", None),
        (Method::GET, "/api/tampil", None),
        (Method::POST, "/api/tambah", Some(r#"{"nama":"A","jurusan":"B"}"#)),
        (Method::GET, "/api/teknisi/1", None),
        (Method::PUT, "/api/edit/1", Some(r#"{"nama":"A","jurusan":"B"}"#)),
        (Method::DELETE, "/api/tampil/1", None),
        (Method::DELETE, "/api/hapus/1", None),
    ];

    for (method, uri, body) in cases {
        let response = app(&fake)
            .oneshot(request(method, uri, None, body))
            .await
            .unwrap();
        let (status, bytes) = read_body(response).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", uri);
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"message": "Unauthorized"}));
    }

    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_list_forwards_authorization_and_relays_body() {
    let raw = r#"[{"id":1,"nama":"A","jurusan":"B"}]"#;
    let fake = Arc::new(FakeUpstream::responding(StatusCode::OK, raw));

    let response = app(&fake)
        .oneshot(request(Method::GET, "/api/tampil", Some("Bearer t0k3n"), None))
        .await
        .unwrap();
    let (status, bytes) = read_body(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&bytes[..], raw.as_bytes());

    let calls = fake.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, Method::GET);
    assert_eq!(calls[0].path, "/teknisi");
    assert_eq!(calls[0].authorization.as_deref(), Some("Bearer t0k3n"));
}

#[tokio::test]
async fn test_get_by_id_relays_exact_body() {
    let raw = r#"{"id":1,"nama":"A","jurusan":"B"}"#;
    let fake = Arc::new(FakeUpstream::responding(StatusCode::OK, raw));

    let response = app(&fake)
        .oneshot(request(Method::GET, "/api/teknisi/1", Some("Bearer x"), None))
        .await
        .unwrap();
    let (status, bytes) = read_body(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&bytes[..], raw.as_bytes());
    assert_eq!(fake.calls()[0].path, "/teknisi/1");
}

#[tokio::test]
async fn test_upstream_500_keeps_status_and_message() {
    let fake = Arc::new(FakeUpstream::responding(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":"boom"}"#,
    ));

    let response = app(&fake)
        .oneshot(request(Method::GET, "/api/teknisi", Some("Bearer x"), None))
        .await
        .unwrap();
    let (status, bytes) = read_body(response).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_create_failure_uses_fixed_message() {
    let fake = Arc::new(FakeUpstream::responding(
        StatusCode::BAD_REQUEST,
        r#"{"message":"nama sudah dipakai"}"#,
    ));

    let response = app(&fake)
        .oneshot(request(
            Method::POST,
            "/api/tambah",
            Some("Bearer x"),
            Some(r#"{"nama":"A","jurusan":"B"}"#),
        ))
        .await
        .unwrap();
    let (status, bytes) = read_body(response).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"message": "Gagal menambahkan teknisi"}));
    assert_eq!(fake.calls()[0].path, "/teknisi");
}

#[tokio::test]
async fn test_edit_strips_id_and_uses_path() {
    let fake = Arc::new(FakeUpstream::responding(
        StatusCode::OK,
        r#"{"id":5,"nama":"Budi","jurusan":"TKJ"}"#,
    ));

    let response = app(&fake)
        .oneshot(request(
            Method::PUT,
            "/api/edit/5",
            Some("Bearer x"),
            Some(r#"{"id":5,"nama":"Budi","jurusan":"TKJ"}"#),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let calls = fake.calls();
    assert_eq!(calls[0].method, Method::PUT);
    assert_eq!(calls[0].path, "/teknisi/5");
    assert_eq!(calls[0].body, Some(json!({"nama": "Budi", "jurusan": "TKJ"})));
}

#[tokio::test]
async fn test_alternate_delete_path() {
    let fake = Arc::new(FakeUpstream::responding(StatusCode::OK, ""));

    let response = app(&fake)
        .oneshot(request(Method::DELETE, "/api/hapus/8", Some("Bearer x"), None))
        .await
        .unwrap();
    let (status, bytes) = read_body(response).await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"message": "Data deleted successfully"}));
    assert_eq!(fake.calls()[0].path, "/hapus/8");
}

#[tokio::test]
async fn test_login_is_public_and_passes_upstream_message() {
    let fake = Arc::new(FakeUpstream::responding(
        StatusCode::UNAUTHORIZED,
        r#"{"message":"Password salah"}"#,
    ));

    let response = app(&fake)
        .oneshot(request(
            Method::POST,
            "/api/login",
            None,
            Some(r#"{"username":"a","password":"b"}"#),
        ))
        .await
        .unwrap();
    let (status, bytes) = read_body(response).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"message": "Password salah"}));

    let calls = fake.calls();
    assert_eq!(calls[0].path, "/login");
    assert_eq!(calls[0].body, Some(json!({"username": "a", "password": "b"})));
}

#[tokio::test]
async fn test_register_success_relays_upstream_body() {
    let raw = r#"{"message":"User registered","id":10}"#;
    let fake = Arc::new(FakeUpstream::responding(StatusCode::CREATED, raw));

    let response = app(&fake)
        .oneshot(request(
            Method::POST,
            "/api/register",
            None,
            Some(r#"{"username":"a","password":"secret1","fullName":"A"}"#),
        ))
        .await
        .unwrap();
    let (status, bytes) = read_body(response).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(&bytes[..], raw.as_bytes());
}

#[tokio::test]
async fn test_health() {
    let fake = Arc::new(FakeUpstream::responding(StatusCode::OK, "{}"));
    let response = app(&fake)
        .oneshot(request(Method::GET, "/health", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(fake.calls().is_empty());
}
