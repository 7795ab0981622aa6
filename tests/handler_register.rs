mod common;

use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum_test::TestServer;
use common::{StubBackend, StubReply, test_app};

#[tokio::test]
async fn test_register_success_redirects_to_dashboard() {
    let backend = StubBackend::new(StubReply::Success);
    let server = TestServer::new(test_app(backend.clone())).unwrap();

    let response = server
        .post("/register")
        .form(&[
            ("name", "Ana"),
            ("email", "ana@example.com"),
            ("password", "secreta123"),
            ("confirmPassword", "secreta123"),
        ])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header(LOCATION), "/dashboard");
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn test_register_password_mismatch_renders_error_without_backend_call() {
    let backend = StubBackend::new(StubReply::Success);
    let server = TestServer::new(test_app(backend.clone())).unwrap();

    let response = server
        .post("/register")
        .form(&[
            ("name", "Ana"),
            ("email", "ana@example.com"),
            ("password", "secreta123"),
            ("confirmPassword", "distinta123"),
        ])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Las contraseñas no coinciden"));
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_register_missing_field_renders_error_without_backend_call() {
    let backend = StubBackend::new(StubReply::Success);
    let server = TestServer::new(test_app(backend.clone())).unwrap();

    let response = server
        .post("/register")
        .form(&[("email", "ana@example.com"), ("password", "secreta123")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Todos los campos son requeridos"));
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_register_taken_email_renders_backend_message() {
    let backend = StubBackend::new(StubReply::Failure("El email ya está registrado"));
    let server = TestServer::new(test_app(backend)).unwrap();

    let response = server
        .post("/register")
        .form(&[
            ("name", "Ana"),
            ("email", "ana@example.com"),
            ("password", "secreta123"),
            ("confirmPassword", "secreta123"),
        ])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("El email ya está registrado"));
}
