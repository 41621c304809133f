//! Error normalization over real HTTP exchanges.

use mockito::Server;
use roraima_ai::{ErrorClass, RoraimaClient, UNKNOWN_ERROR_MESSAGE, UNREACHABLE_MESSAGE};
use serde_json::json;

#[tokio::test]
async fn test_401_detail_becomes_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/ai/info")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"invalid key"}"#)
        .create_async()
        .await;
    let client = RoraimaClient::with_base_url("sk-bad", server.url()).unwrap();

    let err = client.get_info().await.unwrap_err();
    let err = err.as_client_error().unwrap();
    assert_eq!(err.status, 401);
    assert_eq!(err.message, "invalid key");
    assert_eq!(err.class(), ErrorClass::Authentication);
    assert_eq!(err.data, json!({"detail": "invalid key"}));
}

#[tokio::test]
async fn test_402_on_processing() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/ai/process")
        .with_status(402)
        .with_body(r#"{"message":"Saldo insuficiente","balance":0.0}"#)
        .create_async()
        .await;
    let client = RoraimaClient::with_base_url("sk-test", server.url()).unwrap();

    let err = client.process_text("hola").await.unwrap_err();
    assert_eq!(err.status(), Some(402));
    let err = err.as_client_error().unwrap();
    assert_eq!(err.message, "Saldo insuficiente");
    assert_eq!(err.class(), ErrorClass::InsufficientBalance);
    assert_eq!(err.data["balance"], 0.0);
}

#[tokio::test]
async fn test_500_without_message_uses_fallback() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/ai/stats")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;
    let client = RoraimaClient::with_base_url("sk-test", server.url()).unwrap();

    let err = client.get_stats(Some("7d")).await.unwrap_err();
    let err = err.as_client_error().unwrap();
    assert_eq!(err.status, 500);
    assert_eq!(err.message, UNKNOWN_ERROR_MESSAGE);
    assert_eq!(err.data, json!("Internal Server Error"));
    assert_eq!(err.class(), ErrorClass::ServerError);
}

#[tokio::test]
async fn test_balance_error_is_info_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/ai/info")
        .with_status(401)
        .with_body(r#"{"detail":"token expired"}"#)
        .expect(2)
        .create_async()
        .await;
    let client = RoraimaClient::with_base_url("sk-test", server.url()).unwrap();

    let from_info = client.get_info().await.unwrap_err();
    let from_balance = client.get_balance().await.unwrap_err();
    assert_eq!(from_balance.as_client_error(), from_info.as_client_error());
}

#[tokio::test]
async fn test_connection_refused_is_status_zero() {
    // Nothing listens on port 1.
    let client = RoraimaClient::with_base_url("sk-test", "http://127.0.0.1:1").unwrap();

    for result in [
        client.get_health().await,
        client.get_info().await,
        client.process_text("hola").await,
    ] {
        let err = result.unwrap_err();
        let err = err.as_client_error().unwrap();
        assert_eq!(err.status, 0);
        assert_eq!(err.message, UNREACHABLE_MESSAGE);
        assert!(err.data["originalError"].is_string());
        assert!(err.is_transport());
    }
}
