mod common;

use serial_test::serial;

use common::TestApp;
use travel_assistant_api::services::completion::{CompletionClient, CompletionError};

#[actix_rt::test]
#[serial]
async fn placeholder_key_fails_before_any_network_call() {
    std::env::set_var("OPENAI_API_KEY", "your-openai-api-key-here");

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let client = CompletionClient::with_base_url(server.url());
    let result = client.complete("system", "user", None, None).await;

    assert!(matches!(result, Err(CompletionError::Configuration(_))));
    mock.assert_async().await;
}

#[actix_rt::test]
#[serial]
async fn missing_key_fails_before_any_network_call() {
    std::env::remove_var("OPENAI_API_KEY");

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let client = CompletionClient::with_base_url(server.url());
    let result = client.complete("system", "user", None, None).await;

    assert!(matches!(result, Err(CompletionError::Configuration(_))));
    mock.assert_async().await;
}

#[actix_rt::test]
#[serial]
async fn upstream_error_surfaces_status_and_body() {
    std::env::set_var("OPENAI_API_KEY", "test-api-key");

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(503)
        .with_body("overloaded")
        .create_async()
        .await;

    let client = CompletionClient::with_base_url(server.url());
    match client.complete("system", "user", None, None).await {
        Err(CompletionError::Upstream { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "overloaded");
        }
        Ok(_) => panic!("expected an upstream error"),
        Err(err) => panic!("expected an upstream error, got: {}", err),
    }
}

#[actix_rt::test]
#[serial]
async fn empty_completion_text_is_an_error() {
    std::env::set_var("OPENAI_API_KEY", "test-api-key");

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(TestApp::completion_body(""))
        .create_async()
        .await;

    let client = CompletionClient::with_base_url(server.url());
    let result = client.complete("system", "user", None, None).await;

    assert!(matches!(result, Err(CompletionError::EmptyCompletion)));
}

#[actix_rt::test]
#[serial]
async fn successful_completion_returns_the_text() {
    std::env::set_var("OPENAI_API_KEY", "test-api-key");

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-api-key")
        .with_status(200)
        .with_body(TestApp::completion_body("{\"title\":\"X\"}"))
        .create_async()
        .await;

    let client = CompletionClient::with_base_url(server.url());
    let text = client
        .complete("system", "user", Some(0.7), Some(500))
        .await
        .unwrap();

    assert_eq!(text, "{\"title\":\"X\"}");
    mock.assert_async().await;
}
