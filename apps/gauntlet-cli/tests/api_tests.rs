//! Integration tests for the session and token API layer

mod common;

use common::{honest_token, test_config};
use gauntlet_cli::api;
use gauntlet_cli::config::Config;
use gauntlet_cli::error::CliError;
use serde_json::json;
use wiremock::matchers::{basic_auth, body_string_contains, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_create_session_posts_explicit_mode() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/sessions"))
        .and(body_string_contains("\"name\":\"gauntlet-alg-none-1a2b3c4d\""))
        .and(body_string_contains("\"mode\":\"explicit\""))
        .and(body_string_contains("\"mischief\":[\"alg-none\"]"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "sessionId": "sess-123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let client = api::build_client(&config).unwrap();
    let session =
        api::create_session(&client, &config, "gauntlet-alg-none-1a2b3c4d", &["alg-none"])
            .await
            .unwrap();

    assert_eq!(session.session_id, "sess-123");
}

#[tokio::test]
async fn test_create_session_error_status_surfaces_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/sessions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database offline"))
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let client = api::build_client(&config).unwrap();
    let result = api::create_session(&client, &config, "gauntlet-x", &["alg-none"]).await;

    match result {
        Err(CliError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("database offline"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_session_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;

    // A 2xx with an undecodable body is a broken service, not a
    // broken request.
    Mock::given(method("POST"))
        .and(path("/admin/sessions"))
        .respond_with(ResponseTemplate::new(201).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let client = api::build_client(&config).unwrap();
    let result = api::create_session(&client, &config, "gauntlet-x", &["alg-none"]).await;

    assert!(matches!(result, Err(CliError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_request_token_sends_credentials_and_session_header() {
    let server = MockServer::start().await;
    let token = honest_token(&server.uri());

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(basic_auth("test-client", "test-secret"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(header("X-Loki-Session", "sess-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let client = api::build_client(&config).unwrap();
    let got = api::request_token(&client, &config, Some("sess-9"))
        .await
        .unwrap();

    assert_eq!(got, token);
}

#[tokio::test]
async fn test_request_token_without_session_omits_header() {
    let server = MockServer::start().await;

    // Mount order decides precedence: a request carrying the session
    // header hits this mock and fails the test.
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(header_exists("X-Loki-Session"))
        .respond_with(ResponseTemplate::new(500).set_body_string("unexpected session header"))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let client = api::build_client(&config).unwrap();
    let got = api::request_token(&client, &config, None).await.unwrap();

    assert_eq!(got, "tok");
}

#[tokio::test]
async fn test_request_token_401_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_client"
        })))
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let client = api::build_client(&config).unwrap();
    let result = api::request_token(&client, &config, None).await;

    match result {
        Err(CliError::Api { status, .. }) => assert_eq!(status, 401),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_token_response_without_access_token_is_invalid() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "wrong-field"
        })))
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let client = api::build_client(&config).unwrap();
    let result = api::request_token(&client, &config, None).await;

    assert!(matches!(result, Err(CliError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_timeout_is_a_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "slow"}))
                .set_delay(std::time::Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = Config::from_args_and_env(
        Some(server.uri()),
        Some("test-client".to_string()),
        Some("test-secret".to_string()),
        Some(1),
        false,
    )
    .unwrap();
    let client = api::build_client(&config).unwrap();
    let result = api::request_token(&client, &config, None).await;

    assert!(matches!(result, Err(CliError::Network(_))));
}
