//! Club client against a mock HTTP server.

use clubgate_club::{ClubClient, ClubClientConfig};
use clubgate_core::{ClubDataSource, Tag};
use clubgate_error::ClubApiErrorKind;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

async fn client_for(server: &MockServer) -> ClubClient {
    ClubClient::new(ClubClientConfig::new(server.uri(), TOKEN)).expect("valid mock server URL")
}

#[tokio::test]
async fn test_fetch_player_sends_bearer_and_encoded_tag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/players/%238LJYQ9U2"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r##"{"tag":"#8LJYQ9U2","name":"Nova","club":{"tag":"#2QRJ0LJY","name":"Stellar Forge"}}"##,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let player = client_for(&server)
        .await
        .fetch_player(&Tag::normalize("8ljyq9u2"))
        .await
        .unwrap();

    assert_eq!(player.tag(), "#8LJYQ9U2");
    assert_eq!(player.display_name(), "Nova");
    assert_eq!(player.club_tag().as_deref(), Some("#2QRJ0LJY"));
}

#[tokio::test]
async fn test_fetch_club_roster() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/clubs/%232QRJ0LJY"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r##"{"tag":"#2QRJ0LJY","name":"Stellar Forge","members":[
                {"tag":"#8LJYQ9U2","name":"Nova","role":"vicePresident"},
                {"tag":"#AAAA","name":"Rex","role":"member"}
            ]}"##,
            "application/json",
        ))
        .mount(&server)
        .await;

    let roster = client_for(&server)
        .await
        .fetch_club_roster(&Tag::normalize("#2QRJ0LJY"))
        .await
        .unwrap();

    assert_eq!(roster.club_tag(), "#2QRJ0LJY");
    assert_eq!(
        roster.find("#8LJYQ9U2").unwrap().role_key().as_deref(),
        Some("vicePresident")
    );
}

#[tokio::test]
async fn test_not_found_maps_to_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"reason":"notFound"}"#))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .fetch_player(&Tag::normalize(""))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(matches!(
        err.kind,
        ClubApiErrorKind::Status { ref body, .. } if body.contains("notFound")
    ));
}

#[tokio::test]
async fn test_forbidden_token_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string(r#"{"reason":"accessDenied"}"#))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .fetch_club_roster(&Tag::normalize("#2QRJ0LJY"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(403));
}

#[tokio::test]
async fn test_non_ok_success_status_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .fetch_player(&Tag::normalize("#8LJYQ9U2"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(204));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .fetch_player(&Tag::normalize("#8LJYQ9U2"))
        .await
        .unwrap_err();

    assert!(matches!(err.kind, ClubApiErrorKind::Decode(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Nothing listens on port 1.
    let client = ClubClient::new(ClubClientConfig::new("http://127.0.0.1:1", TOKEN)).unwrap();

    let err = client
        .fetch_player(&Tag::normalize("#8LJYQ9U2"))
        .await
        .unwrap_err();

    assert!(matches!(err.kind, ClubApiErrorKind::Network(_)));
}
