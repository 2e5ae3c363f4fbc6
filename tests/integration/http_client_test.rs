//! HTTP users client tests against a mock server
//!
//! Checks the request each operation sends and how responses and failures
//! map onto `RemoteError`.

use std::time::Duration;

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use userdesk::egui_app::{Config, HttpUserService, RemoteErrorKind, UserService, UsersStore};
use userdesk::shared::{AppConfig, ConfigError, User, UserAttributes, UserPartial, UserPatch};

fn client_for(server: &MockServer) -> HttpUserService {
    let config = Config::with_builder(AppConfig::builder().server_url(server.uri())).unwrap();
    HttpUserService::new(config).unwrap()
}

fn ann_json() -> serde_json::Value {
    json!({ "id": 1, "name": "Ann", "username": "a", "email": "a@x.com" })
}

#[tokio::test]
async fn list_reads_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([ann_json()])))
        .expect(1)
        .mount(&server)
        .await;

    let users = client_for(&server).list().await.unwrap();
    assert_eq!(users, vec![User::new("1", "Ann", "a", "a@x.com")]);
}

#[tokio::test]
async fn create_posts_attributes_without_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(json!({ "name": "Cal", "username": "cal", "email": "c@x.com" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(
            json!({ "id": "7", "name": "Cal", "username": "cal", "email": "c@x.com" }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .create(UserAttributes {
            name: "Cal".into(),
            username: "cal".into(),
            email: "c@x.com".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, "7");
}

#[tokio::test]
async fn replace_puts_every_attribute() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/users/1"))
        .and(body_json(json!({ "name": "Ann", "username": "a", "email": "a@x.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ann_json()))
        .expect(1)
        .mount(&server)
        .await;

    let user = client_for(&server)
        .replace("1", User::new("1", "Ann", "a", "a@x.com").attributes())
        .await
        .unwrap();
    assert_eq!(user.name, "Ann");
}

#[tokio::test]
async fn merge_patches_only_given_attributes() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/users/1"))
        .and(body_json(json!({ "name": "Bob" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({ "id": 1, "name": "Bob", "username": "a", "email": "a@x.com" }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let patch = UserPartial::new("1").name("Bob").patch();
    let user = client_for(&server).merge("1", patch).await.unwrap();
    assert_eq!(user, User::new("1", "Bob", "a", "a@x.com"));
}

#[tokio::test]
async fn remove_succeeds_on_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).remove("2").await.unwrap();
}

#[tokio::test]
async fn non_success_status_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let error = client_for(&server).list().await.unwrap_err();
    assert_eq!(error.kind(), RemoteErrorKind::Status(500));
    assert_eq!(error.message(), Some("Request failed with status code 500"));
}

#[tokio::test]
async fn missing_record_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/users/9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "gone" })))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .merge("9", UserPatch::default())
        .await
        .unwrap_err();
    assert_eq!(error.kind(), RemoteErrorKind::Status(404));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let error = client_for(&server).list().await.unwrap_err();
    assert_eq!(error.kind(), RemoteErrorKind::Decode);
    assert_matches!(error.message(), Some(message) if message.starts_with("Failed to parse response"));
}

#[tokio::test]
async fn unreachable_service_is_network_error() {
    let config =
        Config::with_builder(AppConfig::builder().server_url("http://127.0.0.1:1")).unwrap();
    let error = HttpUserService::new(config).unwrap().list().await.unwrap_err();
    assert_eq!(error.kind(), RemoteErrorKind::Network);
}

#[tokio::test]
async fn store_reports_service_failure() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let store = UsersStore::new(client_for(&server));
    store.delete(User::new("1", "Ann", "a", "a@x.com")).await;

    let state = store.state();
    assert!(!state.is_loading);
    assert_eq!(state.error_message, "Request failed with status code 503");
}

#[tokio::test]
async fn slow_service_still_reconciles() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "id": "2", "name": "Cal", "username": "cal", "email": "c@x.com" }))
                .set_delay(Duration::from_secs(11)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = UsersStore::new(client_for(&server));
    store.create(User::new("", "Cal", "cal", "c@x.com")).await;

    let state = store.state();
    assert_eq!(state.users, vec![User::new("2", "Cal", "cal", "c@x.com")]);
    assert_eq!(state.success_message, "The user Cal, has been created");
    assert!(state.error_message.is_empty());
}

#[tokio::test]
async fn configured_timeout_is_applied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let config = Config::with_builder(
        AppConfig::builder()
            .server_url(server.uri())
            .request_timeout(Duration::from_millis(200)),
    )
    .unwrap();
    let error = HttpUserService::new(config).unwrap().list().await.unwrap_err();
    assert_eq!(error.kind(), RemoteErrorKind::Network);
}

#[test]
fn malformed_service_url_fails_at_startup() {
    let result = Config::with_builder(AppConfig::builder().server_url("http://exa mple.com"));
    assert_matches!(result, Err(ConfigError::InvalidUrl(_)));
}
