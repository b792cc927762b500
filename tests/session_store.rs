#![allow(clippy::unwrap_used, clippy::expect_used)]

use anyhow::Result;
use electroverse::{
    api::ApiClient,
    config::AppConfig,
    session::{Credentials, LoginResult, Session, SessionStore, SessionUser},
};
use serde_json::json;
use std::net::TcpListener;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn store_for(server: &MockServer) -> Result<SessionStore> {
    let config = AppConfig {
        api_base_url: server.uri(),
        timeout_ms: 5_000,
    };
    Ok(SessionStore::new(ApiClient::new(&config)?))
}

fn alice() -> Session {
    Session::Authenticated(SessionUser {
        username: "alice".to_string(),
        role: "admin".to_string(),
    })
}

async fn mount_me(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(template)
        .mount(server)
        .await;
}

fn me_alice() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "authenticated": true,
        "user": {"username": "alice", "role": "admin"}
    }))
}

#[tokio::test]
async fn verify_authenticates_confirmed_user() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_me(&server, me_alice()).await;

    let store = store_for(&server)?;
    store.verify().await;

    assert_eq!(store.session(), alice());
    assert!(store.is_authenticated());
    Ok(())
}

#[tokio::test]
async fn verify_treats_401_as_signed_out() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_me(
        &server,
        ResponseTemplate::new(401).set_body_json(json!({"error": "Authentication required"})),
    )
    .await;

    let store = store_for(&server)?;
    store.verify().await;

    assert_eq!(store.session(), Session::Unauthenticated);
    Ok(())
}

#[tokio::test]
async fn verify_treats_malformed_body_as_signed_out() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_me(&server, ResponseTemplate::new(200).set_body_string("<html>")).await;

    let store = store_for(&server)?;
    store.verify().await;

    assert!(!store.is_authenticated());
    Ok(())
}

#[tokio::test]
async fn verify_clears_previous_session_when_server_says_no() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(me_alice())
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_me(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"authenticated": false})),
    )
    .await;

    let store = store_for(&server)?;
    store.verify().await;
    assert!(store.is_authenticated());

    store.verify().await;
    assert_eq!(store.session(), Session::Unauthenticated);
    Ok(())
}

#[tokio::test]
async fn login_rejection_surfaces_server_message() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"email": "a@b.com", "password": "x"})))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    // a rejected login must not go on to re-verify
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(me_alice())
        .expect(0)
        .mount(&server)
        .await;

    let store = store_for(&server)?;
    let result = store.login(&Credentials::with_email("a@b.com", "x")).await;

    assert_eq!(
        result,
        LoginResult::Failure {
            message: "Invalid credentials".to_string()
        }
    );
    assert_eq!(store.session(), Session::Unauthenticated);
    Ok(())
}

#[tokio::test]
async fn login_rejection_without_message_uses_default() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let store = store_for(&server)?;
    let result = store
        .login(&Credentials::with_username("alice", "x"))
        .await;

    assert_eq!(result.message(), Some("Login failed"));
    Ok(())
}

#[tokio::test]
async fn login_rejection_keeps_blank_server_message() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "   "})))
        .mount(&server)
        .await;

    let store = store_for(&server)?;
    let result = store
        .login(&Credentials::with_username("alice", "x"))
        .await;

    assert_eq!(result.message(), Some("   "));
    Ok(())
}

#[tokio::test]
async fn login_rejection_with_empty_message_uses_default() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": ""})))
        .mount(&server)
        .await;

    let store = store_for(&server)?;
    let result = store
        .login(&Credentials::with_username("alice", "x"))
        .await;

    assert_eq!(result.message(), Some("Login failed"));
    Ok(())
}

#[tokio::test]
async fn login_rejection_keeps_existing_session() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_me(&server, me_alice()).await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": "Locked"})))
        .mount(&server)
        .await;

    let store = store_for(&server)?;
    store.verify().await;
    let result = store
        .login(&Credentials::with_username("mallory", "x"))
        .await;

    assert_eq!(result.message(), Some("Locked"));
    assert_eq!(store.session(), alice());
    Ok(())
}

#[tokio::test]
async fn login_requires_confirmed_session() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"username": "alice", "role": "admin"}
        })))
        .mount(&server)
        .await;
    mount_me(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"authenticated": false})),
    )
    .await;

    let store = store_for(&server)?;
    let result = store
        .login(&Credentials::with_username("alice", "x"))
        .await;

    assert_eq!(
        result,
        LoginResult::Failure {
            message: "Authentication failed".to_string()
        }
    );
    assert_eq!(store.session(), Session::Unauthenticated);
    Ok(())
}

#[tokio::test]
async fn login_fails_when_session_check_is_rejected() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    mount_me(&server, ResponseTemplate::new(500)).await;

    let store = store_for(&server)?;
    let result = store
        .login(&Credentials::with_username("alice", "x"))
        .await;

    assert_eq!(result.message(), Some("Failed to verify session"));
    assert!(!store.is_authenticated());
    Ok(())
}

#[tokio::test]
async fn login_success_takes_identity_from_session_check() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"username": "alice", "password": "wonderland"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"username": "someone-else", "role": "root"}
        })))
        .mount(&server)
        .await;
    mount_me(&server, me_alice()).await;

    let store = store_for(&server)?;
    let mut changes = store.subscribe();
    let result = store
        .login(&Credentials::from_identifier("alice", "wonderland"))
        .await;

    assert_eq!(result, LoginResult::Success);
    assert_eq!(store.session(), alice());
    assert!(changes.has_changed()?);
    assert_eq!(*changes.borrow_and_update(), alice());
    Ok(())
}

#[tokio::test]
async fn login_network_error_is_a_failure_result() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        listener.local_addr()?.port()
    };
    let config = AppConfig {
        api_base_url: format!("http://127.0.0.1:{port}"),
        timeout_ms: 2_000,
    };
    let store = SessionStore::new(ApiClient::new(&config)?);

    let result = store
        .login(&Credentials::with_username("alice", "x"))
        .await;

    assert_eq!(result.message(), Some("Network error"));
    assert_eq!(store.session(), Session::Unauthenticated);
    Ok(())
}

#[tokio::test]
async fn logout_clears_session_even_on_server_error() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount_me(&server, me_alice()).await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let store = store_for(&server)?;
    store.verify().await;
    assert!(store.is_authenticated());

    store.logout().await;

    assert_eq!(store.session(), Session::Unauthenticated);
    Ok(())
}

#[tokio::test]
async fn logout_is_idempotent() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let store = store_for(&server)?;
    store.logout().await;
    store.logout().await;

    assert_eq!(store.session(), Session::Unauthenticated);
    Ok(())
}
