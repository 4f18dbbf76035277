//! Test helpers: build the proxy router and mock enhancement backends.
//!
//! Run from workspace root: `cargo test -p enhancer-api --test enhance_test`.

pub mod backend;
pub mod fixtures;

use axum_test::TestServer;
use enhancer_api::setup::routes::setup_routes;
use enhancer_api::AppState;
use enhancer_core::Config;

/// Config pointing the proxy at the given backend, defaults elsewhere.
pub fn test_config(backend_url: impl Into<String>) -> Config {
    Config {
        backend_url: backend_url.into(),
        ..Config::default()
    }
}

/// Proxy app served on axum-test's mock transport.
pub fn setup_test_app(config: Config) -> TestServer {
    let state = AppState::new(config.clone()).expect("backend client should build");
    let router = setup_routes(&config, state).expect("router should build");
    TestServer::new(router).expect("test server should start")
}

/// Proxy app bound to a real local port, for end-to-end tests driven by the
/// real API client. Returns the base URL.
pub async fn spawn_test_app(config: Config) -> String {
    let state = AppState::new(config.clone()).expect("backend client should build");
    let router = setup_routes(&config, state).expect("router should build");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve test app");
    });

    format!("http://{}", addr)
}
