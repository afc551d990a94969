//! End-to-end tests against a real listener on an ephemeral port.

use std::net::SocketAddr;

use radix_convert::api::{create_router, AppState};
use reqwest::StatusCode;
use tokio::net::TcpListener;

/// Start the server on 127.0.0.1 with an OS-assigned port.
async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_router(AppState::new()))
            .await
            .unwrap();
    });

    addr
}

async fn get(addr: SocketAddr, path: &str) -> (StatusCode, String) {
    let response = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
    let status = response.status();
    (status, response.text().await.unwrap())
}

#[tokio::test]
async fn serves_conversions_over_http() {
    let addr = spawn_server().await;

    assert_eq!(
        get(addr, "/convert/1010/bin/dec").await,
        (StatusCode::OK, "10".to_string())
    );
    assert_eq!(
        get(addr, "/convert/ff/hex/dec").await,
        (StatusCode::OK, "255".to_string())
    );
    assert_eq!(
        get(addr, "/convert/255/dec/hex").await,
        (StatusCode::OK, "ff".to_string())
    );
}

#[tokio::test]
async fn rejects_bad_requests_and_keeps_serving() {
    let addr = spawn_server().await;

    let (status, body) = get(addr, "/convert/1010/oct/dec").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("oct"), "{body}");

    let (status, _) = get(addr, "/convert/g1/bin/dec").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(get(addr, "/health").await, (StatusCode::OK, "OK".to_string()));
}

#[tokio::test]
async fn handles_concurrent_requests_independently() {
    let addr = spawn_server().await;

    let tasks: Vec<_> = (0u64..32)
        .map(|n| {
            tokio::spawn(async move {
                let (status, body) = get(addr, &format!("/convert/{n}/dec/bin")).await;
                assert_eq!(status, StatusCode::OK);
                assert_eq!(body, format!("{n:b}"));
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }
}

#[tokio::test]
async fn root_serves_usage_guide() {
    let addr = spawn_server().await;

    let (status, body) = get(addr, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/convert/1010/bin/dec"));
}
