//! Readiness probe tests against a local mock HTTP server.
//!
//! The mock answers every request with a fixed status line, which is
//! all the probe looks at.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use comfygate::upstream::{
    ProbeClient, ProbeConfig, check_server, wait_until_ready, wait_until_ready_cancellable,
};

/// Starts a mock server answering every request with `status_line`,
/// returning its base URL.
async fn spawn_status_server(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };

            tokio::spawn(async move {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;

                let response = format!(
                    "HTTP/1.1 {status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
                );
                let _ = socket.write_all(response.as_bytes()).await;
            });
        }
    });

    format!("http://{addr}")
}

/// Binds and immediately drops a listener so the port refuses
/// connections for the duration of the test.
async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}")
}

fn client_for(url: String) -> ProbeClient {
    let config = ProbeConfig {
        connect_timeout: Duration::from_millis(500),
        request_timeout: Duration::from_millis(500),
        ..ProbeConfig::default()
    };

    ProbeClient::new(config, url).unwrap()
}

#[tokio::test]
async fn server_up_succeeds_on_first_attempt() {
    let url = spawn_status_server("200 OK").await;
    let client = client_for(url);

    assert!(wait_until_ready(&client, 1, Duration::from_millis(50)).await);
}

#[tokio::test]
async fn server_down_exhausts_retry_budget() {
    let url = refused_url().await;
    let client = client_for(url);

    assert!(!wait_until_ready(&client, 1, Duration::from_millis(50)).await);
}

#[tokio::test]
async fn transport_failures_absorbed_across_all_attempts() {
    let url = refused_url().await;
    let client = client_for(url);

    // Every attempt fails at the transport level; the loop must come
    // back with false rather than an error.
    assert!(!wait_until_ready(&client, 3, Duration::from_millis(10)).await);
}

#[tokio::test]
async fn other_2xx_statuses_are_not_ready() {
    let url = spawn_status_server("204 No Content").await;
    let client = client_for(url);

    assert!(!wait_until_ready(&client, 2, Duration::from_millis(10)).await);
}

#[tokio::test]
async fn server_error_statuses_are_not_ready() {
    let url = spawn_status_server("503 Service Unavailable").await;
    let client = client_for(url);

    assert!(!wait_until_ready(&client, 2, Duration::from_millis(10)).await);
}

#[tokio::test]
async fn probe_once_reports_transport_error() {
    let url = refused_url().await;
    let client = client_for(url);

    assert!(client.probe_once().await.is_err());
}

#[tokio::test]
async fn probe_once_distinguishes_status() {
    let url = spawn_status_server("200 OK").await;
    let client = client_for(url);
    assert!(client.probe_once().await.unwrap());

    let url = spawn_status_server("500 Internal Server Error").await;
    let client = client_for(url);
    assert!(!client.probe_once().await.unwrap());
}

#[tokio::test]
async fn check_server_works_from_a_bare_url() {
    let url = spawn_status_server("200 OK").await;
    assert!(check_server(&url, 1, Duration::from_millis(50)).await);

    let url = refused_url().await;
    assert!(!check_server(&url, 1, Duration::from_millis(50)).await);
}

#[tokio::test]
async fn cancellation_preempts_the_retry_budget() {
    let url = refused_url().await;
    let client = client_for(url);

    let cancel = CancellationToken::new();
    cancel.cancel();

    // A generous budget that would otherwise keep the loop busy; the
    // pre-fired token must win immediately.
    let ready =
        wait_until_ready_cancellable(&client, 1000, Duration::from_millis(50), &cancel).await;
    assert!(!ready);
}

#[tokio::test]
async fn cancellable_variant_still_reports_ready() {
    let url = spawn_status_server("200 OK").await;
    let client = client_for(url);

    let cancel = CancellationToken::new();
    let ready =
        wait_until_ready_cancellable(&client, 3, Duration::from_millis(10), &cancel).await;
    assert!(ready);
}
