//! End-to-end tests for the fully wired portal-status stack.
//!
//! Each test starts a fake portal server (axum on `127.0.0.1:0`), then drives
//! the real reqwest adapter, the real services and the terminal surface
//! writing into an in-memory buffer.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use portal_adapter_http_reqwest::{HttpConfig, HttpConnectivityProbe, HttpStatusClient};
use portal_adapter_terminal::TerminalSurface;
use portal_app::config::{NotificationConfig, PollerConfig};
use portal_app::notification_center::NotificationCenter;
use portal_app::services::connectivity_check::ConnectivityCheck;
use portal_app::services::portal_page::PortalPage;
use portal_app::status_poller::{PollerState, StatusPoller};
use portal_domain::session::SessionCode;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

type Surface = Arc<TerminalSurface<SharedBuffer>>;

struct Stack {
    buffer: SharedBuffer,
    notifications: NotificationCenter<Surface>,
    poller: StatusPoller<HttpStatusClient, Surface, Surface>,
    probe: HttpConnectivityProbe,
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn stack(base_url: String) -> Stack {
    let http = HttpConfig {
        base_url,
        request_timeout_secs: 2,
    };
    let buffer = SharedBuffer::default();
    let surface = Arc::new(TerminalSurface::new(buffer.clone()));
    let notifications = NotificationCenter::new(Arc::clone(&surface), NotificationConfig::default());
    let poller = StatusPoller::new(
        HttpStatusClient::new(&http).unwrap(),
        surface,
        notifications.clone(),
        PollerConfig {
            interval_ms: 20,
            failure_threshold: 3,
        },
    );
    Stack {
        buffer,
        notifications,
        poller,
        probe: HttpConnectivityProbe::new(&http).unwrap(),
    }
}

fn code() -> SessionCode {
    SessionCode::parse("AB12CD34").unwrap()
}

async fn wait_for(buffer: &SharedBuffer, needle: &str) {
    for _ in 0..300 {
        if buffer.text().contains(needle) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("{needle:?} never printed, got:\n{}", buffer.text());
}

fn counting_status_router(hits: Arc<AtomicUsize>, body: serde_json::Value) -> Router {
    Router::new()
        .route(
            "/api/status/{code}",
            get(
                |State((hits, body)): State<(Arc<AtomicUsize>, serde_json::Value)>,
                 Path(_code): Path<String>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Json(body)
                },
            ),
        )
        .with_state((hits, body))
}

// ---------------------------------------------------------------------------
// Status polling
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_print_countdown_for_active_session() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = counting_status_router(
        Arc::clone(&hits),
        serde_json::json!({
            "active": true,
            "remaining_seconds": 3661,
            "expiry_time": "2025-03-01T12:00:00+00:00"
        }),
    );
    let stack = stack(serve(router).await);

    let handle = stack.poller.start(code(), false);
    wait_for(&stack.buffer, "Time left: 1h 1m 1s").await;

    assert_eq!(handle.state(), PollerState::Polling);
    assert!(stack.buffer.text().contains("Expires: "));
    assert_eq!(stack.buffer.text().matches("Expires: ").count(), 1);
}

#[tokio::test]
async fn should_announce_expired_session() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = counting_status_router(
        Arc::clone(&hits),
        serde_json::json!({"active": false, "remaining_seconds": 0}),
    );
    let stack = stack(serve(router).await);

    let handle = stack.poller.start(code(), false);
    wait_for(&stack.buffer, "Session expired").await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(handle.state(), PollerState::Expired);
    assert!(stack.buffer.text().contains("Time left: 0s"));
    assert_eq!(stack.buffer.text().matches("Session expired").count(), 1);
}

#[tokio::test]
async fn should_never_query_for_exempt_session() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = counting_status_router(
        Arc::clone(&hits),
        serde_json::json!({"active": true, "remaining_seconds": 60}),
    );
    let stack = stack(serve(router).await);

    let handle = stack.poller.start(code(), true);
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert!(!handle.is_running());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert!(stack.buffer.text().is_empty());
}

#[tokio::test]
async fn should_stop_querying_after_stop() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = counting_status_router(
        Arc::clone(&hits),
        serde_json::json!({"active": true, "remaining_seconds": 60}),
    );
    let stack = stack(serve(router).await);

    let mut handle = stack.poller.start(code(), false);
    wait_for(&stack.buffer, "Time left: 1m").await;
    handle.stop();
    tokio::time::sleep(Duration::from_millis(50)).await;
    let after_stop = hits.load(Ordering::SeqCst);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(hits.load(Ordering::SeqCst), after_stop);
    assert!(!handle.is_running());
}

#[tokio::test]
async fn should_warn_once_when_server_keeps_failing() {
    let router = Router::new().route(
        "/api/status/{code}",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let stack = stack(serve(router).await);

    let _handle = stack.poller.start(code(), false);
    wait_for(
        &stack.buffer,
        "[!] Connection issue: Unable to refresh your session time. Retrying...",
    )
    .await;
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert_eq!(stack.buffer.text().matches("Connection issue").count(), 1);
    assert!(!stack.buffer.text().contains("Time left"));
}

// ---------------------------------------------------------------------------
// Page flows
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_greet_visitor_on_load() {
    let stack = stack("http://127.0.0.1:9".to_string());
    PortalPage::new(stack.notifications.clone()).on_load();

    assert_eq!(
        stack.buffer.text(),
        "[i] WiFi Portal: Enter your voucher code to access the internet\n"
    );
}

#[tokio::test]
async fn should_report_successful_connectivity_check() {
    let router = Router::new().route(
        "/test",
        post(|| async {
            Json(serde_json::json!({
                "status": "success",
                "message": "Connection successful!",
                "client_ip": "127.0.0.1"
            }))
        }),
    );
    let stack = stack(serve(router).await);
    let check = ConnectivityCheck::new(stack.probe, stack.notifications.clone());

    let report = check.run().await.unwrap();

    assert_eq!(report.client_ip.as_deref(), Some("127.0.0.1"));
    assert_eq!(
        stack.buffer.text(),
        "[i] Testing: Checking connection to server...\n\
         [OK] Connected: Server is responding correctly!\n"
    );
}

#[tokio::test]
async fn should_report_failed_connectivity_check() {
    let router = Router::new().route(
        "/test",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let stack = stack(serve(router).await);
    let check = ConnectivityCheck::new(stack.probe, stack.notifications.clone());

    assert!(check.run().await.is_err());
    assert!(
        stack
            .buffer
            .text()
            .contains("[X] Connection Failed: HTTP 502: upstream down")
    );
}
