//! End-to-end tests: a real backend on an ephemeral port, driven through the
//! frontend router and through a plain HTTP client.

use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use greeter::backend::{self, BackendState, CorsPolicy};
use greeter::config::FrontendConfig;
use greeter::frontend::{self, templates::init_templates, FrontendState, MessageClient};
use greeter::message::Message;
use http::{HeaderMap, HeaderValue};
use tokio::net::TcpListener;
use tower::ServiceExt;

const FRONTEND_ORIGIN: &str = "http://localhost:3001";
const ERROR_TEXT: &str = "Error connecting to backend.";

/// Serve the backend on 127.0.0.1 with an OS-assigned port.
async fn spawn_backend() -> SocketAddr {
    let app = backend::create_router(
        BackendState::new(),
        &CorsPolicy::Restricted(HeaderValue::from_static(FRONTEND_ORIGIN)),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// An address nothing is listening on.
async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

fn frontend_router(api_url: String, request_timeout_seconds: u64) -> Router {
    let config = FrontendConfig {
        api_url,
        request_timeout_seconds,
        ..FrontendConfig::default()
    };
    let client = MessageClient::new(&config).unwrap();
    frontend::create_router(FrontendState::new(client, init_templates().unwrap()))
}

async fn click(router: Router) -> (StatusCode, String) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/message")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn response_field(html: &str) -> &str {
    let start = html.find("<span id=\"response\"").unwrap();
    let open_end = start + html[start..].find('>').unwrap() + 1;
    let close = open_end + html[open_end..].find("</span>").unwrap();
    &html[open_end..close]
}

#[tokio::test]
async fn api_call_from_allowed_origin() {
    let addr = spawn_backend().await;

    let response = reqwest::Client::new()
        .get(format!("http://{}/api", addr))
        .header("origin", FRONTEND_ORIGIN)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        FRONTEND_ORIGIN
    );
    let body: Message = response.json().await.unwrap();
    assert_eq!(body.message, "Hello from Node.js Backend at /api!");
}

#[tokio::test]
async fn landing_page_starts_empty() {
    let router = frontend_router("http://127.0.0.1:9/".to_string(), 5);
    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("cache-control").unwrap(), "no-store");
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Frontend to Backend Demo"));
    assert!(html.contains("Get Message from Backend"));
    assert_eq!(response_field(&html), "");
}

#[tokio::test]
async fn click_displays_backend_root_message() {
    let addr = spawn_backend().await;
    let router = frontend_router(format!("http://{}", addr), 5);

    let (status, html) = click(router).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response_field(&html), "Hello from Node.js Backend at &#x2F;!");
    assert!(html.contains(r#"data-state="resolved""#));
}

#[tokio::test]
async fn click_displays_api_message() {
    let addr = spawn_backend().await;
    let router = frontend_router(format!("http://{}/api", addr), 5);

    let (_, html) = click(router).await;
    assert_eq!(
        response_field(&html),
        "Hello from Node.js Backend at &#x2F;api!"
    );
}

#[tokio::test]
async fn every_click_fetches_again() {
    let addr = spawn_backend().await;
    let router = frontend_router(format!("http://{}/api", addr), 5);

    let (_, first) = click(router.clone()).await;
    let (_, second) = click(router).await;
    assert_eq!(response_field(&first), response_field(&second));
}

#[tokio::test]
async fn unreachable_backend_shows_error_text() {
    let addr = unreachable_addr().await;
    let router = frontend_router(format!("http://{}", addr), 5);

    let (status, html) = click(router).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response_field(&html), ERROR_TEXT);
    assert!(html.contains(r#"data-state="failed""#));
}

#[tokio::test]
async fn non_success_status_shows_error_text() {
    let addr = spawn_backend().await;
    let router = frontend_router(format!("http://{}/missing", addr), 5);

    let (_, html) = click(router).await;
    assert_eq!(response_field(&html), ERROR_TEXT);
}

#[tokio::test]
async fn body_without_message_shows_error_text() {
    let addr = spawn_backend().await;
    let router = frontend_router(format!("http://{}/api/health", addr), 5);

    let (_, html) = click(router).await;
    assert_eq!(response_field(&html), ERROR_TEXT);
}

#[tokio::test]
async fn hung_backend_times_out_to_error_text() {
    // Accepts connections but never answers
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let router = frontend_router(format!("http://{}", addr), 1);
    let (_, html) = click(router).await;
    assert_eq!(response_field(&html), ERROR_TEXT);
}

#[tokio::test]
async fn frontend_health_probe() {
    let router = frontend_router("http://127.0.0.1:9/".to_string(), 5);
    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    assert_eq!(&body[..], b"ok");
}

#[tokio::test]
async fn click_forwards_request_id_to_backend() {
    // Answers with the request id it received as the message
    let echo = Router::new().route(
        "/",
        get(|headers: HeaderMap| async move {
            let id = headers
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            Json(Message::new(id))
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, echo).await.unwrap();
    });

    let request_id = "1b4e28ba-2fa1-41d2-883f-0016d3cca427";
    let response = frontend_router(format!("http://{}/", addr), 5)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/message")
                .header("x-request-id", request_id)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), request_id);
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert_eq!(response_field(&html), request_id);
}
