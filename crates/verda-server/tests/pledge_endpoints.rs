use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use verda_server::{build_router, AppState};
use verda_store::{FileStore, MemoryStore, PledgeStore};

async fn spawn_server(store: Arc<dyn PledgeStore>) -> SocketAddr {
    let app = build_router(AppState::new(store));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

async fn send_raw(
    addr: SocketAddr,
    method: &str,
    path: &str,
    body: Option<&str>,
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    if let Some(body) = body {
        req.push_str("Content-Type: application/json\r\n");
        req.push_str(&format!("Content-Length: {}\r\n", body.len()));
    }
    req.push_str("\r\n");
    if let Some(body) = body {
        req.push_str(body);
    }
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, head.to_string(), body.to_string())
}

const ADA: &str =
    r#"{"name":"Ada","email":"ada@example.com","message":"I will reduce my carbon footprint."}"#;
const GRACE: &str =
    r#"{"name":"Grace","email":"grace@example.com","message":"I will bike to work all summer."}"#;

#[tokio::test]
async fn post_valid_pledge_then_get_lists_it_first() {
    let addr = spawn_server(Arc::new(MemoryStore::new())).await;

    let (status, headers, body) = send_raw(addr, "POST", "/pledges", Some(ADA)).await;
    assert_eq!(status, 200);
    assert!(headers.contains("x-request-id: "));
    let pledge: Value = serde_json::from_str(&body).expect("pledge json");
    assert_eq!(pledge["name"], "Ada");
    assert!(!pledge["id"].as_str().expect("id string").is_empty());
    assert!(pledge["createdAt"].is_string());

    let (status, _, body) = send_raw(addr, "GET", "/pledges", None).await;
    assert_eq!(status, 200);
    let listed: Value = serde_json::from_str(&body).expect("list json");
    assert_eq!(listed.as_array().expect("array").len(), 1);
    assert_eq!(listed[0]["id"], pledge["id"]);
}

#[tokio::test]
async fn get_pledges_orders_newest_first() {
    let addr = spawn_server(Arc::new(MemoryStore::new())).await;

    send_raw(addr, "POST", "/pledges", Some(ADA)).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    send_raw(addr, "POST", "/pledges", Some(GRACE)).await;

    let (status, _, body) = send_raw(addr, "GET", "/pledges", None).await;
    assert_eq!(status, 200);
    let listed: Value = serde_json::from_str(&body).expect("list json");
    assert_eq!(listed[0]["name"], "Grace");
    assert_eq!(listed[1]["name"], "Ada");
}

#[tokio::test]
async fn post_invalid_fields_returns_three_field_errors() {
    let addr = spawn_server(Arc::new(MemoryStore::new())).await;

    let invalid = r#"{"name":"","email":"bad","message":"short"}"#;
    let (status, _, body) = send_raw(addr, "POST", "/pledges", Some(invalid)).await;
    assert_eq!(status, 400);
    let json: Value = serde_json::from_str(&body).expect("error json");
    assert_eq!(json["error"], "Invalid input");
    assert_eq!(json["code"], "validation_failed");
    let details = json["details"].as_array().expect("details array");
    assert_eq!(details.len(), 3);
    let fields: Vec<&str> = details
        .iter()
        .map(|d| d["field"].as_str().expect("field name"))
        .collect();
    assert_eq!(fields, ["name", "email", "message"]);

    // nothing was stored
    let (_, _, body) = send_raw(addr, "GET", "/pledges", None).await;
    let listed: Value = serde_json::from_str(&body).expect("list json");
    assert!(listed.as_array().expect("array").is_empty());
}

#[tokio::test]
async fn post_malformed_body_returns_400() {
    let addr = spawn_server(Arc::new(MemoryStore::new())).await;

    let (status, _, body) = send_raw(addr, "POST", "/pledges", Some("{not json")).await;
    assert_eq!(status, 400);
    let json: Value = serde_json::from_str(&body).expect("error json");
    assert_eq!(json["code"], "malformed_body");

    let missing_field = r#"{"name":"Ada","email":"ada@example.com"}"#;
    let (status, _, _) = send_raw(addr, "POST", "/pledges", Some(missing_field)).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn file_backed_server_persists_pledges() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("pledges.json");
    let store = FileStore::open(&path).expect("open store");
    let addr = spawn_server(Arc::new(store)).await;

    let (status, _, _) = send_raw(addr, "POST", "/pledges", Some(ADA)).await;
    assert_eq!(status, 200);

    let persisted = std::fs::read_to_string(&path).expect("read pledge file");
    let records: Value = serde_json::from_str(&persisted).expect("persisted json");
    assert_eq!(records.as_array().expect("array").len(), 1);
    assert_eq!(records[0]["name"], "Ada");
}

#[tokio::test]
async fn health_and_readiness_endpoints_respond() {
    let addr = spawn_server(Arc::new(MemoryStore::new())).await;

    let (status, _, body) = send_raw(addr, "GET", "/healthz", None).await;
    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).expect("health json");
    assert_eq!(json["status"], "ok");

    let (status, _, body) = send_raw(addr, "GET", "/readyz", None).await;
    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).expect("ready json");
    assert_eq!(json["status"], "ready");
}

#[tokio::test]
async fn readyz_fails_when_store_is_unhealthy() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("pledges.json");
    let store = FileStore::open(&path).expect("open store");
    std::fs::write(&path, b"not json").expect("corrupt file");
    let addr = spawn_server(Arc::new(store)).await;

    let (status, _, body) = send_raw(addr, "GET", "/readyz", None).await;
    assert_eq!(status, 503);
    let json: Value = serde_json::from_str(&body).expect("error json");
    assert_eq!(json["code"], "not_ready");
}

#[tokio::test]
async fn landing_page_served_at_root() {
    let addr = spawn_server(Arc::new(MemoryStore::new())).await;

    let (status, _, body) = send_raw(addr, "GET", "/", None).await;
    assert_eq!(status, 200);
    assert!(body.contains("Make a pledge"));
}
