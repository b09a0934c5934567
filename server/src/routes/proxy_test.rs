use std::collections::BTreeMap;
use std::time::Duration;

use axum::Router;
use axum::routing::any;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use super::*;
use crate::config::Config;
use crate::routes::api_routes;

/// Upstream stand-in that echoes what it received.
async fn echo(method: Method, RawQuery(query): RawQuery, headers: HeaderMap, body: Bytes) -> Json<Value> {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    Json(json!({
        "method": method.as_str(),
        "query": query,
        "authorization": header("authorization"),
        "x_authorization": header("x-authorization"),
        "cookie": header("cookie"),
        "body": String::from_utf8_lossy(&body),
    }))
}

async fn failing() -> (StatusCode, Json<Value>) {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "error": "Укажите город" })))
}

async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn config(endpoints: &[(&'static str, String)]) -> Config {
    Config {
        port: 0,
        endpoints: endpoints.iter().cloned().collect::<BTreeMap<_, _>>(),
        upstream_timeout: Duration::from_secs(5),
        max_body_bytes: 1024 * 1024,
    }
}

async fn proxy_for(endpoints: &[(&'static str, String)]) -> String {
    let state = AppState::new(config(endpoints)).unwrap();
    spawn(api_routes(state)).await
}

#[test]
fn only_allow_listed_headers_cross() {
    let mut incoming = HeaderMap::new();
    incoming.insert("authorization", HeaderValue::from_static("Bearer a"));
    incoming.insert("x-authorization", HeaderValue::from_static("Bearer b"));
    incoming.insert("cookie", HeaderValue::from_static("sid=1"));
    incoming.insert("host", HeaderValue::from_static("localhost"));
    let out = forwarded_headers(&incoming);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get("authorization").unwrap(), "Bearer a");
    assert!(out.get("cookie").is_none());
}

#[test]
fn query_is_appended_to_target() {
    assert_eq!(target_url("https://fn.example/top20", Some("city=Kazan")), "https://fn.example/top20?city=Kazan");
    assert_eq!(target_url("https://fn.example/f?id=1", Some("limit=5")), "https://fn.example/f?id=1&limit=5");
    assert_eq!(target_url("https://fn.example/f", Some("")), "https://fn.example/f");
    assert_eq!(target_url("https://fn.example/f", None), "https://fn.example/f");
}

#[test]
fn proxy_error_statuses() {
    assert_eq!(ProxyError::UnknownService("x".into()).status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn forwards_method_query_body_and_auth() {
    let upstream = spawn(Router::new().route("/owner-listings", any(echo))).await;
    let proxy = proxy_for(&[("owner-listings", format!("{upstream}/owner-listings"))]).await;

    let reply: Value = reqwest::Client::new()
        .put(format!("{proxy}/api/owner-listings?owner_id=7"))
        .header("Authorization", "Bearer owner")
        .header("X-Authorization", "Bearer admin")
        .header("Cookie", "sid=secret")
        .header("Content-Type", "application/json")
        .body(r#"{"title":"Арбат"}"#)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(reply["method"], "PUT");
    assert_eq!(reply["query"], "owner_id=7");
    assert_eq!(reply["authorization"], "Bearer owner");
    assert_eq!(reply["x_authorization"], "Bearer admin");
    assert!(reply["cookie"].is_null());
    assert_eq!(reply["body"], r#"{"title":"Арбат"}"#);
}

#[tokio::test]
async fn upstream_status_and_error_body_pass_through() {
    let upstream = spawn(Router::new().route("/owner-listing-submission", any(failing))).await;
    let proxy = proxy_for(&[("owner-listing-submission", format!("{upstream}/owner-listing-submission"))]).await;

    let response = reqwest::Client::new().post(format!("{proxy}/api/owner-listing-submission")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 422);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Укажите город");
}

#[tokio::test]
async fn unknown_service_is_404_with_error_body() {
    let proxy = proxy_for(&[]).await;
    let response = reqwest::get(format!("{proxy}/api/billing")).await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "unknown service: billing");
}

#[tokio::test]
async fn unreachable_upstream_is_502() {
    // Bind then drop to get a port with nothing listening.
    let closed = TcpListener::bind("127.0.0.1:0").await.unwrap().local_addr().unwrap();
    let proxy = proxy_for(&[("top20", format!("http://{closed}/top20"))]).await;
    let response = reqwest::get(format!("{proxy}/api/top20")).await.unwrap();
    assert_eq!(response.status().as_u16(), 502);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("upstream request failed"));
}

#[tokio::test]
async fn healthz_reports_resolved_services() {
    let proxy = proxy_for(&[("top20", "http://127.0.0.1:9/top20".to_owned())]).await;
    let response = reqwest::get(format!("{proxy}/healthz")).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "ok", "services": 1 }));
}
