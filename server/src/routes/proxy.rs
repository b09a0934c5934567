//! `/api/{service}` forwarding to the remote function endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only talks to this server. Each call is relayed verbatim
//! (method, query string, body, auth headers) to the upstream URL resolved
//! for the service at startup, and the upstream status and body come back
//! unchanged. Remote functions own validation and error messages.
//!
//! TRADE-OFFS
//! ==========
//! Only an allow-list of request headers crosses the hop. Cookies and
//! browser metadata stay here; the remote functions authenticate through
//! bearer tokens alone.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

/// Request headers relayed upstream.
pub const FORWARDED_HEADERS: [&str; 4] = ["authorization", "x-authorization", "content-type", "accept"];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// No upstream is configured under this name.
    #[error("unknown service: {0}")]
    UnknownService(String),

    /// The upstream could not be reached or did not answer in time.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnknownService(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Copy the allow-listed headers from an incoming request.
#[must_use]
pub fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in FORWARDED_HEADERS {
        let name = HeaderName::from_static(name);
        for value in incoming.get_all(&name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Upstream URL with the caller's query string appended.
#[must_use]
pub fn target_url(base: &str, query: Option<&str>) -> String {
    match query.filter(|q| !q.is_empty()) {
        Some(q) if base.contains('?') => format!("{base}&{q}"),
        Some(q) => format!("{base}?{q}"),
        None => base.to_owned(),
    }
}

pub async fn forward(
    State(state): State<AppState>,
    Path(service): Path<String>,
    method: Method,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let Some(base) = state.config.upstream_url(&service) else {
        tracing::warn!(%service, "request for unknown service");
        return Err(ProxyError::UnknownService(service));
    };
    let url = target_url(base, query.as_deref());

    let mut request = state.http.request(method.clone(), &url).headers(forwarded_headers(&headers));
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::error!(%service, %method, error = %e, "upstream unreachable");
        ProxyError::from(e)
    })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;
    if status.is_server_error() {
        tracing::warn!(%service, %method, %status, "upstream error");
    } else {
        tracing::debug!(%service, %method, %status, bytes = bytes.len(), "forwarded");
    }

    let mut response = (status, bytes).into_response();
    response.headers_mut().insert(
        CONTENT_TYPE,
        content_type.unwrap_or_else(|| HeaderValue::from_static("application/json")),
    );
    Ok(response)
}
