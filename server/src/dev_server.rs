//! Development Server
//!
//! Serves the built frontend and forwards `/graphql` to the GraphQL server,
//! so the browser talks to a single origin.

use std::path::Path;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::error::ServerResult;

#[derive(Debug, Clone)]
struct ProxyState {
    client: reqwest::Client,
    upstream: String,
}

/// Build the development server router.
pub fn build_router(public_dir: &Path, graphql_port: u16) -> Router {
    let state = ProxyState {
        client: reqwest::Client::new(),
        upstream: format!("http://127.0.0.1:{}/graphql", graphql_port),
    };
    let static_files = ServeDir::new(public_dir).fallback(ServeFile::new(public_dir.join("index.html")));

    Router::new()
        .route("/graphql", post(proxy_graphql))
        .fallback_service(static_files)
        .with_state(state)
}

async fn proxy_graphql(State(state): State<ProxyState>, headers: HeaderMap, body: Bytes) -> Response {
    match forward(&state, &headers, body).await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("GraphQL proxy to {} failed: {}", state.upstream, e);
            (StatusCode::BAD_GATEWAY, e.to_string()).into_response()
        }
    }
}

async fn forward(state: &ProxyState, headers: &HeaderMap, body: Bytes) -> ServerResult<Response> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/json");

    let upstream = state
        .client
        .post(&state.upstream)
        .header(reqwest::header::CONTENT_TYPE, content_type)
        .body(body)
        .send()
        .await?;

    let status = StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| HeaderValue::from_bytes(value.as_bytes()).ok())
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    let bytes = upstream.bytes().await?;

    Ok((status, [(header::CONTENT_TYPE, content_type)], bytes).into_response())
}
