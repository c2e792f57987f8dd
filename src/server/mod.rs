//! HTTP front end for the search engine.
//!
//! Exposes a single route, `GET /files/search?q=<word>`, answering with a
//! JSON envelope `{"list": [...] | null, "error": "..."}`. The engine must be
//! built before [`serve`] is called.

mod handlers;

pub use handlers::{SearchResponse, search_handler};

use crate::engine::Engine;
use anyhow::{Context, Result};
use axum::{Router, routing::get};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;

pub const SEARCH_ROUTE: &str = "/files/search";

pub fn router(engine: Arc<Engine>) -> Router {
    Router::new()
        .route(SEARCH_ROUTE, get(search_handler))
        .with_state(engine)
}

/// Listen on `addr` until the process is stopped
pub async fn serve(engine: Arc<Engine>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("listening on http://{}{}", addr, SEARCH_ROUTE);

    axum::serve(listener, router(engine))
        .await
        .context("HTTP server failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::MemoryFs;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::json;
    use tower::ServiceExt;

    fn ready_router() -> Router {
        let fs: MemoryFs = [
            ("file1.txt", "World"),
            ("file2.txt", "World1"),
            ("file3.txt", "Hello World"),
        ]
        .into_iter()
        .collect();
        let engine = Engine::new(fs);
        engine.init().unwrap();
        router(Arc::new(engine))
    }

    async fn fetch(uri: &str) -> (StatusCode, String, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = ready_router().oneshot(request).await.unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_route_without_query() {
        let (status, content_type, body) = fetch("/files/search").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type, "application/json");
        assert_eq!(body, json!({"list": null, "error": "No search string"}));
    }

    #[tokio::test]
    async fn test_route_empty_query() {
        for uri in ["/files/search?q=", "/files/search?q"] {
            let (status, content_type, body) = fetch(uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert_eq!(content_type, "application/json");
            assert_eq!(body, json!({"list": null, "error": "Empty search string"}));
        }
    }

    #[tokio::test]
    async fn test_route_miss() {
        let (status, content_type, body) = fetch("/files/search?q=qweqweqwe").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type, "application/json");
        assert_eq!(body, json!({"list": null, "error": ""}));
    }

    #[tokio::test]
    async fn test_route_hit() {
        let (status, content_type, body) = fetch("/files/search?q=World").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "application/json");
        assert_eq!(body, json!({"list": ["file1", "file3"], "error": ""}));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let request = Request::builder().uri("/search?q=world").body(Body::empty()).unwrap();
        let response = ready_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
