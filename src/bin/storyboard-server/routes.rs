//! HTTP routes.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

use storyboardpro::catalog::{mood_presets, MoodPreset};
use storyboardpro::{CampaignInput, ReferenceImages, Storyboard, StoryboardError, UploadedImage};

use crate::proxy::{ImageProxy, ProxiedImage, ProxyError};

/// Largest accepted request body.
pub const BODY_LIMIT_BYTES: usize = 50 * 1024 * 1024;

pub struct AppState {
    pub proxy: ImageProxy,
}

pub type SharedState = Arc<AppState>;

pub fn create_router(state: SharedState, static_dir: &Path) -> Router {
    Router::new()
        .route("/api/proxy-image", get(proxy_image))
        .route("/api/storyboard", post(generate_storyboard))
        .route("/api/moods", get(list_moods))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CorsLayer::permissive())
}

#[derive(Debug, Deserialize)]
pub struct ProxyParams {
    url: Option<String>,
}

async fn proxy_image(
    State(state): State<SharedState>,
    Query(params): Query<ProxyParams>,
) -> Result<ProxiedImage, ProxyError> {
    let url = params.url.ok_or(ProxyError::MissingUrl)?;
    state.proxy.fetch(&url).await
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    campaign: CampaignInput,
    #[serde(default)]
    images: Vec<UploadedImage>,
}

/// Storyboard endpoint failures as `{"error": ...}` bodies.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<StoryboardError> for ApiError {
    fn from(err: StoryboardError) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

async fn generate_storyboard(
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Storyboard>, ApiError> {
    let Json(req) = payload?;
    let images: ReferenceImages = req.images.into_iter().collect();
    let board = Storyboard::generate(&req.campaign, &images)?;
    info!(
        brand = %board.campaign.brand,
        scenes = board.scene_count(),
        "Storyboard generated"
    );
    Ok(Json(board))
}

async fn list_moods() -> Json<&'static [MoodPreset]> {
    Json(mood_presets())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        let proxy = ImageProxy::new(Duration::from_secs(5)).unwrap();
        let static_dir = std::env::temp_dir().join(format!("storyboard-static-{}", std::process::id()));
        std::fs::create_dir_all(&static_dir).unwrap();
        std::fs::write(static_dir.join("index.html"), "<h1>Storyboard Pro</h1>").unwrap();
        create_router(Arc::new(AppState { proxy }), &static_dir)
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Starts a local upstream serving one PNG and 404 for everything else.
    async fn spawn_upstream() -> String {
        let upstream = Router::new()
            .route(
                "/frame.png",
                get(|| async { ([(header::CONTENT_TYPE, "image/png")], vec![0x89u8, b'P', b'N', b'G']) }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, upstream).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_proxy_missing_url_is_400() {
        let response = app()
            .oneshot(Request::builder().uri("/api/proxy-image").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "Missing url parameter" }));
    }

    #[tokio::test]
    async fn test_proxy_passes_upstream_status_through() {
        let base = spawn_upstream().await;
        let uri = format!("/api/proxy-image?url={}/missing.png", base);
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "error": "Upstream error: 404" }));
    }

    #[tokio::test]
    async fn test_proxy_success_preserves_content_type() {
        let base = spawn_upstream().await;
        let uri = format!("/api/proxy-image?url={}/frame.png", base);
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        assert_eq!(response.headers()[header::CACHE_CONTROL], "public, max-age=3600");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], &[0x89u8, b'P', b'N', b'G'][..]);
    }

    #[tokio::test]
    async fn test_proxy_unreachable_upstream_is_500() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let uri = format!("/api/proxy-image?url=http://{}/frame.png", addr);
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_generate_storyboard() {
        let body = json!({
            "campaign": {
                "brand": "Volt",
                "product": "Sprint Shoe",
                "description": "Lightweight racing shoe",
                "durationSeconds": 60,
                "mood": "dynamic",
                "keyMessage": "Go Far"
            },
            "images": [{ "name": "hero.png", "contentType": "image/png" }]
        });
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/storyboard")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let board = body_json(response).await;
        assert_eq!(board["scenes"].as_array().map(|s| s.len()), Some(8));
        assert_eq!(board["scenes"][0]["referenceImageSlot"], 0);
        assert_eq!(board["subtitle"], "Volt — Sprint Shoe");
    }

    #[tokio::test]
    async fn test_generate_storyboard_rejects_unknown_mood() {
        let body = json!({
            "campaign": { "brand": "Volt", "product": "Shoe", "description": "Fast", "mood": "noir" }
        });
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/storyboard")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let error = body_json(response).await;
        assert!(error["error"].as_str().unwrap().contains("noir"));
    }

    async fn post_storyboard(body: String) -> Response {
        app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/storyboard")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_generate_storyboard_rejects_negative_duration() {
        let body = json!({
            "campaign": { "brand": "Volt", "product": "Shoe", "description": "Fast", "durationSeconds": -5 }
        });
        let response = post_storyboard(body.to_string()).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Validation error: 'durationSeconds' must be a positive number of seconds" })
        );
    }

    #[tokio::test]
    async fn test_generate_storyboard_accepts_string_duration() {
        let body = json!({
            "campaign": { "brand": "Volt", "product": "Shoe", "description": "Fast", "durationSeconds": "15" }
        });
        let response = post_storyboard(body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["scenes"].as_array().map(|s| s.len()), Some(4));
    }

    #[tokio::test]
    async fn test_generate_storyboard_malformed_body_is_json_error() {
        let response = post_storyboard("{\"campaign\": ".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_list_moods() {
        let response = app()
            .oneshot(Request::builder().uri("/api/moods").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let moods = body_json(response).await;
        assert_eq!(moods.as_array().map(|m| m.len()), Some(8));
        assert_eq!(moods[0]["mood"], "premium");
    }

    #[tokio::test]
    async fn test_static_fallback() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<h1>Storyboard Pro</h1>");
    }
}
