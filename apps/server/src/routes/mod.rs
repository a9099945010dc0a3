pub mod frontend;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/motivational-letter",
            post(handlers::handle_motivational_letter),
        )
        .route("/api/cover-letter", post(handlers::handle_cover_letter))
        .route("/api/analyze", post(handlers::handle_analyze))
        .route("/api/interview-prep", post(handlers::handle_interview_prep));

    // Static assets exist only in the packaged desktop build
    let router = if state.config.mode.is_packaged() {
        frontend::attach_static_routes(router, &state.config.assets_dir)
    } else {
        router
    };

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Config, RuntimeMode};
    use crate::generation::testing::StubCompletion;

    fn test_config(mode: RuntimeMode, assets_dir: PathBuf) -> Config {
        Config {
            port: 5050,
            mode,
            assets_dir,
            rust_log: "info".to_string(),
        }
    }

    fn dev_router(stub: Arc<StubCompletion>) -> Router {
        let config = test_config(RuntimeMode::Development, PathBuf::from("missing"));
        build_router(AppState::new(stub, config))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_route() {
        let app = dev_router(Arc::new(StubCompletion::returning("unused")));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let value = body_json(response).await;
        assert_eq!(value["service"], "jobfit-server");
        assert_eq!(value["mode"], "development");
    }

    #[tokio::test]
    async fn test_motivational_letter_route_wraps_stub_reply() {
        let stub = Arc::new(StubCompletion::returning("Dear Hiring Manager..."));
        let app = dev_router(stub.clone());

        let response = app
            .oneshot(post_json(
                "/api/motivational-letter",
                r#"{"job_title":"Backend Engineer"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let value = body_json(response).await;
        assert_eq!(value["success"], true);
        assert_eq!(value["letter"], "Dear Hiring Manager...");
        assert_eq!(value["language"], "en");
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_french_request_reaches_the_model_in_french() {
        let stub = Arc::new(StubCompletion::returning("Madame, Monsieur,"));
        let app = dev_router(stub.clone());

        let response = app
            .oneshot(post_json(
                "/api/motivational-letter",
                r#"{"job_title":"Backend Engineer","language":"fr"}"#,
            ))
            .await
            .unwrap();

        let value = body_json(response).await;
        assert_eq!(value["language"], "fr");
        assert!(stub
            .prompt(0)
            .contains("Écris la lettre de motivation en français (French)."));
    }

    #[tokio::test]
    async fn test_validation_failure_still_answers_200() {
        let stub = Arc::new(StubCompletion::returning("unused"));
        let app = dev_router(stub.clone());

        let response = app
            .oneshot(post_json("/api/motivational-letter", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let value = body_json(response).await;
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "job_title is required");
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_analyze_route_returns_report_envelope() {
        let stub = Arc::new(StubCompletion::returning("Match score: 75."));
        let app = dev_router(stub.clone());

        let response = app
            .oneshot(post_json(
                "/api/analyze",
                r#"{"resume_text":"Ten years of Rust.","job_details":[{"title":"Backend Engineer"}]}"#,
            ))
            .await
            .unwrap();

        let value = body_json(response).await;
        assert_eq!(value["success"], true);
        assert_eq!(value["results"][0]["job_title"], "Backend Engineer");
        assert_eq!(stub.call_count(), 2);
    }

    #[tokio::test]
    async fn test_interview_prep_route_is_wired() {
        let stub = Arc::new(StubCompletion::returning("1. Why this role?"));
        let app = dev_router(stub);

        let response = app
            .oneshot(post_json(
                "/api/interview-prep",
                r#"{"job_title":"Platform Engineer"}"#,
            ))
            .await
            .unwrap();

        let value = body_json(response).await;
        assert_eq!(value["success"], true);
        assert_eq!(value["questions"], "1. Why this role?");
    }

    #[tokio::test]
    async fn test_cover_letter_route_is_wired() {
        let stub = Arc::new(StubCompletion::returning("Dear team,"));
        let app = dev_router(stub);

        let response = app
            .oneshot(post_json(
                "/api/cover-letter",
                r#"{"job_title":"Data Engineer","company":"Acme Corp"}"#,
            ))
            .await
            .unwrap();

        let value = body_json(response).await;
        assert_eq!(value["success"], true);
        assert_eq!(value["letter"], "Dear team,");
    }

    #[tokio::test]
    async fn test_unknown_path_is_404_in_development() {
        let app = dev_router(Arc::new(StubCompletion::returning("unused")));
        let response = app
            .oneshot(Request::builder().uri("/jobs/42").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_packaged_build_serves_spa_fallback() {
        let assets = tempfile::tempdir().unwrap();
        std::fs::write(assets.path().join("index.html"), "<html>jobfit</html>").unwrap();
        std::fs::write(assets.path().join("app.js"), "console.log('jobfit')").unwrap();

        let config = test_config(RuntimeMode::Packaged, assets.path().to_path_buf());
        let state = AppState::new(Arc::new(StubCompletion::returning("unused")), config);
        let app = build_router(state);

        // A real asset is served as-is
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"console.log('jobfit')");

        // A client-side route falls back to index.html
        let response = app
            .oneshot(Request::builder().uri("/jobs/42").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<html>jobfit</html>");
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_404_in_packaged_build() {
        let assets = tempfile::tempdir().unwrap();
        std::fs::write(assets.path().join("index.html"), "<html>jobfit</html>").unwrap();

        let config = test_config(RuntimeMode::Packaged, assets.path().to_path_buf());
        let state = AppState::new(Arc::new(StubCompletion::returning("unused")), config);
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/does-not-exist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // The SPA index must not leak into the API namespace
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }
}
