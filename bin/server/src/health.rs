//! Liveness endpoint for process supervisors.

use axum::Json;
use serde::Serialize;

/// Body of `GET /healthz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Reports that the server is up.
pub async fn healthz() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::{Router, routing::get};
    use tower::ServiceExt;

    #[tokio::test]
    async fn reports_ok_with_version() {
        let Json(status) = healthz().await;
        assert_eq!(status.status, "ok");
        assert_eq!(status.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn route_answers_200() {
        let app = Router::new().route("/healthz", get(healthz));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .expect("valid request"),
            )
            .await
            .expect("infallible router");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn serializes_as_json_object() {
        let body = serde_json::to_value(HealthStatus {
            status: "ok",
            version: "1.2.3",
        })
        .expect("serializes");
        assert_eq!(body, serde_json::json!({"status": "ok", "version": "1.2.3"}));
    }
}
