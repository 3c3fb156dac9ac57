//! HTTP routing for the server binary.

use crate::app::{App, shell};
use crate::config::ServerConfig;
use crate::health;
use axum::{Router, routing::get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Builds the application router: health check, Leptos pages and server
/// functions, and static assets under `/pkg`.
pub fn build_router(leptos_options: LeptosOptions, config: Arc<ServerConfig>) -> Router {
    let routes = generate_route_list(App);

    Router::new()
        .route("/healthz", get(health::healthz))
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler::<LeptosOptions, _>(shell))
        .nest_service("/pkg", ServeDir::new("target/site/pkg"))
        // Server functions read the configuration from request extensions.
        .layer(axum::Extension(config))
        .with_state(leptos_options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use lexilingua_core::AppRoute;
    use tower::ServiceExt;

    const HOME_MARKER: &str = "What Makes LexiLingua Different";
    const UPLOAD_MARKER: &str = "Select a file to continue";
    const DEMO_MARKER: &str = "Demo Mode";

    fn app() -> Router {
        let options = LeptosOptions::builder().output_name("lexilingua").build();
        build_router(options, Arc::new(ServerConfig::default()))
    }

    async fn render(path: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri(path)
                    .body(Body::empty())
                    .expect("valid request"),
            )
            .await
            .expect("infallible router");
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    fn rendered_screens(body: &str) -> Vec<AppRoute> {
        [
            (AppRoute::Home, HOME_MARKER),
            (AppRoute::Upload, UPLOAD_MARKER),
            (AppRoute::Demo, DEMO_MARKER),
        ]
        .into_iter()
        .filter(|(_, marker)| body.contains(marker))
        .map(|(route, _)| route)
        .collect()
    }

    async fn assert_renders(path: &str, expected: AppRoute) {
        let (status, body) = render(path).await;
        assert_eq!(status, StatusCode::OK, "status for {path}");
        assert_eq!(rendered_screens(&body), vec![expected], "screens for {path}");
        assert!(body.contains(expected.title()), "title for {path}");
    }

    #[tokio::test]
    async fn exact_paths_render_their_screen() {
        assert_renders("/", AppRoute::Home).await;
        assert_renders("/upload", AppRoute::Upload).await;
        assert_renders("/demo", AppRoute::Demo).await;
    }

    #[tokio::test]
    async fn trailing_slashes_render_the_homepage() {
        assert_renders("/demo/", AppRoute::Home).await;
        assert_renders("/upload/", AppRoute::Home).await;
    }

    #[tokio::test]
    async fn unknown_paths_render_the_homepage() {
        assert_renders("/x", AppRoute::Home).await;
        assert_renders("/demo/results", AppRoute::Home).await;
    }

    #[tokio::test]
    async fn health_check_is_not_shadowed_by_pages() {
        let (status, body) = render("/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"status\":\"ok\""));
    }
}
