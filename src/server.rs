//! Web server module for the GLIMMER photo album tutorial.
//!
//! Builds the axum router (the tutorial page plus assets under `/static`),
//! owns the application state holding the session signing key, and binds
//! the development listener.
//!
use std::net::SocketAddr;

use axum::{Router, extract::FromRef, response::Html, routing::get};
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha256};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    config::{CONFIG, WEB_HOST, WEB_PORT},
    html::INDEX_PAGE,
};

/// Application state shared across handlers
#[derive(Clone)]
pub(crate) struct AppState {
    /// Key for signed session cookies, derived from the configured secret.
    /// No handler reads or writes sessions; the key only has to exist.
    session_key: Key,
}

impl AppState {
    pub(crate) fn new() -> Self {
        // Key::derive_from wants at least 32 bytes of master key; the
        // digest stretches whatever secret was configured to exactly that.
        let digest = Sha256::digest(CONFIG.session_secret.as_bytes());
        AppState {
            session_key: Key::derive_from(digest.as_slice()),
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.session_key.clone()
    }
}

/// Build the application router
pub(crate) fn router() -> Router {
    Router::new()
        .route("/", get(index_page))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new())
}

/// Start the development web server
pub async fn run() {
    let app = router();

    tracing::info!("🌐 GLIMMER tutorial at http://{}:{}/", WEB_HOST, WEB_PORT);

    let addr = format!("{}:{}", WEB_HOST, WEB_PORT)
        .parse::<SocketAddr>()
        .unwrap();

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

/// Serve the tutorial page
async fn index_page() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::router;

    /// The tutorial page is served at the root path
    #[tokio::test]
    async fn index_serves_tutorial() {
        let response = router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("text/html"));

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(!body.is_empty());
        let page = String::from_utf8_lossy(&body);
        assert!(page.contains("GLIMMER"));
        assert!(page.contains("progressBar"));
    }

    /// Unregistered paths fall through to the framework 404
    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let response = router()
            .oneshot(Request::get("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Assets under static/ are served from disk
    #[tokio::test]
    async fn static_script_is_served() {
        let response = router()
            .oneshot(
                Request::get("/static/script.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(String::from_utf8_lossy(&body).contains("progressBar"));
    }

    /// A static asset that does not exist also yields a 404
    #[tokio::test]
    async fn missing_static_asset_is_not_found() {
        let response = router()
            .oneshot(
                Request::get("/static/nope.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
