//! HTTP server

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::content::Post;
use crate::templates::TemplateRenderer;
use crate::Site;

/// Server state shared by all requests
struct ServerState {
    config: SiteConfig,
    renderer: TemplateRenderer,
    posts: Vec<Post>,
}

/// Build the site's router over an already loaded post list
pub fn router(site: &Site, posts: Vec<Post>) -> Router {
    let state = Arc::new(ServerState {
        config: site.config.clone(),
        renderer: TemplateRenderer::new(site.config.clone()),
        posts,
    });

    Router::new()
        .route("/", get(index_handler))
        .route("/blog.html", get(blog_handler))
        .route("/packages.html", get(packages_handler))
        .route("/:name", get(module_handler))
        .nest_service("/assets", ServeDir::new(site.assets_dir.join("assets")))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Load posts and serve the site until Ctrl+C
pub async fn start(site: &Site, addr: SocketAddr) -> Result<()> {
    let posts = site.posts()?;
    let app = router(site, posts);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running at http://{}", listener.local_addr()?);
    println!("Press Ctrl+C to stop.");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves once Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    println!("\rCTRL+C pressed, attempting graceful shutdown ...");
}

async fn index_handler(State(state): State<Arc<ServerState>>) -> Html<String> {
    Html(state.renderer.index())
}

async fn blog_handler(State(state): State<Arc<ServerState>>) -> Response {
    match state.renderer.blog(&state.posts) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render blog: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
        }
    }
}

async fn packages_handler(State(state): State<Arc<ServerState>>) -> Html<String> {
    Html(state.renderer.packages())
}

/// Vanity import page for `go get`
async fn module_handler(
    State(state): State<Arc<ServerState>>,
    Path(name): Path<String>,
) -> Response {
    match state.config.module(&name) {
        Some(module) => Html(state.renderer.redirect(module)).into_response(),
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_site(dir: &TempDir) -> Site {
        let assets = dir.path().join("assets");
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join("style.css"), "body { margin: 0; }").unwrap();
        fs::write(dir.path().join("site.yml"), "title: t\n").unwrap();
        fs::create_dir_all(dir.path().join("posts")).unwrap();
        fs::write(dir.path().join("posts/secret.md"), "draft").unwrap();

        Site::new(dir.path(), SiteConfig::default())
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&body).to_string())
    }

    #[tokio::test]
    async fn test_pages() {
        let dir = TempDir::new().unwrap();
        let site = test_site(&dir);
        let app = router(&site, Vec::new());

        let (status, body) = fetch(app.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>chrisrx.dev</title>"));

        let (status, body) = fetch(app.clone(), "/blog.html").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Nothing here yet."));

        let (status, body) = fetch(app, "/packages.html").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("go.chrisrx.dev/leaselock"));
    }

    #[tokio::test]
    async fn test_module_redirect() {
        let dir = TempDir::new().unwrap();
        let app = router(&test_site(&dir), Vec::new());

        let (status, body) = fetch(app.clone(), "/result?go-get=1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("go.chrisrx.dev/result git https://github.com/ChrisRx/result-go"));

        let (status, _) = fetch(app.clone(), "/unknown").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = fetch(app, "/posts/deep/path").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_assets() {
        let dir = TempDir::new().unwrap();
        let app = router(&test_site(&dir), Vec::new());

        let (status, body) = fetch(app.clone(), "/assets/style.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("margin"));

        let (status, _) = fetch(app, "/assets/missing.css").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_assets_do_not_expose_site_files() {
        let dir = TempDir::new().unwrap();
        let app = router(&test_site(&dir), Vec::new());

        for uri in ["/assets/site.yml", "/assets/posts/secret.md", "/assets/assets/style.css"] {
            let (status, _) = fetch(app.clone(), uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{} should not be served", uri);
        }
    }

    #[tokio::test]
    async fn test_assets_under_custom_dir() {
        let dir = TempDir::new().unwrap();
        let static_dir = dir.path().join("static/assets");
        fs::create_dir_all(&static_dir).unwrap();
        fs::write(static_dir.join("app.js"), "console.log(1)").unwrap();

        let mut config = SiteConfig::default();
        config.assets_dir = "static".to_string();
        let app = router(&Site::new(dir.path(), config), Vec::new());

        let (status, body) = fetch(app, "/assets/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("console.log"));
    }
}
