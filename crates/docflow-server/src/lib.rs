pub mod embed;
pub mod error;
pub mod routes;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all API routes and middleware.
/// Used by `serve_on()` and available for integration testing.
pub fn build_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/catalog", get(routes::get_catalog))
        .route("/api/catalog/stages/{id}", get(routes::get_stage))
        .route("/api/graph", get(routes::get_graph))
        .route("/api/analysis", get(routes::get_analysis))
        .route("/api/usecases", get(routes::get_usecases))
        .route("/api/structure", get(routes::get_structure))
        .fallback(embed::static_handler)
        .layer(cors)
}

/// Start the viewer on a pre-bound listener.
///
/// Accepts a `TcpListener` that was already bound so the caller can read the
/// actual port before starting (useful when `port = 0` and the OS picks a
/// free port).
pub async fn serve_on(listener: tokio::net::TcpListener, open_browser: bool) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router();

    tracing::info!("docflow UI server listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
