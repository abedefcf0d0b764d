use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "assets/"]
struct ViewerAssets;

/// Serve the embedded viewer. Paths that don't name an asset get index.html
/// so client-side routes survive a reload.
pub async fn static_handler(uri: axum::http::Uri) -> Response {
    let requested = uri.path().trim_start_matches('/');

    match asset(requested).or_else(|| asset("index.html")) {
        Some((mime, data)) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, mime)], data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "viewer assets missing").into_response(),
    }
}

fn asset(path: &str) -> Option<(String, Vec<u8>)> {
    let file = <ViewerAssets as Embed>::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Some((mime.to_string(), file.data.to_vec()))
}
