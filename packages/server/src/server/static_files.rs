use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Stylesheet, logo and placeholder images, embedded at compile time
#[derive(RustEmbed)]
#[folder = "assets"]
pub struct SiteAssets;

/// Serve `/assets/*path`
pub async fn serve_asset(Path(path): Path<String>) -> Response {
    serve_embedded::<SiteAssets>(&path)
}

/// Serve `/images/*path`, the location content files use for placeholders
pub async fn serve_image(Path(path): Path<String>) -> Response {
    serve_embedded::<SiteAssets>(&format!("images/{path}"))
}

fn serve_embedded<E: RustEmbed>(path: &str) -> Response {
    let path = path.trim_start_matches('/');

    match E::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
