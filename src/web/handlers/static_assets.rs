use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::assets::StaticAssets;

pub async fn index() -> impl IntoResponse {
    serve_embedded_asset("static/index.html", "no-cache").await
}

/// The worker script must revalidate so shell updates actually reach
/// installed clients.
pub async fn service_worker() -> impl IntoResponse {
    serve_embedded_asset("static/sw.js", "no-cache").await
}

pub async fn manifest() -> impl IntoResponse {
    serve_embedded_asset("static/manifest.webmanifest", "public, max-age=3600").await
}

pub async fn serve_static_asset(Path(path): Path<String>) -> impl IntoResponse {
    let asset_path = format!("static/{}", path);
    serve_embedded_asset(&asset_path, "public, max-age=31536000").await
}

async fn serve_embedded_asset(path: &str, cache_control: &'static str) -> Response {
    match StaticAssets::get_asset(path) {
        Some(asset) => {
            let content_type = StaticAssets::get_content_type(path);
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, content_type)
                .header(header::CACHE_CONTROL, cache_control)
                .body(Body::from(asset.data.to_vec()))
                .unwrap()
        }
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("Asset not found"))
            .unwrap(),
    }
}
