//! Static asset serving module
//!
//! Serves the decorative files the page shell references (logo,
//! favicon) from the configured asset directory, with conditional-GET
//! support and path-traversal protection.

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

const FAVICON_FILE: &str = "favicon.svg";

/// Serve the favicon from the asset directory
pub async fn serve_favicon(ctx: &RequestContext<'_>, asset_dir: &str) -> Response<Full<Bytes>> {
    serve_asset(ctx, asset_dir, FAVICON_FILE).await
}

/// Serve a file from the asset directory
pub async fn serve_asset(
    ctx: &RequestContext<'_>,
    asset_dir: &str,
    relative_path: &str,
) -> Response<Full<Bytes>> {
    match load_asset(asset_dir, relative_path).await {
        Some((content, content_type)) => build_asset_response(
            &content,
            content_type,
            ctx.if_none_match.as_deref(),
            ctx.is_head,
        ),
        None => http::build_404_response(),
    }
}

/// Load an asset file, refusing paths that escape the asset directory
pub async fn load_asset(asset_dir: &str, relative_path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and prevent directory traversal
    let clean_path = relative_path.trim_start_matches('/').replace("..", "");
    let file_path = Path::new(asset_dir).join(&clean_path);

    // Security: ensure file_path is within asset_dir
    let dir_canonical = match Path::new(asset_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Asset directory not found or inaccessible '{asset_dir}': {e}"
            ));
            return None;
        }
    };

    // File not found is common (404), no need to log at warning level
    let Ok(file_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_canonical.starts_with(&dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            relative_path,
            file_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read asset '{}': {}",
                file_path.display(),
                e
            ));
            return None;
        }
    };

    // Determine content type from extension
    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// Build asset response with `ETag` and conditional-GET support
fn build_asset_response(
    data: &[u8],
    content_type: &str,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    let body = Bytes::from(data.to_owned());
    http::response::build_cached_response(body, content_type, &etag, is_head)
}
