//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! matching, and dispatching to the page renderer or asset serving.

use crate::config::Config;
use crate::handler::assets;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::site::{fragment, nav, page, query};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    cfg: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let method = req.method().clone();
    let uri = req.uri().clone();
    let is_head = method == Method::HEAD;
    let http_version = version_label(req.version());

    logger::log_headers_count(req.headers().len(), cfg.logging.show_headers);

    let referer = header_value(&req, "referer");
    let user_agent = header_value(&req, "user-agent");
    let if_none_match = header_value(&req, "if-none-match");

    // 1. Check HTTP method
    let response = if let Some(resp) = check_http_method(&method, cfg.http.enable_cors) {
        resp
    // 2. Check declared body size
    } else if let Some(resp) = check_body_size(&req, cfg.http.max_body_size) {
        resp
    // 3. Dispatch
    } else {
        let ctx = RequestContext {
            path: uri.path(),
            query: uri.query(),
            is_head,
            if_none_match,
        };
        route_request(&ctx, &cfg).await
    };

    if cfg.logging.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            uri.path().to_string(),
        );
        entry.query = uri.query().map(ToString::to_string);
        entry.http_version = http_version;
        entry.status = response.status().as_u16();
        entry.body_bytes = content_length(&response);
        entry.referer = referer;
        entry.user_agent = user_agent;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &cfg.logging.access_log_format);
    }

    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let size_str = req
        .headers()
        .get("content-length")?
        .to_str()
        .map_err(|_| logger::log_warning("Content-Length header contains non-ASCII characters"))
        .ok()?;

    match size_str.parse::<u64>() {
        Ok(size) if size > max_body_size => {
            logger::log_error(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            Some(http::build_413_response())
        }
        Err(_) => {
            logger::log_warning(&format!(
                "Invalid Content-Length value: '{size_str}', skipping size check"
            ));
            None
        }
        _ => None,
    }
}

/// Route request based on path and configuration
async fn route_request(ctx: &RequestContext<'_>, cfg: &Arc<Config>) -> Response<Full<Bytes>> {
    let routes = &cfg.routes;

    // 0. Health check endpoints (always fast)
    if routes.health.enabled
        && (ctx.path == routes.health.liveness_path || ctx.path == routes.health.readiness_path)
    {
        return http::build_health_response("ok");
    }

    // 1. Favicon routes
    if routes.favicon_paths.iter().any(|p| ctx.path == p) {
        return assets::serve_favicon(ctx, &cfg.site.asset_dir).await;
    }

    // 2. Decorative static assets
    if let Some(relative_path) = ctx.path.strip_prefix("/static/") {
        return assets::serve_asset(ctx, &cfg.site.asset_dir, relative_path).await;
    }

    // 3. The documentation page itself
    if ctx.path == "/" || ctx.path == "/index.html" {
        return serve_page(ctx, cfg).await;
    }

    http::build_404_response()
}

/// Render the documentation page for the request's query keys
///
/// A missing fragment is logged and surfaced as a visible placeholder in
/// the content region, never as a silently empty body.
async fn serve_page(ctx: &RequestContext<'_>, cfg: &Arc<Config>) -> Response<Full<Bytes>> {
    let keys = query::parse_keys(ctx.query);
    let active = nav::select_active(&keys);

    let html = match fragment::load(&cfg.site.fragment_dir, active.fragment).await {
        Ok(body) => page::render_page(&cfg.site, active, &body),
        Err(err) => {
            logger::log_error(&err.to_string());
            page::render_unavailable(&cfg.site, active)
        }
    };

    http::build_html_response(html, ctx.is_head)
}

/// Extract a request header as an owned string
fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Response body size as declared by the Content-Length header
fn content_length(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

/// Render the HTTP version the way access logs expect it ("1.1", "2")
fn version_label(version: hyper::Version) -> String {
    format!("{version:?}")
        .trim_start_matches("HTTP/")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_label() {
        assert_eq!(version_label(hyper::Version::HTTP_11), "1.1");
        assert_eq!(version_label(hyper::Version::HTTP_10), "1.0");
        assert_eq!(version_label(hyper::Version::HTTP_2), "2.0");
    }

    #[test]
    fn test_method_gate() {
        assert!(check_http_method(&Method::GET, false).is_none());
        assert!(check_http_method(&Method::HEAD, false).is_none());

        let resp = check_http_method(&Method::POST, false).unwrap();
        assert_eq!(resp.status(), 405);

        let resp = check_http_method(&Method::OPTIONS, false).unwrap();
        assert_eq!(resp.status(), 204);
    }
}
