//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: mount matching, method check,
//! path decoding, and access logging.

use crate::config::{AppState, HttpConfig};
use crate::handler::static_files::{self, Variant};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, SERVER};
use hyper::{Method, Request, Response};
use percent_encoding::percent_decode_str;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let version = req.version();
    let referer = header_string(&req, "referer");
    let user_agent = header_string(&req, "user-agent");
    drop(req);

    let mut response = route_request(&method, &path, &state).await;
    if let Ok(server_name) = HeaderValue::from_str(&state.config.http.server_name) {
        response.headers_mut().insert(SERVER, server_name);
    }

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path);
        entry.http_version = format_version(version);
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        entry.referer = referer;
        entry.user_agent = user_agent;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route by URL path and method
pub async fn route_request(
    method: &Method,
    path: &str,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let Some((variant, rest)) = match_mount(&state.config.http, path) else {
        return http::build_404_response();
    };

    if method != Method::GET {
        logger::log_warning(&format!("Method not allowed: {method} {path}"));
        return http::build_405_response();
    }

    let Ok(request_path) = percent_decode_str(rest).decode_utf8() else {
        logger::log_debug(&format!("Undecodable path: {path}"));
        return http::build_404_response();
    };

    static_files::serve_asset(&state.resolver, &request_path, variant).await
}

/// Pick the handler mounted under the path, returning the remainder
///
/// The API mount is checked first so a site prefix of `/` cannot shadow it.
fn match_mount<'a>(http_config: &HttpConfig, path: &'a str) -> Option<(Variant, &'a str)> {
    path.strip_prefix(http_config.api_prefix.as_str())
        .map(|rest| (Variant::Api, rest))
        .or_else(|| {
            path.strip_prefix(http_config.static_prefix.as_str())
                .map(|rest| (Variant::Site, rest))
        })
}

fn header_string<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn format_version(version: hyper::Version) -> String {
    let text = match version {
        hyper::Version::HTTP_09 => "0.9",
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        hyper::Version::HTTP_3 => "3",
        _ => "1.1",
    };
    text.to_string()
}
