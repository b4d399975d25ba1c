//! HTTP response building module
//!
//! Provides builders for the responses the asset handlers emit.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use super::cache::CachePolicy;

/// Build 200 response carrying a static asset
///
/// `Content-Length` is always the exact body length.
pub fn build_asset_response(
    data: Bytes,
    content_type: &str,
    cache: CachePolicy,
    allow_any_origin: bool,
) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", data.len())
        .header("Cache-Control", cache.to_header_value());

    if allow_any_origin {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder.body(Full::new(data)).unwrap_or_else(|e| {
        log_build_error("200", &e);
        build_404_response()
    })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .header("Cache-Control", CachePolicy::NoCache.to_header_value())
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_asset_response_headers() {
        let resp = build_asset_response(
            Bytes::from_static(b"body{}"),
            "text/css",
            CachePolicy::ASSET,
            false,
        );
        assert_eq!(resp.status(), 200);
        let headers = resp.headers();
        assert_eq!(headers["content-type"], "text/css");
        assert_eq!(headers["content-length"], "6");
        assert_eq!(headers["cache-control"], "public, max-age=31536000");
        assert!(headers.get("access-control-allow-origin").is_none());
        assert_eq!(body_bytes(resp).await, Bytes::from_static(b"body{}"));
    }

    #[test]
    fn test_asset_response_cors() {
        let resp = build_asset_response(Bytes::new(), "image/png", CachePolicy::ASSET, true);
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
        assert_eq!(resp.headers()["content-length"], "0");
    }

    #[tokio::test]
    async fn test_invalid_header_falls_back_to_not_found() {
        let resp = build_asset_response(
            Bytes::from_static(b"body{}"),
            "text/css\nX-Injected: 1",
            CachePolicy::ASSET,
            true,
        );
        assert_eq!(resp.status(), 404);
        assert!(resp.headers().get("access-control-allow-origin").is_none());
        assert_eq!(body_bytes(resp).await, Bytes::from_static(b"404 Not Found"));
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let resp = build_404_response();
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["content-type"], "text/plain");
        assert_eq!(body_bytes(resp).await, Bytes::from_static(b"404 Not Found"));
    }

    #[test]
    fn test_method_not_allowed_response() {
        let resp = build_405_response();
        assert_eq!(resp.status(), 405);
        assert_eq!(resp.headers()["allow"], "GET");
    }
}
