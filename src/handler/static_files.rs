//! Static asset serving module
//!
//! Resolves an asset and turns the outcome into a response. All lookup
//! failures collapse into `404 Not Found`.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::error::Result;
use crate::http::{self, CachePolicy};
use crate::logger;
use crate::resolver::{Asset, AssetResolver, SearchScope};

/// The two mounted asset handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Site-facing: collected static root only
    Site,
    /// API-facing: every location, plus `Access-Control-Allow-Origin: *`
    Api,
}

impl Variant {
    pub const fn scope(self) -> SearchScope {
        match self {
            Self::Site => SearchScope::CollectedRoot,
            Self::Api => SearchScope::AllLocations,
        }
    }

    pub const fn allow_any_origin(self) -> bool {
        matches!(self, Self::Api)
    }
}

/// Serve one asset
pub async fn serve_asset(
    resolver: &AssetResolver,
    request_path: &str,
    variant: Variant,
) -> Response<Full<Bytes>> {
    respond(resolver.load(request_path, variant.scope()).await, variant)
}

/// Turn a lookup outcome into a response
fn respond(result: Result<Asset>, variant: Variant) -> Response<Full<Bytes>> {
    match result {
        Ok(asset) => http::build_asset_response(
            asset.data,
            asset.content_type,
            CachePolicy::ASSET,
            variant.allow_any_origin(),
        ),
        Err(e) => {
            logger::log_debug(&e.to_string());
            http::build_404_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AssetsConfig;
    use crate::error::AssetError;
    use crate::resolver::read_asset;
    use http_body_util::BodyExt;
    use std::fs;
    use std::path::Path;

    fn write(path: &Path, contents: &[u8]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    async fn body(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_site_variant_headers() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("collected/img/logo.svg"), b"<svg></svg>");
        let resolver = AssetResolver::new(AssetsConfig::new(
            dir.path().join("collected"),
            dir.path().join("project"),
        ));

        let resp = serve_asset(&resolver, "img/logo.svg", Variant::Site).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "image/svg+xml");
        assert_eq!(resp.headers()["content-length"], "11");
        assert_eq!(resp.headers()["cache-control"], "public, max-age=31536000");
        assert!(resp.headers().get("access-control-allow-origin").is_none());
        assert_eq!(body(resp).await, Bytes::from_static(b"<svg></svg>"));
    }

    #[tokio::test]
    async fn test_api_variant_adds_cors_and_searches_fallbacks() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("project/static/data/blob.qqqunknown"), b"\x00\x01\x02");
        let resolver = AssetResolver::new(AssetsConfig::new(
            dir.path().join("collected"),
            dir.path().join("project"),
        ));

        let resp = serve_asset(&resolver, "data/blob.qqqunknown", Variant::Api).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
        assert_eq!(resp.headers()["content-type"], "application/octet-stream");
        assert_eq!(resp.headers()["content-length"], "3");

        let resp = serve_asset(&resolver, "data/blob.qqqunknown", Variant::Site).await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_failures_are_not_found() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("collected/css/site.css"), b"body{}");
        let resolver = AssetResolver::new(AssetsConfig::new(
            dir.path().join("collected"),
            dir.path().join("project"),
        ));

        for path in ["css/../css/site.css", "/etc/passwd", "css/missing.css", ""] {
            let resp = serve_asset(&resolver, path, Variant::Api).await;
            assert_eq!(resp.status(), 404, "path {path:?}");
        }
    }

    #[tokio::test]
    async fn test_file_vanishing_before_read_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("collected/js/app.js");
        write(&file, b"let a = 1;");
        let resolver = AssetResolver::new(AssetsConfig::new(
            dir.path().join("collected"),
            dir.path().join("project"),
        ));

        let path = resolver
            .resolve("js/app.js", Variant::Api.scope())
            .await
            .unwrap();
        fs::remove_file(&file).unwrap();

        let result = read_asset("js/app.js", path).await;
        assert!(matches!(result, Err(AssetError::Read { .. })));

        let resp = respond(result, Variant::Api);
        assert_eq!(resp.status(), 404);
        assert!(resp.headers().get("access-control-allow-origin").is_none());
        assert_eq!(body(resp).await, Bytes::from_static(b"404 Not Found"));
    }
}
