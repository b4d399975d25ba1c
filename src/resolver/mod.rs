//! Static asset resolver
//!
//! Turns an untrusted request path into file bytes: validate, normalize,
//! build the candidate list, probe candidates in order, read the winner.
//! Every failure is an [`AssetError`], which the handlers answer with 404.

mod path;

pub use path::{candidates, normalize, validate, SearchScope};

use std::io;
use std::path::{Path, PathBuf};

use hyper::body::Bytes;
use tokio::fs;

use crate::config::AssetsConfig;
use crate::error::{AssetError, Result};
use crate::http::mime;
use crate::logger;

/// Outcome of probing one candidate location
#[derive(Debug)]
pub enum Probe {
    /// A regular file exists at the location
    Found,
    /// Nothing there, or something other than a regular file
    Missing,
    /// The filesystem refused to answer; the candidate is skipped
    Ignored(io::Error),
}

/// A resolved and loaded asset
#[derive(Debug, Clone)]
pub struct Asset {
    /// Location the bytes were read from
    pub path: PathBuf,
    pub content_type: &'static str,
    pub data: Bytes,
}

/// Resolves request paths against the configured base directories
#[derive(Debug, Clone)]
pub struct AssetResolver {
    config: AssetsConfig,
}

impl AssetResolver {
    pub const fn new(config: AssetsConfig) -> Self {
        Self { config }
    }

    /// Find the first candidate holding a regular file
    pub async fn resolve(&self, request_path: &str, scope: SearchScope) -> Result<PathBuf> {
        let clean_path = normalize(validate(request_path)?);

        for candidate in candidates(&self.config, clean_path, scope) {
            match probe(&candidate).await {
                Probe::Found => return Ok(candidate),
                Probe::Missing => {}
                Probe::Ignored(e) => {
                    logger::log_debug(&format!(
                        "Skipping candidate '{}': {e}",
                        candidate.display()
                    ));
                }
            }
        }

        Err(AssetError::NotFound(request_path.to_string()))
    }

    /// Resolve, read and type an asset
    pub async fn load(&self, request_path: &str, scope: SearchScope) -> Result<Asset> {
        let path = self.resolve(request_path, scope).await?;
        read_asset(request_path, path).await
    }
}

/// Probe a single candidate location
pub async fn probe(candidate: &Path) -> Probe {
    match fs::metadata(candidate).await {
        Ok(meta) if meta.is_file() => Probe::Found,
        Ok(_) => Probe::Missing,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Probe::Missing,
        Err(e) => Probe::Ignored(e),
    }
}

/// Read a resolved file in full
///
/// Read failures become [`AssetError::Read`] and are served as 404 like any
/// other miss.
pub async fn read_asset(request_path: &str, path: PathBuf) -> Result<Asset> {
    let data = fs::read(&path).await.map_err(|e| {
        logger::log_warning(&format!("Failed to read '{}': {e}", path.display()));
        AssetError::Read {
            path: request_path.to_string(),
            message: e.to_string(),
        }
    })?;

    Ok(Asset {
        content_type: mime::get_content_type(&path),
        data: Bytes::from(data),
        path,
    })
}
