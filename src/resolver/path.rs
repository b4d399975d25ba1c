//! Request path validation and candidate construction
//!
//! Nothing here touches the filesystem.

use std::path::{Component, Path, PathBuf};

use crate::config::AssetsConfig;
use crate::error::{AssetError, Result};

/// Subdirectories of the project base searched after the collected root
const BASE_SUBDIRS: [&str; 2] = ["staticfiles", "static"];

/// Which base directories a handler searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Collected static root only
    CollectedRoot,
    /// Admin package (for admin-prefixed paths), collected root, then project fallbacks
    AllLocations,
}

/// Reject traversal and absolute paths
///
/// Any `..` substring is refused, even inside a file name, as is a leading `/`.
/// Paths whose components are not plain names (a Windows prefix, a root
/// hidden behind a backslash) are refused as well.
pub fn validate(request_path: &str) -> Result<&str> {
    if request_path.contains("..") || request_path.starts_with('/') {
        return Err(AssetError::InvalidPath(request_path.to_string()));
    }

    let plain = Path::new(request_path)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if !plain {
        return Err(AssetError::InvalidPath(request_path.to_string()));
    }

    Ok(request_path)
}

/// Strip leading and trailing separators
pub fn normalize(path: &str) -> &str {
    path.trim_matches('/')
}

/// Build the ordered candidate list for an already validated, normalized path
pub fn candidates(config: &AssetsConfig, clean_path: &str, scope: SearchScope) -> Vec<PathBuf> {
    let mut locations = Vec::with_capacity(4);

    if scope == SearchScope::CollectedRoot {
        locations.push(config.static_root.join(clean_path));
        return locations;
    }

    // prefix must end on a segment boundary, with or without a configured trailing slash
    let admin_prefix = config.admin_prefix.trim_end_matches('/');
    if let (Some(package_dir), Some(admin_path)) = (
        config.admin_package_dir.as_ref(),
        clean_path
            .strip_prefix(admin_prefix)
            .and_then(|rest| rest.strip_prefix('/')),
    ) {
        locations.push(package_dir.join("static").join("admin").join(admin_path));
    }

    locations.push(config.static_root.join(clean_path));
    for subdir in BASE_SUBDIRS {
        locations.push(config.base_dir.join(subdir).join(clean_path));
    }

    locations
}
