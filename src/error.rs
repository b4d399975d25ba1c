//! Asset lookup errors.
//!
//! Every variant ends up as `404 Not Found` at the handler boundary.

use std::fmt;

/// Result type for asset lookups.
pub type Result<T> = std::result::Result<T, AssetError>;

/// Asset lookup failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// Traversal segment or absolute path in the request.
    InvalidPath(String),
    /// No candidate location held a regular file.
    NotFound(String),
    /// The file was resolved but could not be read.
    Read { path: String, message: String },
}

impl AssetError {
    /// HTTP status for this error. Always 404.
    pub const fn status_code(&self) -> u16 {
        404
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPath(path) => write!(f, "Invalid static path: {path}"),
            Self::NotFound(path) => write!(f, "Static file not found: {path}"),
            Self::Read { path, message } => write!(f, "Error serving file {path}: {message}"),
        }
    }
}

impl std::error::Error for AssetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_path() {
        let err = AssetError::NotFound("css/site.css".to_string());
        assert_eq!(err.to_string(), "Static file not found: css/site.css");

        let err = AssetError::Read {
            path: "js/app.js".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error serving file js/app.js: permission denied"
        );
    }

    #[test]
    fn test_every_kind_is_not_found() {
        let errors = [
            AssetError::InvalidPath("../x".to_string()),
            AssetError::NotFound("x".to_string()),
            AssetError::Read {
                path: "x".to_string(),
                message: "gone".to_string(),
            },
        ];
        assert!(errors.iter().all(|e| e.status_code() == 404));
    }
}
