//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

use std::path::Path;

/// Fallback when neither lookup knows the extension
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Get MIME Content-Type for a file path
///
/// The standard extension registry is consulted first, then a small table of
/// web asset types, then [`OCTET_STREAM`].
///
/// # Examples
/// ```
/// use asset_server::http::mime::get_content_type;
/// assert_eq!(get_content_type("icons/logo.svg".as_ref()), "image/svg+xml");
/// assert_eq!(get_content_type("blob.qqqunknown".as_ref()), "application/octet-stream");
/// ```
pub fn get_content_type(path: &Path) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .or_else(|| fallback_content_type(path.extension().and_then(|e| e.to_str())))
        .unwrap_or(OCTET_STREAM)
}

/// Override table for common web assets
fn fallback_content_type(extension: Option<&str>) -> Option<&'static str> {
    let content_type = match extension? {
        "css" => "text/css",
        "js" => "application/javascript",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",

        _ => return None,
    };
    Some(content_type)
}
