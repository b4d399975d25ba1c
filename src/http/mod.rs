//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from asset lookup.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used types
pub use cache::CachePolicy;
pub use response::{build_404_response, build_405_response, build_asset_response};
