//! Static asset server
//!
//! Serves files found under a prioritized list of base directories, with
//! inferred content types and long-lived cache headers. Every lookup failure
//! is answered with `404 Not Found`.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod resolver;
pub mod server;

pub use error::AssetError;
pub use resolver::{AssetResolver, SearchScope};
