//! Request handler module
//!
//! Responsible for request routing dispatch and static asset serving.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
