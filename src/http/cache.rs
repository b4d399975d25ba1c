//! HTTP cache control module
//!
//! Maps cache policies to `Cache-Control` header values.

/// One year, the lifetime given to every served asset
pub const ONE_YEAR_SECS: u32 = 31_536_000;

/// Cache control policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Public cache with specified max-age (seconds)
    Public(u32),
    /// No cache
    NoCache,
}

impl CachePolicy {
    /// Policy applied to static assets
    pub const ASSET: Self = Self::Public(ONE_YEAR_SECS);

    /// Convert to Cache-Control header value
    pub fn to_header_value(self) -> String {
        match self {
            Self::Public(max_age) => format!("public, max-age={max_age}"),
            Self::NoCache => "no-cache".to_string(),
        }
    }
}
