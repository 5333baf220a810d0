//! Response bodies that are not domain types.

use serde::Serialize;

/// Body returned by the seed endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SeedResponse {
    pub message: String,
    pub total: usize,
}

impl SeedResponse {
    pub fn loaded(total: usize) -> Self {
        Self {
            message: "Sample data loaded".to_string(),
            total,
        }
    }
}

/// Body returned by `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl ServiceInfo {
    pub const fn current() -> Self {
        Self {
            name: "itemstore",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
