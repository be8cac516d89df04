//! Body of `GET /health`.

use serde::Serialize;

/// `"healthy"` with 200 when the store answers, `"degraded"` with 503 otherwise.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Crate version the server was built from.
    pub version: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    /// Store ping followed by a mapping count.
    pub database: CheckStatus,
}

/// Outcome of one check: `"ok"` or `"error"`, plus a detail line such as
/// `Connected, 42 mappings`.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
