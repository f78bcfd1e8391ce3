//! DTOs for health check endpoint.

use serde::Serialize;

/// Overall service state reported by `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// Outcome of a single component check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    Ok,
    Error,
}

/// Health check response with component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: StoreCheck,
}

/// Document store reachability.
#[derive(Debug, Serialize)]
pub struct StoreCheck {
    pub status: CheckState,

    /// Registered document types, when the store answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_types: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
