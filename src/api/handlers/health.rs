//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckState, HealthChecks, HealthResponse, ServiceStatus, StoreCheck};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: The store answers
/// - **503 Service Unavailable**: The store is unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "document_types": 3 }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let store = check_store(&state).await;

    let (code, status) = match store.status {
        CheckState::Ok => (StatusCode::OK, ServiceStatus::Healthy),
        CheckState::Error => (StatusCode::SERVICE_UNAVAILABLE, ServiceStatus::Degraded),
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { store },
    };

    (code, Json(response))
}

/// Pings the store, then counts document types as a read check.
async fn check_store(state: &AppState) -> StoreCheck {
    let service = &state.document_type_service;
    let result = match service.check_store().await {
        Ok(()) => service.list().await.map(|types| types.len()),
        Err(e) => Err(e),
    };

    match result {
        Ok(count) => StoreCheck {
            status: CheckState::Ok,
            document_types: Some(count),
            error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Health check: store unreachable");
            StoreCheck {
                status: CheckState::Error,
                document_types: None,
                error: Some(e.to_string()),
            }
        }
    }
}
