//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Request tracing for every route: API, pages, health and static files.
///
/// Each request gets an `INFO` span carrying method, URI and HTTP version.
/// Responses are logged at `INFO` with status and latency in milliseconds;
/// 5xx responses (store unavailable, internal errors) are additionally
/// logged at `ERROR`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/ version=HTTP/1.1}: finished processing request latency=9 ms status=303
/// INFO request{method=GET uri=/search?q=rust version=HTTP/1.1}: finished processing request latency=4 ms status=200
/// ERROR request{method=GET uri=/api/documents version=HTTP/1.1}: response failed classification=Status code: 503 Service Unavailable latency=30001 ms
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
