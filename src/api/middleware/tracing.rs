//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// - one `INFO` span per request carrying method, URI and HTTP version
/// - request start logged at `DEBUG`
/// - response logged at `INFO` with status and latency in milliseconds
/// - 5xx responses additionally logged at `ERROR`
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/quotes version=HTTP/1.1}: finished processing request latency=3 ms status=201
/// ERROR request{method=GET uri=/users version=HTTP/1.1}: response failed classification=Status code: 500 Internal Server Error latency=1 ms
/// ```
///
/// Headers are not recorded, so the admin key never reaches the logs.
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
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
