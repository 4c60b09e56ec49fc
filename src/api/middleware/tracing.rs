//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

type MakeSpan = fn(&Request<Body>) -> Span;

/// Request span keyed by the matched route template.
///
/// `route` is the pattern (`/api/ads/{id}`) so log lines group by endpoint;
/// `uri` keeps the concrete path and query (`/render?location=sidebar`).
fn make_span(req: &Request<Body>) -> Span {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or("unmatched");

    tracing::info_span!(
        "request",
        method = %req.method(),
        route,
        uri = %req.uri(),
    )
}

/// Creates a tracing middleware for HTTP requests.
///
/// Every request gets an `INFO` span; the response is logged at `INFO` with
/// status and latency in milliseconds:
///
/// ```text
/// INFO request{method=POST route=/ajax/click uri=/ajax/click}: finished processing request latency=2 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeSpan> {
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeSpan)
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
