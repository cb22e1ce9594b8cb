//! Request spans.
//!
//! Request IDs come from `tower-http`'s `SetRequestIdLayer`, which must run
//! outside `TraceLayer` so the ID exists when the span opens.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response},
};
use tower_http::{
    request_id::RequestId,
    trace::{DefaultOnResponse, OnResponse},
};
use tracing::{Span, field};

/// Span factory for `TraceLayer` carrying the `x-request-id` value.
pub fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id,
        status = field::Empty,
        latency_ms = field::Empty,
    )
}

/// Fill in status and latency on the request span, then log as usual.
pub fn record_response(response: &Response<Body>, latency: Duration, span: &Span) {
    span.record("status", response.status().as_u16());
    span.record(
        "latency_ms",
        u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
    );
    DefaultOnResponse::default().on_response(response, latency, span);
}
