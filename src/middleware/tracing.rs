// ABOUTME: Request tracing layer that opens one span per HTTP request
// ABOUTME: Reuses an incoming x-request-id header or generates one for correlation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use http::Request;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{MakeSpan, TraceLayer};
use tracing::{info_span, Span};
use uuid::Uuid;

/// Request id header name
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Span factory recording method, path, and request id
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map_or_else(|| format!("req_{}", Uuid::new_v4().simple()), str::to_owned);

        info_span!(
            "http_request",
            http.method = %request.method(),
            http.path = %request.uri().path(),
            request_id = %request_id,
        )
    }
}

/// Trace layer for the full router
#[must_use]
pub fn request_trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan> {
    TraceLayer::new_for_http().make_span_with(RequestSpan)
}
