use crate::api::AppState;
use axum::extract::{MatchedPath, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use std::time::Instant;
use tracing::field::Empty;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

/// `GET /metrics`
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.prometheus_handle.as_ref().map_or_else(
        || "Metrics not enabled or failed to initialize".to_string(),
        metrics_exporter_prometheus::PrometheusHandle::render,
    )
}

fn status_outcome(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "error"
    } else if status.is_client_error() {
        "client_error"
    } else {
        "success"
    }
}

/// Wraps each request in a `request` span and emits one summary event.
///
/// The lookup services fill the span's `category` and `cache` fields, so the
/// summary says whether a request was served from the store or a provider.
pub async fn request_span_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();

    // matched route keeps label cardinality bounded
    let route = req.extensions().get::<MatchedPath>().map_or_else(
        || req.uri().path().to_string(),
        |mp| mp.as_str().to_string(),
    );

    let span = info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %method,
        route = %route,
        category = Empty,
        cache = Empty,
    );

    let response = next.run(req).instrument(span.clone()).await;

    let elapsed = start.elapsed();
    let status = response.status();
    let labels = [
        ("method", method.to_string()),
        ("path", route),
        ("status", status.as_u16().to_string()),
    ];
    metrics::counter!("http_requests_total", &labels).increment(1);
    metrics::histogram!("http_request_duration_seconds", &labels).record(elapsed.as_secs_f64());

    span.in_scope(|| {
        info!(
            status_code = status.as_u16(),
            duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            outcome = status_outcome(status),
            "Request finished"
        );
    });

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_follows_status_class() {
        assert_eq!(status_outcome(StatusCode::OK), "success");
        assert_eq!(status_outcome(StatusCode::BAD_REQUEST), "client_error");
        assert_eq!(status_outcome(StatusCode::INTERNAL_SERVER_ERROR), "error");
    }
}
