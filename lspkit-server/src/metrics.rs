//! Dispatch metrics
//!
//! OpenTelemetry instruments recorded by the [`Router`](crate::Router) when
//! built with metrics. All names carry the `lspkit.dispatch.` prefix.
//!
//! - `requests.total`: dispatched messages, by method and status
//! - `request.duration`: handler latency in seconds
//! - `decode_failures.total`: params rejected before reaching a handler
//! - `errors.total`: error responses, by method and JSON-RPC code
//!
//! Without an installed meter provider the global meter is a no-op, so
//! recording is always safe.
//!
//! ```rust
//! use lspkit_server::DispatchMetrics;
//!
//! let metrics = DispatchMetrics::new("my-language-server");
//! metrics.record_request("textDocument/inlayHint", "success", 0.004);
//! ```

use opentelemetry::{
    global,
    metrics::{Counter, Histogram, Meter},
    KeyValue,
};

pub struct DispatchMetrics {
    pub requests_total: Counter<u64>,
    /// Seconds spent between lookup and handler completion
    pub request_duration: Histogram<f64>,
    pub decode_failures_total: Counter<u64>,
    pub errors_total: Counter<u64>,
}

impl DispatchMetrics {
    /// Instruments on the global meter named `scope`
    pub fn new(scope: &'static str) -> Self {
        let meter = global::meter(scope);
        Self::new_with_meter(&meter)
    }

    pub fn new_with_meter(meter: &Meter) -> Self {
        Self {
            requests_total: meter
                .u64_counter("lspkit.dispatch.requests.total")
                .with_description("Protocol messages dispatched to a handler")
                .build(),
            request_duration: meter
                .f64_histogram("lspkit.dispatch.request.duration")
                .with_description("Handler latency")
                .with_unit("s")
                .build(),
            decode_failures_total: meter
                .u64_counter("lspkit.dispatch.decode_failures.total")
                .with_description("Params that did not match the method's shape")
                .build(),
            errors_total: meter
                .u64_counter("lspkit.dispatch.errors.total")
                .with_description("Error responses produced by dispatch")
                .build(),
        }
    }

    /// `status` is `"success"` or `"error"`
    pub fn record_request(&self, method: &str, status: &str, duration_secs: f64) {
        let attributes = [
            KeyValue::new("method", method.to_string()),
            KeyValue::new("status", status.to_string()),
        ];
        self.requests_total.add(1, &attributes);
        self.request_duration.record(duration_secs, &attributes);
    }

    /// `field` is the wire path that failed, empty for the params value itself
    pub fn record_decode_failure(&self, method: &str, field: &str) {
        self.decode_failures_total.add(
            1,
            &[
                KeyValue::new("method", method.to_string()),
                KeyValue::new("field", field.to_string()),
            ],
        );
    }

    pub fn record_error(&self, method: &str, code: i32) {
        self.errors_total.add(
            1,
            &[
                KeyValue::new("method", method.to_string()),
                KeyValue::new("code", i64::from(code)),
            ],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_provider() {
        let metrics = DispatchMetrics::new("lspkit-test");
        metrics.record_request("initialize", "success", 0.01);
        metrics.record_decode_failure("textDocument/inlayHint", "range");
        metrics.record_error("shutdown", -32603);
    }
}
