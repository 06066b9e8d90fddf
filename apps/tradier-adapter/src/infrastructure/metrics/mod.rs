//! Prometheus Metrics Module
//!
//! Request counters and latency histograms for Tradier operations.
//! Recording goes through the `metrics` facade and is a no-op until a
//! recorder is installed with [`init_metrics`].

use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use parking_lot::Mutex;

use crate::domain::error::ErrorKind;

static PROMETHEUS_HANDLE: Mutex<Option<PrometheusHandle>> = parking_lot::const_mutex(None);

/// Install the Prometheus recorder.
///
/// Subsequent and concurrent calls return the handle from the first
/// installation.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let mut slot = PROMETHEUS_HANDLE.lock();
    if let Some(handle) = slot.as_ref() {
        return Ok(handle.clone());
    }
    let handle = PrometheusBuilder::new().install_recorder()?;
    register_metrics();
    *slot = Some(handle.clone());
    Ok(handle)
}

/// Get the Prometheus handle for rendering metrics.
///
/// Returns `None` if metrics have not been initialized.
#[must_use]
pub fn get_metrics_handle() -> Option<PrometheusHandle> {
    PROMETHEUS_HANDLE.lock().clone()
}

/// Render the recorded metrics in the Prometheus text format.
///
/// Returns `None` if metrics have not been initialized.
#[must_use]
pub fn render_metrics() -> Option<String> {
    get_metrics_handle().map(|handle| handle.render())
}

fn register_metrics() {
    describe_counter!(
        "tradier_requests_total",
        "Total Tradier API requests by operation and outcome"
    );
    describe_histogram!(
        "tradier_request_duration_seconds",
        "Tradier API round-trip latency"
    );
}

/// Outcome label for a finished request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// 2xx with a decodable body.
    Success,
    /// Failed with the given error kind.
    Failed(ErrorKind),
}

impl RequestOutcome {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed(kind) => kind.as_str(),
        }
    }
}

/// Record one finished request.
pub fn record_request(operation: &'static str, outcome: RequestOutcome, elapsed: Duration) {
    counter!(
        "tradier_requests_total",
        "operation" => operation,
        "outcome" => outcome.as_str()
    )
    .increment(1);
    histogram!(
        "tradier_request_duration_seconds",
        "operation" => operation
    )
    .record(elapsed.as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_labels() {
        assert_eq!(RequestOutcome::Success.as_str(), "success");
        assert_eq!(
            RequestOutcome::Failed(ErrorKind::Request).as_str(),
            "request"
        );
        assert_eq!(
            RequestOutcome::Failed(ErrorKind::Transport).as_str(),
            "transport"
        );
    }

    #[test]
    fn unattached_recorder_sees_nothing() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        record_request("clock", RequestOutcome::Success, Duration::from_millis(3));
        assert!(!handle.render().contains("tradier_requests_total"));
    }

    #[test]
    fn local_recorder_sees_labels() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            record_request(
                "quotes",
                RequestOutcome::Failed(ErrorKind::Authorization),
                Duration::from_millis(12),
            );
        });

        let rendered = handle.render();
        assert!(rendered.contains("tradier_requests_total"));
        assert!(rendered.contains(r#"operation="quotes""#));
        assert!(rendered.contains(r#"outcome="authorization""#));
        assert!(rendered.contains("tradier_request_duration_seconds"));
    }

    #[test]
    fn concurrent_init_shares_one_recorder() {
        let callers: Vec<_> = (0..8).map(|_| std::thread::spawn(init_metrics)).collect();
        for caller in callers {
            assert!(caller.join().unwrap().is_ok());
        }

        record_request("metrics_check", RequestOutcome::Success, Duration::from_millis(1));
        let rendered = render_metrics().unwrap();
        assert!(rendered.contains(r#"operation="metrics_check""#));
    }
}
