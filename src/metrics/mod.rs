use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

use crate::error::AppError;

/// Installs a process-wide Prometheus recorder without an HTTP listener.
/// The returned handle renders the current snapshot on demand.
pub fn setup_metrics() -> Result<PrometheusHandle, AppError> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to install recorder: {}", e)))
}

/// End-of-run report: elapsed time, followed by the metrics snapshot when a
/// recorder is installed.
pub fn summary(elapsed: Duration, handle: Option<&PrometheusHandle>) -> String {
    let mut report = format!("Elapsed: {:.3}s", elapsed.as_secs_f64());
    if let Some(handle) = handle {
        report.push('\n');
        report.push_str(&handle.render());
    }
    report
}
