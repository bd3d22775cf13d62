use std::io;
use tracing_appender::rolling;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Opt-in tracing setup for host applications that do not bring their own
/// subscriber. Per-field scoring decisions are logged under the `matcher`
/// target at debug level; they land in the rolling file but stay off stdout.
pub fn configure_logging() {
    // Stdout log configuration
    let stdout_log = fmt::layer()
        .with_writer(io::stdout)
        .with_filter(EnvFilter::new("info,matcher=info"));

    // File log configuration
    let file_appender = rolling::daily("logs", "boqmatch.log");
    let file_log = fmt::layer()
        .with_writer(file_appender)
        .with_filter(EnvFilter::new("info,matcher=debug"));

    tracing_subscriber::Registry::default()
        .with(stdout_log)
        .with(file_log)
        .init();
}
