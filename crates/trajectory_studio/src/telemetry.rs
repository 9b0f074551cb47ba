//! Log sinks for the studio binary.

use std::any::Any;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "trajectory_studio.log";

/// Routes events to the terminal and to a daily file under `log_dir`.
///
/// The returned guard flushes the file writer; keep it alive until exit.
pub fn init(log_dir: impl AsRef<Path>) -> WorkerGuard {
    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(log_dir, LOG_FILE));

    // INFO unless RUST_LOG says otherwise; applies to both sinks.
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    let terminal = tracing_subscriber::fmt::layer().with_target(false);
    let file = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(terminal)
        .with(file)
        .init();

    guard
}

/// Sends panics through the log as well, so a crash in the window leaves a
/// trace in the log file when there is no console to read.
pub fn log_panics() {
    std::panic::set_hook(Box::new(|info| {
        let at = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "<unknown>".to_string());
        let message = panic_message(info.payload());

        tracing::error!(target: "trajectory_studio::panic", at = %at, "{}", message);
        eprintln!("trajectory_studio panicked at {at}: {message}");
    }));
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_payloads() {
        let literal: Box<dyn Any + Send> = Box::new("bad row");
        assert_eq!(panic_message(literal.as_ref()), "bad row");

        let owned: Box<dyn Any + Send> = Box::new(format!("epoch {}", 3));
        assert_eq!(panic_message(owned.as_ref()), "epoch 3");

        let other: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(panic_message(other.as_ref()), "non-string panic payload");
    }
}
