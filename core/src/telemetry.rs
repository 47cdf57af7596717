use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is unset. `bootstrap` is the Lambda binary's target.
pub const DEFAULT_LOG_FILTER: &str = "hello_core=info,bootstrap=info";

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                // CloudWatch stamps ingestion time on every line
                .without_time(),
        )
        .init();
}
