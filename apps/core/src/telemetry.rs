use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes structured logging for the hosting process.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `default_level`.
/// The gate and service layers degrade failures to safe defaults instead of
/// propagating them, so this subscriber is where those failures surface.
/// Call once at startup.
pub fn init(default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={default_level}", env!("CARGO_CRATE_NAME")))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
