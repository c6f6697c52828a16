// src/internal/logger/diagnostics.rs

use std::io;
use tracing_subscriber::{
    fmt::{self},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Install a stderr subscriber for the crate's own tracing events.
///
/// Stdout carries the colored log lines, so diagnostics never go there.
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_diagnostics(default_level: &str, color: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(color)
                .with_level(true)
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .try_init()?;

    Ok(())
}
