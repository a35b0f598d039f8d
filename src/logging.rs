//! Logging setup
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to this
//! crate. `format = "json"` switches to structured output. Both formats write
//! to stderr so stdout stays reserved for command output.

use std::io;
use tracing_subscriber::fmt::format::{DefaultFields, Format, Full, Json, JsonFields};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

type LogWriter = fn() -> io::Stderr;

/// Install the global tracing subscriber
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.level)));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.format.eq_ignore_ascii_case("json") {
        registry.with(json_layer()).try_init()
    } else {
        registry.with(pretty_layer()).try_init()
    };

    if let Err(e) = result {
        eprintln!("Logging already initialized: {}", e);
    }
}

fn json_layer<S>() -> fmt::Layer<S, JsonFields, Format<Json>, LogWriter> {
    fmt::layer().json().with_writer(io::stderr as LogWriter)
}

fn pretty_layer<S>() -> fmt::Layer<S, DefaultFields, Format<Full>, LogWriter> {
    fmt::layer().with_writer(io::stderr as LogWriter)
}

fn default_directive(level: &str) -> String {
    format!("craftsense={}", level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::Registry;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive("debug"), "craftsense=debug");
    }

    #[test]
    fn test_both_formats_log_to_stderr() {
        let subscriber = tracing_subscriber::registry().with(json_layer::<Registry>());
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(rows = 8, "Generated dashboard data");
        });

        let subscriber = tracing_subscriber::registry().with(pretty_layer::<Registry>());
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(rows = 8, "Generated dashboard data");
        });
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        let config = LoggingConfig::default();
        init(&config);
        init(&config);
    }
}
