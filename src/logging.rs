//! Diagnostic logging
//!
//! Logs go to stderr so `--json` output on stdout stays parseable.
//! `RUST_LOG` wins over the verbosity flag when set.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for a `-v` count
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "gitship=warn",
        1 => "gitship=info",
        2 => "gitship=debug",
        _ => "gitship=trace",
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logger(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_directive(0), "gitship=warn");
        assert_eq!(default_directive(1), "gitship=info");
        assert_eq!(default_directive(2), "gitship=debug");
        assert_eq!(default_directive(9), "gitship=trace");
    }
}
