//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "AHX_LOG";

const DEFAULT_FILTER: &str = "ahx_core=info,ahx_analysis=info";

/// Initialize the ahx tracing/logging system.
///
/// Reads `AHX_LOG` for per-module log levels, e.g.
/// `AHX_LOG=ahx_analysis::pipeline=debug,ahx_core=warn`.
/// Falls back to `ahx_core=info,ahx_analysis=info` if `AHX_LOG` is unset or invalid.
///
/// Idempotent; later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // try_init: an embedding application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
