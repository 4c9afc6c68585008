//! Process-level initialization

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "duitku=debug,app_ui=debug,app_core=debug,app_platform=debug";

/// Install the global tracing subscriber
///
/// Filtering comes from `RUST_LOG` when set, with a default that keeps
/// the DuitKu crates at debug. Safe to call more than once; later calls
/// are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
