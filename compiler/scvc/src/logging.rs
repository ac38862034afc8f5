//! Tracing subscriber setup.

use std::sync::Once;

/// Filter directives, e.g. `SCV_LOG=scv_emit=trace`.
pub const LOG_VAR: &str = "SCV_LOG";
/// Set to `1` for indented span trees instead of flat lines.
pub const LOG_TREE_VAR: &str = "SCV_LOG_TREE";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber, once, and only if `SCV_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os(LOG_VAR).is_none() {
            return;
        }
        let filter = EnvFilter::from_env(LOG_VAR);
        let registry = tracing_subscriber::registry().with(filter);

        if std::env::var(LOG_TREE_VAR).is_ok_and(|value| value == "1") {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
