//! Tracing setup.
//!
//! Logging stays off unless `ROBO_LOG` (or, failing that, `RUST_LOG`) holds
//! a filter such as `robo_eval=trace`.

use std::sync::Once;

use tracing_subscriber::{prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Environment variable read before `RUST_LOG`.
pub const LOG_ENV: &str = "ROBO_LOG";

/// Install the hierarchical subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(filter) = filter_from_env() else {
            return;
        };
        let tree = tracing_tree::HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);
        tracing_subscriber::registry().with(filter).with(tree).init();
    });
}

fn filter_from_env() -> Option<EnvFilter> {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .ok()
}
