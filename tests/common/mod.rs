//! Shared helpers for the integration suites.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install `env_logger` once per test binary. `RUST_LOG` picks the level.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Fraction of `values` satisfying `pred`.
#[allow(dead_code)]
pub fn frequency<T>(values: &[T], pred: impl Fn(&T) -> bool) -> f64 {
    values.iter().filter(|v| pred(v)).count() as f64 / values.len() as f64
}
