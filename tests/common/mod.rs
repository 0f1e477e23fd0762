//! Shared utilities for integration tests.

use printdebug::{DebugPrinter, FormatTemplate, OutputCatcher};

/// Install a test-friendly tracing subscriber, once per test binary.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A printer with the stock template whose output lands in the returned catcher.
#[allow(dead_code)]
pub fn capture_printer() -> (DebugPrinter, OutputCatcher) {
    let out = OutputCatcher::new();
    let printer = DebugPrinter::builder()
        .template(FormatTemplate::default())
        .writer(out.clone())
        .build();
    (printer, out)
}
