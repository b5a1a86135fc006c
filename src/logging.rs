//! Routes `tracing` events to the browser console on wasm builds.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for the current platform. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(target_arch = "wasm32")]
        init_web_logging();
    });
}

#[cfg(target_arch = "wasm32")]
fn init_web_logging() {
    console_error_panic_hook::set_once();
    use tracing_subscriber::{filter::LevelFilter, prelude::*};
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time(); // WASM doesn't have std::time

    tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(fmt_layer)
        .init();
}
