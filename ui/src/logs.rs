//! Logging to the javascript console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Crates whose debug output is worth seeing in the browser console.
const LOG_FILTER: &str = "error,ui=debug,payloads=debug";

/// Initialize logging. Call once, before rendering the app.
pub fn init_logging() {
    let env_filter = EnvFilter::new(LOG_FILTER);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::warn!("Logging was already initialized");
        return;
    }

    tracing::info!("Initialized logs");
}
