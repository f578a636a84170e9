//! Logging to the browser console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Default filter when `MESSENGER_LOG` is not set at build time.
const DEFAULT_FILTER: &str = "warn,messenger_web=debug";

/// Install the console subscriber. Call once, before mounting the app.
pub fn init_logging() {
    let env_filter = EnvFilter::new(option_env!("MESSENGER_LOG").unwrap_or(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time() // std::time is unavailable in the browser
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("console logging initialised");
}
