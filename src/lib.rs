//! hatdaily - Three-pane periodic journal for a markdown vault
//!
//! Opens the previous, current and parent period notes side by side for a
//! daily, monthly or yearly view, creating notes from templates on demand,
//! and archives last month's notes into year/month folders.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::HatDailyError;

/// Install the stderr log subscriber. `HATDAILY_LOG` takes an `EnvFilter`
/// directive and defaults to `warn`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("HATDAILY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
